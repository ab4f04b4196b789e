//! The API endpoints URIs.
//!
//! For endpoints that take a parameter, e.g., '/api/records/{record_id}', use [format_endpoint].

/// The route to list and create records.
pub const RECORDS: &str = "/api/records";
/// The route to delete a single record.
pub const RECORD: &str = "/api/records/{record_id}";
/// The route to list and register categories.
pub const CATEGORIES: &str = "/api/categories";
/// The route to delete a category.
pub const CATEGORY: &str = "/api/categories/{name}";
/// The route to check whether a category can be deleted.
pub const CATEGORY_DELETION: &str = "/api/categories/{name}/deletion";
/// The route to list and register purchasers.
pub const PURCHASERS: &str = "/api/purchasers";
/// The route to delete a purchaser.
pub const PURCHASER: &str = "/api/purchasers/{name}";
/// The route to check whether a purchaser can be deleted.
pub const PURCHASER_DELETION: &str = "/api/purchasers/{name}/deletion";

/// Replace the parameter in `endpoint_path` with `value`.
///
/// The value is percent-encoded so that names with spaces or non-ASCII
/// characters can be used in a path.
///
/// Only the first parameter, e.g. `{record_id}`, is replaced.
pub fn format_endpoint(endpoint_path: &str, value: impl ToString) -> String {
    let value = urlencoding::encode(&value.to_string()).into_owned();

    match (endpoint_path.find('{'), endpoint_path.find('}')) {
        (Some(start), Some(end)) if start < end => {
            format!("{}{}{}", &endpoint_path[..start], value, &endpoint_path[end + 1..])
        }
        _ => endpoint_path.to_owned(),
    }
}
