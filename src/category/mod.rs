//! Category management for grouping records.

mod domain;
mod endpoints;

pub use domain::{CategoryFormData, CategoryName, DEFAULT_CATEGORIES, FALLBACK_CATEGORY};
pub use endpoints::{
    CategoryList, check_category_deletion_endpoint, create_category_endpoint,
    delete_category_endpoint, get_categories_endpoint,
};
