//! Defines the app level error type and its conversion to JSON error responses.
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::guard::RegistryKind;

/// The reasons a new record payload can be rejected.
#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone)]
pub enum RecordInputError {
    /// The record name was empty or only whitespace.
    #[error("the item name cannot be empty")]
    EmptyName,

    /// The price was zero or negative.
    #[error("the price must be greater than zero, got {0}")]
    NonPositivePrice(i64),

    /// The quantity does not fit in the supported range.
    #[error("the quantity {0} is too large")]
    QuantityTooLarge(i64),
}

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The payload used to create a record failed validation.
    ///
    /// The client is expected to validate the payload before submitting it,
    /// so this error indicates a client bug or a hand-crafted request.
    #[error("invalid item: {0}")]
    InvalidRecordInput(#[from] RecordInputError),

    /// An empty string was used to register a category.
    #[error("Category name cannot be empty")]
    EmptyCategoryName,

    /// An empty string was used to register a purchaser.
    #[error("Purchaser name cannot be empty")]
    EmptyPurchaserName,

    /// A category or purchaser could not be deleted because at least one
    /// record still refers to it.
    ///
    /// The records must be deleted first. Deleting a registry entry never
    /// reassigns the records that use it.
    #[error("the {kind} \"{value}\" is in use and cannot be deleted")]
    InUse {
        /// Whether `value` is a category or a purchaser.
        kind: RegistryKind,
        /// The category or purchaser that is still in use.
        value: String,
    },

    /// Tried to delete the purchaser shared by the whole household.
    #[error("the shared purchaser cannot be deleted")]
    SharedPurchaser,

    /// Tried to delete one of the built-in categories.
    #[error("the default category \"{0}\" cannot be deleted")]
    DefaultCategory(String),

    /// The requested resource was not found.
    #[error("the requested resource could not be found")]
    NotFound,

    /// Tried to delete a record that does not exist
    #[error("tried to delete an item that does not exist")]
    DeleteMissingRecord,

    /// Tried to delete a category that was never registered
    #[error("tried to delete the category \"{0}\" which is not registered")]
    DeleteMissingCategory(String),

    /// Tried to delete a purchaser that was never registered
    #[error("tried to delete the purchaser \"{0}\" which is not registered")]
    DeleteMissingPurchaser(String),

    /// Could not acquire the lock on the shared registry.
    #[error("could not acquire the registry lock")]
    StateLockError,

    /// An error occurred while getting the local timezone from a canonical timezone string.
    #[error("invalid timezone {0}")]
    InvalidTimezoneError(String),
}

/// The JSON body sent to the client when a request fails.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// A message that can be shown to the user as is.
    pub error: String,
}

impl Error {
    fn status_code(&self) -> StatusCode {
        match self {
            Error::InvalidRecordInput(_) | Error::EmptyCategoryName | Error::EmptyPurchaserName => {
                StatusCode::BAD_REQUEST
            }
            Error::InUse { .. } | Error::SharedPurchaser | Error::DefaultCategory(_) => {
                StatusCode::CONFLICT
            }
            Error::NotFound
            | Error::DeleteMissingRecord
            | Error::DeleteMissingCategory(_)
            | Error::DeleteMissingPurchaser(_) => StatusCode::NOT_FOUND,
            Error::StateLockError | Error::InvalidTimezoneError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let message = match self {
            Error::InvalidTimezoneError(timezone) => format!(
                "Could not get local timezone \"{timezone}\". Check your server settings and \
                ensure the timezone has been set to valid, canonical timezone string"
            ),
            Error::StateLockError => {
                tracing::error!("{}", Error::StateLockError);
                "An unexpected error occurred, check the server logs for more details.".to_owned()
            }
            error => error.to_string(),
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

#[cfg(test)]
mod error_response_tests {
    use axum::{http::StatusCode, response::IntoResponse};

    use crate::{
        Error,
        error::RecordInputError,
        guard::RegistryKind,
        test_utils::{assert_content_type, parse_json},
    };

    #[tokio::test]
    async fn in_use_is_a_conflict_with_a_readable_message() {
        let response = Error::InUse {
            kind: RegistryKind::Purchaser,
            value: "父".to_owned(),
        }
        .into_response();

        assert_eq!(response.status(), StatusCode::CONFLICT);
        assert_content_type(&response, "application/json");
        let body = parse_json(response).await;
        assert_eq!(
            body["error"],
            "the purchaser \"父\" is in use and cannot be deleted"
        );
    }

    #[tokio::test]
    async fn invalid_input_is_a_bad_request() {
        let response = Error::from(RecordInputError::NonPositivePrice(0)).into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn missing_record_is_not_found() {
        let response = Error::DeleteMissingRecord.into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn lock_error_hides_details() {
        let response = Error::StateLockError.into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = parse_json(response).await;
        assert_eq!(
            body["error"],
            "An unexpected error occurred, check the server logs for more details."
        );
    }
}
