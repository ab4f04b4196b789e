//! Pantry tracks the consumables a household buys and predicts when each one
//! needs to be bought again.
//!
//! The [Registry] holds the purchase records together with the categories and
//! purchasers the user has added. The [derivation] module turns the records
//! into the filtered and sorted list the user sees, and the [guard] module
//! stops a category or purchaser from being deleted while a record uses it.
//!
//! This library also provides a JSON API over an in-memory registry, see
//! [build_router].

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum_server::Handle;
use tokio::signal;

mod app_state;
pub mod category;
pub mod derivation;
pub mod endpoints;
mod error;
pub mod guard;
mod logging;
mod not_found;
pub mod purchaser;
pub mod record;
mod registry;
mod registry_entry;
mod routing;
mod timezone;

#[cfg(test)]
mod test_utils;

pub use app_state::AppState;
pub use error::{Error, ErrorBody, RecordInputError};
pub use logging::{LOG_BODY_LENGTH_LIMIT, logging_middleware};
pub use registry::Registry;
pub use registry_entry::{Registered, RegistryEntryState};
pub use routing::build_router;
pub use timezone::get_local_date;

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}
