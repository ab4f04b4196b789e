//! Application router configuration.

use axum::{
    Router, middleware,
    routing::{delete, get, post},
};

use crate::{
    AppState,
    category::{
        check_category_deletion_endpoint, create_category_endpoint, delete_category_endpoint,
        get_categories_endpoint,
    },
    endpoints,
    logging::logging_middleware,
    not_found::get_404_not_found,
    purchaser::{
        check_purchaser_deletion_endpoint, create_purchaser_endpoint, delete_purchaser_endpoint,
        get_purchasers_endpoint,
    },
    record::{create_record_endpoint, delete_record_endpoint, get_records_endpoint},
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            endpoints::RECORDS,
            get(get_records_endpoint).post(create_record_endpoint),
        )
        .route(endpoints::RECORD, delete(delete_record_endpoint))
        .route(
            endpoints::CATEGORIES,
            get(get_categories_endpoint).post(create_category_endpoint),
        )
        .route(endpoints::CATEGORY, delete(delete_category_endpoint))
        .route(
            endpoints::CATEGORY_DELETION,
            post(check_category_deletion_endpoint),
        )
        .route(
            endpoints::PURCHASERS,
            get(get_purchasers_endpoint).post(create_purchaser_endpoint),
        )
        .route(endpoints::PURCHASER, delete(delete_purchaser_endpoint))
        .route(
            endpoints::PURCHASER_DELETION,
            post(check_purchaser_deletion_endpoint),
        )
        .fallback(get_404_not_found)
        .layer(middleware::from_fn(logging_middleware))
        .with_state(state)
}
