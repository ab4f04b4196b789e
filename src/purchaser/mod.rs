//! The people who buy items for the household.

mod domain;
mod endpoints;

pub use domain::{PurchaserFormData, PurchaserId, SHARED_PURCHASER};
pub use endpoints::{
    PurchaserList, check_purchaser_deletion_endpoint, create_purchaser_endpoint,
    delete_purchaser_endpoint, get_purchasers_endpoint,
};
