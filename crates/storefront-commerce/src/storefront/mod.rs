//! Shopper-facing session state.

mod controller;
mod view;

pub use controller::Storefront;
pub use view::{FormModal, ViewState};
