//! Shopping cart module.
//!
//! Contains the cart ledger, its line keys, and the cart summary.

mod ledger;
mod pricing;

pub use ledger::{CartLedger, CartLine, CheckoutOutcome, LineKey};
pub use pricing::{CartSummary, LineSummary};
