//! Till
//!
//! Till is an order-summary engine: it turns a checkout's cart lines and
//! platform-provided totals into a categorised, display-ready breakdown of
//! named totals (merchandise subtotal, deposit-return surcharges, carrier
//! bag fees, taxes) plus a merchandise unit count.

pub mod categories;
pub mod fixtures;
pub mod items;
pub mod labels;
pub mod order;
pub mod prelude;
pub mod receipt;
pub mod settings;
pub mod summary;
pub mod taxes;
pub mod totals;
pub mod utils;
