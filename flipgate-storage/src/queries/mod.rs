//! Query modules for each domain table.

pub mod bids;
pub mod change_orders;
pub mod cost_models;
pub mod deals;
pub mod events;
pub mod invoices;
pub mod ledgers;
pub mod policies;
pub mod scope;
pub mod util;
pub mod vendors;
