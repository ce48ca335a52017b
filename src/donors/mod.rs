//! Donor derivation, filtering and request tracking.
//!
//! Everything here is pure and synchronous; the session owns the values these
//! functions consume and produce.

mod filter;
mod mapper;
mod tracker;

pub use filter::{available_count, filter_donors};
pub use mapper::map_users;
pub use tracker::request_help;
