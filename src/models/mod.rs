//! Data models for the Donor Finder application.
//!
//! These models match the frontend TypeScript interfaces for seamless interoperability.

mod blood_group;
mod donor;
mod request_status;
mod session;
mod user;

pub use blood_group::*;
pub use donor::*;
pub use request_status::*;
pub use session::*;
pub use user::*;
