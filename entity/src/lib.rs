//! SeaORM entity models for the drift registry schema.
//!
//! One module per table. Tables are created by the `migration` crate in production
//! and directly from these models by `test-utils` in tests.

pub mod prelude;

pub mod championship;
pub mod file_ref;
pub mod judge;
pub mod pilot;
pub mod referral_code;
pub mod stage;
pub mod user;
