//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test rows with sensible defaults,
//! reducing boilerplate in tests. Factories insert directly through the entity models and
//! bypass the service layer, which makes them suitable for arranging state that the code
//! under test then reads or mutates.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let user = factory::user::create_user(&db).await?;
//!
//!     // Create with all dependencies
//!     let (user, championship, stage) =
//!         factory::helpers::create_stage_with_dependencies(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let admin = factory::user::UserFactory::new(&db)
//!     .username("race_control")
//!     .role("ADMIN")
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user rows
//! - `championship` - Create championship rows
//! - `stage` - Create stage rows
//! - `pilot` - Create pilot rows with explicit racing numbers
//! - `referral_code` - Create referral codes with custom expiry/activation state
//! - `helpers` - Convenience methods for creating rows with dependencies

pub mod championship;
pub mod helpers;
pub mod pilot;
pub mod referral_code;
pub mod stage;
pub mod user;

pub use championship::create_championship;
pub use pilot::create_pilot;
pub use referral_code::create_referral_code;
pub use stage::create_stage;
pub use user::create_user;
