//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations for each
//! table. Repositories use SeaORM entity models internally and return domain models to
//! keep the service layer free of entity types. Every repository is generic over
//! `ConnectionTrait` so the same code runs against a pooled connection or inside a
//! transaction.

pub mod championship;
pub mod entity_store;
pub mod file_ref;
pub mod participant;
pub mod referral;
pub mod stage;
pub mod user;
