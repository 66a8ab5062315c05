//! Registration backend for a multi-stage drift competition.
//!
//! Administrators create championships and stages; judges and pilots join stages through
//! time-limited invitation links; every entity may carry attached files whose bytes live
//! in an S3-compatible object store while metadata lives in the relational store.
//!
//! # Architecture
//!
//! - **Service Layer** (`service/`) - Business logic: entity lifecycle across both stores,
//!   number allocation, invitations, role resolution, registration
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Storage Layer** (`storage/`) - Object store contract and adapters
//! - **Error Layer** (`error/`) - Application error types and user-facing messages
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared collaborators (database, object store, locks)
//! - **Startup** (`startup`) - Database migration and bucket provisioning
//!
//! The chat presentation layer is not part of this crate. It builds an `AppState` through
//! `startup::bootstrap` and constructs services from it per update.

pub mod config;
pub mod data;
pub mod error;
pub mod model;
pub mod service;
pub mod startup;
pub mod state;
pub mod storage;
pub mod util;
