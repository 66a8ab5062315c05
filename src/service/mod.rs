//! Service layer for business logic and orchestration.
//!
//! Services sit between the chat presentation layer and the repositories. They are
//! responsible for:
//!
//! - **Consistency**: keeping entity rows and their stored blobs in step across the
//!   relational store and the object store
//! - **Business Rules**: number allocation, invitation lifecycle, role resolution
//! - **Transaction Management**: grouping multi-row writes into one transaction
//!
//! Every service takes its collaborators as constructor arguments.

pub mod championship;
pub mod entity;
pub mod number;
pub mod referral;
pub mod registration;
pub mod role;
pub mod stage;
pub mod user;

#[cfg(test)]
mod test;
