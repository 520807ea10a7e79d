//! Repository Module
//!
//! Data access layer for the server.
//! Repositories are trait-based so resolvers can run against any store;
//! production uses MongoDB.

pub mod error;
pub mod job_listing;
#[cfg(test)]
pub mod memory;

use std::sync::Arc;

// Re-export for convenience
pub use error::RepositoryError;
pub use job_listing::{JobListingRepository, MongoJobListingRepository};

/// Repository handle injected into the GraphQL schema
pub type SharedJobListingRepository = Arc<dyn JobListingRepository>;
