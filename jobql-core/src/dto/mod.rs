//! Data Transfer Objects for the GraphQL API
//!
//! Inputs accepted by mutations and the payloads they return that are not
//! domain entities themselves.

pub mod job_listing;
