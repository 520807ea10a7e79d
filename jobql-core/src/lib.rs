//! jobql Core
//!
//! Core types shared across the jobql GraphQL service.
//!
//! This crate contains:
//! - Domain types: the job listing as exposed to API clients
//! - DTOs: GraphQL input and payload types for listing mutations

pub mod domain;
pub mod dto;
