//! Job listing domain types

use async_graphql::{ID, SimpleObject};
use serde::{Deserialize, Serialize};

/// A job listing as seen by API clients.
///
/// The identifier is assigned by the server on creation and is opaque to
/// clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, SimpleObject)]
pub struct JobListing {
    pub id: ID,
    pub title: String,
    pub description: String,
    pub company: String,
    pub url: String,
}
