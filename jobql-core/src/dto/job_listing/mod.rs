//! Job listing DTOs

use async_graphql::{ID, InputObject, SimpleObject};
use serde::{Deserialize, Serialize};

/// Request to create a new job listing
#[derive(Debug, Clone, Serialize, Deserialize, InputObject)]
pub struct CreateJobListingInput {
    pub title: String,
    pub description: String,
    pub company: String,
    pub url: String,
}

/// Partial update of an existing job listing
///
/// A `None` field (absent or `null` on the wire) leaves the stored value
/// untouched. The company of a listing cannot be changed.
#[derive(Debug, Clone, Default, Serialize, Deserialize, InputObject)]
pub struct UpdateJobListingInput {
    pub title: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
}

impl UpdateJobListingInput {
    /// True when no field would be changed
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.url.is_none()
    }
}

/// Result of deleting a job listing
///
/// Carries the identifier exactly as the caller supplied it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, SimpleObject)]
pub struct DeleteJobResponse {
    pub delete_job_id: ID,
}
