//! Mutation root

use async_graphql::{Context, ErrorExtensions, ID, Object, Result};
use jobql_core::domain::job_listing::JobListing;
use jobql_core::dto::job_listing::{
    CreateJobListingInput, DeleteJobResponse, UpdateJobListingInput,
};

use crate::repository::SharedJobListingRepository;

#[derive(Debug, Default)]
pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Create a job listing; the id is assigned by the server
    async fn create_job_listing(
        &self,
        ctx: &Context<'_>,
        input: CreateJobListingInput,
    ) -> Result<Option<JobListing>> {
        let repository = ctx.data::<SharedJobListingRepository>()?;
        repository
            .create_job_listing(input)
            .await
            .map(Some)
            .map_err(|e| e.extend())
    }

    /// Update the given fields of a job listing, leaving the rest unchanged
    async fn update_job_listing(
        &self,
        ctx: &Context<'_>,
        id: ID,
        input: UpdateJobListingInput,
    ) -> Result<Option<JobListing>> {
        let repository = ctx.data::<SharedJobListingRepository>()?;
        repository
            .update_job_listing(&id, input)
            .await
            .map(Some)
            .map_err(|e| e.extend())
    }

    /// Delete a job listing
    async fn delete_job_listing(
        &self,
        ctx: &Context<'_>,
        id: ID,
    ) -> Result<Option<DeleteJobResponse>> {
        let repository = ctx.data::<SharedJobListingRepository>()?;
        repository
            .delete_job_listing(&id)
            .await
            .map(Some)
            .map_err(|e| e.extend())
    }
}
