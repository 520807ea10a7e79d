//! Query root

use async_graphql::{Context, ErrorExtensions, ID, Object, Result};
use jobql_core::domain::job_listing::JobListing;

use crate::repository::SharedJobListingRepository;

#[derive(Debug, Default)]
pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Fetch a single job listing by id
    async fn job(&self, ctx: &Context<'_>, id: ID) -> Result<Option<JobListing>> {
        let repository = ctx.data::<SharedJobListingRepository>()?;
        repository
            .get_job(&id)
            .await
            .map(Some)
            .map_err(|e| e.extend())
    }

    /// Fetch every job listing
    async fn jobs(&self, ctx: &Context<'_>) -> Result<Vec<JobListing>> {
        let repository = ctx.data::<SharedJobListingRepository>()?;
        repository.get_jobs().await.map_err(|e| e.extend())
    }
}
