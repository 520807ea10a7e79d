//! Job Listing Repository
//!
//! Handles all store operations related to job listings and the mapping
//! between the API shape ([`JobListing`]) and the stored document shape
//! ([`JobListingDocument`]).

use async_trait::async_trait;
use futures::TryStreamExt;
use jobql_core::domain::job_listing::JobListing;
use jobql_core::dto::job_listing::{
    CreateJobListingInput, DeleteJobResponse, UpdateJobListingInput,
};
use mongodb::bson::oid::ObjectId;
use mongodb::bson::{Document, doc};
use mongodb::options::ReturnDocument;
use mongodb::{Collection, Database};
use serde::{Deserialize, Serialize};

use super::error::{RepositoryError, RepositoryResult};

/// Repository trait for job listing operations
///
/// Each operation performs at most one store round trip. Identifiers are
/// validated before the store is touched.
#[async_trait]
pub trait JobListingRepository: Send + Sync {
    /// Fetches a single listing
    async fn get_job(&self, id: &str) -> RepositoryResult<JobListing>;

    /// Fetches every listing, in store order
    async fn get_jobs(&self) -> RepositoryResult<Vec<JobListing>>;

    /// Inserts a new listing under a freshly generated identifier
    async fn create_job_listing(&self, input: CreateJobListingInput)
    -> RepositoryResult<JobListing>;

    /// Applies the fields present in `input` and returns the updated listing
    async fn update_job_listing(
        &self,
        id: &str,
        input: UpdateJobListingInput,
    ) -> RepositoryResult<JobListing>;

    /// Removes a listing
    ///
    /// Succeeds whether or not a listing with that identifier existed.
    async fn delete_job_listing(&self, id: &str) -> RepositoryResult<DeleteJobResponse>;
}

/// MongoDB implementation of [`JobListingRepository`]
#[derive(Debug, Clone)]
pub struct MongoJobListingRepository {
    collection: Collection<JobListingDocument>,
}

impl MongoJobListingRepository {
    /// Binds the repository to `collection_name` in an already open database
    pub fn new(database: &Database, collection_name: &str) -> Self {
        Self {
            collection: database.collection(collection_name),
        }
    }
}

#[async_trait]
impl JobListingRepository for MongoJobListingRepository {
    async fn get_job(&self, id: &str) -> RepositoryResult<JobListing> {
        let object_id = parse_object_id(id)?;
        tracing::debug!("Getting job listing: {}", object_id);

        let document = self
            .collection
            .find_one(doc! { "_id": object_id })
            .await?
            .ok_or_else(|| RepositoryError::NotFound(id.to_string()))?;

        Ok(document.into())
    }

    async fn get_jobs(&self) -> RepositoryResult<Vec<JobListing>> {
        tracing::debug!("Listing all job listings");

        let documents: Vec<JobListingDocument> =
            self.collection.find(doc! {}).await?.try_collect().await?;

        Ok(documents.into_iter().map(JobListing::from).collect())
    }

    async fn create_job_listing(
        &self,
        input: CreateJobListingInput,
    ) -> RepositoryResult<JobListing> {
        let document = JobListingDocument::from_input(ObjectId::new(), input);

        self.collection.insert_one(&document).await?;

        tracing::info!("Job listing created: {}", document.id);
        Ok(document.into())
    }

    async fn update_job_listing(
        &self,
        id: &str,
        input: UpdateJobListingInput,
    ) -> RepositoryResult<JobListing> {
        let object_id = parse_object_id(id)?;
        let filter = doc! { "_id": object_id };

        // The server rejects an empty $set, so a no-op update is a plain read
        let document = if input.is_empty() {
            self.collection.find_one(filter).await?
        } else {
            self.collection
                .find_one_and_update(filter, doc! { "$set": update_fields(&input) })
                .return_document(ReturnDocument::After)
                .await?
        };

        let document = document.ok_or_else(|| RepositoryError::NotFound(id.to_string()))?;

        tracing::info!("Job listing updated: {}", object_id);
        Ok(document.into())
    }

    async fn delete_job_listing(&self, id: &str) -> RepositoryResult<DeleteJobResponse> {
        let object_id = parse_object_id(id)?;

        let result = self.collection.delete_one(doc! { "_id": object_id }).await?;

        tracing::info!(
            "Job listing delete: {} ({} removed)",
            object_id,
            result.deleted_count
        );
        Ok(DeleteJobResponse {
            delete_job_id: id.into(),
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Parses an external identifier into the stored id encoding
pub(crate) fn parse_object_id(id: &str) -> RepositoryResult<ObjectId> {
    ObjectId::parse_str(id).map_err(|_| RepositoryError::InvalidIdentifier(id.to_string()))
}

/// Builds the `$set` body holding only the fields present in `input`
pub(crate) fn update_fields(input: &UpdateJobListingInput) -> Document {
    let mut fields = Document::new();
    if let Some(title) = &input.title {
        fields.insert("title", title.as_str());
    }
    if let Some(description) = &input.description {
        fields.insert("description", description.as_str());
    }
    if let Some(url) = &input.url {
        fields.insert("url", url.as_str());
    }
    fields
}

// =============================================================================
// Stored Document Types
// =============================================================================

/// A job listing as persisted in the collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobListingDocument {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub title: String,
    pub description: String,
    pub company: String,
    pub url: String,
}

impl JobListingDocument {
    pub fn from_input(id: ObjectId, input: CreateJobListingInput) -> Self {
        Self {
            id,
            title: input.title,
            description: input.description,
            company: input.company,
            url: input.url,
        }
    }
}

impl From<JobListingDocument> for JobListing {
    fn from(document: JobListingDocument) -> Self {
        JobListing {
            id: document.id.to_hex().into(),
            title: document.title,
            description: document.description,
            company: document.company,
            url: document.url,
        }
    }
}
