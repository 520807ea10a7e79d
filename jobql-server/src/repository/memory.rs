//! In-memory job listing store for resolver and router tests

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use jobql_core::domain::job_listing::JobListing;
use jobql_core::dto::job_listing::{
    CreateJobListingInput, DeleteJobResponse, UpdateJobListingInput,
};
use mongodb::bson::oid::ObjectId;

use super::error::{RepositoryError, RepositoryResult};
use super::job_listing::{JobListingDocument, JobListingRepository, parse_object_id};

/// Keeps documents in insertion order and counts store accesses
#[derive(Debug, Default)]
pub struct InMemoryJobListingRepository {
    documents: Mutex<Vec<JobListingDocument>>,
    store_calls: AtomicUsize,
}

impl InMemoryJobListingRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of operations that reached the store
    pub fn store_calls(&self) -> usize {
        self.store_calls.load(Ordering::SeqCst)
    }

    fn with_documents<T>(&self, f: impl FnOnce(&mut Vec<JobListingDocument>) -> T) -> T {
        self.store_calls.fetch_add(1, Ordering::SeqCst);
        let mut documents = self.documents.lock().unwrap();
        f(&mut documents)
    }
}

fn apply(document: &mut JobListingDocument, input: UpdateJobListingInput) {
    if let Some(title) = input.title {
        document.title = title;
    }
    if let Some(description) = input.description {
        document.description = description;
    }
    if let Some(url) = input.url {
        document.url = url;
    }
}

#[async_trait]
impl JobListingRepository for InMemoryJobListingRepository {
    async fn get_job(&self, id: &str) -> RepositoryResult<JobListing> {
        let object_id = parse_object_id(id)?;
        self.with_documents(|documents| {
            documents
                .iter()
                .find(|d| d.id == object_id)
                .cloned()
                .map(JobListing::from)
                .ok_or_else(|| RepositoryError::NotFound(id.to_string()))
        })
    }

    async fn get_jobs(&self) -> RepositoryResult<Vec<JobListing>> {
        Ok(self.with_documents(|documents| {
            documents.iter().cloned().map(JobListing::from).collect()
        }))
    }

    async fn create_job_listing(
        &self,
        input: CreateJobListingInput,
    ) -> RepositoryResult<JobListing> {
        let document = JobListingDocument::from_input(ObjectId::new(), input);
        self.with_documents(|documents| documents.push(document.clone()));
        Ok(document.into())
    }

    async fn update_job_listing(
        &self,
        id: &str,
        input: UpdateJobListingInput,
    ) -> RepositoryResult<JobListing> {
        let object_id = parse_object_id(id)?;
        self.with_documents(|documents| {
            let document = documents
                .iter_mut()
                .find(|d| d.id == object_id)
                .ok_or_else(|| RepositoryError::NotFound(id.to_string()))?;
            apply(document, input);
            Ok(document.clone().into())
        })
    }

    async fn delete_job_listing(&self, id: &str) -> RepositoryResult<DeleteJobResponse> {
        let object_id = parse_object_id(id)?;
        self.with_documents(|documents| documents.retain(|d| d.id != object_id));
        Ok(DeleteJobResponse {
            delete_job_id: id.into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_partial_update_leaves_other_fields() {
        let repository = InMemoryJobListingRepository::new();
        let created = repository
            .create_job_listing(CreateJobListingInput {
                title: "Engineer".to_string(),
                description: "Build things".to_string(),
                company: "Acme".to_string(),
                url: "https://acme.example/jobs/1".to_string(),
            })
            .await
            .unwrap();

        let updated = repository
            .update_job_listing(
                &created.id,
                UpdateJobListingInput {
                    description: Some("Build better things".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.title, "Engineer");
        assert_eq!(updated.description, "Build better things");
        assert_eq!(updated.company, "Acme");
        assert_eq!(updated.url, "https://acme.example/jobs/1");
    }

    #[tokio::test]
    async fn test_invalid_id_never_reaches_store() {
        let repository = InMemoryJobListingRepository::new();

        assert!(matches!(
            repository.get_job("nope").await,
            Err(RepositoryError::InvalidIdentifier(_))
        ));
        assert!(matches!(
            repository
                .update_job_listing("nope", UpdateJobListingInput::default())
                .await,
            Err(RepositoryError::InvalidIdentifier(_))
        ));
        assert!(matches!(
            repository.delete_job_listing("nope").await,
            Err(RepositoryError::InvalidIdentifier(_))
        ));
        assert_eq!(repository.store_calls(), 0);
    }
}
