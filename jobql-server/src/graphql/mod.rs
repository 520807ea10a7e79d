//! GraphQL Module
//!
//! Schema, resolvers and engine extensions. Resolvers delegate every field
//! to the injected [`JobListingRepository`](crate::repository::JobListingRepository).

pub mod cache;
pub mod error;
pub mod mutation;
pub mod query;

use async_graphql::extensions::apollo_persisted_queries::{
    ApolloPersistedQueries, LruCacheStorage,
};
use async_graphql::{EmptySubscription, Schema};

use crate::config::GraphqlConfig;
use crate::repository::SharedJobListingRepository;

pub use cache::QueryDocumentCache;
pub use mutation::MutationRoot;
pub use query::QueryRoot;

/// The full GraphQL schema type
pub type JobSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the GraphQL schema around a repository
///
/// Registers automatic persisted queries and the parsed document cache.
/// Introspection is left enabled.
pub fn build_schema(repository: SharedJobListingRepository, config: &GraphqlConfig) -> JobSchema {
    build_schema_with_cache(
        repository,
        config,
        QueryDocumentCache::new(config.query_cache_size),
    )
}

fn build_schema_with_cache(
    repository: SharedJobListingRepository,
    config: &GraphqlConfig,
    documents: QueryDocumentCache,
) -> JobSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(repository)
        .extension(ApolloPersistedQueries::new(LruCacheStorage::new(
            config.apq_cache_size.max(1),
        )))
        .extension(documents)
        .finish()
}
