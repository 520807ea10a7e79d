//! Parsed query document cache
//!
//! A schema extension that keeps the most recently used parsed documents,
//! keyed by query text, so repeated queries skip the parser.

use std::num::NonZeroUsize;
use std::sync::{Arc, Mutex, MutexGuard};

use async_graphql::extensions::{Extension, ExtensionContext, ExtensionFactory, NextParseQuery};
use async_graphql::parser::types::ExecutableDocument;
use async_graphql::{ServerResult, Variables};
use lru::LruCache;

type DocumentLru = LruCache<String, ExecutableDocument>;

/// Bounded LRU of parsed query documents
///
/// Cloning shares the underlying cache.
#[derive(Clone)]
pub struct QueryDocumentCache {
    documents: Arc<Mutex<DocumentLru>>,
}

impl QueryDocumentCache {
    /// Creates a cache holding at most `capacity` documents (at least one)
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            documents: Arc::new(Mutex::new(LruCache::new(capacity))),
        }
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn get(&self, query: &str) -> Option<ExecutableDocument> {
        self.lock().get(query).cloned()
    }

    fn put(&self, query: &str, document: ExecutableDocument) {
        self.lock().put(query.to_string(), document);
    }

    // The guarded value is a cache; a poisoned lock still holds usable entries.
    fn lock(&self) -> MutexGuard<'_, DocumentLru> {
        self.documents
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl ExtensionFactory for QueryDocumentCache {
    fn create(&self) -> Arc<dyn Extension> {
        Arc::new(QueryDocumentCacheExtension {
            cache: self.clone(),
        })
    }
}

struct QueryDocumentCacheExtension {
    cache: QueryDocumentCache,
}

#[async_trait::async_trait]
impl Extension for QueryDocumentCacheExtension {
    async fn parse_query(
        &self,
        ctx: &ExtensionContext<'_>,
        query: &str,
        variables: &Variables,
        next: NextParseQuery<'_>,
    ) -> ServerResult<ExecutableDocument> {
        if let Some(document) = self.cache.get(query) {
            tracing::trace!("Query document cache hit");
            return Ok(document);
        }

        let document = next.run(ctx, query, variables).await?;
        self.cache.put(query, document.clone());
        Ok(document)
    }
}
