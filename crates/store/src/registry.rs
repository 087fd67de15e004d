use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use crate::error::{Result, StoreError};
use crate::id::DocId;
use crate::kind::ResourceKind;
use crate::models::Document;
use crate::query::{Filter, Populate};

/// Capability interface over one document collection: the three store
/// operations a kind must support. Backends implement this per kind and are
/// looked up through the [`StoreRegistry`], never passed around as model
/// values.
#[async_trait]
pub trait KindStore: Send + Sync {
    /// Fetch a document by id, eagerly loading the named relations.
    /// A missing id is `Ok(None)`, not an error.
    async fn find_by_id(&self, id: &DocId, populate: &Populate) -> Result<Option<Document>>;

    /// Count documents matching the filter without materializing them.
    async fn count(&self, filter: &Filter) -> Result<u64>;

    /// Validate and persist a document, returning the stored form.
    async fn save(&self, doc: Document) -> Result<Document>;
}

/// Registry mapping each [`ResourceKind`] to its store capability.
#[derive(Clone, Default)]
pub struct StoreRegistry {
    kinds: HashMap<ResourceKind, Arc<dyn KindStore>>,
}

impl StoreRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, kind: ResourceKind, store: Arc<dyn KindStore>) {
        self.kinds.insert(kind, store);
    }

    pub fn get(&self, kind: ResourceKind) -> Result<Arc<dyn KindStore>> {
        self.kinds
            .get(&kind)
            .cloned()
            .ok_or(StoreError::UnknownKind(kind))
    }

    pub async fn find_by_id(
        &self,
        kind: ResourceKind,
        id: &DocId,
        populate: &Populate,
    ) -> Result<Option<Document>> {
        self.get(kind)?.find_by_id(id, populate).await
    }

    pub async fn count(&self, kind: ResourceKind, filter: &Filter) -> Result<u64> {
        self.get(kind)?.count(filter).await
    }

    /// Route a save to the store registered for the document's own kind.
    pub async fn save(&self, doc: Document) -> Result<Document> {
        self.get(doc.kind())?.save(doc).await
    }
}
