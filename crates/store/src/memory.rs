use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use regex::Regex;

use crate::error::{Result, StoreError};
use crate::id::DocId;
use crate::kind::ResourceKind;
use crate::models::{Crop, Document, Link, COMPANIONSHIPS_RELATION};
use crate::query::{Filter, Populate};
use crate::registry::{KindStore, StoreRegistry};

type Collections = HashMap<ResourceKind, HashMap<DocId, Document>>;

/// Process-local document store: one collection per kind, handing out
/// per-kind [`KindStore`] capabilities via [`MemoryStore::registry`].
/// Backs tests and single-process embedders.
#[derive(Default)]
pub struct MemoryStore {
    collections: RwLock<Collections>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// A registry with every kind backed by this store.
    #[must_use]
    pub fn registry(self: &Arc<Self>) -> StoreRegistry {
        let mut registry = StoreRegistry::new();
        for kind in ResourceKind::ALL {
            registry.register(
                kind,
                Arc::new(MemoryKindStore {
                    kind,
                    store: Arc::clone(self),
                }),
            );
        }
        registry
    }

    fn read(&self) -> Result<std::sync::RwLockReadGuard<'_, Collections>> {
        self.collections
            .read()
            .map_err(|_| StoreError::InternalFetch("store lock poisoned".to_string()))
    }

    fn write(&self) -> Result<std::sync::RwLockWriteGuard<'_, Collections>> {
        self.collections
            .write()
            .map_err(|_| StoreError::InternalFetch("store lock poisoned".to_string()))
    }
}

struct MemoryKindStore {
    kind: ResourceKind,
    store: Arc<MemoryStore>,
}

#[async_trait]
impl KindStore for MemoryKindStore {
    async fn find_by_id(&self, id: &DocId, populate: &Populate) -> Result<Option<Document>> {
        let collections = self.store.read()?;
        let Some(doc) = collections.get(&self.kind).and_then(|c| c.get(id)) else {
            return Ok(None);
        };
        match doc {
            Document::Crop(crop) if populate.contains(COMPANIONSHIPS_RELATION) => {
                populate_companionships(&collections, crop.clone()).map(Some)
            }
            other => Ok(Some(other.clone())),
        }
    }

    async fn count(&self, filter: &Filter) -> Result<u64> {
        let collections = self.store.read()?;
        let collection = collections.get(&self.kind);
        match filter {
            Filter::ById(id) => {
                Ok(u64::from(collection.is_some_and(|c| c.contains_key(id))))
            }
            Filter::NamePattern(pattern) => {
                let re = Regex::new(pattern)?;
                let count = collection
                    .map(|c| c.values().filter(|doc| name_matches(doc, &re)).count())
                    .unwrap_or(0);
                Ok(count as u64)
            }
        }
    }

    async fn save(&self, doc: Document) -> Result<Document> {
        if doc.kind() != self.kind {
            return Err(StoreError::InternalFetch(format!(
                "{} document saved through the {} store",
                doc.kind(),
                self.kind
            )));
        }
        doc.validate()?;
        let mut collections = self.store.write()?;
        log::debug!("memory store: save {} {}", self.kind, doc.id());
        collections
            .entry(self.kind)
            .or_default()
            .insert(doc.id().clone(), doc.clone());
        Ok(doc)
    }
}

/// Swap every edge link on the crop for the full edge record. An edge id
/// with no backing record is an unexpected path, not a miss.
fn populate_companionships(collections: &Collections, mut crop: Crop) -> Result<Document> {
    let edges = collections.get(&ResourceKind::Companionship);
    for link in &mut crop.companionships {
        if let Link::Id(edge_id) = link {
            match edges.and_then(|c| c.get(edge_id)) {
                Some(Document::Companionship(edge)) => {
                    *link = Link::Full(Box::new(edge.clone()));
                }
                _ => {
                    return Err(StoreError::InternalFetch(format!(
                        "companionship {edge_id} linked from crop {} has no record",
                        crop.id
                    )));
                }
            }
        }
    }
    Ok(Document::Crop(crop))
}

fn name_matches(doc: &Document, re: &Regex) -> bool {
    match doc {
        Document::Crop(crop) => {
            re.is_match(&crop.binomial_name)
                || crop.common_name.as_deref().is_some_and(|name| re.is_match(name))
        }
        Document::Bed(bed) => re.is_match(&bed.name),
        Document::Companionship(_) => false,
    }
}
