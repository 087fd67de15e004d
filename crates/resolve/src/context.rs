use std::collections::HashMap;

use garden_store::Document;

/// Per-request scratch shared across a handler chain: the raw id batch
/// attached by the router, plus named slots of resolved records. Private to
/// one request; nothing here outlives the response.
#[derive(Debug, Default)]
pub struct RequestContext {
    ids: Option<Vec<String>>,
    slots: HashMap<String, Vec<Document>>,
}

impl RequestContext {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Context carrying an id batch, the common case for tests and simple
    /// routes.
    #[must_use]
    pub fn with_ids<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut ctx = Self::new();
        ctx.set_ids(ids.into_iter().map(Into::into).collect());
        ctx
    }

    /// Attach the id batch extracted from the request.
    pub fn set_ids(&mut self, ids: Vec<String>) {
        self.ids = Some(ids);
    }

    #[must_use]
    pub fn ids(&self) -> Option<&[String]> {
        self.ids.as_deref()
    }

    pub(crate) fn insert_records(&mut self, name: &str, records: Vec<Document>) {
        self.slots.insert(name.to_string(), records);
    }

    /// Records stored by a resolver handler under its result name.
    #[must_use]
    pub fn records(&self, name: &str) -> Option<&[Document]> {
        self.slots.get(name).map(Vec::as_slice)
    }

    /// Move the records out, leaving the slot empty.
    pub fn take_records(&mut self, name: &str) -> Option<Vec<Document>> {
        self.slots.remove(name)
    }
}
