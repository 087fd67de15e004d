mod error;
mod id;
mod kind;
mod memory;
mod models;
mod query;
mod registry;

pub use error::{Result, StoreError};
pub use id::{DocId, DOC_ID_LEN};
pub use kind::ResourceKind;
pub use memory::MemoryStore;
pub use models::{
    Bed, Companionship, Crop, Document, Link, COMPANIONSHIPS_RELATION, INCOMPATIBLE,
    MAX_COMPATIBILITY,
};
pub use query::{escape_pattern, Filter, Populate};
pub use registry::{KindStore, StoreRegistry};
