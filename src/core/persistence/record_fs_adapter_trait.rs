use anyhow::Result;

/// Typed miss for keyed record lookups. Surfaced as a 404 at the API
/// boundary instead of a generic internal error.
#[derive(Debug, thiserror::Error)]
#[error("{kind} not found: {id}")]
pub struct RecordNotFound {
    pub kind: &'static str,
    pub id: String,
}

impl RecordNotFound {
    pub fn new(kind: &'static str, id: &str) -> Self {
        Self {
            kind,
            id: id.to_string(),
        }
    }
}

/// FS adapter contract for keyed record files, one directory per record id.
pub trait RecordFsAdapterTrait<T> {
    fn new() -> Self
    where
        Self: Sized;

    fn read(&self, id: &str) -> Result<T>;
    fn list(&self) -> Result<Vec<T>>;
    fn insert(&self, data: &T) -> Result<()>;
    fn update(&self, data: &T) -> Result<()>;
    fn delete(&self, id: &str) -> Result<()>;
}
