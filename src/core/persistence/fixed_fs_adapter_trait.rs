use anyhow::Result;

/// FS adapter contract for singleton record files (one entity per site).
pub trait FixedFsAdapterTrait<T> {
    fn new() -> Self
    where
        Self: Sized;

    fn read(&self) -> Result<T>;
    fn insert(&self, data: &T) -> Result<()>;
    fn update(&self, data: &T) -> Result<()>;
    fn delete(&self) -> Result<()>;
}
