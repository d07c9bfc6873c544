use crate::errors::Result;
use crate::parts::parts_model::{NewPart, Part};
use async_trait::async_trait;

/// Trait for parts catalog repository operations.
#[async_trait]
pub trait PartRepositoryTrait: Send + Sync {
    /// Loads all catalog parts in ascending id order.
    fn load_parts(&self) -> Result<Vec<Part>>;

    async fn insert_part(&self, new_part: NewPart) -> Result<Part>;

    /// Deletes by id; a nonexistent id is a no-op returning `Ok(0)`.
    async fn delete_part(&self, part_id: i32) -> Result<usize>;
}

/// Trait for parts catalog service operations.
#[async_trait]
pub trait PartServiceTrait: Send + Sync {
    fn get_parts(&self) -> Result<Vec<Part>>;
    async fn create_part(&self, new_part: NewPart) -> Result<Part>;
    async fn delete_part(&self, part_id: i32) -> Result<usize>;
}
