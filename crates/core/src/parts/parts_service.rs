use std::sync::Arc;

use async_trait::async_trait;

use super::parts_model::{NewPart, Part};
use super::parts_traits::{PartRepositoryTrait, PartServiceTrait};
use crate::errors::Result;

pub struct PartService {
    part_repository: Arc<dyn PartRepositoryTrait>,
}

impl PartService {
    pub fn new(part_repository: Arc<dyn PartRepositoryTrait>) -> Self {
        PartService { part_repository }
    }
}

#[async_trait]
impl PartServiceTrait for PartService {
    fn get_parts(&self) -> Result<Vec<Part>> {
        self.part_repository.load_parts()
    }

    async fn create_part(&self, new_part: NewPart) -> Result<Part> {
        self.part_repository.insert_part(new_part).await
    }

    async fn delete_part(&self, part_id: i32) -> Result<usize> {
        self.part_repository.delete_part(part_id).await
    }
}
