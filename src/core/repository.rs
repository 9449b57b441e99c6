use async_trait::async_trait;
use core::option::Option;
use std::collections::HashMap;
use serde::{Deserialize, Serialize};
use crate::core::library::{CatalogResult, PaginatedResult};

#[async_trait]
pub trait Repository<Entity>: Sync + Send {
    // create an entity
    async fn create(&self, entity: &Entity) -> CatalogResult<usize>;

    // updates an entity
    async fn update(&self, entity: &Entity) -> CatalogResult<usize>;

    // get an entity
    async fn get(&self, id: &str) -> CatalogResult<Entity>;

    // delete an entity
    async fn delete(&self, id: &str) -> CatalogResult<usize>;

    // find by field predicate
    async fn query(&self, predicate: &HashMap::<String, String>,
                   page: Option<&str>, page_size: usize) -> CatalogResult<PaginatedResult<Entity>>;
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
pub(crate) enum RepositoryStore {
    InMemory,
}
