pub mod mem_book_repository;

use async_trait::async_trait;
use crate::books::domain::model::BookEntity;
use crate::core::library::{CatalogResult, PaginatedResult};
use crate::core::repository::Repository;


#[async_trait]
pub(crate) trait BookRepository: Repository<BookEntity> {
    async fn find_all(&self, page: Option<&str>,
                      page_size: usize) -> CatalogResult<PaginatedResult<BookEntity>>;
}
