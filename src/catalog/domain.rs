pub mod service;

use async_trait::async_trait;
use crate::books::dto::BookDto;
use crate::core::library::CatalogResult;

#[async_trait]
pub(crate) trait BookService: Sync + Send {
    async fn view_book_list(&self) -> CatalogResult<Vec<BookDto>>;
    async fn view_book_details(&self, isbn: &str) -> CatalogResult<BookDto>;
    async fn add_book_to_catalog(&self, book: &BookDto) -> CatalogResult<BookDto>;
    async fn edit_book_details(&self, isbn: &str, book: &BookDto) -> CatalogResult<BookDto>;
    async fn remove_book_from_catalog(&self, isbn: &str) -> CatalogResult<()>;
}
