use async_trait::async_trait;
use tracing::info;
use crate::books::domain::model::BookEntity;
use crate::books::dto::BookDto;
use crate::books::repository::BookRepository;
use crate::catalog::domain::BookService;
use crate::core::domain::{Configuration, Identifiable};
use crate::core::library::{CatalogError, CatalogResult};

pub(crate) struct BookServiceImpl {
    book_repository: Box<dyn BookRepository>,
    config: Configuration,
}

impl BookServiceImpl {
    pub(crate) fn new(config: &Configuration, book_repository: Box<dyn BookRepository>) -> Self {
        Self {
            book_repository,
            config: config.clone(),
        }
    }
}

#[async_trait]
impl BookService for BookServiceImpl {
    async fn view_book_list(&self) -> CatalogResult<Vec<BookDto>> {
        let res = self.book_repository.find_all(None, self.config.page_size).await?;
        Ok(res.records.iter().map(BookDto::from).collect())
    }

    async fn view_book_details(&self, isbn: &str) -> CatalogResult<BookDto> {
        self.book_repository.get(isbn).await
            .map(|entity| BookDto::from(&entity))
            .map_err(|err| book_not_found(isbn, err))
    }

    async fn add_book_to_catalog(&self, book: &BookDto) -> CatalogResult<BookDto> {
        let entity = BookEntity::from(book);
        let _ = self.book_repository.create(&entity).await.map_err(|err| {
            match err {
                CatalogError::DuplicateKey { .. } => {
                    CatalogError::duplicate_key(
                        format!("A book with ISBN {} already exists.", book.isbn).as_str())
                }
                other => other,
            }
        })?;
        info!("added book {} to catalog", entity.id());
        Ok(BookDto::from(&entity))
    }

    async fn edit_book_details(&self, isbn: &str, book: &BookDto) -> CatalogResult<BookDto> {
        // the path isbn is authoritative for the stored record
        let book = BookDto::new(isbn, book.title.as_str(), book.author.as_str(), book.price);
        let entity = BookEntity::from(&book);
        match self.book_repository.update(&entity).await {
            Ok(_) => Ok(book),
            Err(CatalogError::NotFound { .. }) if self.config.put_upsert => {
                info!("upserting book {} on edit", entity.id());
                self.book_repository.create(&entity).await.map(|_| book)
            }
            Err(err) => Err(book_not_found(isbn, err)),
        }
    }

    async fn remove_book_from_catalog(&self, isbn: &str) -> CatalogResult<()> {
        let removed = self.book_repository.delete(isbn).await?;
        info!("removed {} book(s) for isbn {}", removed, isbn);
        Ok(())
    }
}

// maps a storage-level not-found onto the client-facing catalog message
fn book_not_found(isbn: &str, err: CatalogError) -> CatalogError {
    match err {
        CatalogError::NotFound { .. } => {
            CatalogError::not_found(
                format!("The book with ISBN {} was not found.", isbn).as_str())
        }
        other => other,
    }
}

impl From<&BookEntity> for BookDto {
    fn from(other: &BookEntity) -> Self {
        Self {
            isbn: other.isbn.to_string(),
            title: other.title.to_string(),
            author: other.author.to_string(),
            price: other.price,
        }
    }
}

impl From<&BookDto> for BookEntity {
    fn from(other: &BookDto) -> Self {
        BookEntity::new(other.isbn.as_str(), other.title.as_str(),
                        other.author.as_str(), other.price)
    }
}
