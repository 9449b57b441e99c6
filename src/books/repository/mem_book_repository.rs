use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::books::domain::model::BookEntity;
use crate::books::repository::BookRepository;
use crate::core::library::{CatalogError, CatalogResult, PaginatedResult};
use crate::core::repository::Repository;

// MemBookRepository keeps catalog records in a process-local map keyed by
// isbn. Writers take the exclusive guard, so isbn uniqueness holds under
// concurrent requests.
#[derive(Debug, Default)]
pub struct MemBookRepository {
    books: RwLock<HashMap<String, BookEntity>>,
}

impl MemBookRepository {
    pub(crate) fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Repository<BookEntity> for MemBookRepository {
    async fn create(&self, entity: &BookEntity) -> CatalogResult<usize> {
        let mut books = self.books.write().await;
        if books.contains_key(entity.isbn.as_str()) {
            return Err(CatalogError::duplicate_key(
                format!("book already exists for {}", entity.isbn).as_str()));
        }
        books.insert(entity.isbn.to_string(), entity.clone());
        Ok(1)
    }

    async fn update(&self, entity: &BookEntity) -> CatalogResult<usize> {
        let mut books = self.books.write().await;
        match books.get_mut(entity.isbn.as_str()) {
            Some(existing) => {
                existing.title = entity.title.to_string();
                existing.author = entity.author.to_string();
                existing.price = entity.price;
                existing.version += 1;
                existing.updated_at = Utc::now().naive_utc();
                Ok(1)
            }
            None => {
                Err(CatalogError::not_found(
                    format!("book not found for {}", entity.isbn).as_str()))
            }
        }
    }

    async fn get(&self, id: &str) -> CatalogResult<BookEntity> {
        let books = self.books.read().await;
        books.get(id).cloned().ok_or_else(||
            CatalogError::not_found(format!("book not found for {}", id).as_str()))
    }

    async fn delete(&self, id: &str) -> CatalogResult<usize> {
        let mut books = self.books.write().await;
        // removing an unknown isbn is not an error, delete stays idempotent
        Ok(books.remove(id).map_or(0, |_| 1))
    }

    async fn query(&self, predicate: &HashMap<String, String>,
                   page: Option<&str>, page_size: usize) -> CatalogResult<PaginatedResult<BookEntity>> {
        let books = self.books.read().await;
        let mut records: Vec<BookEntity> = books.values()
            .filter(|entity| matches_predicate(entity, predicate))
            .cloned()
            .collect();
        // stable listing order
        records.sort_by(|a, b| a.isbn.cmp(&b.isbn));

        let page_num = parse_page(page)?;
        let start = page_num * page_size;
        let next_page = if start + page_size < records.len() {
            Some((page_num + 1).to_string())
        } else {
            None
        };
        let records = records.into_iter().skip(start).take(page_size).collect();
        Ok(PaginatedResult::new(page, page_size, next_page, records))
    }
}

#[async_trait]
impl BookRepository for MemBookRepository {
    async fn find_all(&self, page: Option<&str>,
                      page_size: usize) -> CatalogResult<PaginatedResult<BookEntity>> {
        self.query(&HashMap::new(), page, page_size).await
    }
}

fn matches_predicate(entity: &BookEntity, predicate: &HashMap<String, String>) -> bool {
    predicate.iter().all(|(field, expected)| {
        match field.as_str() {
            "isbn" => entity.isbn == *expected,
            "title" => entity.title == *expected,
            "author" => entity.author == *expected,
            _ => false,
        }
    })
}

fn parse_page(page: Option<&str>) -> CatalogResult<usize> {
    match page {
        Some(token) => {
            token.parse::<usize>().map_err(|_|
                CatalogError::validation(format!("invalid page token {}", token).as_str(), None))
        }
        None => Ok(0),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use crate::books::domain::model::BookEntity;
    use crate::books::repository::BookRepository;
    use crate::books::repository::mem_book_repository::MemBookRepository;
    use crate::core::library::CatalogError;
    use crate::core::repository::Repository;

    #[tokio::test]
    async fn test_should_create_and_get_book() {
        let repo = MemBookRepository::new();
        let book = BookEntity::new("1231231231", "Title", "Author", 9.90);
        let _ = repo.create(&book).await.expect("should create book");

        let loaded = repo.get("1231231231").await.expect("should return book");
        assert_eq!(book.isbn, loaded.isbn);
        assert_eq!(book.title, loaded.title);
    }

    #[tokio::test]
    async fn test_should_reject_duplicate_isbn() {
        let repo = MemBookRepository::new();
        let book = BookEntity::new("1231231231", "Title", "Author", 9.90);
        let _ = repo.create(&book).await.expect("should create book");

        let res = repo.create(&book).await;
        assert!(matches!(res, Err(CatalogError::DuplicateKey { message: _ })));
    }

    #[tokio::test]
    async fn test_should_update_book_and_bump_version() {
        let repo = MemBookRepository::new();
        let mut book = BookEntity::new("1231231231", "Title", "Author", 9.90);
        let _ = repo.create(&book).await.expect("should create book");

        book.price = 10.9;
        let _ = repo.update(&book).await.expect("should update book");

        let loaded = repo.get("1231231231").await.expect("should return book");
        assert_eq!(10.9, loaded.price);
        assert_eq!(1, loaded.version);
    }

    #[tokio::test]
    async fn test_should_fail_update_of_unknown_isbn() {
        let repo = MemBookRepository::new();
        let book = BookEntity::new("1231231231", "Title", "Author", 9.90);
        let res = repo.update(&book).await;
        assert!(matches!(res, Err(CatalogError::NotFound { message: _ })));
    }

    #[tokio::test]
    async fn test_should_delete_idempotently() {
        let repo = MemBookRepository::new();
        let book = BookEntity::new("1231231231", "Title", "Author", 9.90);
        let _ = repo.create(&book).await.expect("should create book");

        assert_eq!(1, repo.delete("1231231231").await.expect("should delete book"));
        assert_eq!(0, repo.delete("1231231231").await.expect("should ignore unknown isbn"));
        assert!(repo.get("1231231231").await.is_err());
    }

    #[tokio::test]
    async fn test_should_query_with_predicate() {
        let repo = MemBookRepository::new();
        let _ = repo.create(&BookEntity::new("1231231231", "Title", "Author", 9.90)).await.expect("should create book");
        let _ = repo.create(&BookEntity::new("3213213213", "Other", "Someone", 5.00)).await.expect("should create book");

        let predicate = HashMap::from([("author".to_string(), "Author".to_string())]);
        let res = repo.query(&predicate, None, 100).await.expect("should query books");
        assert_eq!(1, res.records.len());
        assert_eq!("1231231231", res.records[0].isbn.as_str());
    }

    #[tokio::test]
    async fn test_should_paginate_sorted_by_isbn() {
        let repo = MemBookRepository::new();
        for isbn in ["3333333333", "1111111111", "2222222222"] {
            let _ = repo.create(&BookEntity::new(isbn, "Title", "Author", 9.90)).await.expect("should create book");
        }

        let first = repo.find_all(None, 2).await.expect("should return first page");
        assert_eq!(2, first.records.len());
        assert_eq!("1111111111", first.records[0].isbn.as_str());
        assert_eq!(Some("1".to_string()), first.next_page);

        let second = repo.find_all(Some("1"), 2).await.expect("should return second page");
        assert_eq!(1, second.records.len());
        assert_eq!("3333333333", second.records[0].isbn.as_str());
        assert_eq!(None, second.next_page);
    }
}
