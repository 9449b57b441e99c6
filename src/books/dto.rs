use serde::{Deserialize, Serialize};
use crate::books::domain::Book;
use crate::core::domain::Identifiable;
use crate::core::library::{CatalogError, CatalogResult};

// BookDto is the wire representation of a catalog book.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct BookDto {
    pub isbn: String,
    pub title: String,
    pub author: String,
    pub price: f64,
}

impl BookDto {
    pub fn new(isbn: &str, title: &str, author: &str, price: f64) -> BookDto {
        BookDto {
            isbn: isbn.to_string(),
            title: title.to_string(),
            author: author.to_string(),
            price,
        }
    }

    // Structural validation at the boundary; an invalid payload never
    // reaches the service.
    pub fn validate(&self) -> CatalogResult<()> {
        if !valid_isbn(self.isbn.as_str()) {
            return Err(CatalogError::validation(
                format!("isbn '{}' must be 10 or 13 digits", self.isbn).as_str(), None));
        }
        if self.title.trim().is_empty() {
            return Err(CatalogError::validation("title must not be blank", None));
        }
        if self.author.trim().is_empty() {
            return Err(CatalogError::validation("author must not be blank", None));
        }
        if !self.price.is_finite() || self.price <= 0.0 {
            return Err(CatalogError::validation(
                format!("price {} must be positive", self.price).as_str(), None));
        }
        Ok(())
    }
}

fn valid_isbn(isbn: &str) -> bool {
    (isbn.len() == 10 || isbn.len() == 13) && isbn.bytes().all(|b| b.is_ascii_digit())
}

impl Identifiable for BookDto {
    fn id(&self) -> String {
        self.isbn.to_string()
    }

    fn version(&self) -> i64 {
        0
    }
}

impl Book for BookDto {
    fn isbn(&self) -> String {
        self.isbn.to_string()
    }

    fn price(&self) -> f64 {
        self.price
    }
}
