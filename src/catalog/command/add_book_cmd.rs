use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::BookService;
use crate::core::command::{Command, CommandError};

pub(crate) struct AddBookCommand {
    book_service: Arc<dyn BookService>,
}

impl AddBookCommand {
    pub(crate) fn new(book_service: Arc<dyn BookService>) -> Self {
        Self {
            book_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct AddBookCommandRequest {
    pub(crate) isbn: String,
    pub(crate) title: String,
    pub(crate) author: String,
    pub(crate) price: f64,
}

impl AddBookCommandRequest {
    pub fn new(isbn: &str, title: &str, author: &str, price: f64) -> Self {
        Self {
            isbn: isbn.to_string(),
            title: title.to_string(),
            author: author.to_string(),
            price,
        }
    }
    pub fn build_book(&self) -> BookDto {
        BookDto::new(self.isbn.as_str(), self.title.as_str(), self.author.as_str(), self.price)
    }
}


#[derive(Debug, Serialize)]
pub(crate) struct AddBookCommandResponse {
    pub book: BookDto,
}

impl AddBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl Command<AddBookCommandRequest, AddBookCommandResponse> for AddBookCommand {
    async fn execute(&self, req: AddBookCommandRequest) -> Result<AddBookCommandResponse, CommandError> {
        let book = req.build_book();
        book.validate().map_err(CommandError::from)?;
        self.book_service.add_book_to_catalog(&book).await
            .map_err(CommandError::from).map(AddBookCommandResponse::new)
    }
}
