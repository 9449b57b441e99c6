use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::BookService;
use crate::core::command::{Command, CommandError};

pub(crate) struct UpdateBookCommand {
    book_service: Arc<dyn BookService>,
}

impl UpdateBookCommand {
    pub(crate) fn new(book_service: Arc<dyn BookService>) -> Self {
        Self {
            book_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct UpdateBookCommandRequest {
    // taken from the request path, the payload isbn is not authoritative
    #[serde(default)]
    pub(crate) isbn: String,
    pub(crate) title: String,
    pub(crate) author: String,
    pub(crate) price: f64,
}

impl UpdateBookCommandRequest {
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
pub(crate) struct UpdateBookCommandResponse {
    pub book: BookDto,
}

impl UpdateBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl Command<UpdateBookCommandRequest, UpdateBookCommandResponse> for UpdateBookCommand {
    async fn execute(&self, req: UpdateBookCommandRequest) -> Result<UpdateBookCommandResponse, CommandError> {
        let book = req.build_book();
        book.validate().map_err(CommandError::from)?;
        self.book_service.edit_book_details(req.isbn.as_str(), &book).await
            .map_err(CommandError::from).map(UpdateBookCommandResponse::new)
    }
}
