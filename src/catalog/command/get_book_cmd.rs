use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::BookService;
use crate::core::command::{Command, CommandError};

pub(crate) struct GetBookCommand {
    book_service: Arc<dyn BookService>,
}

impl GetBookCommand {
    pub(crate) fn new(book_service: Arc<dyn BookService>) -> Self {
        Self {
            book_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct GetBookCommandRequest {
    pub(crate) isbn: String,
}

impl GetBookCommandRequest {
    pub fn new(isbn: String) -> Self {
        Self {
            isbn,
        }
    }
}


#[derive(Debug, Serialize)]
pub(crate) struct GetBookCommandResponse {
    pub book: BookDto,
}

impl GetBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl Command<GetBookCommandRequest, GetBookCommandResponse> for GetBookCommand {
    async fn execute(&self, req: GetBookCommandRequest) -> Result<GetBookCommandResponse, CommandError> {
        self.book_service.view_book_details(req.isbn.as_str())
            .await.map_err(CommandError::from).map(GetBookCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use async_once::AsyncOnce;
    use lazy_static::lazy_static;
    use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
    use crate::catalog::command::get_book_cmd::{GetBookCommand, GetBookCommandRequest};
    use crate::catalog::domain::BookService;
    use crate::catalog::factory;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;
    use crate::core::repository::RepositoryStore;

    lazy_static! {
        static ref SUT_SVC: AsyncOnce<Arc<dyn BookService>> = AsyncOnce::new(async {
                factory::create_book_service(&Configuration::new("test"), RepositoryStore::InMemory).await
            });
    }

    #[tokio::test]
    async fn test_should_run_get_book() {
        let svc = SUT_SVC.get().await.clone();
        let add_cmd = AddBookCommand::new(svc.clone());
        let get_cmd = GetBookCommand::new(svc);

        let res = add_cmd.execute(AddBookCommandRequest::new("1231231231", "Title", "Author", 9.90))
            .await.expect("should add book");
        let loaded = get_cmd.execute(GetBookCommandRequest::new(res.book.isbn.to_string()))
            .await.expect("should get book");
        assert_eq!("1231231231", loaded.book.isbn.as_str());
        assert_eq!("Title", loaded.book.title.as_str());
    }

    #[tokio::test]
    async fn test_should_fail_get_of_unknown_isbn() {
        let svc = SUT_SVC.get().await.clone();
        let get_cmd = GetBookCommand::new(svc);

        let res = get_cmd.execute(GetBookCommandRequest::new("3213213213".to_string())).await;
        match res {
            Err(CommandError::NotFound { message }) => {
                assert_eq!("The book with ISBN 3213213213 was not found.", message.as_str());
            }
            _ => panic!("expected not found error"),
        }
    }
}
