use std::sync::Arc;
use axum::http::StatusCode;
use crate::catalog::domain::BookService;
use crate::catalog::factory;
use crate::core::command::CommandError;
use crate::core::domain::Configuration;
use crate::core::repository::RepositoryStore;

// AppState carries the configuration and the book service handle that the
// controller hands to commands. The service is built once at startup and
// shared across requests.
#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) config: Configuration,
    pub(crate) service: Arc<dyn BookService>,
}

impl AppState {
    pub async fn new(environment: &str, store: RepositoryStore) -> AppState {
        let config = Configuration::new(environment);
        let service = factory::create_book_service(&config, store).await;
        AppState {
            config,
            service,
        }
    }
}

pub(crate) type ServerError = (StatusCode, String);

pub fn json_to_server_error(err: serde_json::Error) -> ServerError {
    (StatusCode::BAD_REQUEST, format!("{}", err))
}

// Client-facing variants keep their message as the response body so that
// not-found and duplicate-isbn texts reach the caller verbatim.
impl From<CommandError> for ServerError {
    fn from(err: CommandError) -> Self {
        match err {
            CommandError::Database { message, .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, message)
            }
            CommandError::DuplicateKey { message } => {
                (StatusCode::CONFLICT, message)
            }
            CommandError::NotFound { message } => {
                (StatusCode::NOT_FOUND, message)
            }
            CommandError::Runtime { message, .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, message)
            }
            CommandError::Serialization { message } => {
                (StatusCode::BAD_REQUEST, message)
            }
            CommandError::Validation { message, .. } => {
                (StatusCode::BAD_REQUEST, message)
            }
            CommandError::Other { message, .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, message)
            }
        }
    }
}
