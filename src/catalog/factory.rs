use std::sync::Arc;
use crate::books::factory;
use crate::catalog::domain::BookService;
use crate::catalog::domain::service::BookServiceImpl;
use crate::core::domain::Configuration;
use crate::core::repository::RepositoryStore;

pub(crate) async fn create_book_service(config: &Configuration, store: RepositoryStore) -> Arc<dyn BookService> {
    let book_repo = factory::create_book_repository(store).await;
    Arc::new(BookServiceImpl::new(config, book_repo))
}
