// tests/support/builders.rs
use std::sync::Arc;

use realworld_core::application::commands::articles::{
    ArticleCommandService, CreateArticleCommand,
};
use realworld_core::domain::user::UserId;

use super::mocks::InMemoryArticleRepo;

pub fn user(id: i64) -> UserId {
    UserId::new(id).unwrap()
}

pub fn service_with_repo() -> (ArticleCommandService, Arc<InMemoryArticleRepo>) {
    let repo = Arc::new(InMemoryArticleRepo::new());
    let service = ArticleCommandService::new(repo.clone(), repo.clone());
    (service, repo)
}

pub fn create_command(title: &str) -> CreateArticleCommand {
    CreateArticleCommand::builder()
        .title(title)
        .description("Ever wonder how?")
        .body("B")
        .tag("dragons")
        .build()
        .unwrap()
}
