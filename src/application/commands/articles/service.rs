// src/application/commands/articles/service.rs
use std::sync::Arc;

use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::article::{Article, ArticleReadRepository, ArticleSlug, ArticleWriteRepository},
};

/// Runs each article use case as one load, mutate, save cycle.
pub struct ArticleCommandService {
    pub(super) write_repo: Arc<dyn ArticleWriteRepository>,
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
}

impl ArticleCommandService {
    pub fn new(
        write_repo: Arc<dyn ArticleWriteRepository>,
        read_repo: Arc<dyn ArticleReadRepository>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
        }
    }

    pub async fn find_by_slug(&self, slug: &str) -> ApplicationResult<Article> {
        self.load_by_slug(slug).await
    }

    pub(super) async fn load_by_slug(&self, slug: &str) -> ApplicationResult<Article> {
        let slug = ArticleSlug::new(slug)?;
        self.read_repo
            .find_by_slug(&slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found(format!("article '{slug}' not found")))
    }
}
