use crate::application::{commands::articles::ArticleCommandService, ports::time::Clock};
use crate::config::AppConfig;
use crate::domain::article::{ArticleReadRepository, ArticleWriteRepository};
use crate::infrastructure::{
    database, repositories::PostgresArticleRepository, time::SystemClock,
};
use anyhow::{Context, Result};
use std::sync::Arc;

/// Connects to the database, applies the schema and wires the article service.
pub async fn connect(config: &AppConfig) -> Result<ArticleCommandService> {
    let pool = database::init_pool(config.database_url(), config.database_max_connections())
        .await
        .context("failed to connect to the database")?;
    database::run_migrations(&pool)
        .await
        .context("failed to apply database schema")?;

    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let repo = Arc::new(PostgresArticleRepository::new(pool, clock));
    let write_repo: Arc<dyn ArticleWriteRepository> = repo.clone();
    let read_repo: Arc<dyn ArticleReadRepository> = repo;

    tracing::info!("article service ready");
    Ok(ArticleCommandService::new(write_repo, read_repo))
}
