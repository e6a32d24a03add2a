use crate::domain::article::entity::Article;
use crate::domain::article::value_objects::{ArticleId, ArticleSlug};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait ArticleWriteRepository: Send + Sync {
    /// Inserts or updates the article together with its favorites, tags and
    /// comments, stamping it through `Article::apply_audit`. Returns the
    /// stored state with every id assigned.
    async fn save(&self, article: Article) -> DomainResult<Article>;

    /// Deletes the article and everything it owns.
    async fn delete(&self, id: ArticleId) -> DomainResult<()>;
}

#[async_trait]
pub trait ArticleReadRepository: Send + Sync {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>>;
    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<Article>>;
}
