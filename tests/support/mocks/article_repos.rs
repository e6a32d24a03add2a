// tests/support/mocks/article_repos.rs
use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use realworld_core::application::ports::time::Clock;
use realworld_core::domain::article::{
    Article, ArticleId, ArticleReadRepository, ArticleSlug, ArticleWriteRepository, AuditStamp,
    Comment, CommentId,
};
use realworld_core::domain::errors::{DomainError, DomainResult};

use super::time::FixedClock;

#[derive(Default)]
struct Store {
    articles: HashMap<i64, Article>,
    next_article_id: i64,
    next_comment_id: i64,
}

/// Keeps articles in memory and assigns ids the way the database would.
#[derive(Default)]
pub struct InMemoryArticleRepo {
    inner: Mutex<Store>,
    clock: FixedClock,
}

impl InMemoryArticleRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().articles.len()
    }
}

#[async_trait]
impl ArticleWriteRepository for InMemoryArticleRepo {
    async fn save(&self, mut article: Article) -> DomainResult<Article> {
        let now = self.clock.now();
        article.apply_audit(AuditStamp::for_save(article.is_persisted(), now));

        let mut store = self.inner.lock().unwrap();
        let slug_taken = store.articles.values().any(|existing| {
            existing.contents().slug() == article.contents().slug()
                && existing.id() != article.id()
        });
        if slug_taken {
            return Err(DomainError::Conflict("slug already exists".into()));
        }

        let id = match article.id() {
            Some(id) => id,
            None => {
                store.next_article_id += 1;
                ArticleId::new(store.next_article_id).unwrap()
            }
        };

        let mut comments = Vec::new();
        for comment in article.comments() {
            let stored = match comment.id() {
                Some(_) => comment.clone(),
                None => {
                    store.next_comment_id += 1;
                    Comment::restore(
                        CommentId::new(store.next_comment_id).unwrap(),
                        comment.author(),
                        comment.body().clone(),
                        comment.created_at().unwrap_or(now),
                    )
                }
            };
            comments.push(stored);
        }

        let stored = Article::restore(
            id,
            article.author(),
            article.contents().clone(),
            article.created_at().unwrap_or(now),
            article.updated_at().unwrap_or(now),
            article.favorited_by().iter().copied(),
            comments,
        );
        store.articles.insert(i64::from(id), stored.clone());
        Ok(stored)
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        let mut store = self.inner.lock().unwrap();
        store
            .articles
            .remove(&i64::from(id))
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound("article not found".into()))
    }
}

#[async_trait]
impl ArticleReadRepository for InMemoryArticleRepo {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let store = self.inner.lock().unwrap();
        Ok(store.articles.get(&i64::from(id)).cloned())
    }

    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<Article>> {
        let store = self.inner.lock().unwrap();
        Ok(store
            .articles
            .values()
            .find(|article| article.contents().slug() == slug)
            .cloned())
    }
}
