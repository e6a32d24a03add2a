// src/infrastructure/repositories/postgres_article.rs
use super::map_sqlx;
use crate::application::ports::time::Clock;
use crate::domain::article::{
    Article, ArticleBody, ArticleContents, ArticleDescription, ArticleId, ArticleReadRepository,
    ArticleSlug, ArticleTitle, ArticleWriteRepository, AuditStamp, Comment, CommentBody,
    CommentId, Tag,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, Transaction};
use std::sync::Arc;

const ARTICLE_COLUMNS: &str =
    "id, author_id, slug, title, description, body, created_at, updated_at";

/// Stores articles in Postgres, one row per article plus rows for its tags,
/// favorites and comments.
#[derive(Clone)]
pub struct PostgresArticleRepository {
    pool: PgPool,
    clock: Arc<dyn Clock>,
}

impl PostgresArticleRepository {
    pub fn new(pool: PgPool, clock: Arc<dyn Clock>) -> Self {
        Self { pool, clock }
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    id: i64,
    author_id: i64,
    slug: String,
    title: String,
    description: String,
    body: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

#[derive(Debug, FromRow)]
struct CommentRow {
    id: i64,
    author_id: i64,
    body: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<CommentRow> for Comment {
    type Error = DomainError;

    fn try_from(row: CommentRow) -> Result<Self, Self::Error> {
        Ok(Comment::restore(
            CommentId::new(row.id)?,
            UserId::new(row.author_id)?,
            CommentBody::new(row.body)?,
            row.created_at,
        ))
    }
}

impl PostgresArticleRepository {
    async fn fetch_one_where(
        &self,
        column: &str,
        bind: ArticleKey<'_>,
    ) -> DomainResult<Option<Article>> {
        let sql = format!("SELECT {ARTICLE_COLUMNS} FROM articles WHERE {column} = $1");
        let query = sqlx::query_as::<_, ArticleRow>(&sql);
        let query = match bind {
            ArticleKey::Id(id) => query.bind(id),
            ArticleKey::Slug(slug) => query.bind(slug),
        };

        let row = query
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        match row {
            Some(row) => self.hydrate(row).await.map(Some),
            None => Ok(None),
        }
    }

    async fn hydrate(&self, row: ArticleRow) -> DomainResult<Article> {
        let tags = sqlx::query_scalar::<_, String>(
            "SELECT tag FROM article_tags WHERE article_id = $1 ORDER BY tag",
        )
        .bind(row.id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?
        .into_iter()
        .map(Tag::new)
        .collect::<DomainResult<Vec<_>>>()?;

        let favorited_by = sqlx::query_scalar::<_, i64>(
            "SELECT user_id FROM article_favorites WHERE article_id = $1",
        )
        .bind(row.id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?
        .into_iter()
        .map(UserId::new)
        .collect::<DomainResult<Vec<_>>>()?;

        let comments = sqlx::query_as::<_, CommentRow>(
            "SELECT id, author_id, body, created_at FROM comments
             WHERE article_id = $1 ORDER BY id",
        )
        .bind(row.id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?
        .into_iter()
        .map(Comment::try_from)
        .collect::<DomainResult<Vec<_>>>()?;

        let contents = ArticleContents::restore(
            ArticleTitle::new(row.title)?,
            ArticleSlug::new(row.slug)?,
            ArticleDescription::new(row.description)?,
            ArticleBody::new(row.body)?,
            tags,
        );

        Ok(Article::restore(
            ArticleId::new(row.id)?,
            UserId::new(row.author_id)?,
            contents,
            row.created_at,
            row.updated_at,
            favorited_by,
            comments,
        ))
    }

    async fn insert_row(
        tx: &mut Transaction<'_, Postgres>,
        article: &Article,
        now: DateTime<Utc>,
    ) -> DomainResult<i64> {
        let contents = article.contents();
        sqlx::query_scalar::<_, i64>(
            "INSERT INTO articles (author_id, slug, title, description, body, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $6)
             RETURNING id",
        )
        .bind(i64::from(article.author()))
        .bind(contents.slug().as_str())
        .bind(contents.title().as_str())
        .bind(contents.description().as_str())
        .bind(contents.body().as_str())
        .bind(now)
        .fetch_one(&mut **tx)
        .await
        .map_err(map_sqlx)
    }

    async fn update_row(
        tx: &mut Transaction<'_, Postgres>,
        id: ArticleId,
        article: &Article,
        original_updated_at: Option<DateTime<Utc>>,
        now: DateTime<Utc>,
    ) -> DomainResult<()> {
        let contents = article.contents();
        let result = sqlx::query(
            "UPDATE articles
             SET slug = $1, title = $2, description = $3, body = $4, updated_at = $5
             WHERE id = $6 AND updated_at IS NOT DISTINCT FROM $7",
        )
        .bind(contents.slug().as_str())
        .bind(contents.title().as_str())
        .bind(contents.description().as_str())
        .bind(contents.body().as_str())
        .bind(now)
        .bind(i64::from(id))
        .bind(original_updated_at)
        .execute(&mut **tx)
        .await
        .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::Conflict(
                "article was modified concurrently, please retry".into(),
            ));
        }
        Ok(())
    }

    async fn sync_tags(
        tx: &mut Transaction<'_, Postgres>,
        article_id: i64,
        article: &Article,
    ) -> DomainResult<()> {
        sqlx::query("DELETE FROM article_tags WHERE article_id = $1")
            .bind(article_id)
            .execute(&mut **tx)
            .await
            .map_err(map_sqlx)?;

        for tag in article.contents().tags() {
            sqlx::query("INSERT INTO article_tags (article_id, tag) VALUES ($1, $2)")
                .bind(article_id)
                .bind(tag.as_str())
                .execute(&mut **tx)
                .await
                .map_err(map_sqlx)?;
        }
        Ok(())
    }

    async fn sync_favorites(
        tx: &mut Transaction<'_, Postgres>,
        article_id: i64,
        article: &Article,
    ) -> DomainResult<()> {
        let user_ids: Vec<i64> = article.favorited_by().iter().map(|u| i64::from(*u)).collect();

        sqlx::query("DELETE FROM article_favorites WHERE article_id = $1 AND NOT (user_id = ANY($2))")
            .bind(article_id)
            .bind(&user_ids)
            .execute(&mut **tx)
            .await
            .map_err(map_sqlx)?;

        sqlx::query(
            "INSERT INTO article_favorites (article_id, user_id)
             SELECT $1::BIGINT, UNNEST($2::BIGINT[])
             ON CONFLICT DO NOTHING",
        )
        .bind(article_id)
        .bind(&user_ids)
        .execute(&mut **tx)
        .await
        .map_err(map_sqlx)?;
        Ok(())
    }

    async fn sync_comments(
        tx: &mut Transaction<'_, Postgres>,
        article_id: i64,
        article: &Article,
        now: DateTime<Utc>,
    ) -> DomainResult<()> {
        let kept: Vec<i64> = article
            .comments()
            .iter()
            .filter_map(|c| c.id().map(i64::from))
            .collect();

        sqlx::query("DELETE FROM comments WHERE article_id = $1 AND NOT (id = ANY($2))")
            .bind(article_id)
            .bind(&kept)
            .execute(&mut **tx)
            .await
            .map_err(map_sqlx)?;

        for comment in article.comments().iter().filter(|c| c.id().is_none()) {
            sqlx::query(
                "INSERT INTO comments (article_id, author_id, body, created_at)
                 VALUES ($1, $2, $3, $4)",
            )
            .bind(article_id)
            .bind(i64::from(comment.author()))
            .bind(comment.body().as_str())
            .bind(comment.created_at().unwrap_or(now))
            .execute(&mut **tx)
            .await
            .map_err(map_sqlx)?;
        }
        Ok(())
    }
}

enum ArticleKey<'a> {
    Id(i64),
    Slug(&'a str),
}

#[async_trait]
impl ArticleWriteRepository for PostgresArticleRepository {
    async fn save(&self, mut article: Article) -> DomainResult<Article> {
        let now = self.clock.now();
        let original_updated_at = article.updated_at();
        article.apply_audit(AuditStamp::for_save(article.is_persisted(), now));

        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        let article_id = match article.id() {
            Some(id) => {
                Self::update_row(&mut tx, id, &article, original_updated_at, now).await?;
                i64::from(id)
            }
            None => Self::insert_row(&mut tx, &article, now).await?,
        };

        Self::sync_tags(&mut tx, article_id, &article).await?;
        Self::sync_favorites(&mut tx, article_id, &article).await?;
        Self::sync_comments(&mut tx, article_id, &article, now).await?;

        tx.commit().await.map_err(map_sqlx)?;
        tracing::debug!(article_id, "article saved");

        self.fetch_one_where("id", ArticleKey::Id(article_id))
            .await?
            .ok_or_else(|| DomainError::NotFound("article not found".into()))
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        // Tags, favorites and comments go with the row via ON DELETE CASCADE.
        let result = sqlx::query("DELETE FROM articles WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("article not found".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl ArticleReadRepository for PostgresArticleRepository {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        self.fetch_one_where("id", ArticleKey::Id(i64::from(id))).await
    }

    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<Article>> {
        self.fetch_one_where("slug", ArticleKey::Slug(slug.as_str()))
            .await
    }
}
