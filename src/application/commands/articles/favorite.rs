// src/application/commands/articles/favorite.rs
use super::ArticleCommandService;
use crate::{
    application::error::ApplicationResult,
    domain::{article::Article, user::UserId},
};

pub struct FavoriteArticleCommand {
    pub slug: String,
}

impl ArticleCommandService {
    pub async fn favorite_article(
        &self,
        actor: UserId,
        command: FavoriteArticleCommand,
    ) -> ApplicationResult<Article> {
        let mut article = self.load_by_slug(&command.slug).await?;
        if article.is_favorited_by(actor) {
            return Ok(article);
        }

        article.after_user_favorites_article(actor);
        let saved = self.write_repo.save(article).await?;
        tracing::debug!(article_id = ?saved.id(), user_id = %actor, "article favorited");
        Ok(saved)
    }

    pub async fn unfavorite_article(
        &self,
        actor: UserId,
        command: FavoriteArticleCommand,
    ) -> ApplicationResult<Article> {
        let mut article = self.load_by_slug(&command.slug).await?;
        if !article.is_favorited_by(actor) {
            return Ok(article);
        }

        article.after_user_unfavorites_article(actor);
        let saved = self.write_repo.save(article).await?;
        tracing::debug!(article_id = ?saved.id(), user_id = %actor, "article unfavorited");
        Ok(saved)
    }
}
