// src/application/commands/articles/update.rs
use super::ArticleCommandService;
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::{
        article::{
            Article, ArticleBody, ArticleDescription, ArticleTitle, ArticleUpdateRequest,
            specifications::{ArticleSpecification, CanEditArticleSpec},
        },
        user::UserId,
    },
};

pub struct UpdateArticleCommand {
    pub slug: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub body: Option<String>,
}

impl UpdateArticleCommand {
    fn into_request(self) -> ApplicationResult<ArticleUpdateRequest> {
        Ok(ArticleUpdateRequest {
            title: self.title.map(ArticleTitle::new).transpose()?,
            description: self.description.map(ArticleDescription::new).transpose()?,
            body: self.body.map(ArticleBody::new).transpose()?,
        })
    }
}

impl ArticleCommandService {
    pub async fn update_article(
        &self,
        actor: UserId,
        command: UpdateArticleCommand,
    ) -> ApplicationResult<Article> {
        let mut article = self.load_by_slug(&command.slug).await?;

        if !CanEditArticleSpec::new(&article, actor).is_satisfied() {
            return Err(ApplicationError::forbidden(
                "only the author may update this article",
            ));
        }

        let request = command.into_request()?;
        if !article.update_article(&request)? {
            return Ok(article);
        }

        let updated = self.write_repo.save(article).await?;
        tracing::info!(article_id = ?updated.id(), user_id = %actor, "article updated");
        Ok(updated)
    }
}
