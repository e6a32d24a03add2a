// src/application/commands/articles/delete.rs
use super::ArticleCommandService;
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::{
        article::specifications::{ArticleSpecification, CanEditArticleSpec},
        user::UserId,
    },
};

pub struct DeleteArticleCommand {
    pub slug: String,
}

impl ArticleCommandService {
    pub async fn delete_article(
        &self,
        actor: UserId,
        command: DeleteArticleCommand,
    ) -> ApplicationResult<()> {
        let article = self.load_by_slug(&command.slug).await?;

        if !CanEditArticleSpec::new(&article, actor).is_satisfied() {
            return Err(ApplicationError::forbidden(
                "only the author may delete this article",
            ));
        }

        let id = article
            .id()
            .ok_or_else(|| ApplicationError::not_found("article has not been saved"))?;
        self.write_repo.delete(id).await?;
        tracing::info!(article_id = %id, user_id = %actor, "article deleted");
        Ok(())
    }
}
