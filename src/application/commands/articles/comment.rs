// src/application/commands/articles/comment.rs
use super::ArticleCommandService;
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::{
        article::{Comment, CommentBody, CommentId},
        user::UserId,
    },
};

pub struct AddCommentCommand {
    pub slug: String,
    pub body: String,
}

pub struct DeleteCommentCommand {
    pub slug: String,
    pub comment_id: i64,
}

impl ArticleCommandService {
    /// Adds a comment and returns it as stored, id included.
    pub async fn add_comment(
        &self,
        actor: UserId,
        command: AddCommentCommand,
    ) -> ApplicationResult<Comment> {
        let body = CommentBody::new(command.body)?;
        let mut article = self.load_by_slug(&command.slug).await?;
        article.add_comment(actor, body);

        let saved = self.write_repo.save(article).await?;
        // Saves keep comment order, so the new comment is the last one.
        let comment = saved
            .comments()
            .last()
            .cloned()
            .ok_or_else(|| ApplicationError::not_found("comment was not stored"))?;
        tracing::info!(
            article_id = ?saved.id(),
            comment_id = ?comment.id(),
            user_id = %actor,
            "comment added"
        );
        Ok(comment)
    }

    pub async fn delete_comment(
        &self,
        actor: UserId,
        command: DeleteCommentCommand,
    ) -> ApplicationResult<()> {
        let comment_id = CommentId::new(command.comment_id)?;
        let mut article = self.load_by_slug(&command.slug).await?;

        if let Err(err) = article.remove_comment_by_user(actor, comment_id) {
            tracing::warn!(
                article_id = ?article.id(),
                comment_id = %comment_id,
                user_id = %actor,
                error = %err,
                "comment removal rejected"
            );
            return Err(err.into());
        }

        self.write_repo.save(article).await?;
        tracing::info!(comment_id = %comment_id, user_id = %actor, "comment deleted");
        Ok(())
    }
}
