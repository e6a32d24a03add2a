// src/application/commands/articles/create.rs
use super::ArticleCommandService;
use crate::{
    application::error::ApplicationResult,
    domain::{
        article::{Article, ArticleBody, ArticleContents, ArticleDescription, ArticleTitle, Tag},
        user::UserId,
    },
};

pub struct CreateArticleCommand {
    pub title: String,
    pub description: String,
    pub body: String,
    pub tags: Vec<String>,
}

impl CreateArticleCommand {
    pub fn builder() -> CreateArticleCommandBuilder {
        CreateArticleCommandBuilder::default()
    }
}

#[derive(Default)]
pub struct CreateArticleCommandBuilder {
    title: Option<String>,
    description: Option<String>,
    body: Option<String>,
    tags: Vec<String>,
}

impl CreateArticleCommandBuilder {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    pub fn build(self) -> Result<CreateArticleCommand, &'static str> {
        Ok(CreateArticleCommand {
            title: self.title.ok_or("title is required")?,
            description: self.description.ok_or("description is required")?,
            body: self.body.ok_or("body is required")?,
            tags: self.tags,
        })
    }
}

impl ArticleCommandService {
    pub async fn create_article(
        &self,
        actor: UserId,
        command: CreateArticleCommand,
    ) -> ApplicationResult<Article> {
        let tags = command
            .tags
            .into_iter()
            .map(Tag::new)
            .collect::<Result<Vec<_>, _>>()?;
        let contents = ArticleContents::new(
            ArticleTitle::new(command.title)?,
            ArticleDescription::new(command.description)?,
            ArticleBody::new(command.body)?,
            tags,
        )?;

        let article = self.write_repo.save(Article::new(actor, contents)).await?;
        tracing::info!(
            article_id = ?article.id(),
            slug = %article.contents().slug(),
            user_id = %actor,
            "article created"
        );
        Ok(article)
    }
}
