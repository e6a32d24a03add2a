use crate::domain::article::entity::Article;
use crate::domain::user::UserId;

pub trait ArticleSpecification {
    fn is_satisfied(&self) -> bool;
}

/// A comment may be removed by the article's author or by whoever wrote it.
pub struct CanRemoveCommentSpec {
    article_author: UserId,
    comment_author: UserId,
    user: UserId,
}

impl CanRemoveCommentSpec {
    pub fn new(article_author: UserId, comment_author: UserId, user: UserId) -> Self {
        Self {
            article_author,
            comment_author,
            user,
        }
    }
}

impl ArticleSpecification for CanRemoveCommentSpec {
    fn is_satisfied(&self) -> bool {
        self.user == self.article_author || self.user == self.comment_author
    }
}

/// Only the author may change or delete an article.
pub struct CanEditArticleSpec<'a> {
    article: &'a Article,
    user: UserId,
}

impl<'a> CanEditArticleSpec<'a> {
    pub fn new(article: &'a Article, user: UserId) -> Self {
        Self { article, user }
    }
}

impl ArticleSpecification for CanEditArticleSpec<'_> {
    fn is_satisfied(&self) -> bool {
        self.article.author() == self.user
    }
}
