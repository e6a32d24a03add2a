// src/domain/article/entity.rs
use crate::domain::article::audit::AuditStamp;
use crate::domain::article::comment::{Comment, CommentBody, CommentId};
use crate::domain::article::specifications::{ArticleSpecification, CanRemoveCommentSpec};
use crate::domain::article::value_objects::{ArticleContents, ArticleId, ArticleUpdateRequest};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};
use std::collections::BTreeSet;

/// Article aggregate: contents plus the favorites and comments it owns.
///
/// `id` and the timestamps stay unset until the article goes through a
/// repository save. Favorites and comments can only be changed through the
/// methods below; callers get shared views of them.
#[derive(Debug, Clone)]
pub struct Article {
    id: Option<ArticleId>,
    author: UserId,
    contents: ArticleContents,
    created_at: Option<DateTime<Utc>>,
    updated_at: Option<DateTime<Utc>>,
    favorited_by: BTreeSet<UserId>,
    comments: Vec<Comment>,
}

impl Article {
    pub fn new(author: UserId, contents: ArticleContents) -> Self {
        Self {
            id: None,
            author,
            contents,
            created_at: None,
            updated_at: None,
            favorited_by: BTreeSet::new(),
            comments: Vec::new(),
        }
    }

    pub fn restore(
        id: ArticleId,
        author: UserId,
        contents: ArticleContents,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
        favorited_by: impl IntoIterator<Item = UserId>,
        comments: Vec<Comment>,
    ) -> Self {
        Self {
            id: Some(id),
            author,
            contents,
            created_at: Some(created_at),
            updated_at: Some(updated_at),
            favorited_by: favorited_by.into_iter().collect(),
            comments,
        }
    }

    pub fn id(&self) -> Option<ArticleId> {
        self.id
    }

    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }

    pub fn author(&self) -> UserId {
        self.author
    }

    pub fn contents(&self) -> &ArticleContents {
        &self.contents
    }

    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }

    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }

    pub fn favorited_by(&self) -> &BTreeSet<UserId> {
        &self.favorited_by
    }

    pub fn favorited_count(&self) -> usize {
        self.favorited_by.len()
    }

    pub fn is_favorited_by(&self, user: UserId) -> bool {
        self.favorited_by.contains(&user)
    }

    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    pub fn after_user_favorites_article(&mut self, user: UserId) -> &mut Self {
        self.favorited_by.insert(user);
        self
    }

    pub fn after_user_unfavorites_article(&mut self, user: UserId) -> &mut Self {
        self.favorited_by.remove(&user);
        self
    }

    /// Appends an unsaved comment and returns the updated collection.
    pub fn add_comment(&mut self, author: UserId, body: CommentBody) -> &[Comment] {
        self.comments.push(Comment::new(author, body));
        &self.comments
    }

    pub fn remove_comment_by_user(
        &mut self,
        user: UserId,
        comment_id: CommentId,
    ) -> DomainResult<Comment> {
        let position = self
            .comments
            .iter()
            .position(|comment| comment.id() == Some(comment_id))
            .ok_or_else(|| DomainError::NotFound(format!("comment {comment_id} not found")))?;

        let spec = CanRemoveCommentSpec::new(self.author, self.comments[position].author(), user);
        if !spec.is_satisfied() {
            return Err(DomainError::Forbidden(
                "not authorized to delete comment".into(),
            ));
        }

        Ok(self.comments.remove(position))
    }

    pub fn update_article(&mut self, request: &ArticleUpdateRequest) -> DomainResult<bool> {
        self.contents.update_if_present(request)
    }

    /// Records the save time chosen by the persistence layer.
    pub fn apply_audit(&mut self, stamp: AuditStamp) {
        let at = stamp.at();
        if let AuditStamp::Created(_) = stamp {
            self.created_at = Some(at);
        }
        self.updated_at = Some(at);
        for comment in &mut self.comments {
            comment.stamp_created(at);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::article::value_objects::{
        ArticleBody, ArticleDescription, ArticleTitle, Tag,
    };
    use chrono::Duration;

    fn user(id: i64) -> UserId {
        UserId::new(id).unwrap()
    }

    fn contents(title: &str, body: &str) -> ArticleContents {
        ArticleContents::new(
            ArticleTitle::new(title).unwrap(),
            ArticleDescription::new("description").unwrap(),
            ArticleBody::new(body).unwrap(),
            Vec::<Tag>::new(),
        )
        .unwrap()
    }

    /// Article by `user(1)` whose comments have been persisted with ids 1..
    fn persisted_article(comment_authors: &[i64]) -> Article {
        let now = Utc::now();
        let comments = comment_authors
            .iter()
            .enumerate()
            .map(|(i, author)| {
                Comment::restore(
                    CommentId::new(i as i64 + 1).unwrap(),
                    user(*author),
                    CommentBody::new("nice").unwrap(),
                    now,
                )
            })
            .collect();
        Article::restore(
            ArticleId::new(10).unwrap(),
            user(1),
            contents("T", "B"),
            now,
            now,
            [],
            comments,
        )
    }

    #[test]
    fn new_article_is_unsaved() {
        let article = Article::new(user(1), contents("T", "B"));
        assert!(!article.is_persisted());
        assert!(article.created_at().is_none());
        assert!(article.updated_at().is_none());
        assert_eq!(article.favorited_count(), 0);
        assert!(article.comments().is_empty());
    }

    #[test]
    fn favoriting_is_idempotent() {
        let mut article = Article::new(user(1), contents("T", "B"));
        article.after_user_favorites_article(user(2));
        assert_eq!(article.favorited_count(), 1);
        article.after_user_favorites_article(user(2));
        assert_eq!(article.favorited_count(), 1);
        assert!(article.is_favorited_by(user(2)));
        assert!(!article.is_favorited_by(user(3)));
    }

    #[test]
    fn unfavorite_then_favorite_restores_membership() {
        let mut article = Article::new(user(1), contents("T", "B"));
        article
            .after_user_unfavorites_article(user(2))
            .after_user_favorites_article(user(3));
        assert!(!article.is_favorited_by(user(2)));

        article
            .after_user_favorites_article(user(2))
            .after_user_unfavorites_article(user(2))
            .after_user_favorites_article(user(2));
        assert!(article.is_favorited_by(user(2)));
        assert_eq!(article.favorited_count(), 2);
    }

    #[test]
    fn favorited_count_tracks_every_mutation() {
        let mut article = Article::new(user(1), contents("T", "B"));
        for id in 2..6 {
            article.after_user_favorites_article(user(id));
            assert_eq!(article.favorited_count(), (id - 1) as usize);
        }
        article.after_user_unfavorites_article(user(4));
        assert_eq!(article.favorited_count(), 3);
        assert_eq!(article.favorited_count(), article.favorited_by().len());
    }

    #[test]
    fn add_comment_appends_one() {
        let mut article = Article::new(user(1), contents("T", "B"));
        let comments = article.add_comment(user(2), CommentBody::new("nice").unwrap());
        assert_eq!(comments.len(), 1);
        assert_eq!(comments[0].author(), user(2));
        assert_eq!(comments[0].body().as_str(), "nice");
        assert!(comments[0].id().is_none());
    }

    #[test]
    fn article_author_removes_any_comment() {
        let mut article = persisted_article(&[2, 3]);
        let removed = article
            .remove_comment_by_user(user(1), CommentId::new(1).unwrap())
            .unwrap();
        assert_eq!(removed.author(), user(2));
        assert_eq!(article.comments().len(), 1);
        assert_eq!(article.comments()[0].id(), Some(CommentId::new(2).unwrap()));
    }

    #[test]
    fn comment_author_removes_own_comment() {
        let mut article = persisted_article(&[2]);
        article
            .remove_comment_by_user(user(2), CommentId::new(1).unwrap())
            .unwrap();
        assert!(article.comments().is_empty());
    }

    #[test]
    fn unrelated_user_is_forbidden() {
        let mut article = persisted_article(&[2]);
        let err = article
            .remove_comment_by_user(user(3), CommentId::new(1).unwrap())
            .unwrap_err();
        assert!(matches!(err, DomainError::Forbidden(_)));
        assert_eq!(article.comments().len(), 1);
    }

    #[test]
    fn unknown_comment_is_not_found() {
        let mut article = persisted_article(&[2]);
        let err = article
            .remove_comment_by_user(user(1), CommentId::new(99).unwrap())
            .unwrap_err();
        assert!(matches!(err, DomainError::NotFound(_)));
        assert_eq!(article.comments().len(), 1);
    }

    #[test]
    fn update_article_applies_partial_request() {
        let mut article = Article::new(user(1), contents("T", "B"));
        let request = ArticleUpdateRequest::new().with_body(ArticleBody::new("B2").unwrap());
        assert!(article.update_article(&request).unwrap());
        assert_eq!(article.contents().body().as_str(), "B2");
        assert_eq!(article.contents().title().as_str(), "T");
    }

    #[test]
    fn audit_stamps_set_timestamps() {
        let mut article = Article::new(user(1), contents("T", "B"));
        article.add_comment(user(2), CommentBody::new("first").unwrap());

        let created = Utc::now();
        article.apply_audit(AuditStamp::for_save(article.is_persisted(), created));
        assert_eq!(article.created_at(), Some(created));
        assert_eq!(article.updated_at(), Some(created));
        assert_eq!(article.comments()[0].created_at(), Some(created));

        let later = created + Duration::seconds(30);
        article.add_comment(user(3), CommentBody::new("second").unwrap());
        article.apply_audit(AuditStamp::Updated(later));
        assert_eq!(article.created_at(), Some(created));
        assert_eq!(article.updated_at(), Some(later));
        assert_eq!(article.comments()[0].created_at(), Some(created));
        assert_eq!(article.comments()[1].created_at(), Some(later));
    }
}
