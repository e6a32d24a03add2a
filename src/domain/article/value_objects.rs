// src/domain/article/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult};
use std::collections::BTreeSet;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ArticleId(pub i64);

impl ArticleId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation(
                "article id must be positive".into(),
            ))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<ArticleId> for i64 {
    fn from(value: ArticleId) -> Self {
        value.0
    }
}

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Declares a non-blank text newtype with the usual accessors.
macro_rules! text_value {
    ($name:ident, $what:literal) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(String);

        impl $name {
            pub fn new(value: impl Into<String>) -> DomainResult<Self> {
                let value = value.into();
                if value.trim().is_empty() {
                    return Err(DomainError::Validation(
                        concat!($what, " cannot be empty").into(),
                    ));
                }
                Ok(Self(value))
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

text_value!(ArticleTitle, "title");
text_value!(ArticleSlug, "slug");
text_value!(ArticleDescription, "description");
text_value!(ArticleBody, "body");

impl ArticleTitle {
    /// Derives the URL slug for this title.
    pub fn to_slug(&self) -> DomainResult<ArticleSlug> {
        ArticleSlug::new(slug::slugify(&self.0))
            .map_err(|_| DomainError::Validation("title must contain letters or digits".into()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Tag(String);

impl Tag {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(DomainError::Validation("tag cannot be empty".into()));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Title, slug, description, body and tags of an article, stored inline with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleContents {
    title: ArticleTitle,
    slug: ArticleSlug,
    description: ArticleDescription,
    body: ArticleBody,
    tags: BTreeSet<Tag>,
}

impl ArticleContents {
    pub fn new(
        title: ArticleTitle,
        description: ArticleDescription,
        body: ArticleBody,
        tags: impl IntoIterator<Item = Tag>,
    ) -> DomainResult<Self> {
        let slug = title.to_slug()?;
        Ok(Self {
            title,
            slug,
            description,
            body,
            tags: tags.into_iter().collect(),
        })
    }

    /// Rebuilds contents from stored columns without re-deriving the slug.
    pub fn restore(
        title: ArticleTitle,
        slug: ArticleSlug,
        description: ArticleDescription,
        body: ArticleBody,
        tags: impl IntoIterator<Item = Tag>,
    ) -> Self {
        Self {
            title,
            slug,
            description,
            body,
            tags: tags.into_iter().collect(),
        }
    }

    pub fn title(&self) -> &ArticleTitle {
        &self.title
    }

    pub fn slug(&self) -> &ArticleSlug {
        &self.slug
    }

    pub fn description(&self) -> &ArticleDescription {
        &self.description
    }

    pub fn body(&self) -> &ArticleBody {
        &self.body
    }

    pub fn tags(&self) -> &BTreeSet<Tag> {
        &self.tags
    }

    /// Applies the fields present in `request`. Returns whether anything was set.
    ///
    /// A new title also replaces the slug; on error nothing is modified.
    pub fn update_if_present(&mut self, request: &ArticleUpdateRequest) -> DomainResult<bool> {
        let new_slug = request.title.as_ref().map(ArticleTitle::to_slug).transpose()?;

        if let (Some(title), Some(slug)) = (&request.title, new_slug) {
            self.title = title.clone();
            self.slug = slug;
        }
        if let Some(description) = &request.description {
            self.description = description.clone();
        }
        if let Some(body) = &request.body {
            self.body = body.clone();
        }

        Ok(!request.is_empty())
    }
}

/// Partial update of [`ArticleContents`]; unset fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleUpdateRequest {
    pub title: Option<ArticleTitle>,
    pub description: Option<ArticleDescription>,
    pub body: Option<ArticleBody>,
}

impl ArticleUpdateRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: ArticleTitle) -> Self {
        self.title = Some(title);
        self
    }

    pub fn with_description(mut self, description: ArticleDescription) -> Self {
        self.description = Some(description);
        self
    }

    pub fn with_body(mut self, body: ArticleBody) -> Self {
        self.body = Some(body);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.body.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contents() -> ArticleContents {
        ArticleContents::new(
            ArticleTitle::new("How to train your dragon").unwrap(),
            ArticleDescription::new("Ever wonder how?").unwrap(),
            ArticleBody::new("You have to believe").unwrap(),
            [Tag::new("dragons").unwrap(), Tag::new(" training ").unwrap()],
        )
        .unwrap()
    }

    #[test]
    fn blank_text_is_rejected() {
        assert!(ArticleTitle::new("   ").is_err());
        assert!(ArticleBody::new("").is_err());
        assert!(Tag::new("\t").is_err());
    }

    #[test]
    fn slug_is_derived_from_title() {
        let contents = contents();
        assert_eq!(contents.slug().as_str(), "how-to-train-your-dragon");
        assert!(contents.tags().contains(&Tag::new("training").unwrap()));
    }

    #[test]
    fn title_without_slug_characters_is_rejected() {
        let title = ArticleTitle::new("!!!").unwrap();
        assert!(matches!(title.to_slug(), Err(DomainError::Validation(_))));
    }

    #[test]
    fn partial_update_keeps_unset_fields() {
        let mut contents = contents();
        let request =
            ArticleUpdateRequest::new().with_body(ArticleBody::new("With a lot of patience").unwrap());

        assert!(contents.update_if_present(&request).unwrap());
        assert_eq!(contents.body().as_str(), "With a lot of patience");
        assert_eq!(contents.title().as_str(), "How to train your dragon");
        assert_eq!(contents.description().as_str(), "Ever wonder how?");
        assert_eq!(contents.slug().as_str(), "how-to-train-your-dragon");
    }

    #[test]
    fn new_title_replaces_slug() {
        let mut contents = contents();
        let request =
            ArticleUpdateRequest::new().with_title(ArticleTitle::new("Did you train it?").unwrap());

        contents.update_if_present(&request).unwrap();
        assert_eq!(contents.slug().as_str(), "did-you-train-it");
    }

    #[test]
    fn failed_update_leaves_contents_untouched() {
        let mut contents = contents();
        let before = contents.clone();
        let request = ArticleUpdateRequest::new()
            .with_title(ArticleTitle::new("???").unwrap())
            .with_body(ArticleBody::new("ignored").unwrap());

        assert!(contents.update_if_present(&request).is_err());
        assert_eq!(contents, before);
    }

    #[test]
    fn empty_request_reports_no_change() {
        let mut contents = contents();
        assert!(!contents.update_if_present(&ArticleUpdateRequest::new()).unwrap());
    }
}
