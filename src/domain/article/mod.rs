pub mod audit;
pub mod comment;
pub mod entity;
pub mod repository;
pub mod specifications;
pub mod value_objects;

pub use audit::AuditStamp;
pub use comment::{Comment, CommentBody, CommentId};
pub use entity::Article;
pub use repository::{ArticleReadRepository, ArticleWriteRepository};
pub use value_objects::{
    ArticleBody, ArticleContents, ArticleDescription, ArticleId, ArticleSlug, ArticleTitle,
    ArticleUpdateRequest, Tag,
};
