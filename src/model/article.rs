use crate::framework::Resource;
use crate::store::StoredEntity;
use serde::{Deserialize, Serialize};

/// A published article.
///
/// Relations are stored as ids; the [`ArticleLinker`](crate::articles::ArticleLinker)
/// resolves them when a request includes them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub id: String,
    pub title: String,
    pub body: String,
    pub author_id: Option<String>,
    pub comment_ids: Vec<String>,
    pub tag_ids: Vec<String>,
}

/// Payload for creating a new article.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ArticleCreate {
    pub title: String,
    pub body: String,
    pub author_id: Option<String>,
    #[serde(default)]
    pub tag_ids: Vec<String>,
}

/// Payload for updating an existing article.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ArticleUpdate {
    pub title: Option<String>,
    pub body: Option<String>,
    pub author_id: Option<String>,
    pub tag_ids: Option<Vec<String>>,
    /// Appends a comment id.
    pub add_comment: Option<String>,
}

impl Resource for Article {
    type Id = String;

    fn id(&self) -> Option<&String> {
        Some(&self.id)
    }
}

impl StoredEntity for Article {
    type Create = ArticleCreate;
    type Update = ArticleUpdate;

    fn from_create_params(id: String, params: ArticleCreate) -> Result<Self, String> {
        Ok(Self {
            id,
            title: params.title,
            body: params.body,
            author_id: params.author_id,
            comment_ids: Vec::new(),
            tag_ids: params.tag_ids,
        })
    }

    fn on_update(&mut self, update: ArticleUpdate) -> Result<(), String> {
        if let Some(title) = update.title {
            if title.trim().is_empty() {
                return Err("Title must not be empty".to_string());
            }
            self.title = title;
        }
        if let Some(body) = update.body {
            self.body = body;
        }
        if let Some(author_id) = update.author_id {
            self.author_id = Some(author_id);
        }
        if let Some(tag_ids) = update.tag_ids {
            self.tag_ids = tag_ids;
        }
        if let Some(comment_id) = update.add_comment {
            if !self.comment_ids.contains(&comment_id) {
                self.comment_ids.push(comment_id);
            }
        }
        Ok(())
    }
}
