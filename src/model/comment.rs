use crate::framework::Resource;
use crate::store::StoredEntity;
use serde::{Deserialize, Serialize};

/// A reader comment on an article.
///
/// `id` is optional on the wire; a linked comment without one is never
/// collapsed into another.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: Option<String>,
    pub body: String,
}

#[derive(Debug, Clone)]
pub struct CommentCreate {
    pub body: String,
}

#[derive(Debug, Clone, Default)]
pub struct CommentUpdate {
    pub body: Option<String>,
}

impl Resource for Comment {
    type Id = String;

    fn id(&self) -> Option<&String> {
        self.id.as_ref()
    }
}

impl StoredEntity for Comment {
    type Create = CommentCreate;
    type Update = CommentUpdate;

    fn from_create_params(id: String, params: CommentCreate) -> Result<Self, String> {
        if params.body.trim().is_empty() {
            return Err("Comment body must not be empty".to_string());
        }
        Ok(Self {
            id: Some(id),
            body: params.body,
        })
    }

    fn on_update(&mut self, update: CommentUpdate) -> Result<(), String> {
        if let Some(body) = update.body {
            self.body = body;
        }
        Ok(())
    }
}
