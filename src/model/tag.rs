use crate::framework::Resource;
use crate::store::StoredEntity;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone)]
pub struct TagCreate {
    pub name: String,
}

impl Resource for Tag {
    type Id = String;

    fn id(&self) -> Option<&String> {
        Some(&self.id)
    }
}

impl StoredEntity for Tag {
    type Create = TagCreate;
    type Update = TagCreate;

    fn from_create_params(id: String, params: TagCreate) -> Result<Self, String> {
        Ok(Self {
            id,
            name: params.name,
        })
    }

    fn on_update(&mut self, update: TagCreate) -> Result<(), String> {
        self.name = update.name;
        Ok(())
    }
}
