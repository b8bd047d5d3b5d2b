use crate::framework::Resource;
use crate::store::StoredEntity;
use serde::{Deserialize, Serialize};

/// An article author.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    pub id: String,
    pub name: String,
    pub email: String,
}

/// Payload for creating a new person.
#[derive(Debug, Clone)]
pub struct PersonCreate {
    pub name: String,
    pub email: String,
}

/// Payload for updating an existing person.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PersonUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl Resource for Person {
    type Id = String;

    fn id(&self) -> Option<&String> {
        Some(&self.id)
    }
}

fn validate_email(email: &str) -> Result<(), String> {
    if email.contains('@') {
        Ok(())
    } else {
        Err(format!("Invalid email: {}", email))
    }
}

impl StoredEntity for Person {
    type Create = PersonCreate;
    type Update = PersonUpdate;

    fn from_create_params(id: String, params: PersonCreate) -> Result<Self, String> {
        validate_email(&params.email)?;
        Ok(Self {
            id,
            name: params.name,
            email: params.email,
        })
    }

    fn on_update(&mut self, update: PersonUpdate) -> Result<(), String> {
        if let Some(email) = &update.email {
            validate_email(email)?;
        }
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(email) = update.email {
            self.email = email;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ann() -> Person {
        Person::from_create_params(
            "person_1".to_string(),
            PersonCreate {
                name: "Ann".to_string(),
                email: "ann@example.com".to_string(),
            },
        )
        .unwrap()
    }

    #[test]
    fn test_create_rejects_email_without_at() {
        let result = Person::from_create_params(
            "person_1".to_string(),
            PersonCreate {
                name: "Ann".to_string(),
                email: "ann.example.com".to_string(),
            },
        );
        assert_eq!(result, Err("Invalid email: ann.example.com".to_string()));
    }

    #[test]
    fn test_update_rejects_email_without_at_and_leaves_person_unchanged() {
        let mut person = ann();
        let result = person.on_update(PersonUpdate {
            name: Some("Annie".to_string()),
            email: Some("annie.example.com".to_string()),
        });

        assert_eq!(result, Err("Invalid email: annie.example.com".to_string()));
        assert_eq!(person, ann());
    }

    #[test]
    fn test_update_accepts_valid_email() {
        let mut person = ann();
        person
            .on_update(PersonUpdate {
                name: None,
                email: Some("ann@blog.dev".to_string()),
            })
            .unwrap();
        assert_eq!(person.email, "ann@blog.dev");
        assert_eq!(person.name, "Ann");
    }
}
