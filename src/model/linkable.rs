use crate::framework::Resource;
use crate::model::{Comment, Person, Tag};
use serde::Serialize;

/// Any entity that can be linked from an article.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Linkable {
    Person(Person),
    Comment(Comment),
    Tag(Tag),
}

impl Resource for Linkable {
    type Id = String;

    fn id(&self) -> Option<&String> {
        match self {
            Linkable::Person(person) => person.id(),
            Linkable::Comment(comment) => comment.id(),
            Linkable::Tag(tag) => tag.id(),
        }
    }
}

impl From<Person> for Linkable {
    fn from(person: Person) -> Self {
        Linkable::Person(person)
    }
}

impl From<Comment> for Linkable {
    fn from(comment: Comment) -> Self {
        Linkable::Comment(comment)
    }
}

impl From<Tag> for Linkable {
    fn from(tag: Tag) -> Self {
        Linkable::Tag(tag)
    }
}
