//! Relation loader for articles, backed by the person, comment and tag
//! stores.

use crate::framework::{LoadError, LoadedRelations, Primary, RelationLoader, Resource};
use crate::model::{Article, Comment, Linkable, Person, Tag};
use crate::store::{StoreClient, StoredEntity};
use async_trait::async_trait;
use std::collections::HashMap;
use tracing::debug;

/// Resolves `author`, `comments` and `tags` for a set of articles.
///
/// Each relation costs one batched store round trip regardless of how many
/// articles are in the primary result. Relation names it does not know are
/// left out of the side table.
#[derive(Clone)]
pub struct ArticleLinker {
    people: StoreClient<Person>,
    comments: StoreClient<Comment>,
    tags: StoreClient<Tag>,
}

impl ArticleLinker {
    pub fn new(
        people: StoreClient<Person>,
        comments: StoreClient<Comment>,
        tags: StoreClient<Tag>,
    ) -> Self {
        Self {
            people,
            comments,
            tags,
        }
    }
}

fn author_ids(article: &Article) -> Vec<String> {
    article.author_id.iter().cloned().collect()
}

fn comment_ids(article: &Article) -> Vec<String> {
    article.comment_ids.clone()
}

fn tag_ids(article: &Article) -> Vec<String> {
    article.tag_ids.clone()
}

/// Fetches every id referenced through `ids_of` in one call and records the
/// result per article. Articles referencing nothing get an empty collection.
async fn resolve<E>(
    store: &StoreClient<E>,
    relation: &str,
    primary: &Primary<Article>,
    ids_of: fn(&Article) -> Vec<String>,
    loaded: &mut LoadedRelations<String, Linkable>,
) -> Result<(), LoadError>
where
    E: StoredEntity<Id = String> + Into<Linkable>,
{
    let mut wanted: Vec<String> = Vec::new();
    for article in primary {
        for id in ids_of(article) {
            if !wanted.contains(&id) {
                wanted.push(id);
            }
        }
    }

    let found: HashMap<String, E> = store
        .get_many(wanted)
        .await
        .map_err(|e| LoadError::new(relation, e))?
        .into_iter()
        .filter_map(|entity| entity.id().cloned().map(|id| (id, entity)))
        .collect();
    debug!(relation, found = found.len(), "Resolved");

    for article in primary {
        let related: Vec<Linkable> = ids_of(article)
            .iter()
            .filter_map(|id| found.get(id).cloned().map(Into::into))
            .collect();
        loaded.insert(article.id.clone(), relation, related);
    }
    Ok(())
}

#[async_trait]
impl RelationLoader<Article, Linkable> for ArticleLinker {
    async fn load(
        &self,
        primary: &Primary<Article>,
        relations: &[String],
    ) -> Result<LoadedRelations<String, Linkable>, LoadError> {
        let mut loaded = LoadedRelations::new();
        for relation in relations {
            match relation.as_str() {
                "author" => {
                    resolve(&self.people, relation, primary, author_ids, &mut loaded).await?
                }
                "comments" => {
                    resolve(&self.comments, relation, primary, comment_ids, &mut loaded).await?
                }
                "tags" => resolve(&self.tags, relation, primary, tag_ids, &mut loaded).await?,
                other => debug!(relation = other, "No resolver, skipping"),
            }
        }
        Ok(loaded)
    }
}
