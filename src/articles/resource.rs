//! The `articles` resource type.
//!
//! | Method       | Operation | Behaviour                                           |
//! |--------------|-----------|-----------------------------------------------------|
//! | GET          | `show`    | one article by id, or all (optionally `author=`)   |
//! | POST         | `create`  | new article from the request attributes             |
//! | PATCH / PUT  | `update`  | modify an article; requires an id                   |
//! | DELETE       | `destroy` | remove an article; replies with an empty 204        |

use crate::articles::linker::ArticleLinker;
use crate::framework::{
    ApiError, FulfillError, Method, OperationFuture, OperationResult, OperationTable, Outcome,
    Primary, RelationLoader, Request, ResourceType, Response,
};
use crate::model::{Article, ArticleCreate, ArticleUpdate, Linkable};
use crate::store::{StoreClient, StoreError};
use serde::de::DeserializeOwned;
use tracing::{debug, info};

/// Serves articles out of an article store.
pub struct Articles {
    store: StoreClient<Article>,
    linker: ArticleLinker,
}

impl Articles {
    pub fn new(store: StoreClient<Article>, linker: ArticleLinker) -> Self {
        Self { store, linker }
    }

    async fn show(&self, request: &Request) -> OperationResult<Article, Linkable> {
        if let Some(id) = request.id() {
            let article = self.store.get(id.to_string()).await.map_err(operation_failed)?;
            return Ok(article.map(|a| Outcome::Primary(Primary::Single(a))));
        }

        let mut articles = self.store.list().await.map_err(operation_failed)?;
        if let Some(author) = request.filter("author") {
            articles.retain(|a| a.author_id.as_deref() == Some(author));
        }
        debug!(count = articles.len(), "Listed articles");
        Ok(Some(Outcome::Primary(Primary::Many(articles))))
    }

    async fn create(&self, request: &Request) -> OperationResult<Article, Linkable> {
        let params: ArticleCreate = attributes(request)?;
        if params.title.trim().is_empty() {
            return Err(invalid("Title must not be empty"));
        }

        let article = self.store.create(params).await.map_err(rejected_or_failed)?;
        info!(id = %article.id, "Article created");
        Ok(Some(Outcome::Primary(Primary::Single(article))))
    }

    async fn update(&self, request: &Request) -> OperationResult<Article, Linkable> {
        let id = request
            .id()
            .ok_or_else(|| ApiError::no_id(Self::ERROR_SCOPE))?;
        let update: ArticleUpdate = attributes(request)?;

        match self.store.update(id.to_string(), update).await {
            Ok(article) => Ok(Some(Outcome::Primary(Primary::Single(article)))),
            Err(StoreError::NotFound(_)) => Ok(None),
            Err(e) => Err(rejected_or_failed(e)),
        }
    }

    async fn destroy(&self, request: &Request) -> OperationResult<Article, Linkable> {
        let id = request
            .id()
            .ok_or_else(|| ApiError::no_id(Self::ERROR_SCOPE))?;

        match self.store.delete(id.to_string()).await {
            Ok(article) => {
                info!(id = %article.id, "Article deleted");
                let response = Response::new(Primary::Many(Vec::new())).with_status(204);
                Ok(Some(Outcome::Response(response)))
            }
            Err(StoreError::NotFound(_)) => Ok(None),
            Err(e) => Err(operation_failed(e)),
        }
    }
}

fn show<'a>(articles: &'a Articles, request: &'a Request) -> OperationFuture<'a, Article, Linkable> {
    Box::pin(articles.show(request))
}

fn create<'a>(articles: &'a Articles, request: &'a Request) -> OperationFuture<'a, Article, Linkable> {
    Box::pin(articles.create(request))
}

fn update<'a>(articles: &'a Articles, request: &'a Request) -> OperationFuture<'a, Article, Linkable> {
    Box::pin(articles.update(request))
}

fn destroy<'a>(articles: &'a Articles, request: &'a Request) -> OperationFuture<'a, Article, Linkable> {
    Box::pin(articles.destroy(request))
}

impl ResourceType for Articles {
    type Entity = Article;
    type Related = Linkable;

    const NAME: &'static str = "articles";
    const ERROR_SCOPE: u32 = 16;
    const EXPOSED_RELATIONS: &'static [&'static str] = &["author", "comments", "tags"];

    fn operations() -> OperationTable<Self> {
        OperationTable::new()
            .route(Method::Get, show)
            .route(Method::Post, create)
            .route(Method::Patch, update)
            .route(Method::Put, update)
            .route(Method::Delete, destroy)
    }

    fn loader(&self) -> &dyn RelationLoader<Article, Linkable> {
        &self.linker
    }
}

fn invalid(description: impl Into<String>) -> FulfillError {
    ApiError::invalid_attrs(Articles::ERROR_SCOPE, description).into()
}

/// Decodes the request attributes into a payload.
fn attributes<P: DeserializeOwned>(request: &Request) -> Result<P, FulfillError> {
    let value = request
        .attributes()
        .ok_or_else(|| invalid("Missing attributes"))?;
    serde_json::from_value(value.clone()).map_err(|e| invalid(e.to_string()))
}

fn operation_failed(e: StoreError) -> FulfillError {
    FulfillError::Operation(Box::new(e))
}

fn rejected_or_failed(e: StoreError) -> FulfillError {
    match e {
        StoreError::Rejected(reason) => invalid(reason),
        other => operation_failed(other),
    }
}
