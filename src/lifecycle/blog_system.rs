use crate::articles::{ArticleLinker, Articles};
use crate::framework::Registration;
use crate::model::{Article, Comment, Person, Tag};
use crate::store::{StoreActor, StoreClient};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::{error, info};

/// Channel capacity of every store actor.
pub const STORE_BUFFER_SIZE: usize = 32;

/// Failure while shutting the system down.
#[derive(Debug, thiserror::Error)]
pub enum ShutdownError {
    #[error("Store task failed: {0}")]
    TaskFailed(#[from] tokio::task::JoinError),
}

/// Returns an id generator yielding `prefix_1`, `prefix_2`, ...
pub fn sequential_ids(prefix: &'static str) -> impl Fn() -> String + Send + Sync + 'static {
    let counter = Arc::new(AtomicU64::new(1));
    move || {
        let id = counter.fetch_add(1, Ordering::SeqCst);
        format!("{}_{}", prefix, id)
    }
}

/// The runtime orchestrator for the blog API.
///
/// `BlogSystem` is responsible for:
/// - **Lifecycle Management**: starting and stopping every store actor
/// - **Dependency Wiring**: handing the person, comment and tag stores to the
///   article relation loader
/// - **Registration**: resolving the `articles` operation table once
///
/// # Example
///
/// ```ignore
/// let system = BlogSystem::new();
///
/// let request = Request::get().with_id("article_1").with_include(["author"]);
/// let response = route(&system.articles, &request).await?;
///
/// system.shutdown().await?;
/// ```
pub struct BlogSystem {
    /// The registered `articles` resource type.
    pub articles: Registration<Articles>,

    pub article_store: StoreClient<Article>,
    pub people: StoreClient<Person>,
    pub comments: StoreClient<Comment>,
    pub tags: StoreClient<Tag>,

    /// Task handles for all running stores (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl BlogSystem {
    /// Spawns every store and registers the resource types.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new() -> Self {
        let (article_actor, article_store) =
            StoreActor::<Article>::new(STORE_BUFFER_SIZE, sequential_ids("article"));
        let (person_actor, people) =
            StoreActor::<Person>::new(STORE_BUFFER_SIZE, sequential_ids("person"));
        let (comment_actor, comments) =
            StoreActor::<Comment>::new(STORE_BUFFER_SIZE, sequential_ids("comment"));
        let (tag_actor, tags) = StoreActor::<Tag>::new(STORE_BUFFER_SIZE, sequential_ids("tag"));

        let handles = vec![
            tokio::spawn(article_actor.run()),
            tokio::spawn(person_actor.run()),
            tokio::spawn(comment_actor.run()),
            tokio::spawn(tag_actor.run()),
        ];

        let linker = ArticleLinker::new(people.clone(), comments.clone(), tags.clone());
        let articles = Registration::new(Articles::new(article_store.clone(), linker));

        Self {
            articles,
            article_store,
            people,
            comments,
            tags,
            handles,
        }
    }

    /// Gracefully shuts down the entire system.
    ///
    /// Dropping every client closes the store channels; each store then
    /// leaves its loop and its task completes.
    pub async fn shutdown(self) -> Result<(), ShutdownError> {
        info!("Shutting down system...");

        drop(self.articles);
        drop(self.article_store);
        drop(self.people);
        drop(self.comments);
        drop(self.tags);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Store task failed: {:?}", e);
                return Err(e.into());
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}

impl Default for BlogSystem {
    fn default() -> Self {
        Self::new()
    }
}
