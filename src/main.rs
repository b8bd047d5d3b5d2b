//! Demo: seeds a blog, then fetches an article with its linked resources and
//! prints the response document.

use linked_resources::framework::Request;
use linked_resources::lifecycle::{route, setup_tracing, BlogSystem};
use linked_resources::model::{ArticleCreate, ArticleUpdate, CommentCreate, PersonCreate, TagCreate};
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing();

    info!("Starting blog system");
    let system = BlogSystem::new();

    let author = system
        .people
        .create(PersonCreate {
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
        })
        .await?;
    let rust = system.tags.create(TagCreate { name: "rust".to_string() }).await?;
    let api = system.tags.create(TagCreate { name: "api".to_string() }).await?;

    let article = system
        .article_store
        .create(ArticleCreate {
            title: "Linked resources".to_string(),
            body: "One document, no duplicates.".to_string(),
            author_id: Some(author.id.clone()),
            tag_ids: vec![rust.id.clone(), api.id.clone()],
        })
        .await?;

    let comment = system
        .comments
        .create(CommentCreate {
            body: "Nice write-up".to_string(),
        })
        .await?;
    if let Some(comment_id) = comment.id {
        system
            .article_store
            .update(
                article.id.clone(),
                ArticleUpdate {
                    add_comment: Some(comment_id),
                    ..Default::default()
                },
            )
            .await?;
    }

    let request = Request::get()
        .with_id(article.id.clone())
        .with_include_param("author,tags,comments,likes");

    match route(&system.articles, &request).await {
        Ok(response) => {
            info!(status = response.status, "Request fulfilled");
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        Err(e) => error!(status = e.status(), error = %e, "Request failed"),
    }

    let missing = Request::get().with_id("article_404");
    if let Err(e) = route(&system.articles, &missing).await {
        info!(status = e.status(), error = %e, "Expected failure");
    }

    system.shutdown().await?;
    Ok(())
}
