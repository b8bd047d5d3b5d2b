use linked_resources::framework::{FulfillError, Method, Primary, Request};
use linked_resources::lifecycle::{route, BlogSystem};
use linked_resources::model::{
    Article, ArticleCreate, ArticleUpdate, Comment, CommentCreate, Linkable, Person, PersonCreate,
    Tag, TagCreate,
};
use serde_json::json;

struct Seed {
    alice: Person,
    bob: Person,
    rust: Tag,
    comment: Comment,
    first: Article,
    second: Article,
    third: Article,
}

async fn person(system: &BlogSystem, name: &str) -> Person {
    system
        .people
        .create(PersonCreate {
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
        })
        .await
        .expect("Failed to create person")
}

async fn article(system: &BlogSystem, title: &str, author: &Person, tags: &[&Tag]) -> Article {
    system
        .article_store
        .create(ArticleCreate {
            title: title.to_string(),
            body: String::new(),
            author_id: Some(author.id.clone()),
            tag_ids: tags.iter().map(|t| t.id.clone()).collect(),
        })
        .await
        .expect("Failed to create article")
}

/// Three articles: alice wrote the first and third, bob the second.
async fn seed(system: &BlogSystem) -> Seed {
    let alice = person(system, "Alice").await;
    let bob = person(system, "Bob").await;
    let rust = system
        .tags
        .create(TagCreate { name: "rust".into() })
        .await
        .unwrap();

    let first = article(system, "First", &alice, &[&rust]).await;
    let second = article(system, "Second", &bob, &[&rust]).await;
    let third = article(system, "Third", &alice, &[]).await;

    let comment = system
        .comments
        .create(CommentCreate {
            body: "Great post".into(),
        })
        .await
        .unwrap();
    let first = system
        .article_store
        .update(
            first.id.clone(),
            ArticleUpdate {
                add_comment: comment.id.clone(),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    Seed {
        alice,
        bob,
        rust,
        comment,
        first,
        second,
        third,
    }
}

#[tokio::test]
async fn test_get_article_with_includes() {
    let system = BlogSystem::new();
    let seed = seed(&system).await;

    let request = Request::get()
        .with_id(seed.first.id.clone())
        .with_include_param("comments,author,likes");
    let response = route(&system.articles, &request).await.unwrap();

    assert_eq!(response.status, 200);
    assert_eq!(response.primary, Primary::Single(seed.first.clone()));
    // Exposed order: author, comments, tags.
    assert_eq!(
        response.linked.keys().collect::<Vec<_>>(),
        vec!["author", "comments"]
    );
    assert_eq!(
        response.linked.get("author").unwrap(),
        &[Linkable::Person(seed.alice.clone())]
    );
    assert_eq!(
        response.linked.get("comments").unwrap(),
        &[Linkable::Comment(seed.comment.clone())]
    );
    assert_eq!(response.errors.len(), 1);
    assert_eq!(response.errors[0].code(), 18);
    assert_eq!(response.errors[0].description, "likes");

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_list_deduplicates_shared_relations() {
    let system = BlogSystem::new();
    let seed = seed(&system).await;

    let request = Request::get().with_include(["author", "tags"]);
    let response = route(&system.articles, &request).await.unwrap();

    assert_eq!(response.primary.len(), 3);
    assert_eq!(
        response.linked.get("author").unwrap(),
        &[
            Linkable::Person(seed.alice.clone()),
            Linkable::Person(seed.bob.clone())
        ]
    );
    assert_eq!(
        response.linked.get("tags").unwrap(),
        &[Linkable::Tag(seed.rust.clone())]
    );
    assert!(response.errors.is_empty());

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_list_filtered_by_author() {
    let system = BlogSystem::new();
    let seed = seed(&system).await;

    let request = Request::get().with_filter("author", seed.alice.id.clone());
    let response = route(&system.articles, &request).await.unwrap();

    assert_eq!(
        response.primary,
        Primary::Many(vec![seed.first.clone(), seed.third.clone()])
    );
    assert!(response.linked.is_empty());

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_unknown_article() {
    let system = BlogSystem::new();
    seed(&system).await;

    let request = Request::get().with_id("article_404").with_include(["author"]);
    let err = route(&system.articles, &request).await.unwrap_err();

    assert_eq!(err.status(), 404);
    assert_eq!(err.api_error().unwrap().code(), 17);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_create_update_delete() {
    let system = BlogSystem::new();
    let seed = seed(&system).await;

    let create = Request::new(Method::Post)
        .with_attributes(json!({
            "title": "Fourth",
            "body": "Hello",
            "author_id": seed.bob.id,
        }))
        .with_include(["author"]);
    let created = route(&system.articles, &create).await.unwrap();
    assert_eq!(created.status, 201);
    let new_article = created.primary.as_single().cloned().unwrap();
    assert_eq!(new_article.title, "Fourth");
    assert_eq!(
        created.linked.get("author").unwrap(),
        &[Linkable::Person(seed.bob.clone())]
    );

    let patch = Request::new(Method::Patch)
        .with_id(new_article.id.clone())
        .with_attributes(json!({ "tag_ids": [seed.rust.id] }))
        .with_include(["tags"]);
    let patched = route(&system.articles, &patch).await.unwrap();
    assert_eq!(patched.status, 200);
    assert_eq!(
        patched.linked.get("tags").unwrap(),
        &[Linkable::Tag(seed.rust.clone())]
    );

    let delete = Request::new(Method::Delete)
        .with_id(new_article.id.clone())
        .with_include(["author", "likes"]);
    let deleted = route(&system.articles, &delete).await.unwrap();
    assert_eq!(deleted.status, 204);
    assert!(deleted.primary.is_empty());
    assert!(deleted.linked.is_empty());
    assert!(deleted.errors.is_empty());

    let again = route(&system.articles, &delete).await.unwrap_err();
    assert_eq!(again.status(), 404);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_operation_errors_use_the_reserved_bits() {
    let system = BlogSystem::new();
    seed(&system).await;

    let no_id = Request::new(Method::Patch).with_attributes(json!({ "title": "x" }));
    let err = route(&system.articles, &no_id).await.unwrap_err();
    assert_eq!(err.status(), 400);
    assert_eq!(err.api_error().unwrap().code(), 16 | 4);

    let blank = Request::new(Method::Post).with_attributes(json!({ "title": " ", "body": "" }));
    let err = route(&system.articles, &blank).await.unwrap_err();
    assert_eq!(err.status(), 422);
    assert_eq!(err.api_error().unwrap().code(), 16 | 8);

    let missing = Request::new(Method::Post);
    let err = route(&system.articles, &missing).await.unwrap_err();
    assert_eq!(err.api_error().unwrap().code(), 24);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_concurrent_requests() {
    let system = BlogSystem::new();
    let seed = seed(&system).await;
    let system = std::sync::Arc::new(system);

    let mut handles = vec![];
    for _ in 0..10 {
        let system = system.clone();
        let id = seed.second.id.clone();
        handles.push(tokio::spawn(async move {
            let request = Request::get().with_id(id).with_include(["author"]);
            route(&system.articles, &request).await
        }));
    }

    for handle in handles {
        let response = handle.await.unwrap().unwrap();
        assert_eq!(
            response.linked.get("author").unwrap(),
            &[Linkable::Person(seed.bob.clone())]
        );
    }

    let system = std::sync::Arc::try_unwrap(system).ok().expect("all tasks finished");
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_put_routes_to_update() {
    assert!("TRACE".parse::<Method>().is_err());
    let system = BlogSystem::new();
    let request = Request::new("put".parse().unwrap()).with_id("article_1");
    let err = route(&system.articles, &request).await.unwrap_err();
    // PUT is routed to update; without attributes it is rejected as invalid.
    assert!(matches!(err, FulfillError::Api(_)));
    assert_eq!(err.status(), 422);
    system.shutdown().await.unwrap();
}
