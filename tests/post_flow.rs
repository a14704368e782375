mod common;

use actix_web::{http::StatusCode, test};
use common::{client::TestClient, TestContext};
use std::time::Duration;

/// Seeds one author, two categories and three posts (two tech, one travel),
/// oldest first. Small pauses keep the update timestamps strictly ordered.
async fn seed_posts(client: &TestClient) -> (entity::user::Model, entity::category::Model) {
    let (author, _password) = client.register_test_user(None).await;
    let tech = client.create_test_category("Tecnologia", "tecnologia").await;
    let travel = client.create_test_category("Viagem", "viagem").await;

    client.create_test_post("Primeiro post", tech.id, author.id).await;
    tokio::time::sleep(Duration::from_millis(10)).await;
    client.create_test_post("Segundo post", travel.id, author.id).await;
    tokio::time::sleep(Duration::from_millis(10)).await;
    client.create_test_post("Terceiro post", tech.id, author.id).await;

    (author, tech)
}

#[tokio::test]
async fn test_post_list_flow_newest_first() {
    println!("\n\n[+] Running test: test_post_list_flow_newest_first");
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let (author, _tech) = seed_posts(&client).await;

    println!("[>] Listing posts with default paging.");
    let req = test::TestRequest::get().uri("/v1/posts").to_request();
    let resp = test::call_service(&app, req).await;
    println!("[<] Received response with status: {}", resp.status());

    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    println!("[<] Response body: {}", body);
    assert_eq!(body["data"]["total"].as_u64().unwrap(), 3);
    assert_eq!(body["data"]["page"].as_u64().unwrap(), 0);
    assert_eq!(body["data"]["pageSize"].as_u64().unwrap(), 25);

    let posts = body["data"]["posts"].as_array().unwrap();
    assert_eq!(posts.len(), 3);
    assert_eq!(posts[0]["title"].as_str().unwrap(), "Terceiro post");
    assert_eq!(posts[2]["title"].as_str().unwrap(), "Primeiro post");

    let expected_author = format!("{} ({})", author.name, author.email);
    assert_eq!(posts[0]["author"].as_str().unwrap(), expected_author);
    assert_eq!(posts[0]["category"].as_str().unwrap(), "Tecnologia");
    println!("[/] Test passed: listing is newest first with composed author.");
}

#[tokio::test]
async fn test_post_list_flow_pagination() {
    println!("\n\n[+] Running test: test_post_list_flow_pagination");
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    seed_posts(&client).await;

    println!("[>] Fetching page 0 with pageSize 2.");
    let req = test::TestRequest::get()
        .uri("/v1/posts?page=0&pageSize=2")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["total"].as_u64().unwrap(), 3);
    assert_eq!(body["data"]["posts"].as_array().unwrap().len(), 2);

    println!("[>] Fetching page 1 with pageSize 2.");
    let req = test::TestRequest::get()
        .uri("/v1/posts?page=1&pageSize=2")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    let posts = body["data"]["posts"].as_array().unwrap();
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0]["title"].as_str().unwrap(), "Primeiro post");
    println!("[/] Test passed: pagination behaves.");
}

#[tokio::test]
async fn test_post_list_flow_by_category() {
    println!("\n\n[+] Running test: test_post_list_flow_by_category");
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    seed_posts(&client).await;

    println!("[>] Listing posts for slug 'tecnologia'.");
    let req = test::TestRequest::get()
        .uri("/v1/posts/category/tecnologia")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    println!("[<] Response body: {}", body);

    assert_eq!(body["data"]["total"].as_u64().unwrap(), 2);
    let posts = body["data"]["posts"].as_array().unwrap();
    assert_eq!(posts.len(), 2);
    for post in posts {
        assert_eq!(post["category"].as_str().unwrap(), "Tecnologia");
    }

    println!("[>] Listing posts for a slug with no posts.");
    let req = test::TestRequest::get()
        .uri("/v1/posts/category/inexistente")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["total"].as_u64().unwrap(), 0);
    assert_eq!(body["data"]["posts"].as_array().unwrap().len(), 0);
    println!("[/] Test passed: category filter behaves.");
}

#[tokio::test]
async fn test_post_detail_flow() {
    println!("\n\n[+] Running test: test_post_detail_flow");
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let (author, _password) = client.register_test_user(None).await;
    let tech = client.create_test_category("Tecnologia", "tecnologia").await;
    let post = client.create_test_post("Post completo", tech.id, author.id).await;

    println!("[>] Fetching post {} detail.", post.id);
    let req = test::TestRequest::get()
        .uri(&format!("/v1/posts/{}", post.id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    println!("[<] Received response with status: {}", resp.status());

    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    println!("[<] Response body: {}", body);
    assert_eq!(body["data"]["title"].as_str().unwrap(), "Post completo");
    assert_eq!(body["data"]["body"].as_str().unwrap(), "Body of Post completo");
    assert_eq!(body["data"]["category"]["slug"].as_str().unwrap(), "tecnologia");
    assert_eq!(
        body["data"]["author"]["email"].as_str().unwrap(),
        author.email
    );
    // The embedded author must never carry the credential hash.
    assert!(body["data"]["author"].get("password_hash").is_none());
    assert!(body["data"]["author"].get("passwordHash").is_none());
    println!("[/] Test passed: detail embeds category and sanitized author.");
}

#[tokio::test]
async fn test_post_detail_flow_not_found() {
    println!("\n\n[+] Running test: test_post_detail_flow_not_found");
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    println!("[>] Fetching a post id that does not exist.");
    let req = test::TestRequest::get().uri("/v1/posts/424242").to_request();
    let resp = test::call_service(&app, req).await;
    println!("[<] Received response with status: {}", resp.status());

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["errors"], serde_json::json!(["Conteúdo não encontrado"]));
    println!("[/] Test passed: missing post maps to 404.");
}
