use storefront_api::{Client, Error, PageQuery, Session};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

#[tokio::test]
async fn list_blogs_paginated_object_shape() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("blogs.json");

    Mock::given(method("GET"))
        .and(path("/api/blogs/"))
        .and(query_param("page", "3"))
        .and(query_param("limit", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .mount(&mock_server)
        .await;

    let client = Client::new(&mock_server.uri()).unwrap();
    let page = client.list_blogs(&PageQuery::new(3, 2)).await.unwrap();

    assert_eq!(page.items.len(), 2);
    assert_eq!(page.total, 57);
    assert_eq!(page.page, 3);
    assert_eq!(page.size, 2);
    assert_eq!(page.pages, 29);
    assert_eq!(page.items[0].title, "Warehouse racking buying guide");
    // `_id` mirrored into `id` by the normalizer.
    assert_eq!(page.items[0].key(), "66f2a81c9b1e8f0012d40001");
    assert!(page.items[0].id.is_some());
}

#[tokio::test]
async fn list_users_data_pagination_shape() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("users.json");

    Mock::given(method("GET"))
        .and(path("/api/users/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .mount(&mock_server)
        .await;

    let client = Client::new(&mock_server.uri()).unwrap();
    let page = client.list_users(&PageQuery::new(2, 5)).await.unwrap();

    assert_eq!(page.items.len(), 1);
    assert_eq!(page.total, 11);
    assert_eq!(page.page, 2);
    assert_eq!(page.size, 5);
    assert_eq!(page.pages, 3);
    assert_eq!(page.items[0].user_name, "amal");
}

#[tokio::test]
async fn empty_result_object_is_an_empty_page_not_an_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/quotes"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"result": {}}"#))
        .mount(&mock_server)
        .await;

    let client = Client::new(&mock_server.uri()).unwrap();
    let page = client.list_quotes(&PageQuery::new(4, 20)).await.unwrap();

    assert!(page.items.is_empty());
    assert_eq!(page.total, 0);
    assert_eq!(page.pages, 0);
    assert_eq!(page.page, 4);
    assert_eq!(page.size, 20);
}

#[tokio::test]
async fn server_error_is_not_swallowed_into_an_empty_page() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/products"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&mock_server)
        .await;

    let client = Client::new(&mock_server.uri()).unwrap();
    let result = client.list_products(&PageQuery::default()).await;

    assert!(matches!(result, Err(Error::Server { status: 500, .. })));
}

#[tokio::test]
async fn missing_record_maps_to_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/products/nope"))
        .respond_with(ResponseTemplate::new(404).set_body_string(r#"{"detail": "not found"}"#))
        .mount(&mock_server)
        .await;

    let client = Client::new(&mock_server.uri()).unwrap();
    assert!(matches!(
        client.get_product("nope").await,
        Err(Error::NotFound)
    ));
}

#[tokio::test]
async fn login_stores_token_and_authenticates_later_requests() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/login"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"access_token": "tok-abc", "token_type": "bearer"}"#,
        ))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/users/"))
        .and(header("authorization", "Bearer tok-abc"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(load_fixture("users.json")),
        )
        .mount(&mock_server)
        .await;

    let client = Client::new(&mock_server.uri()).unwrap();
    assert!(!client.session().is_authenticated());

    let login = client.login("admin", "secret").await.unwrap();
    assert_eq!(login.token_type, "bearer");
    assert!(client.session().is_authenticated());

    // Fails with 404 (unmatched mock) unless the bearer header is attached.
    let page = client.list_users(&PageQuery::default()).await.unwrap();
    assert_eq!(page.items.len(), 1);
}

#[tokio::test]
async fn bad_credentials_map_to_unauthorized() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/login"))
        .respond_with(
            ResponseTemplate::new(401).set_body_string(r#"{"detail": "Incorrect username"}"#),
        )
        .mount(&mock_server)
        .await;

    let client = Client::new(&mock_server.uri()).unwrap();
    let result = client.login("admin", "wrong").await;

    assert!(matches!(result, Err(Error::Unauthorized)));
    assert!(!client.session().is_authenticated());
}

#[tokio::test]
async fn contacts_collapse_from_bare_result_array() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/contacts"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(load_fixture("contacts.json")),
        )
        .mount(&mock_server)
        .await;

    let client = Client::new(&mock_server.uri()).unwrap();
    let contacts = client.list_contacts().await.unwrap();

    assert_eq!(contacts.len(), 2);
    assert_eq!(contacts[0].key(), "66f2a81c9b1e8f0012d4cc01");
    assert_eq!(contacts[1].name.as_deref(), Some("Omar"));
}

#[tokio::test]
async fn upload_returns_relative_path_for_both_result_shapes() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/upload"))
        .and(query_param("folder", "blog"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"status": "success", "status_code": 200, "message": "ok",
                "result": {"url": "static/uploads/blog/x.png"}}"#,
        ))
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/upload"))
        .and(query_param("folder", "categories"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"status": "success", "status_code": 200, "message": "ok",
                "result": "/static/uploads/categories/y.png"}"#,
        ))
        .mount(&mock_server)
        .await;

    let client = Client::new(&mock_server.uri()).unwrap();

    let stored = client
        .upload("blog", "x.png", vec![0x89, 0x50, 0x4e, 0x47])
        .await
        .unwrap();
    assert_eq!(stored, "static/uploads/blog/x.png");

    let stored = client
        .upload("categories", "y.png", vec![1, 2, 3])
        .await
        .unwrap();
    assert_eq!(stored, "static/uploads/categories/y.png");
}

#[tokio::test]
async fn delete_returns_unit_on_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/quotes/q1"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"status": "success", "status_code": 200, "message": "deleted", "result": null}"#,
        ))
        .mount(&mock_server)
        .await;

    let client = Client::new(&mock_server.uri()).unwrap();
    assert!(client.delete_quote("q1").await.is_ok());
}

#[tokio::test]
async fn preloaded_session_token_is_sent_without_login() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/contacts"))
        .and(header("authorization", "Bearer env-token"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(load_fixture("contacts.json")),
        )
        .mount(&mock_server)
        .await;

    let session = Session::with_token("env-token");
    let client = Client::with_session(&mock_server.uri(), session).unwrap();
    assert!(client.list_contacts().await.is_ok());
}
