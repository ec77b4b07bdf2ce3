use serde_json::Value;
use storefront_api::types::{Blog, Contact, Envelope, PaginatedResult, User};

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

#[test]
fn blog_fixture_decodes_through_the_envelope() {
    let body = load_fixture("blogs.json");
    let envelope: Envelope<PaginatedResult<Blog>> = serde_json::from_str(&body).unwrap();

    assert_eq!(envelope.status.as_deref(), Some("success"));
    let page = envelope.result;
    assert_eq!(page.items.len(), 2);

    let first = &page.items[0];
    assert_eq!(first.title, "Warehouse racking buying guide");
    assert_eq!(first.status.as_deref(), Some("published"));
    assert_eq!(
        first.featured_image.as_ref().unwrap().url,
        "static/uploads/blog/racking.png"
    );
    assert_eq!(first.seo.as_ref().unwrap().keywords.len(), 2);
    // RFC 3339 and naive timestamps both parse.
    assert!(first.published_at.is_some());
    assert!(first.created_at.is_some());

    // Sparse draft record: everything optional stays None.
    let second = &page.items[1];
    assert_eq!(second.status.as_deref(), Some("draft"));
    assert!(second.seo.is_none());
    assert!(second.published_at.is_none());
}

#[test]
fn partial_payloads_skip_absent_fields_on_serialize() {
    let user = User {
        user_name: "amal".to_string(),
        role: Some("admin".to_string()),
        ..Default::default()
    };
    let value = serde_json::to_value(&user).unwrap();

    let obj = value.as_object().unwrap();
    assert_eq!(obj.len(), 2);
    assert_eq!(value["user_name"], "amal");
    assert_eq!(value["role"], "admin");
    assert!(!obj.contains_key("_id"));
    assert!(!obj.contains_key("email"));
}

#[test]
fn contact_fixture_decodes_with_sparse_fields() {
    let body = load_fixture("contacts.json");
    let envelope: Envelope<Vec<Contact>> = serde_json::from_str(&body).unwrap();

    let contacts = envelope.result;
    assert_eq!(contacts.len(), 2);
    assert!(contacts[0].created_at.is_some());
    assert!(contacts[1].phone.is_none());
}

#[test]
fn unknown_fields_are_tolerated() {
    let raw = r#"{"_id": "u9", "user_name": "lena", "shoe_size": 38}"#;
    let user: User = serde_json::from_str(raw).unwrap();
    assert_eq!(user.user_name, "lena");
    assert_eq!(user.key(), "u9");
}

#[test]
fn users_fixture_is_the_data_pagination_shape() {
    let body = load_fixture("users.json");
    let value: Value = serde_json::from_str(&body).unwrap();
    assert!(value["result"]["data"].is_array());
    assert!(value["result"]["pagination"].is_object());
}
