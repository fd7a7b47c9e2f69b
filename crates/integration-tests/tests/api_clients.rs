//! End-to-end tests for the client and contact endpoints.
//!
//! These tests require a running server (and its database):
//! `cargo run -p cartera-server`, then
//! `cargo test -p cartera-integration-tests -- --ignored`.

use reqwest::StatusCode;
use serde_json::{Value, json};

use cartera_integration_tests::{
    base_url, create_test_client, delete_test_client, http_client,
};

#[tokio::test]
#[ignore = "Requires running server and database"]
async fn nested_create_yields_contacts_owned_by_the_new_client() {
    let client = http_client();
    let created = create_test_client(
        &client,
        &json!({
            "name": "Integración SA",
            "contacts": [
                {"name": "Ana", "email": "ana@example.com"},
                {"name": "Luis", "phone": "+34 600 000 000"},
                {"name": "Eva", "department": "Compras"}
            ]
        }),
    )
    .await;

    let id = created["id"].as_i64().expect("client id");
    let contacts = created["contacts"].as_array().expect("contacts array");
    assert_eq!(contacts.len(), 3);
    for contact in contacts {
        assert_eq!(contact["clientId"].as_i64(), Some(id));
    }

    delete_test_client(&client, id).await;
}

#[tokio::test]
#[ignore = "Requires running server and database"]
async fn contacts_come_back_newest_first() {
    let client = http_client();
    let created = create_test_client(&client, &json!({"name": "Orden SA"})).await;
    let id = created["id"].as_i64().expect("client id");

    for name in ["A", "B", "C"] {
        let resp = client
            .post(format!("{}/api/clients/{id}/contacts", base_url()))
            .json(&json!({"name": name}))
            .send()
            .await
            .expect("create contact");
        assert_eq!(resp.status(), StatusCode::OK);
    }

    let detail: Value = client
        .get(format!("{}/api/clients/{id}", base_url()))
        .send()
        .await
        .expect("get client")
        .json()
        .await
        .expect("parse client");

    let names: Vec<&str> = detail["contacts"]
        .as_array()
        .expect("contacts")
        .iter()
        .map(|c| c["name"].as_str().expect("name"))
        .collect();
    assert_eq!(names, vec!["C", "B", "A"]);

    delete_test_client(&client, id).await;
}

#[tokio::test]
#[ignore = "Requires running server and database"]
async fn deleting_a_client_cascades_to_its_contacts() {
    let client = http_client();
    let created = create_test_client(
        &client,
        &json!({"name": "Cascada SL", "contacts": [{"name": "Ana"}, {"name": "Luis"}]}),
    )
    .await;
    let id = created["id"].as_i64().expect("client id");
    let contact_id = created["contacts"][0]["id"].as_i64().expect("contact id");

    let resp = client
        .delete(format!("{}/api/clients/{id}", base_url()))
        .send()
        .await
        .expect("delete client");
    assert_eq!(resp.status(), StatusCode::OK);

    // Client is gone...
    let resp = client
        .get(format!("{}/api/clients/{id}", base_url()))
        .send()
        .await
        .expect("get client");
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    // ...and so are its contacts (mutating one now fails server-side,
    // the contract for writes against missing rows)
    let resp = client
        .delete(format!("{}/api/contacts/{contact_id}", base_url()))
        .send()
        .await
        .expect("delete contact");
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
#[ignore = "Requires running server and database"]
async fn put_replaces_portal_fields_even_when_omitted() {
    let client = http_client();
    let created = create_test_client(
        &client,
        &json!({
            "name": "Portal SA",
            "hasPortal": true,
            "portalUrl": "https://portal.example",
            "portalUser": "u",
            "portalPass": "p"
        }),
    )
    .await;
    let id = created["id"].as_i64().expect("client id");

    // PUT with only the name: every portal field must be cleared
    let updated: Value = client
        .put(format!("{}/api/clients/{id}", base_url()))
        .json(&json!({"name": "Portal SA"}))
        .send()
        .await
        .expect("put client")
        .json()
        .await
        .expect("parse client");

    assert_eq!(updated["hasPortal"], json!(false));
    assert!(updated["portalUrl"].is_null());
    assert!(updated["portalUser"].is_null());
    assert!(updated["portalPass"].is_null());

    delete_test_client(&client, id).await;
}

#[tokio::test]
#[ignore = "Requires running server and database"]
async fn create_without_name_is_rejected_and_creates_nothing() {
    let client = http_client();

    for body in [json!({}), json!({"name": ""}), json!({"name": "   "})] {
        let resp = client
            .post(format!("{}/api/clients", base_url()))
            .json(&body)
            .send()
            .await
            .expect("post client");
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "body: {body}");
    }
}

#[tokio::test]
#[ignore = "Requires running server and database"]
async fn unknown_client_id_is_a_404() {
    let client = http_client();
    let resp = client
        .get(format!("{}/api/clients/999999999", base_url()))
        .send()
        .await
        .expect("get client");
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "Requires running server and database"]
async fn malformed_ids_fail_server_side() {
    // Non-numeric ids are a generic server error on every endpoint, never
    // a 400: callers of the replaced API depend on that.
    let client = http_client();

    let resp = client
        .get(format!("{}/api/clients/abc", base_url()))
        .send()
        .await
        .expect("get client");
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let resp = client
        .delete(format!("{}/api/contacts/abc", base_url()))
        .send()
        .await
        .expect("delete contact");
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
#[ignore = "Requires running server and database"]
async fn writes_against_unknown_client_fail_server_side() {
    // PUT and DELETE on a missing row are 500s; 404 is for GET detail only.
    let client = http_client();

    let resp = client
        .put(format!("{}/api/clients/999999999", base_url()))
        .json(&json!({"name": "Nadie"}))
        .send()
        .await
        .expect("put client");
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let resp = client
        .delete(format!("{}/api/clients/999999999", base_url()))
        .send()
        .await
        .expect("delete client");
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
