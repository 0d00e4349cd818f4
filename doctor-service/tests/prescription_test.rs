mod common;

use axum::http::{Method, StatusCode};
use common::TestApp;
use mongodb::bson::oid::ObjectId;

#[tokio::test]
async fn create_returns_prescription_and_updated_query() {
    let app = TestApp::new().await;

    let (status, body) = app
        .create(&app.doctor.id.to_hex(), &app.query.id.to_hex(), "Sumatriptan 50mg")
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "prescription created successfully");
    assert_eq!(body["prescription"]["doctorname"], "Meredith Grey");
    assert_eq!(body["prescription"]["doctorId"], app.doctor.id.to_hex());
    assert_eq!(body["prescription"]["queryId"], app.query.id.to_hex());
    assert_eq!(body["prescription"]["body"], "Sumatriptan 50mg");
    assert_eq!(body["Query"]["_id"], app.query.id.to_hex());
    assert_eq!(
        body["Query"]["prescriptions"],
        serde_json::json!([body["prescription"]["_id"]])
    );
}

#[tokio::test]
async fn create_for_unknown_doctor_is_rejected() {
    let app = TestApp::new().await;

    let (status, body) = app
        .create(&ObjectId::new().to_hex(), &app.query.id.to_hex(), "rest")
        .await;

    assert_eq!(status, StatusCode::PAYMENT_REQUIRED);
    assert_eq!(body["error"], "No doctor exists with given id");
    assert!(app.store.prescriptions().await.is_empty());
}

#[tokio::test]
async fn create_for_unknown_query_is_rejected() {
    let app = TestApp::new().await;

    let (status, body) = app
        .create(&app.doctor.id.to_hex(), &ObjectId::new().to_hex(), "rest")
        .await;

    assert_eq!(status, StatusCode::PAYMENT_REQUIRED);
    assert_eq!(body["error"], "No such query exists");
    assert!(app.store.prescriptions().await.is_empty());
}

#[tokio::test]
async fn malformed_ids_are_bad_requests() {
    let app = TestApp::new().await;

    let (status, _) = app.create("not-an-id", &app.query.id.to_hex(), "rest").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = app
        .json(
            Method::PATCH,
            "/doctorService/zzz",
            Some(serde_json::json!({ "body": "x" })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn empty_or_missing_body_is_rejected() {
    let app = TestApp::new().await;
    let uri = format!(
        "/doctorService/{}/{}/prescription",
        app.doctor.id.to_hex(),
        app.query.id.to_hex()
    );

    let (status, _) = app
        .json(Method::POST, &uri, Some(serde_json::json!({ "body": "" })))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = app
        .json(Method::POST, &uri, Some(serde_json::json!({})))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    assert!(app.store.prescriptions().await.is_empty());
}

#[tokio::test]
async fn update_overwrites_body_only() {
    let app = TestApp::new().await;
    let id = app.create_seeded("Ibuprofen 200mg").await;

    let (status, body) = app
        .json(
            Method::PATCH,
            &format!("/doctorService/{}", id),
            Some(serde_json::json!({ "body": "Ibuprofen 400mg" })),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "prescription updated successfully");
    assert_eq!(body["prescription"]["_id"], id);
    assert_eq!(body["prescription"]["body"], "Ibuprofen 400mg");
    assert_eq!(body["prescription"]["doctorname"], "Meredith Grey");
    assert_eq!(body["prescription"]["queryId"], app.query.id.to_hex());
}

#[tokio::test]
async fn update_of_unknown_prescription_is_rejected() {
    let app = TestApp::new().await;

    let (status, body) = app
        .json(
            Method::PATCH,
            &format!("/doctorService/{}", ObjectId::new().to_hex()),
            Some(serde_json::json!({ "body": "x" })),
        )
        .await;

    assert_eq!(status, StatusCode::PAYMENT_REQUIRED);
    assert_eq!(
        body,
        serde_json::json!({
            "error": "No such prescription exists",
            "message": "No such prescription exists"
        })
    );
}

#[tokio::test]
async fn delete_unlinks_and_removes_the_prescription() {
    let app = TestApp::new().await;
    let kept = app.create_seeded("Ibuprofen").await;
    let removed = app.create_seeded("Sumatriptan").await;

    let (status, body) = app
        .json(
            Method::DELETE,
            &format!("/doctorService/{}/{}", app.query.id.to_hex(), removed),
            None,
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "deleted successfully");
    assert_eq!(body["query"]["prescriptions"], serde_json::json!([kept]));

    let prescriptions = app.store.prescriptions().await;
    assert_eq!(prescriptions.len(), 1);
    assert_eq!(prescriptions[0].id.to_hex(), kept);

    let queries = app.store.queries().await;
    assert_eq!(queries[0].prescriptions.len(), 1);
    assert_eq!(queries[0].prescriptions[0].to_hex(), kept);
}

#[tokio::test]
async fn delete_with_unknown_ids_is_rejected() {
    let app = TestApp::new().await;
    let id = app.create_seeded("Ibuprofen").await;

    let (status, body) = app
        .json(
            Method::DELETE,
            &format!(
                "/doctorService/{}/{}",
                app.query.id.to_hex(),
                ObjectId::new().to_hex()
            ),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::PAYMENT_REQUIRED);
    assert_eq!(body["error"], "No such prescription exists");

    let (status, body) = app
        .json(
            Method::DELETE,
            &format!("/doctorService/{}/{}", ObjectId::new().to_hex(), id),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::PAYMENT_REQUIRED);
    assert_eq!(body["error"], "No such query exists");

    assert_eq!(app.store.prescriptions().await.len(), 1);
}

#[tokio::test]
async fn list_returns_every_prescription() {
    let app = TestApp::new().await;

    let (status, body) = app
        .json(Method::GET, "/doctorService/prescriptions", None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::json!([]));

    let first = app.create_seeded("Ibuprofen").await;
    let second = app.create_seeded("Sumatriptan").await;

    let (status, body) = app
        .json(Method::GET, "/doctorService/prescriptions", None)
        .await;
    assert_eq!(status, StatusCode::OK);
    let ids: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["_id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec![first.as_str(), second.as_str()]);
}

#[tokio::test]
async fn patch_on_the_list_route_is_method_not_allowed() {
    let app = TestApp::new().await;

    let (status, _) = app
        .request(
            Method::PATCH,
            "/doctorService/prescriptions",
            Some(serde_json::json!({ "body": "x" })),
        )
        .await;

    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}
