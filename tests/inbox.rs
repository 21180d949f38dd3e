//! Message inbox against the live store.

use serde_json::json;

mod common;
use common::{error_code, json, spawn_app, CUSTOMER};

#[tokio::test]
async fn test_seeded_inbox() {
    let app = spawn_app().await;

    let res = app
        .get(&format!("/customer/messages/list/{CUSTOMER}"))
        .send()
        .await
        .unwrap();
    let (status, body) = json(res).await;
    assert_eq!(status, 200);

    let messages = body.as_array().unwrap();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0]["reference"], "MSG001");
    assert_eq!(messages[0]["entryDate"], "2025-01-19T11:05:00");
    assert_eq!(messages[0]["type"], "Email");
    assert_eq!(messages[0]["isRead"], false);
    assert_eq!(messages[1]["reference"], "MSG002");
}

#[tokio::test]
async fn test_create_message_lifecycle() {
    let app = spawn_app().await;

    let res = app
        .post(&format!("/customer/messages/{CUSTOMER}"))
        .json(&json!({ "subject": "Hello", "content": "World", "type": "SMS" }))
        .send()
        .await
        .unwrap();
    let (status, created) = json(res).await;
    assert_eq!(status, 200);

    let reference = created["reference"].as_str().unwrap().to_string();
    assert!(reference.starts_with("MSG"));
    assert_eq!(reference.len(), 11);
    assert_eq!(created["subject"], "Hello");
    assert_eq!(created["body"], "World");
    assert_eq!(created["type"], "SMS");
    assert_eq!(created["isRead"], false);

    // newest first
    let res = app
        .get(&format!("/customer/messages/list/{CUSTOMER}"))
        .send()
        .await
        .unwrap();
    let (_, list) = json(res).await;
    assert_eq!(list.as_array().unwrap().len(), 3);
    assert_eq!(list[0]["reference"], reference.as_str());

    let res = app
        .get(&format!("/customer/messages/unread/{CUSTOMER}"))
        .send()
        .await
        .unwrap();
    let (_, unread) = json(res).await;
    assert_eq!(unread["count"], 3);

    let res = app
        .get(&format!("/customer/messages/{CUSTOMER}/{reference}"))
        .send()
        .await
        .unwrap();
    let (status, fetched) = json(res).await;
    assert_eq!(status, 200);
    assert_eq!(fetched, created);

    let res = app
        .delete(&format!("/customer/messages/{CUSTOMER}/{reference}"))
        .send()
        .await
        .unwrap();
    let (status, ack) = json(res).await;
    assert_eq!(status, 200);
    assert_eq!(ack["success"], true);
    assert_eq!(ack["message"], "Message deleted successfully");

    let res = app
        .get(&format!("/customer/messages/{CUSTOMER}/{reference}"))
        .send()
        .await
        .unwrap();
    let (status, body) = json(res).await;
    assert_eq!(status, 404);
    assert_eq!(error_code(&body), "477");
    assert_eq!(body["error"]["message"], "Message not found");
}

#[tokio::test]
async fn test_create_message_defaults() {
    let app = spawn_app().await;

    let res = app
        .post(&format!("/customer/messages/{CUSTOMER}"))
        .json(&json!({}))
        .send()
        .await
        .unwrap();
    let (status, created) = json(res).await;
    assert_eq!(status, 200);
    assert_eq!(created["type"], "Email");
    assert_eq!(created["subject"], "New Message");
    assert_eq!(created["body"], "");
}

#[tokio::test]
async fn test_delete_unknown_reference_acknowledged() {
    let app = spawn_app().await;

    let res = app
        .delete(&format!("/customer/messages/{CUSTOMER}/MSGNOPE"))
        .send()
        .await
        .unwrap();
    let (status, ack) = json(res).await;
    assert_eq!(status, 200);
    assert_eq!(ack["success"], true);

    let res = app
        .get(&format!("/customer/messages/list/{CUSTOMER}"))
        .send()
        .await
        .unwrap();
    let (_, list) = json(res).await;
    assert_eq!(list.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_blank_customer_rejected_before_store() {
    let app = spawn_app().await;

    let res = app
        .post("/customer/messages/%20")
        .json(&json!({ "subject": "ignored" }))
        .send()
        .await
        .unwrap();
    let (status, body) = json(res).await;
    assert_eq!(status, 400);
    assert_eq!(error_code(&body), "453");

    let res = app
        .get(&format!("/customer/messages/unread/{CUSTOMER}"))
        .send()
        .await
        .unwrap();
    let (_, unread) = json(res).await;
    assert_eq!(unread["count"], 2);
}

#[tokio::test]
async fn test_static_segments_win_over_customer_ids() {
    let app = spawn_app().await;

    let res = app
        .delete("/customer/messages/list/MSG001")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status().as_u16(), 405);

    let res = app
        .get(&format!("/customer/messages/list/{CUSTOMER}"))
        .send()
        .await
        .unwrap();
    let (status, body) = json(res).await;
    assert_eq!(status, 200);
    assert!(body.is_array());
}
