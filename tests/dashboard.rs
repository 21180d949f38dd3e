//! `/api` surface: password, questionnaire, documents.

use serde_json::json;

mod common;
use common::{error_code, json, spawn_app, spawn_app_with};

#[tokio::test]
async fn test_password_change_and_validation() {
    let app = spawn_app().await;

    let res = app
        .post("/api/personal-details/validate-password")
        .json(&json!({ "password": "password123" }))
        .send()
        .await
        .unwrap();
    let (_, body) = json(res).await;
    assert_eq!(body["valid"], true);
    assert_eq!(body["message"], "Password is valid");

    let res = app
        .put("/api/personal-details/password")
        .json(&json!({ "password": "s3cret" }))
        .send()
        .await
        .unwrap();
    let (status, body) = json(res).await;
    assert_eq!(status, 200);
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Password updated successfully");
    assert_eq!(body["data"]["password"], "**********");

    let persisted = std::fs::read_to_string(app.password_file()).unwrap();
    assert_eq!(persisted.lines().next(), Some("s3cret"));

    let res = app
        .post("/api/personal-details/validate-password")
        .json(&json!({ "password": "password123" }))
        .send()
        .await
        .unwrap();
    let (_, body) = json(res).await;
    assert_eq!(body["valid"], false);
    assert_eq!(body["message"], "Password is incorrect");

    let res = app
        .post("/api/personal-details/validate-password")
        .json(&json!({ "password": "s3cret" }))
        .send()
        .await
        .unwrap();
    let (_, body) = json(res).await;
    assert_eq!(body["valid"], true);
}

#[tokio::test]
async fn test_password_change_without_writable_file() {
    let app = spawn_app_with(|cfg| {
        cfg.store.password_file = format!("{}.d/missing/current_password.txt", cfg.store.password_file);
    })
    .await;

    let res = app
        .put("/api/personal-details/password")
        .json(&json!({ "password": "s3cret" }))
        .send()
        .await
        .unwrap();
    let (status, body) = json(res).await;
    assert_eq!(status, 200);
    assert_eq!(body["success"], true);
    assert!(!app.password_file().exists());

    let res = app
        .post("/api/personal-details/validate-password")
        .json(&json!({ "password": "s3cret" }))
        .send()
        .await
        .unwrap();
    let (_, body) = json(res).await;
    assert_eq!(body["valid"], true);
}

#[tokio::test]
async fn test_password_required() {
    let app = spawn_app().await;

    let res = app
        .put("/api/personal-details/password")
        .json(&json!({ "password": "  " }))
        .send()
        .await
        .unwrap();
    let (status, body) = json(res).await;
    assert_eq!(status, 400);
    assert_eq!(error_code(&body), "470");
    assert_eq!(body["error"]["message"], "Password is required");
}

#[tokio::test]
async fn test_validate_without_password_is_invalid() {
    let app = spawn_app().await;

    let res = app
        .post("/api/personal-details/validate-password")
        .json(&json!({}))
        .send()
        .await
        .unwrap();
    let (status, body) = json(res).await;
    assert_eq!(status, 200);
    assert_eq!(body["valid"], false);
}

#[tokio::test]
async fn test_password_file_seeded_on_start() {
    let app = spawn_app().await;
    let persisted = std::fs::read_to_string(app.password_file()).unwrap();
    assert_eq!(persisted.trim_end(), "password123");
}

#[tokio::test]
async fn test_sof_questions_replace() {
    let app = spawn_app().await;

    let res = app.get("/api/sof-questions").send().await.unwrap();
    let (_, body) = json(res).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"].as_array().unwrap().len(), 7);

    let res = app
        .put("/api/sof-questions")
        .json(&json!({ "questions": [{ "question": "Q1", "answer": "A1" }] }))
        .send()
        .await
        .unwrap();
    let (status, body) = json(res).await;
    assert_eq!(status, 200);
    assert_eq!(body["message"], "SOF questions updated successfully");
    assert_eq!(body["data"], json!([{ "question": "Q1", "answer": "A1" }]));

    // without `questions` the list is left alone
    let res = app
        .put("/api/sof-questions")
        .json(&json!({ "unrelated": true }))
        .send()
        .await
        .unwrap();
    let (_, body) = json(res).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);

    let res = app.get("/api/sof-questions").send().await.unwrap();
    let (_, body) = json(res).await;
    assert_eq!(body["data"][0]["question"], "Q1");
}

#[tokio::test]
async fn test_document_download() {
    let app = spawn_app().await;

    let res = app
        .get("/api/documents/download?type=statement")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 200);
    assert_eq!(res.headers()["content-type"], "text/plain");
    assert_eq!(
        res.headers()["content-disposition"],
        "attachment; filename=statement.txt"
    );
    let text = res.text().await.unwrap();
    assert!(text.starts_with("This is a mock statement document generated at "));
}

#[tokio::test]
async fn test_verification_code() {
    let app = spawn_app().await;

    let res = app.get("/api/verification/send-code").send().await.unwrap();
    let (_, body) = json(res).await;
    let code = body["data"]["code"].as_str().unwrap();
    assert_eq!(code.len(), 6);
    assert!(code.chars().all(|c| c.is_ascii_digit()));
    assert_eq!(body["message"], "Verification code sent successfully");
}

#[tokio::test]
async fn test_personal_details_echo() {
    let app = spawn_app().await;

    let details = json!({ "email": "new@example.com", "telephone": "+31 1" });
    let res = app
        .put("/api/personal-details")
        .json(&details)
        .send()
        .await
        .unwrap();
    let (status, body) = json(res).await;
    assert_eq!(status, 200);
    assert_eq!(body["data"], details);
    assert!(body.get("message").is_none());
}

#[tokio::test]
async fn test_product_lists() {
    let app = spawn_app().await;

    for path in [
        "/api/combispaar/accounts",
        "/api/maxispaar/accounts",
        "/api/solidextra/accounts",
    ] {
        let res = app.get(path).send().await.unwrap();
        let (status, body) = json(res).await;
        assert_eq!(status, 200, "{path}");
        assert_eq!(body["data"].as_array().unwrap().len(), 5, "{path}");
    }

    let res = app.get("/api/dashboard").send().await.unwrap();
    let (_, body) = json(res).await;
    assert_eq!(body["data"]["accounts"].as_array().unwrap().len(), 2);
    assert_eq!(body["data"]["user_info"]["customer_id"], "CUST001");
}
