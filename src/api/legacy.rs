//! Dashboard handlers under `/api`.
//!
//! # Responsibilities
//! - Serve product, chart and profile data for the web dashboard
//! - Update and check the customer password through the store
//! - Read and replace the source-of-funds questionnaire
//! - Produce plain-text document downloads
//!
//! Most payloads use the `{success, data, message?, timestamp}` envelope.

use axum::{
    extract::State,
    http::{header, HeaderValue},
    response::{IntoResponse, Response},
    Json,
};
use rand::Rng;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::api::validate::present_str;
use crate::http::extract::{JsonBody, QueryParams};
use crate::http::response::{now, ApiError, ApiResponse, ApiResult};
use crate::http::server::AppState;
use crate::store::SofQuestion;

const HOLDER: &str = "Lucy Lavender";

/// One term-deposit account of a product family.
fn term_account(
    family: &str,
    label: &str,
    index: usize,
    term: (&str, &str, &str),
    balance: f64,
    rate: f64,
    iban_suffix: u32,
) -> Value {
    json!({
        "id": format!("{family}_{index:03}"),
        "name": format!("{label} - {}", term.0),
        "type": family,
        "balance": balance,
        "currency": "EUR",
        "iban": format!("NL24DHBN{iban_suffix}"),
        "interest_rate": rate,
        "holder_name": HOLDER,
        "term": term.1,
        "maturity_date": term.2,
    })
}

const TERMS: [(&str, &str, &str); 5] = [
    ("Short Term", "3 months", "2025-04-15"),
    ("Medium Term", "1 year", "2026-01-15"),
    ("Long Term", "2 years", "2027-01-15"),
    ("Premium", "18 months", "2026-07-15"),
    ("Extended", "6 months", "2025-07-15"),
];

/// Five accounts, one per term, with per-term balances and rates.
fn product_family(
    family: &str,
    label: &str,
    balances: [f64; 5],
    rates: [f64; 5],
    first_iban: u32,
) -> Vec<Value> {
    TERMS
        .iter()
        .enumerate()
        .map(|(i, term)| {
            term_account(family, label, i + 1, *term, balances[i], rates[i], first_iban + i as u32)
        })
        .collect()
}

fn summary_account(id: &str, name: &str, kind: &str, balance: f64, iban: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "type": kind,
        "balance": balance,
        "currency": "EUR",
        "iban": iban,
        "interest_rate": 1.1,
        "holder_name": HOLDER,
    })
}

fn combispaar_summary() -> Value {
    summary_account("combispaar_001", "DHB Combispaar", "combispaar", 15000.00, "NL24DHBN2018470580")
}

fn chart_slices() -> Value {
    json!([
        {"label": "Savings", "value": 42526.78, "color": "#1976d2"},
        {"label": "Investments", "value": 15000.00, "color": "#388e3c"},
        {"label": "Checking", "value": 5000.00, "color": "#f57c00"},
    ])
}

fn user_info() -> Value {
    json!({
        "name": HOLDER,
        "customer_id": "CUST001",
        "last_login": "2025-01-15 14:30:00",
    })
}

fn personal_details_record() -> Value {
    json!({
        "updateId": "PASSPORT - 1234567",
        "mobilePhone": "+31 123 456 789",
        "password": "**********",
        "email": "lucy.lavender@example.com",
        "telephone": "+31 987 654 321",
        "address": "GRONINGEN, STR. VONDELLAAN 172",
    })
}

// ===== Products =====

pub async fn combispaar() -> Json<Value> {
    Json(json!({
        "success": true,
        "data": [combispaar_summary()],
        "total_balance": 150000.00,
        "count": 5,
        "timestamp": now(),
    }))
}

pub async fn combispaar_accounts() -> ApiResponse<Vec<Value>> {
    ApiResponse::ok(product_family(
        "combispaar",
        "DHB Combispaar",
        [25000.00, 35000.00, 45000.00, 30000.00, 15000.00],
        [1.1, 1.3, 1.5, 1.4, 1.2],
        2018470581,
    ))
}

pub async fn maxispaar_accounts() -> ApiResponse<Vec<Value>> {
    ApiResponse::ok(product_family(
        "maxispaar",
        "DHB MaxiSpaar",
        [40000.00, 55000.00, 70000.00, 60000.00, 35000.00],
        [2.1, 2.3, 2.5, 2.4, 2.2],
        2018470591,
    ))
}

pub async fn solidextra_accounts() -> ApiResponse<Vec<Value>> {
    ApiResponse::ok(product_family(
        "solidextra",
        "DHB SolidExtra",
        [30000.00, 45000.00, 60000.00, 50000.00, 25000.00],
        [1.8, 2.0, 2.2, 2.1, 1.9],
        2018470601,
    ))
}

pub async fn combispaar_page_data() -> ApiResponse<Value> {
    ApiResponse::ok(json!({
        "accountName": "DHB SaveOnline",
        "balance": "€ 10.566,55",
        "iban": "NL24DHBN2018470578",
        "interestRate": 1.1,
        "title": "Save and still be able to withdraw money",
        "description": "The DHB CombiSpaarrekening offers a higher interest rate than the DHB SaveOnline because withdrawals are planned in advance. Depending on the chosen account, you can give 33, 66, or 99 days' notice for withdrawals. A longer notice period results in a higher interest rate.",
    }))
}

pub async fn combispaar_account_options() -> ApiResponse<Vec<Value>> {
    let options = [(33, 1.5, "A"), (66, 1.8, "B"), (99, 2.1, "C")]
        .iter()
        .map(|(days, rate, class)| {
            json!({
                "id": format!("{days}-days"),
                "name": format!("{days} Days Notice"),
                "days": days,
                "interestRate": rate,
                "balanceClass": format!("Class {class}"),
                "noticePeriod": format!("{days} days"),
                "interest": format!("{rate}%"),
                "validFrom": "2025-01-15",
            })
        })
        .collect();
    ApiResponse::ok(options)
}

pub async fn combispaar_iban_options() -> ApiResponse<Value> {
    ApiResponse::ok(json!([
        {"iban": "NL24DHBN2018470578", "accountName": "DHB SaveOnline", "balance": "€ 10.566,55", "holderName": HOLDER},
        {"iban": "NL24DHBN2018470579", "accountName": "DHB MaxiSpaar", "balance": "€ 31.960,23", "holderName": HOLDER},
    ]))
}

pub async fn maxispaar_page_data() -> ApiResponse<Value> {
    ApiResponse::ok(json!({
        "accountName": "DHB MaxiSpaar",
        "balance": "€ 31.960,23",
        "iban": "NL24DHBN2018470579",
        "interest_rate": 1.1,
        "title": "MaxiSpaar Account",
        "description": "High-yield savings account with flexible terms",
        "additional": "No notice period required",
    }))
}

// ===== Dashboard =====

pub async fn chart_data() -> ApiResponse<Value> {
    ApiResponse::ok(chart_slices())
}

pub async fn user() -> ApiResponse<Value> {
    ApiResponse::ok(user_info())
}

pub async fn dashboard() -> ApiResponse<Value> {
    ApiResponse::ok(json!({
        "accounts": [
            summary_account("saveonline_001", "DHB SaveOnline", "savings", 10566.55, "NL24DHBN2018470578"),
            summary_account("maxispaar_001", "DHB MaxiSpaar", "savings", 31960.23, "NL24DHBN2018470579"),
        ],
        "combispaar": {
            "accounts": [combispaar_summary()],
            "total_balance": 15000.00,
            "count": 1,
        },
        "chart_data": chart_slices(),
        "user_info": user_info(),
    }))
}

// ===== Personal details =====

pub async fn personal_details() -> ApiResponse<Value> {
    ApiResponse::ok(personal_details_record())
}

/// Echoes the submitted details without storing them.
pub async fn update_personal_details(JsonBody(body): JsonBody<Value>) -> ApiResponse<Value> {
    ApiResponse::ok(body)
}

pub async fn personal_phone() -> ApiResponse<Value> {
    ApiResponse::ok(json!({ "phone": "+31 123 456 789" }))
}

/// Store the new password. A failed file write still answers success;
/// the store logs it and the value lives on in memory.
pub async fn update_password(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<Value>,
) -> ApiResult<ApiResponse<Value>> {
    let password = present_str(&body, "password").ok_or(ApiError::PasswordMissing)?;
    let outcome = state.store.set_password(password);
    tracing::debug!(persisted = outcome.is_persisted(), "Password updated");

    Ok(ApiResponse::ok(personal_details_record()).with_message("Password updated successfully"))
}

/// Exact comparison against the current password. A missing or non-string
/// value is never valid.
pub async fn validate_password(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<Value>,
) -> Json<Value> {
    let valid = body
        .get("password")
        .and_then(Value::as_str)
        .is_some_and(|provided| provided == state.store.password());

    Json(json!({
        "success": true,
        "valid": valid,
        "message": if valid { "Password is valid" } else { "Password is incorrect" },
        "timestamp": now(),
    }))
}

/// Six digits, zero padded.
fn verification_code() -> String {
    format!("{:06}", rand::thread_rng().gen_range(0..1_000_000))
}

pub async fn send_verification_code() -> ApiResponse<Value> {
    ApiResponse::ok(json!({ "code": verification_code() }))
        .with_message("Verification code sent successfully")
}

#[derive(Debug, Deserialize)]
pub struct IbanQuery {
    pub iban: String,
}

/// The IBAN is required but every lookup resolves to the same holder.
pub async fn account_by_iban(QueryParams(query): QueryParams<IbanQuery>) -> ApiResponse<Value> {
    tracing::debug!(iban = %query.iban, "Account lookup");
    ApiResponse::ok(json!({
        "holder_name": HOLDER,
        "institution_name": "DHB Bank",
        "bic": "DHBNNL2R",
        "customer_number": "123456789",
        "support_reg_number": "SUP001",
        "support_packages": "Premium",
        "email": "lucy.lavender@example.com",
    }))
}

// ===== Source of funds =====

pub async fn sof_questions(State(state): State<AppState>) -> ApiResponse<Vec<SofQuestion>> {
    ApiResponse::ok(state.store.list_questions())
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SofQuestionInput {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct SofQuestionsUpdate {
    #[serde(default)]
    pub questions: Option<Vec<SofQuestionInput>>,
}

/// Replace the questionnaire when `questions` is present; otherwise the
/// current list is returned unchanged.
pub async fn update_sof_questions(
    State(state): State<AppState>,
    JsonBody(update): JsonBody<SofQuestionsUpdate>,
) -> ApiResponse<Vec<SofQuestion>> {
    let questions = match update.questions {
        Some(inputs) => state.store.replace_questions(
            inputs
                .into_iter()
                .map(|q| SofQuestion::new(q.question, q.answer))
                .collect(),
        ),
        None => state.store.list_questions(),
    };

    ApiResponse::ok(questions).with_message("SOF questions updated successfully")
}

// ===== Documents =====

#[derive(Debug, Deserialize)]
pub struct DocumentQuery {
    #[serde(rename = "type")]
    pub kind: String,
}

/// Plain-text attachment named after the document type.
pub async fn download_document(
    QueryParams(query): QueryParams<DocumentQuery>,
) -> ApiResult<Response> {
    let disposition = HeaderValue::from_str(&format!("attachment; filename={}.txt", query.kind))
        .map_err(|_| ApiError::BadRequest(format!("Invalid document type: {}", query.kind)))?;
    let content = format!(
        "This is a mock {} document generated at {}",
        query.kind,
        now().format("%Y-%m-%dT%H:%M:%S%.f")
    );

    Ok((
        [
            (header::CONTENT_TYPE, HeaderValue::from_static("text/plain")),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        content,
    )
        .into_response())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verification_code_is_six_digits() {
        for _ in 0..100 {
            let code = verification_code();
            assert_eq!(code.len(), 6);
            assert!(code.chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn test_product_family_layout() {
        let accounts = product_family(
            "maxispaar",
            "DHB MaxiSpaar",
            [40000.00, 55000.00, 70000.00, 60000.00, 35000.00],
            [2.1, 2.3, 2.5, 2.4, 2.2],
            2018470591,
        );
        assert_eq!(accounts.len(), 5);
        assert_eq!(accounts[0]["id"], "maxispaar_001");
        assert_eq!(accounts[0]["name"], "DHB MaxiSpaar - Short Term");
        assert_eq!(accounts[4]["iban"], "NL24DHBN2018470595");
        assert_eq!(accounts[4]["maturity_date"], "2025-07-15");
    }

    #[test]
    fn test_sof_update_without_questions() {
        let update: SofQuestionsUpdate = serde_json::from_value(json!({"other": 1})).unwrap();
        assert!(update.questions.is_none());

        let update: SofQuestionsUpdate =
            serde_json::from_value(json!({"questions": [{"question": "Q"}]})).unwrap();
        let questions = update.questions.unwrap();
        assert_eq!(questions[0].question, "Q");
        assert_eq!(questions[0].answer, "");
    }

    #[tokio::test]
    async fn test_download_headers() {
        let response = download_document(QueryParams(DocumentQuery {
            kind: "statement".into(),
        }))
        .await
        .unwrap();
        assert_eq!(response.headers()[header::CONTENT_TYPE], "text/plain");
        assert_eq!(
            response.headers()[header::CONTENT_DISPOSITION],
            "attachment; filename=statement.txt"
        );
    }
}
