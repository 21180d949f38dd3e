//! Transfer simulation and lookup handlers under `/transfers`, plus payee
//! verification under `/vop`.

use axum::Json;
use chrono::Local;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::api::validate::{present_str, require_customer_and_account, require_customer_id};
use crate::http::extract::{JsonBody, PathParams, QueryParams};
use crate::http::response::{now, ApiError, ApiResult};
use crate::store::generate_identifier;

fn today() -> String {
    Local::now().date_naive().to_string()
}

/// Simulation parameters. Every field is optional on the wire.
#[derive(Debug, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SimulationQuery {
    #[serde(rename = "targetIBAN")]
    pub target_iban: String,
    pub amount: String,
    pub currency_code: String,
    pub description: String,
    pub payment_type: String,
    pub period: String,
}

impl Default for SimulationQuery {
    fn default() -> Self {
        Self {
            target_iban: String::new(),
            amount: "0".to_string(),
            currency_code: "EUR".to_string(),
            description: String::new(),
            payment_type: "normal".to_string(),
            period: "oneOff".to_string(),
        }
    }
}

fn parse_amount(raw: &str) -> ApiResult<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|amount| amount.is_finite())
        .ok_or_else(|| ApiError::BadRequest(format!("Invalid amount: {raw}")))
}

/// Simulate a payment. Fees are always zero.
pub async fn simulate_payment(
    PathParams((customer_id, source_account)): PathParams<(String, String)>,
    QueryParams(query): QueryParams<SimulationQuery>,
) -> ApiResult<Json<Value>> {
    require_customer_and_account(&customer_id, &source_account)?;
    let amount = parse_amount(&query.amount)?;

    Ok(Json(json!({
        "simulationId": generate_identifier(),
        "sourceAccount": source_account,
        "targetIBAN": query.target_iban,
        "amount": amount,
        "currencyCode": query.currency_code,
        "description": query.description,
        "paymentType": query.payment_type,
        "period": query.period,
        "fees": 0.00,
        "totalAmount": amount,
        "estimatedDelivery": today(),
        "status": "SIMULATED",
    })))
}

pub async fn own_account_transfer(
    PathParams((customer_id, source_account)): PathParams<(String, String)>,
) -> ApiResult<Json<Value>> {
    require_customer_and_account(&customer_id, &source_account)?;

    Ok(Json(json!({
        "customerId": customer_id,
        "sourceAccount": source_account,
        "targetAccounts": [
            {
                "accountNumber": "2018470579",
                "accountName": "DHB MaxiSpaar",
                "iban": "NL24DHBN2018470579",
            },
        ],
    })))
}

pub async fn holidays() -> Json<Value> {
    Json(json!([
        {"date": "2025-01-01", "description": "New Year's Day", "isHoliday": true},
        {"date": "2025-12-25", "description": "Christmas Day", "isHoliday": true},
    ]))
}

pub async fn bank_date() -> Json<Value> {
    Json(json!({
        "bankDate": today(),
        "isBusinessDay": true,
    }))
}

pub async fn future_payments(PathParams(customer_id): PathParams<String>) -> ApiResult<Json<Value>> {
    require_customer_id(&customer_id)?;

    Ok(Json(json!([
        {
            "paymentId": "PAY001",
            "sourceAccount": "2018470578",
            "targetIBAN": "NL24DHBN2018470579",
            "amount": 500.00,
            "description": "Monthly transfer",
            "scheduledDate": "2025-02-01",
            "status": "SCHEDULED",
        },
    ])))
}

pub async fn payment_by_reference(
    PathParams((customer_id, reference)): PathParams<(String, String)>,
) -> ApiResult<Json<Value>> {
    require_customer_id(&customer_id)?;

    Ok(Json(json!({
        "reference": reference,
        "customerId": customer_id,
        "status": "COMPLETED",
        "amount": 100.00,
        "timestamp": now(),
    })))
}

/// Verification of payee. The IBAN is checked before the name, and any
/// non-blank pair verifies.
pub async fn request_payee_verification(JsonBody(body): JsonBody<Value>) -> ApiResult<Json<Value>> {
    let target_iban = present_str(&body, "targetIBAN").ok_or(ApiError::PartyIbanInvalid)?;
    let beneficiary = present_str(&body, "beneficiaryName").ok_or(ApiError::PartyNameInvalid)?;

    Ok(Json(json!({
        "vopGuid": generate_identifier(),
        "verificationStatus": "VERIFIED",
        "beneficiaryName": beneficiary,
        "targetIBAN": target_iban,
        "verificationDate": format!("{}Z", now().format("%Y-%m-%dT%H:%M:%S%.f")),
        "confidence": "HIGH",
    })))
}
