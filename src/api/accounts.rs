//! Savings account handlers under `/accounts`.
//!
//! All payloads are canned; path identifiers are echoed back where the
//! client expects them.

use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::api::validate::{require_account_number, require_customer_and_account, require_customer_id};
use crate::http::extract::{PathParams, QueryParams};
use crate::http::response::{now, ApiResult};

const HOLDER: &str = "Lucy Lavender";
const HOLDER_ADDRESS: &str = "GRONINGEN, STR. VONDELLAAN 172";

/// The three savings products offered to every customer.
fn products() -> [(&'static str, &'static str); 3] {
    [
        ("SAV_ONLINE", "DHB SaveOnline"),
        ("SAV_MAXI", "DHB MaxiSpaar"),
        ("SAV_COMBI", "DHB Combispaar"),
    ]
}

pub async fn saving_modification(
    PathParams((customer_id, account_number)): PathParams<(String, String)>,
) -> ApiResult<Json<Value>> {
    require_customer_and_account(&customer_id, &account_number)?;

    Ok(Json(json!({
        "accountNumber": account_number,
        "customerId": customer_id,
        "modificationAllowed": true,
        "modificationOptions": ["interest_rate_change", "account_type_change", "holder_change"],
    })))
}

pub async fn new_saving_options(
    PathParams(customer_id): PathParams<String>,
) -> ApiResult<Json<Value>> {
    require_customer_id(&customer_id)?;

    let available: Vec<Value> = products()
        .iter()
        .map(|(code, name)| {
            json!({
                "productCode": code,
                "productName": name,
                "interestRate": 1.1,
                "minimumAmount": 0,
                "maximumAmount": 1_000_000,
                "currency": "EUR",
            })
        })
        .collect();

    Ok(Json(json!({
        "customerId": customer_id,
        "availableProducts": available,
    })))
}

pub async fn customer_match_by_account(
    PathParams((customer_id, account_number)): PathParams<(String, String)>,
) -> ApiResult<Json<Value>> {
    require_customer_and_account(&customer_id, &account_number)?;

    Ok(Json(json!({
        "customerId": customer_id,
        "accountNumber": account_number,
        "isMatch": true,
        "customerName": HOLDER,
        "accountHolder": HOLDER,
    })))
}

pub async fn target_accounts(
    PathParams((customer_id, account_number, _transaction_type)): PathParams<(String, String, String)>,
) -> ApiResult<Json<Value>> {
    require_customer_and_account(&customer_id, &account_number)?;

    Ok(Json(json!([
        {
            "accountNumber": "2018470580",
            "accountName": "Target Account 1",
            "iban": "NL24DHBN2018470580",
            "holderName": "John Doe",
        },
        {
            "accountNumber": "2018470581",
            "accountName": "Target Account 2",
            "iban": "NL24DHBN2018470581",
            "holderName": "Jane Smith",
        },
    ])))
}

pub async fn transaction_receipt(
    PathParams(account_number): PathParams<String>,
) -> ApiResult<Json<Value>> {
    require_account_number(&account_number)?;

    Ok(Json(json!({
        "accountNumber": account_number,
        "transactionId": "TXN001",
        "receiptUrl": format!("/receipts/{account_number}/TXN001.pdf"),
        "timestamp": now(),
    })))
}

/// Page numbers must be integers; anything else is rejected by the extractor
/// with code 400 before the account check runs.
pub async fn statement(
    PathParams((account_number, page_index, page_size)): PathParams<(String, i32, i32)>,
) -> ApiResult<Json<Value>> {
    require_account_number(&account_number)?;

    Ok(Json(json!({
        "accountNumber": account_number,
        "accountName": "DHB SaveOnline",
        "currencyCode": "EUR",
        "transactions": [
            {
                "transactionDate": "2025-01-15",
                "valueDate": "2025-01-15",
                "description": "Salary payment",
                "amount": 2500.00,
                "balance": 10566.55,
                "type": "CREDIT",
                "reference": "REF001",
            },
            {
                "transactionDate": "2025-01-14",
                "valueDate": "2025-01-14",
                "description": "Online purchase",
                "amount": -125.50,
                "balance": 8066.55,
                "type": "DEBIT",
                "reference": "REF002",
            },
        ],
        "pagination": {
            "pageIndex": page_index,
            "pageSize": page_size,
            "totalRecords": 2,
            "totalPages": 1,
        },
    })))
}

pub async fn print_statement(
    PathParams(account_number): PathParams<String>,
) -> ApiResult<Json<Value>> {
    require_account_number(&account_number)?;

    Ok(Json(json!({
        "success": true,
        "accountNumber": account_number,
        "statementUrl": format!("/statements/{account_number}/statement.pdf"),
        "timestamp": now(),
    })))
}

pub async fn saving_rates(PathParams(customer_id): PathParams<String>) -> ApiResult<Json<Value>> {
    require_customer_id(&customer_id)?;

    let rates: Vec<Value> = products()
        .iter()
        .map(|(code, name)| {
            json!({
                "productCode": code,
                "productName": name,
                "interestRate": 1.1,
                "effectiveDate": "2025-01-01",
                "currency": "EUR",
            })
        })
        .collect();

    Ok(Json(json!({
        "customerId": customer_id,
        "rates": rates,
    })))
}

pub async fn saving_history(
    PathParams(account_number): PathParams<String>,
) -> ApiResult<Json<Value>> {
    require_account_number(&account_number)?;

    Ok(Json(json!({
        "accountNumber": account_number,
        "history": [
            {
                "date": "2025-01-15",
                "action": "ACCOUNT_OPENED",
                "description": "Account opened",
                "amount": 1000.00,
            },
            {
                "date": "2025-01-20",
                "action": "INTEREST_PAID",
                "description": "Interest payment",
                "amount": 5.50,
            },
        ],
    })))
}

pub async fn print_history(
    PathParams(account_number): PathParams<String>,
) -> ApiResult<Json<Value>> {
    require_account_number(&account_number)?;

    Ok(Json(json!({
        "success": true,
        "accountNumber": account_number,
        "historyUrl": format!("/history/{account_number}/history.pdf"),
        "timestamp": now(),
    })))
}

pub async fn calculate_saving(
    PathParams(customer_id): PathParams<String>,
) -> ApiResult<Json<Value>> {
    require_customer_id(&customer_id)?;

    Ok(Json(json!({
        "customerId": customer_id,
        "calculations": [
            {
                "productCode": "SAV_ONLINE",
                "amount": 10000.00,
                "interestRate": 1.1,
                "interestEarned": 110.00,
                "totalAmount": 10110.00,
            },
        ],
    })))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountListQuery {
    #[serde(default = "default_account_type")]
    pub account_type: String,
}

fn default_account_type() -> String {
    "saving".to_string()
}

/// One savings account record in the list payload.
fn savings_account(
    number: &str,
    name: &str,
    label: &str,
    balance: f64,
    group: (&str, &str),
    product: (&str, &str),
) -> Value {
    json!({
        "BIC": "DHBNNL2R",
        "IBAN": format!("NL24DHBN{number}"),
        "accountName": name,
        "accountNumber": number,
        "accountNumberLabel": label,
        "address": HOLDER_ADDRESS,
        "branch": {"code": "AMS", "name": "Amsterdam Branch"},
        "currencyCode": "EUR",
        "customerName": HOLDER,
        "detail": {"balance": balance, "holderName": HOLDER, "interestRate": 1.1},
        "minPaymentDate": "2025-01-15T00:00:00Z",
        "moduleType": {"code": "SAV", "name": "Savings"},
        "operationProfile": {
            "allowClosing": true,
            "allowModification": true,
            "allowOwnTransferOut": true,
            "allowPaymentOrderOut": true,
            "allowPrintStatement": true,
            "allowSourceForOpening": true,
        },
        "productClass": {"code": "SAVINGS", "name": "Savings Account"},
        "productGroup": {"code": group.0, "name": group.1},
        "productType": {"code": product.0, "name": product.1},
        "status": "active",
    })
}

/// The account type only affects logging; the list is always savings.
pub async fn account_list(
    PathParams(customer_id): PathParams<String>,
    QueryParams(query): QueryParams<AccountListQuery>,
) -> ApiResult<Json<Value>> {
    require_customer_id(&customer_id)?;
    tracing::debug!(account_type = %query.account_type, "Listing accounts");

    Ok(Json(json!({
        "saving": [
            savings_account(
                "2018470578",
                "DHB SaveOnline",
                "SaveOnline Account",
                10566.55,
                ("saveOnline", "SaveOnline"),
                ("SAV_ONLINE", "Online Savings"),
            ),
            savings_account(
                "2018470579",
                "DHB MaxiSpaar",
                "MaxiSpaar Account",
                31960.23,
                ("maxiSpaar", "MaxiSpaar"),
                ("SAV_MAXI", "Maxi Savings"),
            ),
        ],
    })))
}
