//! Customer profile, inbox, downloads and campaign handlers under `/customer`.
//!
//! # Responsibilities
//! - Serve canned profile data and acknowledge profile updates
//! - Run the inbox against the shared store
//!
//! # Design Decisions
//! - Handlers with both a path check and a body take the body as a
//!   `Result`, so a blank customer id (453) wins over a malformed body (400)
//! - Deleting an unknown reference still acknowledges success

use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::api::validate::{present_str, require_customer_id};
use crate::http::extract::{JsonBody, PathParams};
use crate::http::response::{now, ApiError, ApiResult};
use crate::http::server::AppState;
use crate::store::{generate_identifier, Message, NewMessage};

fn phone_record() -> Value {
    json!({
        "phoneNumber": "+31 123 456 789",
        "phoneType": "MOBILE",
        "phoneTypeName": "Mobile",
        "editable": true,
        "editableFlag": "Y",
    })
}

fn email_record() -> Value {
    json!({
        "address": "lucy.lavender@example.com",
        "editable": true,
        "editableFlag": "Y",
    })
}

fn address_record() -> Value {
    json!({
        "addressType": "HOME",
        "addressTypeName": "Home Address",
        "cityCode": "AMS",
        "cityName": "Amsterdam",
        "countryCode": "NL",
        "editable": true,
        "editableFlag": "Y",
        "fullAddressInfo": "GRONINGEN, STR. VONDELLAAN 172",
        "houseNumber": "172",
        "street": "Vondellaan",
        "zipCode": "1011AA",
    })
}

fn update_ack(message: &str) -> Json<Value> {
    Json(json!({
        "success": true,
        "message": message,
        "timestamp": now(),
    }))
}

// ===== Profile =====

pub async fn get_phone(PathParams(customer_id): PathParams<String>) -> ApiResult<Json<Value>> {
    require_customer_id(&customer_id)?;
    Ok(Json(json!([phone_record()])))
}

pub async fn update_phone(
    PathParams(customer_id): PathParams<String>,
    body: Result<JsonBody<Value>, ApiError>,
) -> ApiResult<Json<Value>> {
    require_customer_id(&customer_id)?;
    let JsonBody(body) = body?;
    let phone_number = present_str(&body, "phoneNumber").ok_or(ApiError::PhoneNumberMissing)?;

    Ok(Json(json!({
        "success": true,
        "message": "Phone number updated successfully",
        "phoneNumber": phone_number,
        "timestamp": now(),
    })))
}

pub async fn get_identification(
    PathParams(customer_id): PathParams<String>,
) -> ApiResult<Json<Value>> {
    require_customer_id(&customer_id)?;
    Ok(Json(json!({
        "identityType": "PASSPORT",
        "identitySeries": "AB",
        "identitySerialNo": "1234567",
        "issueDate": "2020-01-15T00:00:00Z",
        "expiryDate": "2030-01-15T00:00:00Z",
        "issueCountry": "NL",
        "issueCountryName": "Netherlands",
    })))
}

pub async fn update_identification(
    PathParams(customer_id): PathParams<String>,
    body: Result<JsonBody<Value>, ApiError>,
) -> ApiResult<Json<Value>> {
    require_customer_id(&customer_id)?;
    body?;
    Ok(update_ack("Identification updated successfully"))
}

pub async fn get_email(PathParams(customer_id): PathParams<String>) -> ApiResult<Json<Value>> {
    require_customer_id(&customer_id)?;
    Ok(Json(json!([email_record()])))
}

pub async fn update_email(
    PathParams(customer_id): PathParams<String>,
    body: Result<JsonBody<Value>, ApiError>,
) -> ApiResult<Json<Value>> {
    require_customer_id(&customer_id)?;
    body?;
    Ok(update_ack("Email updated successfully"))
}

pub async fn get_address(PathParams(customer_id): PathParams<String>) -> ApiResult<Json<Value>> {
    require_customer_id(&customer_id)?;
    Ok(Json(json!([address_record()])))
}

pub async fn update_address(
    PathParams(customer_id): PathParams<String>,
    body: Result<JsonBody<Value>, ApiError>,
) -> ApiResult<Json<Value>> {
    require_customer_id(&customer_id)?;
    body?;
    Ok(update_ack("Address updated successfully"))
}

pub async fn validate_net_banking_user(JsonBody(_body): JsonBody<Value>) -> Json<Value> {
    Json(json!({
        "isValid": true,
        "message": "User validation successful",
        "timestamp": now(),
    }))
}

/// Every login succeeds with a fresh session identifier.
pub async fn login(JsonBody(_body): JsonBody<Value>) -> Json<Value> {
    Json(json!({
        "success": true,
        "sessionId": generate_identifier(),
        "message": "Login successful",
        "timestamp": now(),
    }))
}

pub async fn app_status(JsonBody(_body): JsonBody<Value>) -> Json<Value> {
    Json(json!({
        "status": "ACTIVE",
        "message": "Application is active",
        "timestamp": now(),
    }))
}

pub async fn resolve_address_by_postcode(
    PathParams((customer_id, post_code)): PathParams<(String, String)>,
) -> ApiResult<Json<Value>> {
    require_customer_id(&customer_id)?;
    Ok(Json(json!([{
        "street": "Vondellaan",
        "city": "Amsterdam",
        "postCode": post_code,
        "houseNumbers": ["170", "172", "174"],
    }])))
}

pub async fn resolve_address_by_house_number(
    PathParams((customer_id, post_code, house_no)): PathParams<(String, String, String)>,
) -> ApiResult<Json<Value>> {
    require_customer_id(&customer_id)?;
    Ok(Json(json!({
        "street": "Vondellaan",
        "houseNumber": house_no,
        "postCode": post_code,
        "city": "Amsterdam",
        "fullAddress": format!("Vondellaan {house_no}, {post_code} Amsterdam"),
    })))
}

pub async fn is_net_banking_user_active(
    PathParams(customer_id): PathParams<String>,
) -> ApiResult<Json<Value>> {
    require_customer_id(&customer_id)?;
    Ok(Json(json!({
        "isActive": true,
        "lastLoginDate": "2025-01-15T14:30:00Z",
        "timestamp": now(),
    })))
}

pub async fn full_profile(PathParams(customer_id): PathParams<String>) -> ApiResult<Json<Value>> {
    require_customer_id(&customer_id)?;
    Ok(Json(json!({
        "customerId": customer_id,
        "firstName": "Lucy",
        "firstNameLatin": "Lucy",
        "surName": "Lavender",
        "surNameLatin": "Lavender",
        "middleName": "",
        "birthDate": "1985-06-15T00:00:00Z",
        "birthPlace": "Amsterdam",
        "genderCode": "F",
        "genderName": "Female",
        "maritalStatusCode": "S",
        "maritalStatusName": "Single",
        "customerType": "INDIVIDUAL",
        "customerTypeName": "Individual",
        "customerStatus": "ACTIVE",
        "customerNumber": "123456789",
        "taxNumber": "12345678901",
        "taxOfficeCode": "001",
        "taxOfficeName": "Amsterdam Tax Office",
        "identityType": "PASSPORT",
        "identitySeries": "AB",
        "identitySerialNo": "1234567",
        "prefferedLang": "en",
        "addresses": [address_record()],
        "phones": [phone_record()],
        "emails": [email_record()],
    })))
}

// ===== Messages =====

pub async fn create_message(
    State(state): State<AppState>,
    PathParams(customer_id): PathParams<String>,
    body: Result<JsonBody<NewMessage>, ApiError>,
) -> ApiResult<Json<Message>> {
    require_customer_id(&customer_id)?;
    let JsonBody(new) = body?;
    Ok(Json(state.store.create_message(new)))
}

pub async fn list_messages(
    State(state): State<AppState>,
    PathParams(customer_id): PathParams<String>,
) -> ApiResult<Json<Vec<Message>>> {
    require_customer_id(&customer_id)?;
    Ok(Json(state.store.list_messages()))
}

pub async fn unread_count(
    State(state): State<AppState>,
    PathParams(customer_id): PathParams<String>,
) -> ApiResult<Json<Value>> {
    require_customer_id(&customer_id)?;
    Ok(Json(json!({ "count": state.store.count_unread() })))
}

pub async fn get_message(
    State(state): State<AppState>,
    PathParams((customer_id, reference)): PathParams<(String, String)>,
) -> ApiResult<Json<Message>> {
    require_customer_id(&customer_id)?;
    state
        .store
        .get_message(&reference)
        .map(Json)
        .ok_or(ApiError::MessageNotFound)
}

pub async fn delete_message(
    State(state): State<AppState>,
    PathParams((customer_id, reference)): PathParams<(String, String)>,
) -> ApiResult<Json<Value>> {
    require_customer_id(&customer_id)?;
    state.store.delete_message(&reference);
    Ok(update_ack("Message deleted successfully"))
}

// ===== Downloads and campaigns =====

pub async fn annual_overviews(
    PathParams(customer_id): PathParams<String>,
) -> ApiResult<Json<Value>> {
    require_customer_id(&customer_id)?;
    Ok(Json(json!([
        {"documentType": "financial", "name": "Financial Overview 2024", "year": "2024", "id": "FIN_2024_001"},
        {"documentType": "tax", "name": "Tax Statement 2024", "year": "2024", "id": "TAX_2024_001"},
        {"documentType": "financial", "name": "Financial Overview 2023", "year": "2023", "id": "FIN_2023_001"},
    ])))
}

pub async fn print_annual_overview(
    PathParams((customer_id, id)): PathParams<(String, String)>,
) -> ApiResult<Json<Value>> {
    require_customer_id(&customer_id)?;
    Ok(Json(json!({
        "success": true,
        "documentId": id,
        "downloadUrl": format!("/downloads/financial/{id}.pdf"),
        "timestamp": now(),
    })))
}

pub async fn contracts(PathParams(customer_id): PathParams<String>) -> ApiResult<Json<Value>> {
    require_customer_id(&customer_id)?;
    Ok(Json(json!([
        {"contractType": "savings", "name": "DHB SaveOnline Contract", "date": "2024-01-15", "id": "CON_SAV_001"},
        {"contractType": "maxispaar", "name": "DHB MaxiSpaar Contract", "date": "2024-06-20", "id": "CON_MAX_001"},
    ])))
}

pub async fn print_contract(
    PathParams((customer_id, id)): PathParams<(String, String)>,
) -> ApiResult<Json<Value>> {
    require_customer_id(&customer_id)?;
    Ok(Json(json!({
        "success": true,
        "contractId": id,
        "downloadUrl": format!("/downloads/contracts/{id}.pdf"),
        "timestamp": now(),
    })))
}

pub async fn campaigns(PathParams(customer_id): PathParams<String>) -> ApiResult<Json<Value>> {
    require_customer_id(&customer_id)?;
    Ok(Json(json!([
        {
            "subject": "€25 Bonus Campaign",
            "content": "Get €25 bonus when you open a new DHB Netspar account!",
            "reference": "CAM001",
            "bannerLink": "https://example.com/banner1.jpg",
        },
        {
            "subject": "Digital Banking Promotion",
            "content": "Switch to digital banking and get exclusive benefits!",
            "reference": "CAM002",
            "bannerLink": "https://example.com/banner2.jpg",
        },
    ])))
}
