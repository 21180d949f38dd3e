//! Banking API routes.
//!
//! # Data Flow
//! ```text
//! request
//!     → track_metrics (route_layer, counts every outcome)
//!     → required_headers_middleware (route_layer, 495)
//!     → extractors (path, query, body; 400)
//!     → handler field checks (453, 456, 454, 470, 473, 474)
//!     → store or canned payload
//! ```
//!
//! Unmatched paths never reach the gate and fall through to a plain 404.

pub mod accounts;
pub mod customer;
pub mod legacy;
pub mod transfers;
pub mod validate;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::http::server::AppState;

/// Every banking route, without middleware.
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(account_routes())
        .merge(customer_routes())
        .merge(transfer_routes())
        .merge(legacy_routes())
}

fn account_routes() -> Router<AppState> {
    use accounts::*;

    Router::new()
        .route(
            "/accounts/saving/modification/{customer_id}/{account_number}",
            get(saving_modification),
        )
        .route("/accounts/saving/new/{customer_id}", get(new_saving_options))
        .route(
            "/accounts/utilities/customerMatchByAccount/{customer_id}/{account_number}",
            get(customer_match_by_account),
        )
        .route(
            "/accounts/targetAccounts/{customer_id}/{account_number}/{transaction_type}",
            get(target_accounts),
        )
        .route(
            "/accounts/saving/transactions/receipt/{account_number}",
            get(transaction_receipt),
        )
        .route(
            "/accounts/saving/statement/{account_number}/{page_index}/{page_size}",
            get(statement),
        )
        .route(
            "/accounts/saving/statement/print/{account_number}",
            get(print_statement),
        )
        .route("/accounts/saving/rates/{customer_id}", get(saving_rates))
        .route("/accounts/saving/history/{account_number}", get(saving_history))
        .route(
            "/accounts/saving/history/print/{account_number}",
            get(print_history),
        )
        .route("/accounts/saving/calculate/{customer_id}", get(calculate_saving))
        .route("/accounts/list/{customer_id}", get(account_list))
}

fn customer_routes() -> Router<AppState> {
    use customer::*;

    Router::new()
        .route(
            "/customer/profile/phone/{customer_id}",
            get(get_phone).put(update_phone),
        )
        .route(
            "/customer/profile/identification/{customer_id}",
            get(get_identification).put(update_identification),
        )
        .route(
            "/customer/profile/email/{customer_id}",
            get(get_email).put(update_email),
        )
        .route(
            "/customer/profile/address/{customer_id}",
            get(get_address).put(update_address),
        )
        .route(
            "/customer/profile/validateNetBankingUser",
            post(validate_net_banking_user),
        )
        .route("/customer/profile/login", post(login))
        .route("/customer/profile/appStatus", post(app_status))
        .route(
            "/customer/profile/resolveAddress/{customer_id}/{post_code}",
            get(resolve_address_by_postcode),
        )
        .route(
            "/customer/profile/resolveAddress/{customer_id}/{post_code}/{house_no}",
            get(resolve_address_by_house_number),
        )
        .route(
            "/customer/profile/isNetBankingUserActive/{customer_id}",
            get(is_net_banking_user_active),
        )
        .route("/customer/profile/fullProfile/{customer_id}", get(full_profile))
        .route("/customer/messages/{customer_id}", post(create_message))
        .route("/customer/messages/list/{customer_id}", get(list_messages))
        .route("/customer/messages/unread/{customer_id}", get(unread_count))
        .route(
            "/customer/messages/{customer_id}/{reference}",
            get(get_message).delete(delete_message),
        )
        .route(
            "/customer/downloads/financialAnnualOverview/{customer_id}",
            get(annual_overviews),
        )
        .route(
            "/customer/downloads/financialAnnualOverview/print/{customer_id}/{id}",
            get(print_annual_overview),
        )
        .route("/customer/downloads/contracts/{customer_id}", get(contracts))
        .route(
            "/customer/downloads/contracts/print/{customer_id}/{id}",
            get(print_contract),
        )
        .route("/customer/campaigns/list/{customer_id}", get(campaigns))
}

fn transfer_routes() -> Router<AppState> {
    use transfers::*;

    Router::new()
        .route(
            "/transfers/payment/{customer_id}/{source_account}",
            get(simulate_payment),
        )
        .route(
            "/transfers/ownAccountTransfer/{customer_id}/{source_account}",
            get(own_account_transfer),
        )
        .route("/transfers/utilities/holidays", get(holidays))
        .route("/transfers/utilities/bankDate", get(bank_date))
        .route(
            "/transfers/payment/futurePayment/list/{customer_id}",
            get(future_payments),
        )
        .route(
            "/transfers/paymentByReference/{customer_id}/{reference}",
            get(payment_by_reference),
        )
        .route("/vop/requestPayeeVerification", post(request_payee_verification))
}

fn legacy_routes() -> Router<AppState> {
    use legacy::*;

    Router::new()
        .route("/api/combispaar", get(combispaar))
        .route("/api/combispaar/accounts", get(combispaar_accounts))
        .route("/api/maxispaar/accounts", get(maxispaar_accounts))
        .route("/api/solidextra/accounts", get(solidextra_accounts))
        .route("/api/combispaar/page-data", get(combispaar_page_data))
        .route("/api/combispaar/account-options", get(combispaar_account_options))
        .route("/api/combispaar/iban-options", get(combispaar_iban_options))
        .route("/api/chart-data", get(chart_data))
        .route("/api/user", get(user))
        .route("/api/dashboard", get(dashboard))
        .route("/api/maxispaar/page-data", get(maxispaar_page_data))
        .route(
            "/api/personal-details",
            get(personal_details).put(update_personal_details),
        )
        .route("/api/personal-details/phone", get(personal_phone))
        .route("/api/personal-details/password", put(update_password))
        .route(
            "/api/personal-details/validate-password",
            post(validate_password),
        )
        .route("/api/verification/send-code", get(send_verification_code))
        .route("/api/account/by-iban", get(account_by_iban))
        .route(
            "/api/sof-questions",
            get(sof_questions).put(update_sof_questions),
        )
        .route("/api/documents/download", get(download_document))
}
