//! Field checks shared by the banking handlers.
//!
//! Each check treats a value that is empty or whitespace-only as missing.
//! Handlers run them in a fixed order: customer id, then account number,
//! then body fields.

use crate::http::response::{ApiError, ApiResult};

pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Code 453.
pub fn require_customer_id(customer_id: &str) -> ApiResult<()> {
    if is_blank(customer_id) {
        return Err(ApiError::CustomerIdMissing);
    }
    Ok(())
}

/// Code 456.
pub fn require_account_number(account_number: &str) -> ApiResult<()> {
    if is_blank(account_number) {
        return Err(ApiError::AccountNumberMissing);
    }
    Ok(())
}

/// Both path identifiers, customer id first.
pub fn require_customer_and_account(customer_id: &str, account_number: &str) -> ApiResult<()> {
    require_customer_id(customer_id)?;
    require_account_number(account_number)
}

/// A body string field that is present and not blank.
pub fn present_str<'a>(body: &'a serde_json::Value, field: &str) -> Option<&'a str> {
    body.get(field)
        .and_then(serde_json::Value::as_str)
        .filter(|value| !is_blank(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_blank_values() {
        assert!(is_blank(""));
        assert!(is_blank("   "));
        assert!(is_blank("\t"));
        assert!(!is_blank(" 42 "));
    }

    #[test]
    fn test_customer_checked_before_account() {
        let err = require_customer_and_account(" ", "").unwrap_err();
        assert_eq!(err.code(), "453");

        let err = require_customer_and_account("C1", " ").unwrap_err();
        assert_eq!(err.code(), "456");

        assert!(require_customer_and_account("C1", "2018470578").is_ok());
    }

    #[test]
    fn test_present_str() {
        let body = json!({"phoneNumber": "+31 6", "blank": "  ", "number": 5});
        assert_eq!(present_str(&body, "phoneNumber"), Some("+31 6"));
        assert_eq!(present_str(&body, "blank"), None);
        assert_eq!(present_str(&body, "number"), None);
        assert_eq!(present_str(&body, "absent"), None);
    }
}
