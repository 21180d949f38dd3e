//! Data the store starts with.

use chrono::{NaiveDate, NaiveDateTime};

use crate::store::types::{Message, SofQuestion};

fn seed_date(day: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 1, day)
        .and_then(|d| d.and_hms_opt(11, 5, 0))
        .unwrap_or_default()
}

pub fn messages() -> Vec<Message> {
    vec![
        Message {
            reference: "MSG001".to_string(),
            entry_date: seed_date(19),
            kind: "Email".to_string(),
            subject: "€25 Bonus to Our New Customers!".to_string(),
            body: "€25 Bonus to Our New Customers! DHB Bank gives away €25 bonus to new customers who complete their identification process digitally via Verimi instead of Postident identification.".to_string(),
            is_read: false,
        },
        Message {
            reference: "MSG002".to_string(),
            entry_date: seed_date(18),
            kind: "Email".to_string(),
            subject: "Device Pairing Removed".to_string(),
            body: "The iPhone model device and Mobile Banking Application pairing have been removed.".to_string(),
            is_read: false,
        },
    ]
}

pub fn questions() -> Vec<SofQuestion> {
    vec![
        SofQuestion::new(
            "What is the origin of the money in your NIBC Savings Account?",
            "Leftover from my income",
        ),
        SofQuestion::new("What is the source of your income?", "Director, Major Shareholder"),
        SofQuestion::new("What is your (joint) gross annual income?", "Between €0 and €30,000"),
        SofQuestion::new(
            "What amount do you expect to save/deposit annually with NIBC?",
            "Nothing or less than €1,000",
        ),
        SofQuestion::new(
            "How often do you expect to deposit money into your Savings Account?",
            "Never or on average once a month",
        ),
        SofQuestion::new(
            "Do you expect to make one or more occasional (larger) deposits with us?",
            "Yes",
        ),
        SofQuestion::new(
            "What is the amount if these are the amounts you plan to deposit?",
            "Less than €10,000",
        ),
    ]
}
