#![allow(dead_code)]

use bunklogs_core::import::{ImportSummary, MessageLevel};
use bunklogs_core::roles::UserRole;
use bunklogs_db::models::user::{CreateUser, User};
use bunklogs_import::MemoryStore;
use chrono::NaiveDate;

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

pub fn seed_user(store: &mut MemoryStore, email: &str, username: &str, role: UserRole) -> User {
    store.seed_user(CreateUser {
        email: email.to_string(),
        username: Some(username.to_string()),
        first_name: "Test".to_string(),
        last_name: "User".to_string(),
        role: Some(role),
        phone_number: None,
    })
}

/// A store with cabin "Oak", session "Summer 2025" and the bunk joining
/// them.
pub fn camp_with_bunk() -> MemoryStore {
    let mut store = MemoryStore::new();
    let oak = store.seed_cabin("Oak");
    let summer = store.seed_session("Summer 2025", date("2025-06-30"), date("2025-08-10"));
    store.seed_bunk(oak.id, summer.id);
    store
}

/// Text of every error-level message, in order.
pub fn error_texts(summary: &ImportSummary) -> Vec<String> {
    summary
        .messages()
        .into_iter()
        .filter(|m| m.level == MessageLevel::Error)
        .map(|m| m.text)
        .collect()
}

/// The rendered error of every failed row, in order.
pub fn row_errors(summary: &ImportSummary) -> Vec<String> {
    summary.errors.iter().map(|f| f.error.to_string()).collect()
}
