//! Mutable in-memory store.
//!
//! # Data Flow
//! ```text
//! startup:
//!     seed.rs (2 messages, 7 questions)
//!     password.rs (file or default)
//!     → Store (one mutex over all three)
//!     → Arc<Store> in router state
//!
//! request:
//!     handler → Store op → (password only) file rewrite
//! ```
//!
//! # Design Decisions
//! - One lock guards messages, questions and password together
//! - Message references come from UUID v4; collisions are not re-checked.
//!   128 random bits make a clash negligible and that risk is accepted.
//! - The password file is rewritten while the lock is held, so disk writes
//!   land in the same order as memory updates

pub mod password;
pub mod seed;
pub mod types;

use std::sync::{Mutex, MutexGuard, PoisonError};

use chrono::Local;
use uuid::Uuid;

use crate::config::StoreConfig;
use crate::observability::metrics;

pub use password::{PasswordFile, PasswordWrite};
pub use types::{Message, NewMessage, SofQuestion};

/// Prefix of generated message references.
pub const REFERENCE_PREFIX: &str = "MSG";

/// Fresh random identifier in canonical hyphenated form.
pub fn generate_identifier() -> String {
    Uuid::new_v4().to_string()
}

#[derive(Debug)]
struct StoreState {
    messages: Vec<Message>,
    questions: Vec<SofQuestion>,
    password: String,
}

/// Process-wide state shared by all handlers.
#[derive(Debug)]
pub struct Store {
    state: Mutex<StoreState>,
    password_file: PasswordFile,
}

impl Store {
    /// Seed collections and resolve the password from the configured file.
    pub fn open(config: &StoreConfig) -> Self {
        let password_file = PasswordFile::new(&config.password_file);
        let password = password_file.load_or_init(&config.default_password);
        Self::with_parts(seed::messages(), seed::questions(), password, password_file)
    }

    /// Build a store from explicit contents.
    pub fn with_parts(
        messages: Vec<Message>,
        questions: Vec<SofQuestion>,
        password: String,
        password_file: PasswordFile,
    ) -> Self {
        Self {
            state: Mutex::new(StoreState {
                messages,
                questions,
                password,
            }),
            password_file,
        }
    }

    fn lock(&self) -> MutexGuard<'_, StoreState> {
        // Every mutation is a single assignment or insert, so a panicked
        // holder cannot leave the state half-written.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// All messages, newest first.
    pub fn list_messages(&self) -> Vec<Message> {
        self.lock().messages.clone()
    }

    /// Create a message and put it at the front of the inbox.
    pub fn create_message(&self, new: NewMessage) -> Message {
        let id = generate_identifier();
        let message = Message {
            reference: format!("{}{}", REFERENCE_PREFIX, id[..8].to_ascii_uppercase()),
            entry_date: Local::now().naive_local(),
            kind: new.kind.unwrap_or_else(|| "Email".to_string()),
            subject: new.subject.unwrap_or_else(|| "New Message".to_string()),
            body: new.content.unwrap_or_default(),
            is_read: false,
        };

        self.lock().messages.insert(0, message.clone());
        metrics::record_message_event("created");
        tracing::debug!(reference = %message.reference, "Message created");
        message
    }

    /// Look up a message by exact reference.
    pub fn get_message(&self, reference: &str) -> Option<Message> {
        self.lock()
            .messages
            .iter()
            .find(|m| m.reference == reference)
            .cloned()
    }

    /// Remove every message with `reference`. Unknown references are a no-op.
    pub fn delete_message(&self, reference: &str) {
        let mut state = self.lock();
        let before = state.messages.len();
        state.messages.retain(|m| m.reference != reference);
        let removed = before - state.messages.len();
        drop(state);

        if removed > 0 {
            metrics::record_message_event("deleted");
        }
        tracing::debug!(reference = %reference, removed, "Message delete");
    }

    pub fn count_unread(&self) -> usize {
        self.lock().messages.iter().filter(|m| !m.is_read).count()
    }

    pub fn list_questions(&self) -> Vec<SofQuestion> {
        self.lock().questions.clone()
    }

    /// Swap in a new question list, dropping the old one entirely.
    pub fn replace_questions(&self, questions: Vec<SofQuestion>) -> Vec<SofQuestion> {
        let mut state = self.lock();
        state.questions = questions;
        state.questions.clone()
    }

    pub fn password(&self) -> String {
        self.lock().password.clone()
    }

    /// Update the password in memory, then rewrite the password file.
    pub fn set_password(&self, password: &str) -> PasswordWrite {
        let mut state = self.lock();
        state.password = password.to_string();
        let outcome = PasswordWrite::from(self.password_file.save(password));
        drop(state);

        metrics::record_password_write(outcome.is_persisted());
        if let PasswordWrite::MemoryOnly(e) = &outcome {
            tracing::warn!(
                path = ?self.password_file.path(),
                error = %e,
                "Password updated in memory only; file is stale"
            );
        }
        outcome
    }
}
