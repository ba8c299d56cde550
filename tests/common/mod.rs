#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use contact_relay::prelude::*;

/// Mailer double that replays scripted outcomes and records every send.
///
/// When the outcome queue is exhausted, further sends succeed with a
/// generated delivery id.
pub struct ScriptedMailer {
    outcomes: Mutex<VecDeque<Result<DeliveryReceipt, MailError>>>,
    sent: Mutex<Vec<OutgoingEmail>>,
    healthy: bool,
}

impl ScriptedMailer {
    pub fn always_ok() -> Arc<Self> {
        Self::with_outcomes(vec![])
    }

    pub fn with_outcomes(outcomes: Vec<Result<DeliveryReceipt, MailError>>) -> Arc<Self> {
        Arc::new(Self {
            outcomes: Mutex::new(outcomes.into()),
            sent: Mutex::new(Vec::new()),
            healthy: true,
        })
    }

    pub fn unhealthy() -> Arc<Self> {
        Arc::new(Self {
            outcomes: Mutex::new(VecDeque::new()),
            sent: Mutex::new(Vec::new()),
            healthy: false,
        })
    }

    /// Everything sent through this mailer, in order.
    pub fn sent(&self) -> Vec<OutgoingEmail> {
        self.sent.lock().unwrap().clone()
    }

    pub fn send_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }
}

#[async_trait]
impl Mailer for ScriptedMailer {
    async fn send(&self, email: OutgoingEmail) -> Result<DeliveryReceipt, MailError> {
        let count = {
            let mut sent = self.sent.lock().unwrap();
            sent.push(email);
            sent.len()
        };

        match self.outcomes.lock().unwrap().pop_front() {
            Some(outcome) => outcome,
            None => Ok(DeliveryReceipt {
                id: Some(format!("delivery-{count}")),
            }),
        }
    }

    async fn health_check(&self) -> bool {
        self.healthy
    }
}

pub fn create_test_state(mailer: Arc<dyn Mailer>, allowed_origins: Vec<String>) -> AppState {
    let contact_service = Arc::new(ContactService::new(
        mailer.clone(),
        SenderConfig {
            admin_recipient: "admin@example.com".to_string(),
            admin_from: "contact@example.com".to_string(),
            no_reply_from: "no-reply@example.com".to_string(),
            site_name: "Portfolio".to_string(),
        },
    ));

    AppState {
        contact_service,
        mailer,
        allowed_origins: Arc::new(allowed_origins),
        behind_proxy: false,
    }
}

/// A syntactically valid submission payload for tests to tweak.
pub fn valid_payload() -> serde_json::Value {
    serde_json::json!({
        "firstName": "Jane",
        "lastName": "Doe",
        "email": "jane@example.com",
        "message": "Hello, I would like to talk about a project."
    })
}
