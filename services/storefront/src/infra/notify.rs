use serde_json::json;
use tracing::{info, warn};

use crate::domain::repository::RegistrationNotifier;
use crate::domain::types::User;

/// Welcome notification sent after registration.
#[derive(Clone)]
pub enum WelcomeNotifier {
    /// POST a JSON event to the configured webhook from a background task.
    Webhook { client: reqwest::Client, url: String },
    /// No webhook configured; record the event in the log only.
    LogOnly,
}

impl RegistrationNotifier for WelcomeNotifier {
    fn notify_registered(&self, user: &User) {
        match self {
            Self::Webhook { client, url } => {
                let client = client.clone();
                let url = url.clone();
                let user_id = user.id;
                let payload = json!({
                    "event": "user.registered",
                    "userId": user.id,
                    "name": user.name,
                    "email": user.email,
                });
                tokio::spawn(async move {
                    let result = client
                        .post(&url)
                        .json(&payload)
                        .send()
                        .await
                        .and_then(reqwest::Response::error_for_status);
                    if let Err(e) = result {
                        warn!(%user_id, error = %e, "welcome notification failed");
                    }
                });
            }
            Self::LogOnly => {
                info!(user_id = %user.id, "welcome notification skipped: no webhook configured");
            }
        }
    }
}
