//! Payment processor adapter (Stripe-compatible Checkout Sessions API).

use anyhow::Context as _;
use serde::Deserialize;

use crate::domain::repository::PaymentGateway;
use crate::domain::types::{CheckoutRequest, CheckoutSession};
use crate::error::StorefrontError;

#[derive(Clone)]
pub struct StripeGateway {
    pub client: reqwest::Client,
    /// Base URL without trailing slash, e.g. `https://api.stripe.com`.
    pub api_url: String,
    pub api_key: String,
}

#[derive(Deserialize)]
struct SessionResponse {
    id: String,
    url: Option<String>,
}

/// Form fields for `POST /v1/checkout/sessions`, in bracket notation.
fn session_form(request: &CheckoutRequest) -> Vec<(String, String)> {
    let mut form = vec![
        ("mode".to_owned(), "payment".to_owned()),
        ("success_url".to_owned(), request.success_url.clone()),
        ("cancel_url".to_owned(), request.cancel_url.clone()),
        (
            "client_reference_id".to_owned(),
            request.customer_reference.to_string(),
        ),
    ];
    for (i, item) in request.line_items.iter().enumerate() {
        let prefix = format!("line_items[{i}]");
        form.push((
            format!("{prefix}[price_data][currency]"),
            request.currency.clone(),
        ));
        form.push((
            format!("{prefix}[price_data][product_data][name]"),
            item.name.clone(),
        ));
        form.push((
            format!("{prefix}[price_data][unit_amount]"),
            item.unit_amount_cents.to_string(),
        ));
        form.push((format!("{prefix}[quantity]"), item.quantity.to_string()));
    }
    form
}

impl PaymentGateway for StripeGateway {
    async fn create_checkout_session(
        &self,
        request: &CheckoutRequest,
    ) -> Result<CheckoutSession, StorefrontError> {
        let url = format!("{}/v1/checkout/sessions", self.api_url.trim_end_matches('/'));
        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .form(&session_form(request))
            .send()
            .await
            .context("send checkout session request")?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(anyhow::anyhow!(
                "payment provider returned {status}: {}",
                body.chars().take(200).collect::<String>()
            )
            .into());
        }

        let session: SessionResponse = response
            .json()
            .await
            .context("decode checkout session response")?;
        let url = session
            .url
            .context("checkout session response without url")?;
        Ok(CheckoutSession {
            id: session.id,
            url,
        })
    }
}
