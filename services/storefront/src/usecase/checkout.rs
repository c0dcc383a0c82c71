use std::collections::HashMap;

use atelier_domain::cart::Cart;
use atelier_domain::id::{ArtworkId, UserId};
use atelier_domain::print::PrintSize;

use crate::domain::repository::{ArtworkRepository, PaymentGateway};
use crate::domain::types::{CheckoutLineItem, CheckoutRequest, CheckoutSession};
use crate::error::StorefrontError;

/// Distinct artwork/size lines accepted in one checkout.
pub const MAX_CHECKOUT_LINES: usize = 50;
/// Bound on submitted entries, checked before they are merged into lines.
pub const MAX_CHECKOUT_ITEMS: usize = 100;

/// Redirect targets and currency for hosted checkout pages.
#[derive(Debug, Clone)]
pub struct CheckoutSettings {
    pub success_url: String,
    pub cancel_url: String,
    pub currency: String,
}

#[derive(Debug, Clone)]
pub struct CheckoutItem {
    pub artwork_id: ArtworkId,
    pub size: PrintSize,
    pub quantity: u32,
}

// ── CreateCheckout ───────────────────────────────────────────────────────────

pub struct CreateCheckoutUseCase<A: ArtworkRepository, P: PaymentGateway> {
    pub artworks: A,
    pub gateway: Option<P>,
    pub settings: CheckoutSettings,
}

impl<A: ArtworkRepository, P: PaymentGateway> CreateCheckoutUseCase<A, P> {
    /// Prices come from [`PrintSize`]; the client only names artworks, sizes and
    /// quantities.
    pub async fn execute(
        &self,
        user_id: UserId,
        items: Vec<CheckoutItem>,
    ) -> Result<CheckoutSession, StorefrontError> {
        if items.len() > MAX_CHECKOUT_ITEMS {
            return Err(StorefrontError::validation(format!(
                "at most {MAX_CHECKOUT_ITEMS} entries per checkout"
            )));
        }
        let mut cart = Cart::new();
        for item in items {
            cart.add(item.artwork_id, item.size, item.quantity);
        }
        if cart.is_empty() {
            return Err(StorefrontError::validation("cart is empty"));
        }
        if cart.lines().len() > MAX_CHECKOUT_LINES {
            return Err(StorefrontError::validation(format!(
                "at most {MAX_CHECKOUT_LINES} distinct items per checkout"
            )));
        }

        let gateway = self
            .gateway
            .as_ref()
            .ok_or(StorefrontError::ProviderNotConfigured("payment"))?;

        let ids = cart.artwork_ids();
        let titles: HashMap<ArtworkId, String> = self
            .artworks
            .find_by_ids(&ids)
            .await?
            .into_iter()
            .map(|a| (a.id, a.title))
            .collect();

        let line_items = cart
            .lines()
            .iter()
            .map(|line| {
                let title = titles
                    .get(&line.artwork_id)
                    .ok_or(StorefrontError::ArtworkNotFound)?;
                Ok(CheckoutLineItem {
                    name: format!("{title} ({})", line.size.label()),
                    unit_amount_cents: line.size.unit_price_cents(),
                    quantity: line.quantity,
                })
            })
            .collect::<Result<Vec<_>, StorefrontError>>()?;

        let request = CheckoutRequest {
            customer_reference: user_id,
            line_items,
            currency: self.settings.currency.clone(),
            success_url: self.settings.success_url.clone(),
            cancel_url: self.settings.cancel_url.clone(),
        };
        gateway.create_checkout_session(&request).await
    }
}
