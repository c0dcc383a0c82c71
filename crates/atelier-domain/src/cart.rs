//! Shopping cart (collection) state.
//!
//! The cart is an explicit value with a small set of mutation entry points.
//! Callers own it and pass it where it is needed; nothing is kept globally.

use serde::{Deserialize, Serialize};

use crate::id::ArtworkId;
use crate::print::PrintSize;

/// Upper bound on the quantity of a single line.
pub const MAX_LINE_QUANTITY: u32 = 10;

/// One artwork in one print size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub artwork_id: ArtworkId,
    pub size: PrintSize,
    pub quantity: u32,
}

impl CartLine {
    pub fn subtotal_cents(&self) -> u64 {
        self.size.unit_price_cents() * u64::from(self.quantity)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `quantity` of an artwork/size. An existing line is merged; the
    /// resulting quantity is capped at [`MAX_LINE_QUANTITY`]. Zero is a no-op.
    pub fn add(&mut self, artwork_id: ArtworkId, size: PrintSize, quantity: u32) {
        if quantity == 0 {
            return;
        }
        match self.position(artwork_id, size) {
            Some(idx) => {
                let line = &mut self.lines[idx];
                line.quantity = line.quantity.saturating_add(quantity).min(MAX_LINE_QUANTITY);
            }
            None => self.lines.push(CartLine {
                artwork_id,
                size,
                quantity: quantity.min(MAX_LINE_QUANTITY),
            }),
        }
    }

    /// Replace the quantity of a line. Zero removes it; a missing line is added.
    pub fn set_quantity(&mut self, artwork_id: ArtworkId, size: PrintSize, quantity: u32) {
        if quantity == 0 {
            self.remove(artwork_id, size);
            return;
        }
        let quantity = quantity.min(MAX_LINE_QUANTITY);
        match self.position(artwork_id, size) {
            Some(idx) => self.lines[idx].quantity = quantity,
            None => self.lines.push(CartLine {
                artwork_id,
                size,
                quantity,
            }),
        }
    }

    /// Remove a line. Returns `true` if it was present.
    pub fn remove(&mut self, artwork_id: ArtworkId, size: PrintSize) -> bool {
        match self.position(artwork_id, size) {
            Some(idx) => {
                self.lines.remove(idx);
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Lines in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total number of prints across all lines.
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    pub fn total_cents(&self) -> u64 {
        self.lines.iter().map(CartLine::subtotal_cents).sum()
    }

    /// Distinct artworks referenced by the cart, in first-seen order.
    pub fn artwork_ids(&self) -> Vec<ArtworkId> {
        let mut ids: Vec<ArtworkId> = Vec::with_capacity(self.lines.len());
        for line in &self.lines {
            if !ids.contains(&line.artwork_id) {
                ids.push(line.artwork_id);
            }
        }
        ids
    }

    fn position(&self, artwork_id: ArtworkId, size: PrintSize) -> Option<usize> {
        self.lines
            .iter()
            .position(|l| l.artwork_id == artwork_id && l.size == size)
    }
}
