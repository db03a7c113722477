//! Events surfaces emit for their host to act on.
//!
//! Surfaces never interpret what happens next: a checkout request, a share
//! link, or an address change is handed to an [`EventSink`] and forgotten.

use serde::Serialize;
use tracing::info;
use url::Url;
use vitrine_core::{Address, AddressForm, AddressId, ProductId};

/// Something a shopper asked for that the host application must handle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", content = "payload", rename_all = "snake_case")]
pub enum SurfaceEvent {
    /// The cart drawer was opened or closed.
    CartToggled { open: bool },
    /// The shopper wants to proceed to checkout.
    CheckoutRequested,
    /// Add the product shown on the detail page to the cart.
    AddToCartRequested(ProductId),
    /// Save the product shown on the detail page to favorites.
    AddToFavoritesRequested(ProductId),
    /// Share the product shown on the detail page.
    ShareProductRequested(ProductId),
    /// Remove an item from favorites.
    FavoriteRemoved(ProductId),
    /// Share a favorite through its public link.
    ShareRequested(Url),
    /// A saved address was chosen for shipping.
    AddressSelected(AddressId),
    /// A new address was filled in.
    AddressCreated(AddressForm),
    /// An existing address was edited.
    AddressUpdated(Address),
    /// Removal of an address was confirmed.
    AddressRemoved(AddressId),
}

impl SurfaceEvent {
    /// Short name used in logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::CartToggled { .. } => "cart_toggled",
            Self::CheckoutRequested => "checkout_requested",
            Self::AddToCartRequested(_) => "add_to_cart_requested",
            Self::AddToFavoritesRequested(_) => "add_to_favorites_requested",
            Self::ShareProductRequested(_) => "share_product_requested",
            Self::FavoriteRemoved(_) => "favorite_removed",
            Self::ShareRequested(_) => "share_requested",
            Self::AddressSelected(_) => "address_selected",
            Self::AddressCreated(_) => "address_created",
            Self::AddressUpdated(_) => "address_updated",
            Self::AddressRemoved(_) => "address_removed",
        }
    }
}

/// Receives events from surfaces.
pub trait EventSink {
    fn emit(&mut self, event: SurfaceEvent);
}

/// Keeps every event in order. Handy in tests and previews.
#[derive(Debug, Default, Clone)]
pub struct RecordingSink {
    events: Vec<SurfaceEvent>,
}

impl RecordingSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn events(&self) -> &[SurfaceEvent] {
        &self.events
    }

    /// Take the recorded events, leaving the sink empty.
    pub fn drain(&mut self) -> Vec<SurfaceEvent> {
        std::mem::take(&mut self.events)
    }
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: SurfaceEvent) {
        self.events.push(event);
    }
}

/// Logs each event at `info` level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl EventSink for TracingSink {
    fn emit(&mut self, event: SurfaceEvent) {
        let payload = serde_json::to_string(&event).unwrap_or_default();
        info!(event = event.name(), %payload, "surface event");
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_sink_keeps_order() {
        let mut sink = RecordingSink::new();
        sink.emit(SurfaceEvent::CheckoutRequested);
        sink.emit(SurfaceEvent::FavoriteRemoved(ProductId::new("p-1")));

        assert_eq!(sink.events().len(), 2);
        assert_eq!(sink.drain()[0], SurfaceEvent::CheckoutRequested);
        assert!(sink.events().is_empty());
    }

    #[test]
    fn test_event_serialization() {
        let event = SurfaceEvent::ShareRequested(Url::parse("https://example.com/product/p-1").unwrap());
        assert_eq!(
            serde_json::to_string(&event).unwrap(),
            r#"{"event":"share_requested","payload":"https://example.com/product/p-1"}"#
        );
        assert_eq!(
            serde_json::to_string(&SurfaceEvent::CartToggled { open: true }).unwrap(),
            r#"{"event":"cart_toggled","payload":{"open":true}}"#
        );
    }
}
