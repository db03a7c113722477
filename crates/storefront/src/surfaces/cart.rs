//! Cart drawer and compact cart card.
//!
//! Both own an independent [`LineItemStore`] seeded when they are created, so
//! two carts on the same page never see each other's edits.

use serde::Serialize;
use tracing::instrument;
use vitrine_core::{CurrencyCode, LineItem, ProductId};

use crate::cart::{CartAction, CartSnapshot, LineItemStore};
use crate::config::SurfaceLabels;
use crate::error::Result;
use crate::events::{EventSink, SurfaceEvent};
use crate::filters::format_price;

/// One rendered cart line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartItemView {
    pub id: ProductId,
    pub name: String,
    pub image: Option<String>,
    pub quantity: u32,
    /// Unit price, formatted.
    pub price: String,
    /// `price × quantity`, formatted.
    pub line_price: String,
}

/// A rendered cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub total: String,
    pub item_count: u64,
    /// Shown instead of the list when the cart is empty.
    pub empty_message: Option<String>,
    pub checkout_enabled: bool,
    /// Drawer buttons. The card has none.
    pub checkout_label: Option<String>,
    pub keep_buying_label: Option<String>,
}

impl CartView {
    /// Render a snapshot.
    #[must_use]
    pub fn render(snapshot: &CartSnapshot, empty_message: &str) -> Self {
        let items = snapshot
            .items
            .iter()
            .filter_map(|item| {
                let line = snapshot.totals.line(&item.id)?;
                Some(CartItemView::render(item, &format_price(&line.subtotal)))
            })
            .collect::<Vec<_>>();

        Self {
            empty_message: items.is_empty().then(|| empty_message.to_string()),
            checkout_enabled: !items.is_empty(),
            items,
            total: format_price(&snapshot.totals.grand_total),
            item_count: snapshot.totals.item_count,
            checkout_label: None,
            keep_buying_label: None,
        }
    }
}

impl CartItemView {
    fn render(item: &LineItem, line_price: &str) -> Self {
        Self {
            id: item.id.clone(),
            name: item.name.clone(),
            image: item.image_ref.clone(),
            quantity: item.quantity().get(),
            price: format_price(&item.unit_price()),
            line_price: line_price.to_string(),
        }
    }
}

/// Slide-in cart drawer with checkout and "keep buying" actions.
#[derive(Debug)]
pub struct CartDrawer {
    store: LineItemStore,
    is_open: bool,
    labels: SurfaceLabels,
}

impl CartDrawer {
    /// Mount a closed drawer over a copy of `products`.
    ///
    /// # Errors
    ///
    /// Returns an error if a product is priced in another currency.
    pub fn new(
        products: impl Into<Vec<LineItem>>,
        currency: CurrencyCode,
        labels: SurfaceLabels,
    ) -> Result<Self> {
        Ok(Self {
            store: LineItemStore::new(products, currency)?,
            is_open: false,
            labels,
        })
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.is_open
    }

    #[must_use]
    pub const fn store(&self) -> &LineItemStore {
        &self.store
    }

    /// Give subscribers access to the underlying store.
    pub const fn store_mut(&mut self) -> &mut LineItemStore {
        &mut self.store
    }

    #[must_use]
    pub const fn labels(&self) -> &SurfaceLabels {
        &self.labels
    }

    /// Flip open/closed and tell the host.
    pub fn toggle(&mut self, sink: &mut dyn EventSink) {
        self.is_open = !self.is_open;
        sink.emit(SurfaceEvent::CartToggled {
            open: self.is_open,
        });
    }

    /// Open the drawer if it is closed.
    pub fn open(&mut self, sink: &mut dyn EventSink) {
        if !self.is_open {
            self.toggle(sink);
        }
    }

    /// Close the drawer if it is open. Also used by the backdrop and the
    /// "keep buying" button.
    pub fn close(&mut self, sink: &mut dyn EventSink) {
        if self.is_open {
            self.toggle(sink);
        }
    }

    /// "Continuar comprando": close and return to the page.
    pub fn keep_buying(&mut self, sink: &mut dyn EventSink) {
        self.close(sink);
    }

    pub fn increase(&mut self, id: &ProductId) -> &CartSnapshot {
        self.store.dispatch(&CartAction::Increase(id.clone()))
    }

    pub fn decrease(&mut self, id: &ProductId) -> &CartSnapshot {
        self.store.dispatch(&CartAction::Decrease(id.clone()))
    }

    pub fn remove(&mut self, id: &ProductId) -> &CartSnapshot {
        self.store.dispatch(&CartAction::Remove(id.clone()))
    }

    /// Request checkout. Disabled, and returns `false`, when the cart is empty.
    #[instrument(skip(self, sink))]
    pub fn checkout(&mut self, sink: &mut dyn EventSink) -> bool {
        if self.store.is_empty() {
            tracing::debug!("checkout ignored: cart is empty");
            return false;
        }
        sink.emit(SurfaceEvent::CheckoutRequested);
        true
    }

    #[must_use]
    pub fn view(&self) -> CartView {
        CartView {
            checkout_label: Some(self.labels.checkout.clone()),
            keep_buying_label: Some(self.labels.keep_buying.clone()),
            ..CartView::render(self.store.snapshot(), &self.labels.empty_cart_message)
        }
    }
}

/// Compact cart for sidebars and checkout columns.
///
/// Same engine and actions as the drawer, without open/closed state or a
/// checkout button.
#[derive(Debug)]
pub struct CartCard {
    store: LineItemStore,
    empty_message: String,
}

impl CartCard {
    /// Title shown above the list.
    pub const TITLE: &'static str = "Seu carrinho";

    /// Mount a card over a copy of `products`.
    ///
    /// # Errors
    ///
    /// Returns an error if a product is priced in another currency.
    pub fn new(
        products: impl Into<Vec<LineItem>>,
        currency: CurrencyCode,
        empty_message: impl Into<String>,
    ) -> Result<Self> {
        Ok(Self {
            store: LineItemStore::new(products, currency)?,
            empty_message: empty_message.into(),
        })
    }

    #[must_use]
    pub const fn store(&self) -> &LineItemStore {
        &self.store
    }

    pub fn dispatch(&mut self, action: &CartAction) -> &CartSnapshot {
        self.store.dispatch(action)
    }

    #[must_use]
    pub fn view(&self) -> CartView {
        let mut view = CartView::render(self.store.snapshot(), &self.empty_message);
        view.checkout_enabled = false;
        view
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use vitrine_core::{Money, Quantity};

    use super::*;
    use crate::events::RecordingSink;

    fn products() -> Vec<LineItem> {
        vec![
            LineItem::new(
                "p-1",
                "Fone Bluetooth ZX-100",
                Money::from_minor_units(24_990, CurrencyCode::BRL),
                Quantity::MIN,
            )
            .with_image("https://images.example.com/fone.jpg"),
            LineItem::new(
                "p-2",
                "Teclado Mecânico RGB",
                Money::from_minor_units(39_990, CurrencyCode::BRL),
                Quantity::new(2).unwrap(),
            ),
        ]
    }

    fn drawer() -> CartDrawer {
        CartDrawer::new(products(), CurrencyCode::BRL, SurfaceLabels::default()).unwrap()
    }

    #[test]
    fn test_view_formats_lines_and_total() {
        let view = drawer().view();
        assert_eq!(view.items.len(), 2);
        assert_eq!(view.items[1].price, "R$\u{a0}399,90");
        assert_eq!(view.items[1].line_price, "R$\u{a0}799,80");
        assert_eq!(view.total, "R$\u{a0}1.049,70");
        assert_eq!(view.item_count, 3);
        assert!(view.checkout_enabled);
        assert_eq!(view.empty_message, None);
        assert_eq!(view.checkout_label.as_deref(), Some("Finalizar compra"));
        assert_eq!(view.keep_buying_label.as_deref(), Some("Continuar comprando"));
    }

    #[test]
    fn test_toggle_emits_state() {
        let mut drawer = drawer();
        let mut sink = RecordingSink::new();

        drawer.toggle(&mut sink);
        assert!(drawer.is_open());
        drawer.open(&mut sink);
        drawer.keep_buying(&mut sink);
        assert!(!drawer.is_open());

        assert_eq!(
            sink.events(),
            [
                SurfaceEvent::CartToggled { open: true },
                SurfaceEvent::CartToggled { open: false },
            ]
        );
    }

    #[test]
    fn test_checkout_disabled_when_empty() {
        let mut drawer = drawer();
        let mut sink = RecordingSink::new();

        assert!(drawer.checkout(&mut sink));
        drawer.remove(&"p-1".into());
        drawer.remove(&"p-2".into());

        let view = drawer.view();
        assert!(!view.checkout_enabled);
        assert_eq!(view.total, "R$\u{a0}0,00");
        assert_eq!(view.empty_message.as_deref(), Some("Seu carrinho está vazio."));
        assert!(!drawer.checkout(&mut sink));
        assert_eq!(sink.events(), [SurfaceEvent::CheckoutRequested]);
    }

    #[test]
    fn test_quantity_buttons() {
        let mut drawer = drawer();
        let id = ProductId::new("p-1");
        drawer.decrease(&id);
        assert_eq!(drawer.view().items[0].quantity, 1);
        drawer.increase(&id);
        assert_eq!(drawer.view().items[0].line_price, "R$\u{a0}499,80");
    }

    #[test]
    fn test_card_total_uses_deduplicated_items() {
        let mut seed = products();
        seed.push(seed[0].with_quantity(Quantity::new(3).unwrap()));
        let card = CartCard::new(seed, CurrencyCode::BRL, "Nenhum item no carrinho no momento.").unwrap();

        let view = card.view();
        assert_eq!(view.items.len(), 2);
        assert_eq!(view.items[0].quantity, 3);
        assert_eq!(view.total, "R$\u{a0}1.549,50");
        assert!(!view.checkout_enabled);
        assert_eq!(view.checkout_label, None);
    }
}
