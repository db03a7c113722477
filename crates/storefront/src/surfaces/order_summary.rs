//! Read-only order summary shown next to checkout.

use serde::Serialize;
use vitrine_core::{CurrencyCode, LineItem, ProductId};

use crate::cart::{CartSnapshot, LineItemStore};
use crate::config::SurfaceLabels;
use crate::error::Result;
use crate::events::{EventSink, SurfaceEvent};
use crate::filters::format_price;

/// One row of the summary table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryRow {
    pub id: ProductId,
    pub name: String,
    pub image: Option<String>,
    pub quantity: u32,
    /// `"R$ 259,00 cada"`
    pub unit_price: String,
    pub subtotal: String,
}

/// Rendered summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderSummaryView {
    pub title: String,
    pub helper: Option<String>,
    pub columns: [&'static str; 3],
    pub rows: Vec<SummaryRow>,
    pub empty_message: Option<&'static str>,
    pub total: String,
    pub checkout_label: String,
    pub checkout_enabled: bool,
}

/// Table of products, quantities and subtotals with the order total.
#[derive(Debug)]
pub struct OrderSummaryCard {
    store: LineItemStore,
    labels: SurfaceLabels,
}

impl OrderSummaryCard {
    pub const EMPTY_MESSAGE: &'static str = "Nenhum item foi adicionado ainda.";
    pub const COLUMNS: [&'static str; 3] = ["Produto", "Qtd.", "Subtotal"];

    /// Build a summary over a copy of `items`.
    ///
    /// # Errors
    ///
    /// Returns an error if an item is priced in another currency.
    pub fn new(
        items: impl Into<Vec<LineItem>>,
        currency: CurrencyCode,
        labels: SurfaceLabels,
    ) -> Result<Self> {
        Ok(Self {
            store: LineItemStore::new(items, currency)?,
            labels,
        })
    }

    #[must_use]
    pub const fn snapshot(&self) -> &CartSnapshot {
        self.store.snapshot()
    }

    /// Request checkout. Returns `false`, emitting nothing, when empty.
    pub fn checkout(&self, sink: &mut dyn EventSink) -> bool {
        if self.store.is_empty() {
            return false;
        }
        sink.emit(SurfaceEvent::CheckoutRequested);
        true
    }

    #[must_use]
    pub fn view(&self) -> OrderSummaryView {
        let snapshot = self.store.snapshot();
        let rows: Vec<SummaryRow> = snapshot
            .items
            .iter()
            .filter_map(|item| {
                let line = snapshot.totals.line(&item.id)?;
                Some(SummaryRow {
                    id: item.id.clone(),
                    name: item.name.clone(),
                    image: item.image_ref.clone(),
                    quantity: line.quantity.get(),
                    unit_price: format!("{} cada", format_price(&line.unit_price)),
                    subtotal: format_price(&line.subtotal),
                })
            })
            .collect();

        OrderSummaryView {
            title: self.labels.summary_title.clone(),
            helper: self.labels.summary_helper.clone(),
            columns: Self::COLUMNS,
            empty_message: rows.is_empty().then_some(Self::EMPTY_MESSAGE),
            checkout_enabled: !rows.is_empty(),
            rows,
            total: format_price(&snapshot.totals.grand_total),
            checkout_label: self.labels.summary_checkout.clone(),
        }
    }
}
