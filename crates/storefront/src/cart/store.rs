//! Owned cart state: an immutable seed plus an independent working copy.
//!
//! A store is created once from an externally supplied list (the "mount") and
//! is mutated only through [`LineItemStore::dispatch`]. Later changes to the
//! external list are not picked up; to adopt new data, build a new store.

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, instrument};
use vitrine_core::{CurrencyCode, LineItem};

use super::{CartAction, CartTotals, apply, calculate, deduplicate};
use crate::error::{Result, StorefrontError};

/// Everything a surface needs to render a cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartSnapshot {
    /// Bumped on every change to the working set.
    pub revision: u64,
    /// Deduplicated working set, in display order.
    pub items: Vec<LineItem>,
    pub totals: CartTotals,
}

impl CartSnapshot {
    fn build(revision: u64, items: Vec<LineItem>, currency: CurrencyCode) -> Self {
        let totals = calculate(&items, currency);
        Self {
            revision,
            items,
            totals,
        }
    }

    /// Whether the working set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Receives a fresh snapshot after every change to the working set.
pub trait CartSubscriber {
    fn on_change(&mut self, snapshot: &CartSnapshot);
}

impl<F> CartSubscriber for F
where
    F: FnMut(&CartSnapshot),
{
    fn on_change(&mut self, snapshot: &CartSnapshot) {
        self(snapshot);
    }
}

/// Handle returned by [`LineItemStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// The single owner of a cart's line items.
pub struct LineItemStore {
    currency: CurrencyCode,
    seed: Arc<[LineItem]>,
    snapshot: CartSnapshot,
    subscribers: Vec<(SubscriptionId, Box<dyn CartSubscriber>)>,
    next_subscription: u64,
}

impl std::fmt::Debug for LineItemStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LineItemStore")
            .field("currency", &self.currency)
            .field("seed_len", &self.seed.len())
            .field("snapshot", &self.snapshot)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

impl LineItemStore {
    /// Seed a store from an externally supplied list.
    ///
    /// The list is copied; the working copy is deduplicated.
    ///
    /// # Errors
    ///
    /// Returns [`StorefrontError::MixedCurrency`] if any item is priced in a
    /// currency other than `currency`.
    pub fn new(items: impl Into<Vec<LineItem>>, currency: CurrencyCode) -> Result<Self> {
        let items: Vec<LineItem> = items.into();
        if let Some(item) = items
            .iter()
            .find(|item| item.unit_price().currency_code() != currency)
        {
            return Err(StorefrontError::MixedCurrency {
                id: item.id.to_string(),
                expected: currency,
                found: item.unit_price().currency_code(),
            });
        }

        let working = deduplicate(&items);
        debug!(
            seeded = items.len(),
            unique = working.len(),
            "line item store created"
        );

        Ok(Self {
            currency,
            snapshot: CartSnapshot::build(0, working, currency),
            seed: items.into(),
            subscribers: Vec::new(),
            next_subscription: 0,
        })
    }

    /// The list the store was seeded with, untouched.
    #[must_use]
    pub fn seed(&self) -> &[LineItem] {
        &self.seed
    }

    /// Display currency.
    #[must_use]
    pub const fn currency(&self) -> CurrencyCode {
        self.currency
    }

    /// Current state.
    #[must_use]
    pub const fn snapshot(&self) -> &CartSnapshot {
        &self.snapshot
    }

    /// Whether the working set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.snapshot.is_empty()
    }

    /// Apply an action, recompute totals, and notify subscribers.
    ///
    /// Actions that leave the working set unchanged (unknown IDs, decrease at
    /// quantity one) do not bump the revision or notify anyone.
    #[instrument(skip(self), fields(revision = self.snapshot.revision))]
    pub fn dispatch(&mut self, action: &CartAction) -> &CartSnapshot {
        let next = apply(&self.snapshot.items, action);
        if next == self.snapshot.items {
            debug!("cart action left working set unchanged");
            return &self.snapshot;
        }
        self.replace(next);
        &self.snapshot
    }

    /// Throw away local edits and restore the deduplicated seed.
    pub fn reset(&mut self) -> &CartSnapshot {
        let working = deduplicate(&self.seed);
        if working != self.snapshot.items {
            self.replace(working);
        }
        &self.snapshot
    }

    /// Register a subscriber. It is not called until the next change.
    pub fn subscribe(&mut self, subscriber: impl CartSubscriber + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(subscriber)));
        id
    }

    /// Remove a subscriber. Returns whether it was registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub, _)| *sub != id);
        self.subscribers.len() != before
    }

    fn replace(&mut self, items: Vec<LineItem>) {
        self.snapshot = CartSnapshot::build(self.snapshot.revision + 1, items, self.currency);
        debug!(
            revision = self.snapshot.revision,
            lines = self.snapshot.items.len(),
            total = %self.snapshot.totals.grand_total.amount(),
            "cart updated"
        );
        for (_, subscriber) in &mut self.subscribers {
            subscriber.on_change(&self.snapshot);
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use vitrine_core::{Money, Quantity};

    use super::*;

    fn item(id: &str, cents: u32, qty: u32) -> LineItem {
        LineItem::new(
            id,
            id,
            Money::from_minor_units(cents, CurrencyCode::BRL),
            Quantity::new(qty).unwrap(),
        )
    }

    #[test]
    fn test_seed_is_deduplicated_but_preserved() {
        let seed = vec![item("a", 100, 1), item("b", 200, 1), item("a", 150, 2)];
        let store = LineItemStore::new(seed.clone(), CurrencyCode::BRL).unwrap();

        assert_eq!(store.seed(), seed.as_slice());
        assert_eq!(store.snapshot().items.len(), 2);
        assert_eq!(store.snapshot().items[0].quantity().get(), 2);
        assert_eq!(store.snapshot().totals.grand_total.amount(), "5.00".parse().unwrap());
    }

    #[test]
    fn test_rejects_mixed_currency() {
        let usd = LineItem::new(
            "u",
            "u",
            Money::from_minor_units(100, CurrencyCode::USD),
            Quantity::MIN,
        );
        let err = LineItemStore::new(vec![item("a", 100, 1), usd], CurrencyCode::BRL).unwrap_err();
        assert!(matches!(err, StorefrontError::MixedCurrency { .. }));
    }

    #[test]
    fn test_dispatch_recomputes_totals_and_notifies() {
        let mut store = LineItemStore::new(vec![item("a", 7_990, 1)], CurrencyCode::BRL).unwrap();
        let seen: Rc<RefCell<Vec<u64>>> = Rc::default();
        let sink = Rc::clone(&seen);
        store.subscribe(move |snap: &CartSnapshot| sink.borrow_mut().push(snap.revision));

        let snap = store.dispatch(&CartAction::Increase("a".into()));
        assert_eq!(snap.revision, 1);
        assert_eq!(snap.totals.grand_total.amount(), "159.80".parse().unwrap());

        // No-ops do not notify.
        store.dispatch(&CartAction::Increase("missing".into()));
        store.dispatch(&CartAction::Decrease("a".into()));
        store.dispatch(&CartAction::Decrease("a".into()));

        assert_eq!(*seen.borrow(), vec![1, 2]);
        assert_eq!(store.snapshot().items[0].quantity(), Quantity::MIN);
    }

    #[test]
    fn test_unsubscribe() {
        let mut store = LineItemStore::new(vec![item("a", 100, 1)], CurrencyCode::BRL).unwrap();
        let calls = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&calls);
        let id = store.subscribe(move |_: &CartSnapshot| *counter.borrow_mut() += 1);

        store.dispatch(&CartAction::Increase("a".into()));
        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id));
        store.dispatch(&CartAction::Increase("a".into()));

        assert_eq!(*calls.borrow(), 1);
    }

    #[test]
    fn test_remove_until_empty_then_reset() {
        let mut store =
            LineItemStore::new(vec![item("a", 100, 1), item("b", 200, 3)], CurrencyCode::BRL)
                .unwrap();
        store.dispatch(&CartAction::Remove("a".into()));
        store.dispatch(&CartAction::Remove("b".into()));
        assert!(store.is_empty());
        assert!(store.snapshot().totals.grand_total.is_zero());

        let snap = store.reset();
        assert_eq!(snap.items.len(), 2);
        assert_eq!(snap.revision, 3);
    }

    #[test]
    fn test_independent_stores_do_not_share_state() {
        let seed = vec![item("a", 100, 1)];
        let mut drawer = LineItemStore::new(seed.clone(), CurrencyCode::BRL).unwrap();
        let card = LineItemStore::new(seed, CurrencyCode::BRL).unwrap();

        drawer.dispatch(&CartAction::Increase("a".into()));
        assert_eq!(drawer.snapshot().items[0].quantity().get(), 2);
        assert_eq!(card.snapshot().items[0].quantity().get(), 1);
    }
}
