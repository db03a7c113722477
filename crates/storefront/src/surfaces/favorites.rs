//! Favorite product card.

use serde::Serialize;
use tracing::debug;
use vitrine_core::{FavoriteItem, ProductId};

use crate::events::{EventSink, SurfaceEvent};
use crate::filters::format_price;

/// Rendered favorite card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FavoriteView {
    pub id: ProductId,
    pub name: String,
    pub price: String,
    pub image: Option<String>,
    /// The share button is hidden when this is `false`.
    pub can_share: bool,
}

/// A saved product with remove and share buttons.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FavoriteItemCard {
    item: FavoriteItem,
}

impl FavoriteItemCard {
    #[must_use]
    pub const fn new(item: FavoriteItem) -> Self {
        Self { item }
    }

    #[must_use]
    pub const fn item(&self) -> &FavoriteItem {
        &self.item
    }

    /// Whether the product has a public link to share.
    #[must_use]
    pub const fn can_share(&self) -> bool {
        self.item.share_url.is_some()
    }

    pub fn remove(&self, sink: &mut dyn EventSink) {
        sink.emit(SurfaceEvent::FavoriteRemoved(self.item.id.clone()));
    }

    /// Share the product link. Returns `false`, emitting nothing, when the
    /// product has no link.
    pub fn share(&self, sink: &mut dyn EventSink) -> bool {
        let Some(url) = &self.item.share_url else {
            debug!(id = %self.item.id, "favorite has no share link");
            return false;
        };
        sink.emit(SurfaceEvent::ShareRequested(url.clone()));
        true
    }

    #[must_use]
    pub fn view(&self) -> FavoriteView {
        FavoriteView {
            id: self.item.id.clone(),
            name: self.item.name.clone(),
            price: format_price(&self.item.price),
            image: self.item.image_ref.clone(),
            can_share: self.can_share(),
        }
    }
}
