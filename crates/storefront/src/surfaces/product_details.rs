//! Product detail page: photo gallery with hover zoom, prices, discount badge
//! and the add-to-cart / favorite / share actions.

use serde::Serialize;
use vitrine_core::{Photo, Product, ProductId};

use crate::events::{EventSink, SurfaceEvent};
use crate::filters::format_price;
use crate::pricing::discount_for;

const DEFAULT_ZOOM_ORIGIN: &str = "50% 50%";

/// Hint shown under the gallery.
pub const GALLERY_HELPER: &str =
    "Passe o mouse para ampliar • Use as setas ou os botões para navegar.";

/// Bounding box of the main photo, in the same units as pointer positions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ZoomRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl ZoomRect {
    /// Pointer position as percentages of the box, clamped to `0..=100`.
    ///
    /// `None` when the box has no area.
    fn relative(&self, x: f64, y: f64) -> Option<(f64, f64)> {
        if self.width <= 0.0 || self.height <= 0.0 {
            return None;
        }
        let px = ((x - self.left) / self.width * 100.0).clamp(0.0, 100.0);
        let py = ((y - self.top) / self.height * 100.0).clamp(0.0, 100.0);
        Some((px, py))
    }
}

/// Photo carousel state.
#[derive(Debug, Clone, PartialEq)]
pub struct Gallery {
    photos: Vec<Photo>,
    index: usize,
    zoom_origin: String,
}

impl Default for Gallery {
    fn default() -> Self {
        Self {
            photos: Vec::new(),
            index: 0,
            zoom_origin: DEFAULT_ZOOM_ORIGIN.to_string(),
        }
    }
}

impl Gallery {
    #[must_use]
    pub fn new(photos: Vec<Photo>) -> Self {
        let mut gallery = Self::default();
        gallery.set_photos(photos);
        gallery
    }

    /// Replace the photos, dropping blank sources.
    ///
    /// The current index survives unless it no longer points at a photo, in
    /// which case it goes back to the first one.
    pub fn set_photos(&mut self, photos: Vec<Photo>) {
        self.photos = photos
            .into_iter()
            .filter(|photo| !photo.src.trim().is_empty())
            .collect();
        if self.index >= self.photos.len() {
            self.index = 0;
        }
    }

    #[must_use]
    pub fn photos(&self) -> &[Photo] {
        &self.photos
    }

    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.photos.is_empty()
    }

    #[must_use]
    pub fn current(&self) -> Option<&Photo> {
        self.photos.get(self.index)
    }

    /// Advance, wrapping from the last photo to the first.
    pub fn next(&mut self) {
        if !self.photos.is_empty() {
            self.index = (self.index + 1) % self.photos.len();
        }
    }

    /// Go back, wrapping from the first photo to the last.
    pub fn prev(&mut self) {
        if !self.photos.is_empty() {
            self.index = self.index.checked_sub(1).unwrap_or(self.photos.len() - 1);
        }
    }

    /// Jump to a thumbnail. Out-of-range indexes are ignored.
    pub fn select(&mut self, index: usize) {
        if index < self.photos.len() {
            self.index = index;
        }
    }

    /// Handle a keyboard key by its DOM name. Returns whether it was used.
    pub fn handle_key(&mut self, key: &str) -> bool {
        match key {
            "ArrowLeft" => self.prev(),
            "ArrowRight" => self.next(),
            _ => return false,
        }
        true
    }

    /// `"2/5"`, or `None` with no photos.
    #[must_use]
    pub fn position_label(&self) -> Option<String> {
        (!self.photos.is_empty()).then(|| format!("{}/{}", self.index + 1, self.photos.len()))
    }

    /// CSS `transform-origin` for the zoomed photo.
    #[must_use]
    pub fn zoom_origin(&self) -> &str {
        &self.zoom_origin
    }

    /// Move the zoom focus under the pointer.
    pub fn zoom_at(&mut self, x: f64, y: f64, rect: ZoomRect) -> &str {
        self.zoom_origin = rect.relative(x, y).map_or_else(
            || DEFAULT_ZOOM_ORIGIN.to_string(),
            |(px, py)| format!("{px:.2}% {py:.2}%"),
        );
        &self.zoom_origin
    }

    /// Pointer left the photo.
    pub fn reset_zoom(&mut self) {
        DEFAULT_ZOOM_ORIGIN.clone_into(&mut self.zoom_origin);
    }
}

/// Thumbnail strip entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThumbnailView {
    pub index: usize,
    pub src: String,
    pub alt: String,
    pub active: bool,
}

/// Rendered product page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductDetailsView {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: String,
    /// Only shown when it is above the current price.
    pub old_price: Option<String>,
    /// `"-15% OFF"`
    pub discount_badge: Option<String>,
    pub photo_src: String,
    pub photo_alt: String,
    pub thumbnails: Vec<ThumbnailView>,
    pub position: String,
    pub zoom_origin: String,
    pub helper: Option<&'static str>,
}

/// Product page state.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDetails {
    product: Product,
    gallery: Gallery,
    show_helper: bool,
}

impl ProductDetails {
    #[must_use]
    pub fn new(product: Product, show_helper: bool) -> Self {
        let gallery = Gallery::new(product.photos.clone());
        Self {
            product,
            gallery,
            show_helper,
        }
    }

    #[must_use]
    pub const fn product(&self) -> &Product {
        &self.product
    }

    #[must_use]
    pub const fn gallery(&self) -> &Gallery {
        &self.gallery
    }

    pub const fn gallery_mut(&mut self) -> &mut Gallery {
        &mut self.gallery
    }

    /// Swap in a new product, keeping the gallery position when it still fits.
    pub fn set_product(&mut self, product: Product) {
        self.gallery.set_photos(product.photos.clone());
        self.product = product;
    }

    pub fn add_to_cart(&self, sink: &mut dyn EventSink) {
        sink.emit(SurfaceEvent::AddToCartRequested(self.product.id.clone()));
    }

    pub fn add_to_favorites(&self, sink: &mut dyn EventSink) {
        sink.emit(SurfaceEvent::AddToFavoritesRequested(self.product.id.clone()));
    }

    pub fn share(&self, sink: &mut dyn EventSink) {
        sink.emit(SurfaceEvent::ShareProductRequested(self.product.id.clone()));
    }

    /// Render the page. Nothing is shown for a product without photos.
    #[must_use]
    pub fn view(&self) -> Option<ProductDetailsView> {
        let photo = self.gallery.current()?;
        let product = &self.product;

        let old_price = product
            .old_price
            .as_ref()
            .filter(|old| old.amount() > product.price.amount())
            .map(format_price);

        let thumbnails = self
            .gallery
            .photos()
            .iter()
            .enumerate()
            .map(|(index, photo)| ThumbnailView {
                index,
                src: photo.src.clone(),
                alt: photo
                    .alt
                    .clone()
                    .unwrap_or_else(|| format!("Miniatura {}", index + 1)),
                active: index == self.gallery.index(),
            })
            .collect();

        Some(ProductDetailsView {
            id: product.id.clone(),
            name: product.name.clone(),
            description: product.description.clone(),
            price: format_price(&product.price),
            old_price,
            discount_badge: discount_for(product).map(|discount| discount.badge()),
            photo_src: photo.src.clone(),
            photo_alt: photo.alt.clone().unwrap_or_else(|| product.name.clone()),
            thumbnails,
            position: self.gallery.position_label().unwrap_or_default(),
            zoom_origin: self.gallery.zoom_origin().to_string(),
            helper: self.show_helper.then_some(GALLERY_HELPER),
        })
    }
}
