//! Pure state transitions for a cart's working set.

use core::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;
use vitrine_core::{LineItem, ProductId};

/// A named state-transition request driven by user interaction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "action", content = "id", rename_all = "snake_case")]
pub enum CartAction {
    /// Add one unit.
    Increase(ProductId),
    /// Take one unit away, never below one.
    Decrease(ProductId),
    /// Drop the line entirely.
    Remove(ProductId),
}

impl CartAction {
    /// The product this action targets.
    #[must_use]
    pub const fn id(&self) -> &ProductId {
        match self {
            Self::Increase(id) | Self::Decrease(id) | Self::Remove(id) => id,
        }
    }

    const fn verb(&self) -> &'static str {
        match self {
            Self::Increase(_) => "increase",
            Self::Decrease(_) => "decrease",
            Self::Remove(_) => "remove",
        }
    }
}

impl fmt::Display for CartAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.verb(), self.id())
    }
}

/// Errors from parsing a `verb:id` action string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseActionError {
    #[error("expected `<increase|decrease|remove>:<id>`, got '{0}'")]
    Malformed(String),
    #[error("unknown cart action '{0}'")]
    UnknownVerb(String),
}

impl FromStr for CartAction {
    type Err = ParseActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (verb, id) = s
            .split_once(':')
            .filter(|(_, id)| !id.is_empty())
            .ok_or_else(|| ParseActionError::Malformed(s.to_string()))?;
        let id = ProductId::new(id);
        match verb.trim().to_ascii_lowercase().as_str() {
            "increase" | "inc" | "+" => Ok(Self::Increase(id)),
            "decrease" | "dec" | "-" => Ok(Self::Decrease(id)),
            "remove" | "rm" => Ok(Self::Remove(id)),
            other => Err(ParseActionError::UnknownVerb(other.to_string())),
        }
    }
}

/// Apply an action and return the next working set.
///
/// Total and referentially transparent: unknown IDs leave the collection
/// unchanged, a decrease at quantity one is a no-op, and removal only happens
/// through [`CartAction::Remove`].
#[must_use]
pub fn apply(items: &[LineItem], action: &CartAction) -> Vec<LineItem> {
    let id = action.id();
    if !items.iter().any(|item| &item.id == id) {
        debug!(%action, "ignoring cart action for unknown product");
        return items.to_vec();
    }

    match action {
        CartAction::Increase(_) => items
            .iter()
            .map(|item| {
                if &item.id == id {
                    item.with_quantity(item.quantity().incremented())
                } else {
                    item.clone()
                }
            })
            .collect(),
        CartAction::Decrease(_) => items
            .iter()
            .map(|item| match item.quantity().decremented() {
                Some(quantity) if &item.id == id => item.with_quantity(quantity),
                _ => item.clone(),
            })
            .collect(),
        CartAction::Remove(_) => items.iter().filter(|item| &item.id != id).cloned().collect(),
    }
}
