//! # Renderable Message List Options
//!
//! Options bag for the message list block: a list of messages the user can
//! pick recipients or items from, optionally rendered as a selection grid.
//! Built server-side per request and shipped to the client in the page
//! payload.

use serde::{Deserialize, Serialize};

use crate::payload::ClientOptions;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GridVisibilityOptions {
    /// Whether the list-selection grid should be shown. Stays `false` while
    /// a required category filter is active but has no selection yet.
    /// Serializes as `isGridVisible`.
    pub is_grid_visible: bool,
}

impl GridVisibilityOptions {
    pub fn new(is_grid_visible: bool) -> Self {
        Self { is_grid_visible }
    }
}

impl ClientOptions for GridVisibilityOptions {
    const BLOCK_KEY: &'static str = "messageList";
}
