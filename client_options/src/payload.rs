//! # Page Payload Assembly
//!
//! Collects the options bags registered by server-side blocks into the single
//! JSON object serialized into the page for client scripts.

use serde::Serialize;
use serde_json::{Map, Value};

/// Ties an options bag to the payload key its block reads on the client.
///
/// The key is part of the wire contract: client scripts look their options up
/// by it, so it must stay stable across releases.
pub trait ClientOptions: Serialize {
    /// Stable payload key for the owning block.
    const BLOCK_KEY: &'static str;
}

/// Errors that can occur while assembling or rendering a page payload.
#[derive(Debug, thiserror::Error)]
pub enum PayloadError {
    #[error("failed to serialize options for block '{block}': {source}")]
    BlockSerialize {
        block: &'static str,
        source: serde_json::Error,
    },

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// The page payload: every options bag registered by the blocks on a page,
/// keyed by block, serialized as one JSON object.
///
/// An empty payload serializes to `{}`. Bags are inert data; the payload is
/// owned by the request that assembles it and never shared or mutated
/// concurrently.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ClientOptionsPayload {
    entries: Map<String, Value>,
}

impl ClientOptionsPayload {
    /// Creates a new, empty payload.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `options` under its block key.
    ///
    /// Registering the same block twice replaces the earlier bag; within one
    /// request/response cycle the latest state of a block is authoritative.
    pub fn register<T: ClientOptions>(&mut self, options: &T) -> Result<(), PayloadError> {
        let value = serde_json::to_value(options).map_err(|source| PayloadError::BlockSerialize {
            block: T::BLOCK_KEY,
            source,
        })?;

        if self.entries.insert(T::BLOCK_KEY.to_string(), value).is_some() {
            tracing::warn!("Replacing options already registered for block '{}'.", T::BLOCK_KEY);
        } else {
            tracing::debug!("Registered options for block '{}'.", T::BLOCK_KEY);
        }

        Ok(())
    }

    /// Returns true if a bag is registered under `block_key`.
    pub fn contains(&self, block_key: &str) -> bool {
        self.entries.contains_key(block_key)
    }

    /// Number of registered bags.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no bag has been registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Renders the payload as compact JSON.
    pub fn to_json_string(&self) -> Result<String, PayloadError> {
        Ok(serde_json::to_string(&self.entries)?)
    }

    /// Renders the payload as pretty-printed JSON, for inspection tooling.
    pub fn to_json_string_pretty(&self) -> Result<String, PayloadError> {
        Ok(serde_json::to_string_pretty(&self.entries)?)
    }
}
