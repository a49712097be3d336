//! # Client Options
//!
//! Options bags passed from server-side page blocks to their client-side
//! rendering layer, and the page payload that carries them.
//!
//! Each block declares a plain options struct with a stable camelCase wire
//! form. During a request the server registers the bags it built into a
//! [`ClientOptionsPayload`], which serializes to the single JSON object the
//! client scripts read.

pub mod class_announcement;
pub mod message_list;
pub mod payload;

pub use class_announcement::AnnouncementCharacterLimitOptions;
pub use message_list::GridVisibilityOptions;
pub use payload::{ClientOptions, ClientOptionsPayload, PayloadError};
