//! # Class Announcement Options
//!
//! Options bag for the class announcement block, which composes announcements
//! that may be delivered over an SMS channel. `sms_character_limit` caps the
//! character count of an SMS-delivered announcement; it serializes as
//! `smsCharacterLimit`.

use serde::{Deserialize, Serialize};

use crate::payload::ClientOptions;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnnouncementCharacterLimitOptions {
    pub sms_character_limit: i32,
}

impl AnnouncementCharacterLimitOptions {
    pub fn new(sms_character_limit: i32) -> Self {
        Self { sms_character_limit }
    }
}

impl ClientOptions for AnnouncementCharacterLimitOptions {
    const BLOCK_KEY: &'static str = "classAnnouncement";
}
