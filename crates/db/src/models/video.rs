//! Video entity model.

use serde::{Deserialize, Serialize};
use vidshelf_core::resolution::Resolution;
use vidshelf_core::timestamp::serde_iso;
use vidshelf_core::types::{DbId, Timestamp};

/// A stored video record, serialized with camelCase keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    pub id: DbId,
    pub title: String,
    pub author: String,
    pub can_be_downloaded: bool,
    /// `None` means no age restriction.
    pub min_age_restriction: Option<u8>,
    #[serde(with = "serde_iso")]
    pub created_at: Timestamp,
    #[serde(with = "serde_iso")]
    pub publication_date: Timestamp,
    pub available_resolutions: Vec<Resolution>,
}
