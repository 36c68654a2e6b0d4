// file: src/models/item_summary.rs
// description: lightweight search hit presented for selection
// reference: built from discovery search-objects results

use serde::{Deserialize, Serialize};

pub const UNTITLED: &str = "[Sin título]";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemSummary {
    pub uuid: String,
    pub title: String,
    pub item_api_url: String,
}

impl ItemSummary {
    pub fn new(uuid: String, title: Option<String>, item_api_url: String) -> Self {
        let title = title.unwrap_or_else(|| UNTITLED.to_string());

        Self {
            uuid,
            title,
            item_api_url,
        }
    }

}
