use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShopItem {
    pub id: Uuid,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub link: String,
    /// Free-form price label as shown on the page, e.g. "0.05 ETH".
    #[serde(default)]
    pub price: String,
}

impl ShopItem {
    pub fn new(title: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            description: String::new(),
            image: String::new(),
            link: link.into(),
            price: String::new(),
        }
    }
}
