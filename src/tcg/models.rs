use std::collections::HashMap;

use serde::Deserialize;

// pokemontcg.io list response wrapper
#[derive(Deserialize)]
pub struct CardsResponse {
    #[serde(default)]
    pub data: Vec<Card>,
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    #[serde(default)]
    pub id: String,
    pub name: String,
    pub set: Option<CardSet>,
    pub rarity: Option<String>,
    pub regulation_mark: Option<String>,
    #[serde(default)]
    pub supertype: String,
    #[serde(default)]
    pub subtypes: Vec<String>,
    /// Format name (`standard`, `expanded`, `unlimited`) to status (`Legal`, `Banned`).
    #[serde(default)]
    pub legalities: HashMap<String, String>,
    #[serde(default)]
    pub images: CardImages,
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct CardSet {
    pub name: String,
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct CardImages {
    pub small: Option<String>,
    pub large: Option<String>,
}

impl Card {
    pub fn set_name(&self) -> Option<&str> {
        self.set.as_ref().map(|s| s.name.as_str())
    }

    /// Primary image, preferring the large scan.
    pub fn image_url(&self) -> Option<&str> {
        self.images
            .large
            .as_deref()
            .or(self.images.small.as_deref())
    }

    pub fn legality(&self, format: &str) -> Option<&str> {
        self.legalities.get(format).map(String::as_str)
    }
}
