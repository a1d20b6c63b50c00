use super::models::Card;

/// Upper bound on the number of cards kept from one search.
pub const MAX_RESULTS: usize = 250;

/// Oldest regulation mark still rotated into standard.
const STANDARD_MIN_MARK: &str = "G";

const LEGAL: &str = "Legal";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Format {
    Standard,
    Expanded,
    Unlimited,
}

impl Format {
    pub const ALL: [Format; 3] = [Format::Standard, Format::Expanded, Format::Unlimited];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Expanded => "expanded",
            Self::Unlimited => "unlimited",
        }
    }

    /// Case-insensitive lookup; unknown names yield `None`.
    pub fn parse(name: &str) -> Option<Self> {
        let name = name.trim().to_lowercase();
        Self::ALL.into_iter().find(|f| f.as_str() == name)
    }

    pub fn is_legal(self, card: &Card) -> bool {
        match self {
            Self::Standard => card
                .regulation_mark
                .as_deref()
                .is_some_and(|mark| mark.to_uppercase().as_str() >= STANDARD_MIN_MARK),
            Self::Expanded => card.legality("expanded") == Some(LEGAL),
            Self::Unlimited => {
                card.legality("unlimited") == Some(LEGAL) || card.legality("standard").is_none()
            }
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Keep the cards legal in `format_name`, in input order, capped at [`MAX_RESULTS`].
///
/// An unrecognized format keeps nothing.
pub fn filter(cards: Vec<Card>, format_name: &str) -> Vec<Card> {
    match Format::parse(format_name) {
        Some(format) => filter_format(cards, format),
        None => Vec::new(),
    }
}

pub fn filter_format(cards: Vec<Card>, format: Format) -> Vec<Card> {
    cards
        .into_iter()
        .filter(|card| format.is_legal(card))
        .take(MAX_RESULTS)
        .collect()
}
