use crate::tcg::models::Card;

/// Cards per page; Discord select menus hold at most 25 options.
pub const PAGE_SIZE: usize = 25;

/// Discord limit for select option labels and descriptions.
const OPTION_TEXT_MAX: usize = 100;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

/// One selectable entry on a page. `absolute_index` points into the full result list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageOption {
    pub absolute_index: usize,
    pub label: String,
    pub description: String,
}

pub fn total_pages(len: usize) -> usize {
    len.div_ceil(PAGE_SIZE)
}

fn truncate_str(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_chars - 3).collect();
        format!("{truncated}...")
    }
}

pub fn option_label(card: &Card) -> String {
    let label = format!(
        "{} ({})",
        card.name,
        card.set_name().unwrap_or("Unknown Set")
    );
    truncate_str(&label, OPTION_TEXT_MAX)
}

pub fn option_description(card: &Card) -> String {
    let desc = format!(
        "Reg Mark: {} • Rarity: {}",
        card.regulation_mark.as_deref().unwrap_or("?"),
        card.rarity.as_deref().unwrap_or("Unknown")
    );
    truncate_str(&desc, OPTION_TEXT_MAX)
}

/// Options shown on `page`. A page past the end yields an empty list.
pub fn page_options(results: &[Card], page: usize) -> Vec<PageOption> {
    let start = page.saturating_mul(PAGE_SIZE);
    results
        .iter()
        .enumerate()
        .skip(start)
        .take(PAGE_SIZE)
        .map(|(i, card)| PageOption {
            absolute_index: i,
            label: option_label(card),
            description: option_description(card),
        })
        .collect()
}

/// Move one page in `direction`, staying within `[0, total_pages - 1]`.
pub fn navigate(page: usize, len: usize, direction: Direction) -> usize {
    let total = total_pages(len);
    if total == 0 {
        return page;
    }
    match direction {
        Direction::Previous => page.saturating_sub(1),
        Direction::Next => (page + 1).min(total - 1),
    }
}

pub fn resolve(results: &[Card], absolute_index: usize) -> Option<&Card> {
    results.get(absolute_index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tcg::models::CardSet;

    fn cards(n: usize) -> Vec<Card> {
        (0..n)
            .map(|i| Card {
                id: format!("id-{i}"),
                name: format!("Card {i}"),
                ..Default::default()
            })
            .collect()
    }

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0), 0);
        assert_eq!(total_pages(1), 1);
        assert_eq!(total_pages(25), 1);
        assert_eq!(total_pages(26), 2);
        assert_eq!(total_pages(57), 3);
        assert_eq!(total_pages(250), 10);
    }

    #[test]
    fn test_page_options_slices_by_absolute_index() {
        let results = cards(57);

        let first: Vec<usize> = page_options(&results, 0)
            .iter()
            .map(|o| o.absolute_index)
            .collect();
        assert_eq!(first, (0..25).collect::<Vec<_>>());

        let last: Vec<usize> = page_options(&results, 2)
            .iter()
            .map(|o| o.absolute_index)
            .collect();
        assert_eq!(last, (50..57).collect::<Vec<_>>());

        assert!(page_options(&results, 3).is_empty());
    }

    #[test]
    fn test_page_options_is_repeatable() {
        let results = cards(40);
        assert_eq!(page_options(&results, 1), page_options(&results, 1));
    }

    #[test]
    fn test_option_round_trips_through_resolve() {
        let results = cards(57);
        for page in 0..total_pages(results.len()) {
            for option in page_options(&results, page) {
                let card = resolve(&results, option.absolute_index).unwrap();
                assert_eq!(option.label, option_label(card));
                assert_eq!(card.id, format!("id-{}", option.absolute_index));
            }
        }
        assert!(resolve(&results, 57).is_none());
    }

    #[test]
    fn test_navigate_clamps_at_edges() {
        assert_eq!(navigate(0, 57, Direction::Next), 1);
        assert_eq!(navigate(1, 57, Direction::Next), 2);
        assert_eq!(navigate(2, 57, Direction::Next), 2);
        assert_eq!(navigate(2, 57, Direction::Previous), 1);
        assert_eq!(navigate(0, 57, Direction::Previous), 0);
        assert_eq!(navigate(0, 10, Direction::Next), 0);
    }

    #[test]
    fn test_navigate_empty_results_is_noop() {
        assert_eq!(navigate(0, 0, Direction::Next), 0);
        assert_eq!(navigate(0, 0, Direction::Previous), 0);
    }

    #[test]
    fn test_labels_use_placeholders() {
        let card = Card {
            name: "Pikachu".to_string(),
            ..Default::default()
        };
        assert_eq!(option_label(&card), "Pikachu (Unknown Set)");
        assert_eq!(option_description(&card), "Reg Mark: ? • Rarity: Unknown");

        let card = Card {
            name: "Pikachu".to_string(),
            set: Some(CardSet {
                name: "Base".to_string(),
            }),
            rarity: Some("Common".to_string()),
            regulation_mark: Some("G".to_string()),
            ..Default::default()
        };
        assert_eq!(option_label(&card), "Pikachu (Base)");
        assert_eq!(option_description(&card), "Reg Mark: G • Rarity: Common");
    }

    #[test]
    fn test_long_labels_are_truncated() {
        let card = Card {
            name: "X".repeat(150),
            ..Default::default()
        };
        let label = option_label(&card);
        assert_eq!(label.chars().count(), 100);
        assert!(label.ends_with("..."));
    }
}
