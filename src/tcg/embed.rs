use serenity::builder::{CreateEmbed, CreateEmbedFooter};

use super::format::Format;
use super::models::Card;
use crate::session::Session;

/// Consistent color for all card embeds (card-back yellow).
const CARD_COLOR: u32 = 0xFFCB05;

/// `Supertype – Subtype, Subtype`, or `None` when there are no subtypes.
pub fn type_line(card: &Card) -> String {
    let subtypes = if card.subtypes.is_empty() {
        "None".to_string()
    } else {
        card.subtypes.join(", ")
    };
    format!("{} – {subtypes}", card.supertype)
}

pub fn regulation_line(card: &Card, format: Format) -> String {
    let mark = card.regulation_mark.as_deref().unwrap_or("Unknown");
    if format == Format::Standard {
        format!("{mark} (Standard Legal ✅)")
    } else {
        mark.to_string()
    }
}

/// Card detail embed for a resolved selection.
pub fn card_detail(card: &Card, format: Format) -> CreateEmbed {
    let mut embed = CreateEmbed::new()
        .title(&card.name)
        .field("Set", card.set_name().unwrap_or("Unknown Set"), true)
        .field("Type", type_line(card), true)
        .field("Regulation Mark", regulation_line(card, format), false)
        .color(CARD_COLOR);

    if let Some(url) = card.image_url() {
        embed = embed.image(url);
    }
    embed
}

pub fn results_summary(session: &Session) -> String {
    format!(
        "Found **{}** card(s) for \"{}\" in {}. Select one below:",
        session.results.len(),
        session.query,
        session.format
    )
}

pub fn page_footer(session: &Session) -> String {
    format!(
        "Page {}/{}",
        session.current_page + 1,
        session.total_pages()
    )
}

/// Header embed shown above the selection menu.
pub fn search_results(session: &Session) -> CreateEmbed {
    CreateEmbed::new()
        .title(format!("Card search: {}", session.query))
        .description(results_summary(session))
        .color(CARD_COLOR)
        .footer(CreateEmbedFooter::new(page_footer(session)))
}

pub fn no_results(query: &str, format: Format) -> String {
    format!("No legal cards found for `{query}` in {format}.")
}
