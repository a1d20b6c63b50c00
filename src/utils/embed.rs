use serenity::builder::CreateEmbed;

use crate::tcg::format::Format;

pub const USAGE: &str = "Usage: `/card <format> <card name>` (or `!card <format> <card name>`)";

pub fn format_list() -> String {
    Format::ALL
        .iter()
        .map(|f| format!("`{f}`"))
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn error(message: &str) -> CreateEmbed {
    CreateEmbed::new()
        .title("❌ Error")
        .description(message)
        .color(0xED4245)
}

/// Error embed for rejected input, with the usage hint appended.
pub fn usage_error(message: &str) -> CreateEmbed {
    error(&format!(
        "{message}\n{USAGE}\nFormats: {}",
        format_list()
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_list_names_every_format() {
        assert_eq!(format_list(), "`standard`, `expanded`, `unlimited`");
    }
}
