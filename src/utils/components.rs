use serenity::builder::{
    CreateActionRow, CreateButton, CreateSelectMenu, CreateSelectMenuKind,
    CreateSelectMenuOption,
};
use serenity::model::application::ButtonStyle;
use serenity::model::id::UserId;

use crate::dispatch::{component_id, NEXT_PAGE, PREVIOUS_PAGE, SELECT_MENU};
use crate::session::Session;

pub fn menu_placeholder(session: &Session) -> String {
    let options = session.page_options();
    match (options.first(), options.last()) {
        (Some(first), Some(last)) => format!(
            "Choose a card ({}-{} of {})",
            first.absolute_index + 1,
            last.absolute_index + 1,
            session.results.len()
        ),
        _ => "Choose a card".to_string(),
    }
}

fn card_select_menu(session: &Session, owner: UserId) -> CreateActionRow {
    let options: Vec<CreateSelectMenuOption> = session
        .page_options()
        .into_iter()
        .map(|opt| {
            CreateSelectMenuOption::new(opt.label, opt.absolute_index.to_string())
                .description(opt.description)
        })
        .collect();

    let menu = CreateSelectMenu::new(
        component_id(SELECT_MENU, owner, session),
        CreateSelectMenuKind::String { options },
    )
    .placeholder(menu_placeholder(session));

    CreateActionRow::SelectMenu(menu)
}

fn page_buttons(session: &Session, owner: UserId) -> CreateActionRow {
    let previous = CreateButton::new(component_id(PREVIOUS_PAGE, owner, session))
        .label("Previous")
        .emoji('◀')
        .style(ButtonStyle::Secondary)
        .disabled(!session.has_previous());

    let next = CreateButton::new(component_id(NEXT_PAGE, owner, session))
        .label("Next")
        .emoji('▶')
        .style(ButtonStyle::Secondary)
        .disabled(!session.has_next());

    CreateActionRow::Buttons(vec![previous, next])
}

/// Select menu for the current page, plus paging buttons when there is more than one page.
pub fn selection_components(session: &Session, owner: UserId) -> Vec<CreateActionRow> {
    let mut rows = vec![card_select_menu(session, owner)];
    if session.total_pages() > 1 {
        rows.push(page_buttons(session, owner));
    }
    rows
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::tcg::format::Format;
    use crate::tcg::models::Card;

    fn session(len: usize, page: usize) -> Session {
        let results: Vec<Card> = (0..len)
            .map(|i| Card {
                name: format!("Card {i}"),
                ..Default::default()
            })
            .collect();
        Session {
            generation: 0,
            results: Arc::from(results),
            current_page: page,
            format: Format::Standard,
            query: "Card".to_string(),
        }
    }

    #[test]
    fn test_single_page_has_no_buttons() {
        let rows = selection_components(&session(25, 0), UserId::new(1));
        assert_eq!(rows.len(), 1);
    }

    #[test]
    fn test_multiple_pages_add_buttons() {
        let rows = selection_components(&session(26, 0), UserId::new(1));
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn test_placeholder_shows_range() {
        assert_eq!(menu_placeholder(&session(57, 0)), "Choose a card (1-25 of 57)");
        assert_eq!(menu_placeholder(&session(57, 2)), "Choose a card (51-57 of 57)");
    }
}
