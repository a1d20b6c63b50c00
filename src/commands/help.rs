use poise::CreateReply;
use serenity::builder::CreateEmbed;

use crate::utils::embed::{format_list, USAGE};
use crate::{Context, Error};

async fn help_impl(ctx: Context<'_>) -> Result<(), Error> {
    let commands = "\
`/card <format> <name>` (`!card`): search for a card and pick it from a menu
`/help` (`!help`): show this message";

    let selection = "\
Matches are listed 25 at a time. Use **Previous**/**Next** to page and pick a card \
from the menu to see its details. A result list expires after 10 minutes.";

    let embed = CreateEmbed::new()
        .title("Card Bot help")
        .description(USAGE)
        .field("Commands", commands, false)
        .field("Formats", format_list(), false)
        .field("Selecting a card", selection, false)
        .color(0x5865F2);

    ctx.send(CreateReply::default().embed(embed)).await?;
    Ok(())
}

/// Learn how to use the bot and its commands
#[poise::command(slash_command, prefix_command)]
pub async fn help(ctx: Context<'_>) -> Result<(), Error> {
    help_impl(ctx).await
}
