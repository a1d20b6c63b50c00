use poise::CreateReply;
use serenity::builder::CreateEmbed;

use crate::dispatch::{self, SearchError, SearchOutcome};
use crate::session::cooldown::remaining_secs;
use crate::tcg::embed;
use crate::utils::{self, components};
use crate::{Context, Error};

async fn reply_error(ctx: Context<'_>, embed: CreateEmbed) -> Result<(), Error> {
    ctx.send(CreateReply::default().embed(embed).ephemeral(true))
        .await?;
    Ok(())
}

async fn card_impl(ctx: Context<'_>, format: String, name: String) -> Result<(), Error> {
    let data = ctx.data();
    let user_id = ctx.author().id;

    let request = match dispatch::parse_search(&format, &name) {
        Ok(request) => request,
        Err(e) => {
            return reply_error(ctx, utils::embed::usage_error(&e.to_string())).await;
        }
    };

    if let Err(remaining) = data.cooldowns.try_start(user_id) {
        let e = SearchError::CoolingDown(remaining_secs(remaining));
        return reply_error(ctx, utils::embed::error(&format!("⏳ {e}"))).await;
    }

    ctx.defer().await?;

    let cards = match data.card_client.search(&request.query).await {
        Ok(cards) => cards,
        Err(e) => {
            tracing::warn!(%user_id, query = %request.query, "card lookup failed: {e}");
            let e = SearchError::from(e);
            ctx.say(e.to_string()).await?;
            return Ok(());
        }
    };

    match dispatch::complete_search(&data.sessions, user_id, request, cards).await {
        SearchOutcome::NoResults(request) => {
            ctx.say(embed::no_results(&request.query, request.format))
                .await?;
        }
        SearchOutcome::Started(session) => {
            ctx.send(
                CreateReply::default()
                    .embed(embed::search_results(&session))
                    .components(components::selection_components(&session, user_id)),
            )
            .await?;
        }
    }

    Ok(())
}

/// Search for a card by name and format
#[poise::command(slash_command, prefix_command)]
pub async fn card(
    ctx: Context<'_>,
    #[description = "Format: standard, expanded or unlimited"] format: String,
    #[description = "The name of the card"]
    #[rest]
    name: String,
) -> Result<(), Error> {
    card_impl(ctx, format, name).await
}
