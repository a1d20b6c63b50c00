use poise::serenity_prelude as serenity;
use serenity::builder::{
    CreateActionRow, CreateEmbed, CreateInteractionResponse, CreateInteractionResponseMessage,
};
use serenity::model::application::{ComponentInteraction, ComponentInteractionDataKind};

use crate::dispatch::{self, ComponentReply};
use crate::tcg::embed;
use crate::utils::{self, components};
use crate::{Data, Error};

const EXPIRED_MESSAGE: &str =
    "This card list has expired. Could not retrieve card data, please search again.";
const NOT_OWNER_MESSAGE: &str = "This menu belongs to someone else. Run `/card` to search yourself.";

async fn respond_ephemeral(
    ctx: &serenity::Context,
    interaction: &ComponentInteraction,
    message: &str,
) -> Result<(), Error> {
    let response = CreateInteractionResponse::Message(
        CreateInteractionResponseMessage::new()
            .embed(utils::embed::error(message))
            .ephemeral(true),
    );
    interaction.create_response(&ctx.http, response).await?;
    Ok(())
}

async fn update_message(
    ctx: &serenity::Context,
    interaction: &ComponentInteraction,
    embed: CreateEmbed,
    components: Vec<CreateActionRow>,
) -> Result<(), Error> {
    let response = CreateInteractionResponse::UpdateMessage(
        CreateInteractionResponseMessage::new()
            .embed(embed)
            .components(components),
    );
    interaction.create_response(&ctx.http, response).await?;
    Ok(())
}

fn selected_values(kind: &ComponentInteractionDataKind) -> &[String] {
    match kind {
        ComponentInteractionDataKind::StringSelect { values } => values,
        _ => &[],
    }
}

pub async fn handle(
    ctx: &serenity::Context,
    interaction: &ComponentInteraction,
    data: &Data,
) -> Result<(), Error> {
    let values = selected_values(&interaction.data.kind);
    let Some(action) = dispatch::parse_component(&interaction.data.custom_id, values) else {
        return Ok(());
    };

    let user_id = interaction.user.id;
    match dispatch::apply_component(&data.sessions, user_id, action).await {
        ComponentReply::Page(session) => {
            update_message(
                ctx,
                interaction,
                embed::search_results(&session),
                components::selection_components(&session, user_id),
            )
            .await?;
        }
        ComponentReply::Selected { card, format } => {
            tracing::info!(%user_id, card = %card.name, "card selected");
            update_message(ctx, interaction, embed::card_detail(&card, format), vec![]).await?;
        }
        ComponentReply::Expired => {
            respond_ephemeral(ctx, interaction, EXPIRED_MESSAGE).await?;
        }
        ComponentReply::NotOwner => {
            respond_ephemeral(ctx, interaction, NOT_OWNER_MESSAGE).await?;
        }
    }

    Ok(())
}
