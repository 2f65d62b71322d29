// © 2025 the Moonlight project developers
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::config::ConfigData;
use crate::discord::registry::CommandRegistry;
use crate::discord::utils::responses::pong_response;
use crate::store::CommandStore;
use miette::{IntoDiagnostic, bail};
use std::sync::Arc;
use twilight_http::client::Client;
use twilight_model::application::interaction::{Interaction, InteractionData, InteractionType};
use twilight_model::http::interaction::InteractionResponse;
use twilight_model::id::Id;
use twilight_model::id::marker::ApplicationMarker;

pub mod commands;
pub mod interactions;
pub mod registry;
pub mod utils;

/// Shared handles interaction handlers work through.
#[derive(Clone)]
pub struct InteractionContext {
	pub registry: Arc<dyn CommandRegistry>,
	pub store: Arc<dyn CommandStore>,
}

/// What an interaction resolved to. The web layer turns responses into JSON
/// bodies and the unknown variants into client errors.
#[derive(Clone, Debug, PartialEq)]
pub enum InteractionOutcome {
	Response(InteractionResponse),
	UnknownCommand,
	UnknownInteractionType,
}

pub fn set_up_client(config: &ConfigData) -> Arc<Client> {
	Arc::new(Client::new(config.discord.bot_token.clone()))
}

/// Registers the built-in commands globally. Run at startup so Discord's
/// command list tracks the handlers this revision actually has.
pub async fn register_commands(http_client: &Arc<Client>, application_id: Id<ApplicationMarker>) -> miette::Result<()> {
	let interaction_client = http_client.interaction(application_id);
	let commands = commands::command_definitions();
	interaction_client
		.set_global_commands(&commands)
		.await
		.into_diagnostic()?;
	Ok(())
}

pub async fn route_interaction(
	context: &InteractionContext,
	interaction: &Interaction,
) -> miette::Result<InteractionOutcome> {
	match interaction.kind {
		InteractionType::Ping => Ok(InteractionOutcome::Response(pong_response())),
		InteractionType::ApplicationCommand => {
			let Some(InteractionData::ApplicationCommand(command_data)) = &interaction.data else {
				bail!("Command interaction arrived without command data: {:?}", interaction);
			};
			commands::route_command(context, interaction.guild_id, command_data).await
		}
		InteractionType::ApplicationCommandAutocomplete => {
			let Some(InteractionData::ApplicationCommand(command_data)) = &interaction.data else {
				bail!("Autocomplete interaction arrived without command data: {:?}", interaction);
			};
			commands::route_autocomplete(context, interaction.guild_id, command_data).await
		}
		InteractionType::ModalSubmit => {
			let Some(InteractionData::ModalSubmit(modal_data)) = &interaction.data else {
				bail!("Modal interaction arrived without modal data: {:?}", interaction);
			};
			interactions::route_modal_submit(context, interaction.guild_id, modal_data).await
		}
		_ => Ok(InteractionOutcome::UnknownInteractionType),
	}
}
