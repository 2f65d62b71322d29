// © 2025 the Moonlight project developers
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::custom_commands::create_command;
use crate::discord::utils::responses::{COMMAND_CREATE_FAILED, GUILD_ONLY_COMMANDS, message_response};
use crate::discord::{InteractionContext, InteractionOutcome};
use twilight_model::application::interaction::modal::ModalInteractionData;
use twilight_model::id::Id;
use twilight_model::id::marker::GuildMarker;

pub async fn handle_modal(
	context: &InteractionContext,
	guild_id: Option<Id<GuildMarker>>,
	modal_data: &ModalInteractionData,
) -> miette::Result<InteractionOutcome> {
	let Some(guild_id) = guild_id else {
		return Ok(InteractionOutcome::Response(message_response(GUILD_ONLY_COMMANDS)));
	};
	let command = match super::validated_command_from_modal(modal_data) {
		Ok(command) => command,
		Err(rejection) => return Ok(InteractionOutcome::Response(message_response(rejection))),
	};

	let content = match create_command(context.registry.as_ref(), context.store.as_ref(), guild_id, &command).await {
		Ok(_) => format!("Created the custom command `/{}`.", command.name),
		Err(error) => {
			tracing::error!(source = ?error, "Failed to create a custom command");
			String::from(COMMAND_CREATE_FAILED)
		}
	};
	Ok(InteractionOutcome::Response(message_response(content)))
}
