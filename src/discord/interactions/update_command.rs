// © 2025 the Moonlight project developers
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::custom_commands::update_command;
use crate::discord::utils::responses::{COMMAND_UPDATE_FAILED, GUILD_ONLY_COMMANDS, message_response};
use crate::discord::{InteractionContext, InteractionOutcome};
use miette::bail;
use twilight_model::application::interaction::modal::ModalInteractionData;
use twilight_model::id::Id;
use twilight_model::id::marker::GuildMarker;

pub async fn handle_modal(
	context: &InteractionContext,
	guild_id: Option<Id<GuildMarker>>,
	command_id: &str,
	modal_data: &ModalInteractionData,
) -> miette::Result<InteractionOutcome> {
	let Some(guild_id) = guild_id else {
		return Ok(InteractionOutcome::Response(message_response(GUILD_ONLY_COMMANDS)));
	};
	// The ID comes from a modal we produced, so a bad one is our bug.
	let Ok(command_id) = command_id.parse::<u64>() else {
		bail!("Update modal submitted with a malformed command ID: {}", command_id);
	};
	let Some(command_id) = Id::new_checked(command_id) else {
		bail!("Update modal submitted with a zero command ID");
	};
	let command = match super::validated_command_from_modal(modal_data) {
		Ok(command) => command,
		Err(rejection) => return Ok(InteractionOutcome::Response(message_response(rejection))),
	};

	let content = match update_command(
		context.registry.as_ref(),
		context.store.as_ref(),
		guild_id,
		command_id,
		&command,
	)
	.await
	{
		Ok(()) => format!("Updated the custom command `/{}`.", command.name),
		Err(error) => {
			tracing::error!(source = ?error, "Failed to update a custom command");
			String::from(COMMAND_UPDATE_FAILED)
		}
	};
	Ok(InteractionOutcome::Response(message_response(content)))
}
