// © 2025 the Moonlight project developers
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::custom_commands::delete_command;
use crate::discord::utils::responses::{COMMAND_DELETE_FAILED, COMMAND_ID_INVALID, message_response};
use crate::discord::{InteractionContext, InteractionOutcome};
use twilight_model::application::command::CommandOption;
use twilight_model::application::interaction::application_command::CommandOptionValue;
use twilight_model::id::Id;
use twilight_model::id::marker::GuildMarker;
use twilight_util::builder::command::{StringBuilder, SubCommandBuilder};

pub fn subcommand_definition() -> CommandOption {
	let id = StringBuilder::new("id", "The ID of the command to delete")
		.autocomplete(true)
		.required(true)
		.build();
	SubCommandBuilder::new("delete", "Delete a custom command")
		.option(id)
		.build()
}

pub async fn handle_subcommand(
	context: &InteractionContext,
	guild_id: Id<GuildMarker>,
	subcommand_value: &CommandOptionValue,
) -> miette::Result<InteractionOutcome> {
	let Some(command_id) = super::parse_command_id_option(subcommand_value)? else {
		return Ok(InteractionOutcome::Response(message_response(COMMAND_ID_INVALID)));
	};

	let content = match delete_command(context.registry.as_ref(), context.store.as_ref(), guild_id, command_id).await {
		Ok(()) => "Deleted the custom command.",
		Err(error) => {
			tracing::error!(source = ?error, "Failed to delete a custom command");
			COMMAND_DELETE_FAILED
		}
	};
	Ok(InteractionOutcome::Response(message_response(content)))
}
