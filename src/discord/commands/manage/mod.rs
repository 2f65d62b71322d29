// © 2025 the Moonlight project developers
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::discord::utils::responses::{GUILD_ONLY_COMMANDS, message_response};
use crate::discord::{InteractionContext, InteractionOutcome};
use miette::bail;
use twilight_model::application::command::{Command, CommandType};
use twilight_model::application::interaction::InteractionContextType;
use twilight_model::application::interaction::application_command::{CommandData, CommandOptionValue};
use twilight_model::guild::Permissions;
use twilight_model::id::Id;
use twilight_model::id::marker::{CommandMarker, GuildMarker};
use twilight_util::builder::command::CommandBuilder;

mod autocomplete;
mod create;
mod delete;
mod update;

pub use autocomplete::handle_autocomplete;

pub fn command_definition() -> Command {
	CommandBuilder::new("commands", "Manage this server's custom commands", CommandType::ChatInput)
		.contexts([InteractionContextType::Guild])
		.default_member_permissions(Permissions::MANAGE_GUILD)
		.option(create::subcommand_definition())
		.option(update::subcommand_definition())
		.option(delete::subcommand_definition())
		.build()
}

pub async fn handle_command(
	context: &InteractionContext,
	guild_id: Option<Id<GuildMarker>>,
	command_data: &CommandData,
) -> miette::Result<InteractionOutcome> {
	let Some(guild_id) = guild_id else {
		return Ok(InteractionOutcome::Response(message_response(GUILD_ONLY_COMMANDS)));
	};
	let Some(subcommand_data) = command_data.options.first() else {
		bail!("`/commands` invoked with no subcommand: {:?}", command_data);
	};

	match subcommand_data.name.as_str() {
		"create" => Ok(InteractionOutcome::Response(create::handle_subcommand())),
		"update" => update::handle_subcommand(context, guild_id, &subcommand_data.value).await,
		"delete" => delete::handle_subcommand(context, guild_id, &subcommand_data.value).await,
		_ => bail!(
			"Unknown `/commands` subcommand encountered: {}\n{:?}",
			subcommand_data.name,
			command_data
		),
	}
}

/// Reads the `id` option out of a subcommand's value. A string that doesn't
/// parse as a snowflake comes back as `None` so callers can tell the user;
/// a structurally wrong payload is an error.
fn parse_command_id_option(subcommand_value: &CommandOptionValue) -> miette::Result<Option<Id<CommandMarker>>> {
	let CommandOptionValue::SubCommand(options) = subcommand_value else {
		bail!(
			"Command data is malformed; expected a subcommand value: {:?}",
			subcommand_value
		);
	};
	let Some(id_option) = options.iter().find(|option| option.name == "id") else {
		bail!(
			"Command data is malformed; expected an `id` option: {:?}",
			subcommand_value
		);
	};
	let CommandOptionValue::String(raw_id) = &id_option.value else {
		bail!(
			"Command data is malformed; expected `id` to be a string: {:?}",
			subcommand_value
		);
	};
	let Ok(raw_id) = raw_id.parse::<u64>() else {
		return Ok(None);
	};
	Ok(Id::new_checked(raw_id))
}

#[cfg(test)]
fn id_subcommand_value(raw_id: &str) -> CommandOptionValue {
	use twilight_model::application::interaction::application_command::CommandDataOption;

	CommandOptionValue::SubCommand(vec![CommandDataOption {
		name: String::from("id"),
		value: CommandOptionValue::String(String::from(raw_id)),
	}])
}
