// © 2025 the Moonlight project developers
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::custom_commands::{guild_prefix, list_for_guild};
use crate::discord::utils::responses::autocomplete_response;
use crate::discord::{InteractionContext, InteractionOutcome};
use twilight_model::application::command::{CommandOptionChoice, CommandOptionChoiceValue};
use twilight_model::application::interaction::application_command::{CommandData, CommandOptionValue};
use twilight_model::id::Id;
use twilight_model::id::marker::GuildMarker;

pub async fn handle_autocomplete(
	context: &InteractionContext,
	guild_id: Option<Id<GuildMarker>>,
	command_data: &CommandData,
) -> miette::Result<InteractionOutcome> {
	let Some(guild_id) = guild_id else {
		return Ok(InteractionOutcome::Response(autocomplete_response(Vec::new())));
	};

	let keys = match list_for_guild(context.store.as_ref(), guild_id).await {
		Ok(keys) => keys,
		Err(error) => {
			tracing::error!(source = ?error, "Failed to list custom commands for autocomplete");
			return Ok(InteractionOutcome::Response(autocomplete_response(Vec::new())));
		}
	};

	let partial = focused_option_value(command_data).unwrap_or_default();
	let prefix = guild_prefix(guild_id);
	let choices: Vec<CommandOptionChoice> = keys
		.iter()
		.filter_map(|key| {
			let command_id = key.name.strip_prefix(&prefix)?;
			let name = match &key.metadata {
				Some(metadata) if !metadata.name.is_empty() => metadata.name.clone(),
				_ => String::from(command_id),
			};
			if !name.contains(&partial) {
				return None;
			}
			Some(CommandOptionChoice {
				name,
				name_localizations: None,
				value: CommandOptionChoiceValue::String(String::from(command_id)),
			})
		})
		.take(25) // Discord accepts at most 25 choices
		.collect();

	Ok(InteractionOutcome::Response(autocomplete_response(choices)))
}

fn focused_option_value(command_data: &CommandData) -> Option<String> {
	for option in &command_data.options {
		match &option.value {
			CommandOptionValue::SubCommand(options) | CommandOptionValue::SubCommandGroup(options) => {
				for option in options {
					if let CommandOptionValue::Focused(partial, _) = &option.value {
						return Some(partial.clone());
					}
				}
			}
			CommandOptionValue::Focused(partial, _) => return Some(partial.clone()),
			_ => (),
		}
	}
	None
}
