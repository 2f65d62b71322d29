// © 2025 the Moonlight project developers
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::custom_commands::fetch_record;
use crate::discord::utils::responses::{
	COMMAND_ID_INVALID, COMMAND_NOT_FOUND, INTERNAL_ERROR, message_response, modal_response,
};
use crate::discord::utils::shared_components::custom_command_form;
use crate::discord::{InteractionContext, InteractionOutcome};
use twilight_model::application::command::CommandOption;
use twilight_model::application::interaction::application_command::CommandOptionValue;
use twilight_model::id::Id;
use twilight_model::id::marker::GuildMarker;
use twilight_util::builder::command::{StringBuilder, SubCommandBuilder};

pub fn subcommand_definition() -> CommandOption {
	let id = StringBuilder::new("id", "The ID of the command to update")
		.autocomplete(true)
		.required(true)
		.build();
	SubCommandBuilder::new("update", "Update an existing custom command")
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

	let record = match fetch_record(context.store.as_ref(), guild_id, command_id).await {
		Ok(record) => record,
		Err(error) => {
			tracing::error!(source = ?error, "Failed to read a custom command for `/commands update`");
			return Ok(InteractionOutcome::Response(message_response(INTERNAL_ERROR)));
		}
	};
	let Some((content, metadata)) = record else {
		return Ok(InteractionOutcome::Response(message_response(COMMAND_NOT_FOUND)));
	};

	let response = modal_response(
		format!("update_command:{}", command_id.get()),
		"Update Custom Command",
		custom_command_form(&metadata.name, &metadata.description, &content),
	);
	Ok(InteractionOutcome::Response(response))
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::store::CustomCommandMetadata;
	use crate::test_utils::test_context;
	use twilight_model::channel::message::Component;

	fn response_data(outcome: InteractionOutcome) -> twilight_model::http::interaction::InteractionResponseData {
		let InteractionOutcome::Response(response) = outcome else {
			panic!("expected a response, got {:?}", outcome);
		};
		response.data.unwrap()
	}

	#[tokio::test]
	async fn malformed_ids_are_rejected() {
		let test = test_context();
		let guild_id = Id::new(5);

		let value = super::super::id_subcommand_value("not-a-number");
		let outcome = handle_subcommand(&test.context, guild_id, &value).await.unwrap();
		let data = response_data(outcome);
		assert_eq!(data.content.as_deref(), Some(COMMAND_ID_INVALID));
	}

	#[tokio::test]
	async fn unknown_commands_are_reported() {
		let test = test_context();
		let guild_id = Id::new(5);

		let value = super::super::id_subcommand_value("42");
		let outcome = handle_subcommand(&test.context, guild_id, &value).await.unwrap();
		let data = response_data(outcome);
		assert_eq!(data.content.as_deref(), Some(COMMAND_NOT_FOUND));
	}

	#[tokio::test]
	async fn known_commands_open_a_prefilled_form() {
		let test = test_context();
		let guild_id = Id::new(5);
		test.store.insert(
			"5:42",
			"TCP 47984",
			CustomCommandMetadata {
				name: String::from("ports"),
				description: String::from("List the ports"),
			},
		);

		let value = super::super::id_subcommand_value("42");
		let outcome = handle_subcommand(&test.context, guild_id, &value).await.unwrap();
		let data = response_data(outcome);
		assert_eq!(data.custom_id.as_deref(), Some("update_command:42"));

		let components = data.components.unwrap();
		let Component::ActionRow(name_row) = &components[0] else {
			panic!("expected an action row, got {:?}", components[0]);
		};
		let Component::TextInput(name_input) = &name_row.components[0] else {
			panic!("expected a text input, got {:?}", name_row.components[0]);
		};
		assert_eq!(name_input.value.as_deref(), Some("ports"));
	}
}
