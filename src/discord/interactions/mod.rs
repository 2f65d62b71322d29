// © 2025 the Moonlight project developers
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::custom_commands::{NewCustomCommand, is_reserved_name, normalize_command_name};
use crate::discord::utils::responses::{
	COMMAND_CONTENT_INVALID, COMMAND_DESCRIPTION_INVALID, COMMAND_NAME_EMPTY, COMMAND_NAME_INVALID,
	COMMAND_NAME_RESERVED,
};
use crate::discord::{InteractionContext, InteractionOutcome};
use miette::bail;
use twilight_model::application::interaction::modal::ModalInteractionData;
use twilight_model::id::Id;
use twilight_model::id::marker::GuildMarker;

mod create_command;
mod update_command;

pub async fn route_modal_submit(
	context: &InteractionContext,
	guild_id: Option<Id<GuildMarker>>,
	modal_data: &ModalInteractionData,
) -> miette::Result<InteractionOutcome> {
	if modal_data.custom_id == "create_command" {
		return create_command::handle_modal(context, guild_id, modal_data).await;
	}
	if let Some(command_id) = modal_data.custom_id.strip_prefix("update_command:") {
		return update_command::handle_modal(context, guild_id, command_id, modal_data).await;
	}
	bail!("Received modal submission with an unrecognized ID: {}", modal_data.custom_id);
}

fn modal_field(modal_data: &ModalInteractionData, field_id: &str) -> String {
	for action_row in modal_data.components.iter() {
		for component in action_row.components.iter() {
			if component.custom_id == field_id {
				return component.value.clone().unwrap_or_default();
			}
		}
	}
	String::new()
}

/// Pulls the command fields out of a submitted form and checks them against
/// Discord's limits. A rejection is a message to show the submitter.
fn validated_command_from_modal(modal_data: &ModalInteractionData) -> Result<NewCustomCommand, &'static str> {
	let name = normalize_command_name(&modal_field(modal_data, "name"));
	let description = modal_field(modal_data, "description");
	let content = modal_field(modal_data, "content");

	if name.is_empty() {
		return Err(COMMAND_NAME_EMPTY);
	}
	if is_reserved_name(&name) {
		return Err(COMMAND_NAME_RESERVED);
	}
	if twilight_validate::command::chat_input_name(&name).is_err() {
		return Err(COMMAND_NAME_INVALID);
	}
	if twilight_validate::command::description(&description).is_err() {
		return Err(COMMAND_DESCRIPTION_INVALID);
	}
	if twilight_validate::message::content(&content).is_err() {
		return Err(COMMAND_CONTENT_INVALID);
	}

	Ok(NewCustomCommand {
		name,
		description,
		content,
	})
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::test_utils::modal_data;

	#[test]
	fn submitted_fields_are_validated_in_form_order() {
		let data = modal_data(
			"create_command",
			&[("name", "My Ports"), ("description", "List the ports"), ("content", "TCP 47984")],
		);
		let command = validated_command_from_modal(&data).unwrap();
		assert_eq!(command.name, "my-ports");
		assert_eq!(command.description, "List the ports");
		assert_eq!(command.content, "TCP 47984");
	}

	#[test]
	fn blank_names_are_rejected() {
		let data = modal_data("create_command", &[("name", "   "), ("description", "d"), ("content", "c")]);
		assert_eq!(validated_command_from_modal(&data), Err(COMMAND_NAME_EMPTY));
	}

	#[test]
	fn reserved_names_are_rejected() {
		let data = modal_data(
			"create_command",
			&[("name", "Setup  Guide"), ("description", "d"), ("content", "c")],
		);
		assert_eq!(validated_command_from_modal(&data), Err(COMMAND_NAME_RESERVED));
	}

	#[test]
	fn overlong_names_are_rejected() {
		let name = "a".repeat(40);
		let data = modal_data("create_command", &[("name", &name), ("description", "d"), ("content", "c")]);
		assert_eq!(validated_command_from_modal(&data), Err(COMMAND_NAME_INVALID));
	}

	#[test]
	fn blank_descriptions_are_rejected() {
		let data = modal_data("create_command", &[("name", "ports"), ("description", ""), ("content", "c")]);
		assert_eq!(validated_command_from_modal(&data), Err(COMMAND_DESCRIPTION_INVALID));
	}

	#[test]
	fn oversized_content_is_rejected() {
		let content = "x".repeat(2001);
		let data = modal_data(
			"create_command",
			&[("name", "ports"), ("description", "d"), ("content", &content)],
		);
		assert_eq!(validated_command_from_modal(&data), Err(COMMAND_CONTENT_INVALID));
	}
}
