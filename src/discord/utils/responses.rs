// © 2025 the Moonlight project developers
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use twilight_model::application::command::CommandOptionChoice;
use twilight_model::channel::message::Component;
use twilight_model::http::interaction::{InteractionResponse, InteractionResponseType};
use twilight_util::builder::InteractionResponseDataBuilder;

pub const GUILD_ONLY_COMMANDS: &str = "Custom commands can only be managed in a server.";
pub const COMMAND_NAME_EMPTY: &str = "The command needs a name.";
pub const COMMAND_NAME_RESERVED: &str = "That command name is reserved for one of the built-in commands.";
pub const COMMAND_NAME_INVALID: &str =
	"Discord doesn't allow that command name. Names are limited to 32 characters of letters, numbers, and dashes.";
pub const COMMAND_DESCRIPTION_INVALID: &str = "The description must be between 1 and 100 characters.";
pub const COMMAND_CONTENT_INVALID: &str =
	"The response message must fit in a single Discord message (2000 characters).";
pub const COMMAND_ID_INVALID: &str = "That isn't a valid command ID.";
pub const COMMAND_NOT_FOUND: &str = "No custom command with that ID exists in this server.";
pub const COMMAND_CREATE_FAILED: &str = "The command couldn't be created. Please try again later.";
pub const COMMAND_UPDATE_FAILED: &str = "The command couldn't be updated. Please try again later.";
pub const COMMAND_DELETE_FAILED: &str = "The command couldn't be deleted. Please try again later.";
pub const INTERNAL_ERROR: &str = "An internal error occurred handling this command.";

pub fn message_response(content: impl Into<String>) -> InteractionResponse {
	let data = InteractionResponseDataBuilder::new().content(content).build();
	InteractionResponse {
		kind: InteractionResponseType::ChannelMessageWithSource,
		data: Some(data),
	}
}

pub fn pong_response() -> InteractionResponse {
	InteractionResponse {
		kind: InteractionResponseType::Pong,
		data: None,
	}
}

pub fn autocomplete_response(choices: Vec<CommandOptionChoice>) -> InteractionResponse {
	let data = InteractionResponseDataBuilder::new().choices(choices).build();
	InteractionResponse {
		kind: InteractionResponseType::ApplicationCommandAutocompleteResult,
		data: Some(data),
	}
}

pub fn modal_response(
	custom_id: impl Into<String>,
	title: impl Into<String>,
	components: Vec<Component>,
) -> InteractionResponse {
	let data = InteractionResponseDataBuilder::new()
		.custom_id(custom_id)
		.title(title)
		.components(components)
		.build();
	InteractionResponse {
		kind: InteractionResponseType::Modal,
		data: Some(data),
	}
}
