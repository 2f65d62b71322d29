// © 2025 the Moonlight project developers
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::discord::utils::responses::message_response;
use twilight_model::application::command::{Command, CommandType};
use twilight_model::http::interaction::InteractionResponse;
use twilight_util::builder::command::CommandBuilder;

const SHORTCUTS_URL: &str =
	"https://github.com/moonlight-stream/moonlight-docs/wiki/Setup-Guide#keyboardmousegamepad-input-options";

pub fn command_definition() -> Command {
	CommandBuilder::new(
		"shortcuts",
		"Get a link to the list of Moonlight's keyboard shortcuts",
		CommandType::ChatInput,
	)
	.build()
}

pub fn handle_command() -> InteractionResponse {
	message_response(SHORTCUTS_URL)
}
