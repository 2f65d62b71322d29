// © 2025 the Moonlight project developers
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::discord::utils::responses::message_response;
use twilight_model::application::command::{Command, CommandType};
use twilight_model::http::interaction::InteractionResponse;
use twilight_util::builder::command::CommandBuilder;

const GAMEPAD_TESTER_MESSAGE: &str =
	"Please open this on your host **while** being connected with Moonlight:\nhttps://gamepad-tester.com/";

pub fn command_definition() -> Command {
	CommandBuilder::new(
		"gamepadtester",
		"Get a link to a tool for testing gamepad input on the host",
		CommandType::ChatInput,
	)
	.build()
}

pub fn handle_command() -> InteractionResponse {
	message_response(GAMEPAD_TESTER_MESSAGE)
}
