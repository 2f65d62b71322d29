// © 2025 the Moonlight project developers
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::discord::utils::responses::{autocomplete_response, message_response};
use twilight_model::application::command::{Command, CommandOptionChoice, CommandOptionChoiceValue, CommandType};
use twilight_model::application::interaction::application_command::{CommandData, CommandOptionValue};
use twilight_model::http::interaction::InteractionResponse;
use twilight_util::builder::command::{CommandBuilder, StringBuilder};

const SETUP_GUIDE_URL: &str = "https://github.com/moonlight-stream/moonlight-docs/wiki/Setup-Guide";
const SECTION_REJECTED: &str = "The requested section of the setup guide isn't accepted";

/// Wiki anchors the command will link to. The section value comes back from
/// the client, so anything outside this list is rejected instead of being
/// interpolated into the URL.
const ALLOWED_SECTIONS: [&str; 7] = [
	"quick-setup-instructions",
	"streaming-over-the-internet",
	"moonlight-client-setup-instructions",
	"additional-requirements-for-hdr-streaming",
	"keyboardmousegamepad-input-options",
	"adding-custom-programs-that-are-not-automatically-found",
	"using-moonlight-to-stream-your-entire-desktop",
];

pub fn command_definition() -> Command {
	let section = StringBuilder::new("section", "A specific section of the setup guide")
		.autocomplete(true)
		.build();
	CommandBuilder::new(
		"setup-guide",
		"Get a link to the Moonlight setup guide",
		CommandType::ChatInput,
	)
	.option(section)
	.build()
}

pub fn handle_command(command_data: &CommandData) -> InteractionResponse {
	let section = command_data.options.first().and_then(|option| match &option.value {
		CommandOptionValue::String(value) => Some(value.as_str()),
		_ => None,
	});

	match section {
		Some(section) if !ALLOWED_SECTIONS.contains(&section) => message_response(SECTION_REJECTED),
		Some(section) => message_response(format!("{}#{}", SETUP_GUIDE_URL, section)),
		None => message_response(SETUP_GUIDE_URL),
	}
}

/// The section list is short and fixed, so autocomplete offers every section
/// regardless of what's been typed.
pub fn handle_autocomplete() -> InteractionResponse {
	let choices = ALLOWED_SECTIONS
		.iter()
		.map(|section| CommandOptionChoice {
			name: String::from(*section),
			name_localizations: None,
			value: CommandOptionChoiceValue::String(String::from(*section)),
		})
		.collect();
	autocomplete_response(choices)
}
