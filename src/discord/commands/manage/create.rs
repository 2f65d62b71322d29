// © 2025 the Moonlight project developers
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::discord::utils::responses::modal_response;
use crate::discord::utils::shared_components::custom_command_form;
use twilight_model::application::command::CommandOption;
use twilight_model::http::interaction::InteractionResponse;
use twilight_util::builder::command::SubCommandBuilder;

pub fn subcommand_definition() -> CommandOption {
	SubCommandBuilder::new("create", "Create a new custom command").build()
}

pub fn handle_subcommand() -> InteractionResponse {
	modal_response("create_command", "Create Custom Command", custom_command_form("", "", ""))
}

#[cfg(test)]
mod tests {
	use super::*;
	use twilight_model::channel::message::Component;
	use twilight_model::http::interaction::InteractionResponseType;

	#[test]
	fn create_opens_an_empty_form() {
		let response = handle_subcommand();
		assert_eq!(response.kind, InteractionResponseType::Modal);

		let data = response.data.unwrap();
		assert_eq!(data.custom_id.as_deref(), Some("create_command"));
		assert_eq!(data.title.as_deref(), Some("Create Custom Command"));

		let components = data.components.unwrap();
		assert_eq!(components.len(), 3);
		for component in &components {
			let Component::ActionRow(row) = component else {
				panic!("expected an action row, got {:?}", component);
			};
			let Component::TextInput(input) = &row.components[0] else {
				panic!("expected a text input, got {:?}", row.components[0]);
			};
			assert_eq!(input.value, None);
		}
	}
}
