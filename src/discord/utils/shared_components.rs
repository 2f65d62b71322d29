// © 2025 the Moonlight project developers
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use twilight_model::channel::message::component::{ActionRow, Component, TextInput, TextInputStyle};

/// Modal form rows for entering a custom command's definition. Field limits
/// match what Discord accepts for command names, command descriptions, and
/// message content. Empty strings leave the corresponding field blank.
pub fn custom_command_form(name: &str, description: &str, content: &str) -> Vec<Component> {
	let name_input = Component::TextInput(TextInput {
		custom_id: String::from("name"),
		label: String::from("Name"),
		max_length: Some(32),
		min_length: Some(1),
		placeholder: None,
		required: Some(true),
		style: TextInputStyle::Short,
		value: prefill(name),
	});
	let description_input = Component::TextInput(TextInput {
		custom_id: String::from("description"),
		label: String::from("Description"),
		max_length: Some(100),
		min_length: Some(1),
		placeholder: None,
		required: Some(true),
		style: TextInputStyle::Short,
		value: prefill(description),
	});
	let content_input = Component::TextInput(TextInput {
		custom_id: String::from("content"),
		label: String::from("Response message"),
		max_length: Some(2000),
		min_length: Some(1),
		placeholder: None,
		required: Some(true),
		style: TextInputStyle::Paragraph,
		value: prefill(content),
	});

	vec![
		Component::ActionRow(ActionRow {
			components: vec![name_input],
		}),
		Component::ActionRow(ActionRow {
			components: vec![description_input],
		}),
		Component::ActionRow(ActionRow {
			components: vec![content_input],
		}),
	]
}

fn prefill(value: &str) -> Option<String> {
	if value.is_empty() { None } else { Some(String::from(value)) }
}
