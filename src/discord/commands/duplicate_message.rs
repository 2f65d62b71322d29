// © 2025 the Moonlight project developers
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::discord::utils::responses::message_response;
use miette::bail;
use twilight_mention::fmt::Mention;
use twilight_model::application::command::{Command, CommandType};
use twilight_model::application::interaction::application_command::CommandData;
use twilight_model::http::interaction::InteractionResponse;
use twilight_model::id::Id;
use twilight_model::id::marker::MessageMarker;
use twilight_util::builder::command::CommandBuilder;

pub fn command_definition() -> Command {
	// Message commands carry an empty description.
	CommandBuilder::new("Duplicate message", "", CommandType::Message).build()
}

/// Asks the author of the targeted message not to crosspost. The author comes
/// out of the interaction's resolved data, so no extra API call is needed.
pub fn handle_command(command_data: &CommandData) -> miette::Result<InteractionResponse> {
	let Some(target_id) = command_data.target_id else {
		bail!("Duplicate message command arrived without a target: {:?}", command_data);
	};
	let message_id: Id<MessageMarker> = target_id.cast();
	let Some(resolved) = &command_data.resolved else {
		bail!("Duplicate message command arrived without resolved data: {:?}", command_data);
	};
	let Some(message) = resolved.messages.get(&message_id) else {
		bail!("Duplicate message target {} missing from resolved data", message_id);
	};

	Ok(message_response(format!(
		"{} Please don't post your message in multiple channels",
		message.author.id.mention()
	)))
}
