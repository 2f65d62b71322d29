// © 2025 the Moonlight project developers
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::custom_commands;
use crate::discord::utils::responses::{INTERNAL_ERROR, message_response};
use crate::discord::{InteractionContext, InteractionOutcome};
use twilight_model::application::interaction::application_command::CommandData;
use twilight_model::id::Id;
use twilight_model::id::marker::GuildMarker;

/// Replies with the stored message content for a guild's custom command.
/// Every command name that isn't built in lands here; a command that was
/// never created, or that belongs to another guild, is reported as unknown.
pub async fn handle_command(
	context: &InteractionContext,
	guild_id: Option<Id<GuildMarker>>,
	command_data: &CommandData,
) -> miette::Result<InteractionOutcome> {
	let Some(guild_id) = guild_id else {
		return Ok(InteractionOutcome::UnknownCommand);
	};

	match custom_commands::lookup_content(context.store.as_ref(), guild_id, command_data.id).await {
		Ok(Some(content)) => Ok(InteractionOutcome::Response(message_response(content))),
		Ok(None) => Ok(InteractionOutcome::UnknownCommand),
		Err(error) => {
			tracing::error!(source = ?error, "Failed to look up a custom command");
			Ok(InteractionOutcome::Response(message_response(INTERNAL_ERROR)))
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::store::CustomCommandMetadata;
	use crate::test_utils::{command_data, response_content, test_context};

	#[tokio::test]
	async fn stored_commands_reply_with_their_content() {
		let test_context = test_context();
		test_context
			.store
			.insert("5:42", "hello", CustomCommandMetadata::default());

		let data = command_data("whatever", 42);
		let outcome = handle_command(&test_context.context, Some(Id::new(5)), &data)
			.await
			.unwrap();
		assert_eq!(response_content(&outcome), "hello");
	}

	#[tokio::test]
	async fn other_guilds_commands_are_unknown() {
		let test_context = test_context();
		test_context
			.store
			.insert("5:42", "hello", CustomCommandMetadata::default());

		let data = command_data("whatever", 42);
		let outcome = handle_command(&test_context.context, Some(Id::new(6)), &data)
			.await
			.unwrap();
		assert_eq!(outcome, InteractionOutcome::UnknownCommand);
	}

	#[tokio::test]
	async fn invocations_outside_guilds_are_unknown() {
		let test_context = test_context();
		let data = command_data("whatever", 42);
		let outcome = handle_command(&test_context.context, None, &data).await.unwrap();
		assert_eq!(outcome, InteractionOutcome::UnknownCommand);
	}
}
