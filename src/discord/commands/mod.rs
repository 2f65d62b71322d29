// © 2025 the Moonlight project developers
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::discord::utils::responses::autocomplete_response;
use crate::discord::{InteractionContext, InteractionOutcome};
use twilight_model::application::command::Command;
use twilight_model::application::interaction::application_command::CommandData;
use twilight_model::id::Id;
use twilight_model::id::marker::GuildMarker;

mod duplicate_message;
mod faq;
mod gamepad_tester;
mod invoke;
mod manage;
mod setup_guide;
mod shortcuts;
mod wiki;

/// The closed set of commands this service registers and answers itself.
/// Routing matches over this enum so a newly added command can't be left out
/// of a dispatch arm.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum KnownCommand {
	Wiki,
	SetupGuide,
	Faq,
	GamepadTester,
	Shortcuts,
	Manage,
	DuplicateMessage,
}

impl KnownCommand {
	fn from_name(name: &str) -> Option<Self> {
		match name {
			"wiki" => Some(Self::Wiki),
			"setup-guide" => Some(Self::SetupGuide),
			"faq" => Some(Self::Faq),
			"gamepadtester" => Some(Self::GamepadTester),
			"shortcuts" => Some(Self::Shortcuts),
			"commands" => Some(Self::Manage),
			"Duplicate message" => Some(Self::DuplicateMessage),
			_ => None,
		}
	}
}

pub fn command_definitions() -> Vec<Command> {
	vec![
		duplicate_message::command_definition(),
		faq::command_definition(),
		gamepad_tester::command_definition(),
		manage::command_definition(),
		setup_guide::command_definition(),
		shortcuts::command_definition(),
		wiki::command_definition(),
	]
}

pub async fn route_command(
	context: &InteractionContext,
	guild_id: Option<Id<GuildMarker>>,
	command_data: &CommandData,
) -> miette::Result<InteractionOutcome> {
	match KnownCommand::from_name(&command_data.name) {
		Some(KnownCommand::Wiki) => Ok(InteractionOutcome::Response(wiki::handle_command())),
		Some(KnownCommand::SetupGuide) => Ok(InteractionOutcome::Response(setup_guide::handle_command(command_data))),
		Some(KnownCommand::Faq) => Ok(InteractionOutcome::Response(faq::handle_command())),
		Some(KnownCommand::GamepadTester) => Ok(InteractionOutcome::Response(gamepad_tester::handle_command())),
		Some(KnownCommand::Shortcuts) => Ok(InteractionOutcome::Response(shortcuts::handle_command())),
		Some(KnownCommand::Manage) => manage::handle_command(context, guild_id, command_data).await,
		Some(KnownCommand::DuplicateMessage) => {
			let response = duplicate_message::handle_command(command_data)?;
			Ok(InteractionOutcome::Response(response))
		}
		// Names we never registered may be per-guild custom commands.
		None => invoke::handle_command(context, guild_id, command_data).await,
	}
}

pub async fn route_autocomplete(
	context: &InteractionContext,
	guild_id: Option<Id<GuildMarker>>,
	command_data: &CommandData,
) -> miette::Result<InteractionOutcome> {
	match KnownCommand::from_name(&command_data.name) {
		Some(KnownCommand::SetupGuide) => Ok(InteractionOutcome::Response(setup_guide::handle_autocomplete())),
		Some(KnownCommand::Manage) => manage::handle_autocomplete(context, guild_id, command_data).await,
		_ => Ok(InteractionOutcome::Response(autocomplete_response(Vec::new()))),
	}
}
