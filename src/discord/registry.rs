// © 2025 the Moonlight project developers
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use async_trait::async_trait;
use miette::{IntoDiagnostic, Result, bail};
use std::sync::Arc;
use twilight_http::client::Client;
use twilight_model::id::Id;
use twilight_model::id::marker::{ApplicationMarker, CommandMarker, GuildMarker};

/// Guild command registration calls against the Discord API. Split behind a
/// trait so command management can run against a recording double in tests.
#[async_trait]
pub trait CommandRegistry: Send + Sync {
	/// Registers a new chat input command and returns the ID Discord assigned
	/// to it.
	async fn create_command(
		&self,
		guild_id: Id<GuildMarker>,
		name: &str,
		description: &str,
	) -> Result<Id<CommandMarker>>;

	async fn update_command(
		&self,
		guild_id: Id<GuildMarker>,
		command_id: Id<CommandMarker>,
		name: &str,
		description: &str,
	) -> Result<()>;

	async fn delete_command(&self, guild_id: Id<GuildMarker>, command_id: Id<CommandMarker>) -> Result<()>;
}

pub struct DiscordCommandRegistry {
	http_client: Arc<Client>,
	application_id: Id<ApplicationMarker>,
}

impl DiscordCommandRegistry {
	pub fn new(http_client: Arc<Client>, application_id: Id<ApplicationMarker>) -> Self {
		Self {
			http_client,
			application_id,
		}
	}
}

#[async_trait]
impl CommandRegistry for DiscordCommandRegistry {
	async fn create_command(
		&self,
		guild_id: Id<GuildMarker>,
		name: &str,
		description: &str,
	) -> Result<Id<CommandMarker>> {
		let interaction_client = self.http_client.interaction(self.application_id);
		let command = interaction_client
			.create_guild_command(guild_id)
			.chat_input(name, description)
			.await
			.into_diagnostic()?
			.model()
			.await
			.into_diagnostic()?;
		let Some(command_id) = command.id else {
			bail!("Discord returned a created command without an ID: {:?}", command);
		};
		Ok(command_id)
	}

	async fn update_command(
		&self,
		guild_id: Id<GuildMarker>,
		command_id: Id<CommandMarker>,
		name: &str,
		description: &str,
	) -> Result<()> {
		let interaction_client = self.http_client.interaction(self.application_id);
		interaction_client
			.update_guild_command(guild_id, command_id)
			.name(name)
			.description(description)
			.await
			.into_diagnostic()?;
		Ok(())
	}

	async fn delete_command(&self, guild_id: Id<GuildMarker>, command_id: Id<CommandMarker>) -> Result<()> {
		let interaction_client = self.http_client.interaction(self.application_id);
		interaction_client
			.delete_guild_command(guild_id, command_id)
			.await
			.into_diagnostic()?;
		Ok(())
	}
}
