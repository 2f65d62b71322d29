// © 2025 the Moonlight project developers
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::discord::registry::CommandRegistry;
use crate::store::{CommandStore, CustomCommandMetadata, StoredKey};
use miette::Result;
use twilight_model::id::Id;
use twilight_model::id::marker::{CommandMarker, GuildMarker};

/// Names owned by the built-in commands. A custom command may never take one
/// of these; lookups for them always hit the built-in handlers.
pub const RESERVED_COMMAND_NAMES: [&str; 4] = ["wiki", "setup-guide", "faq", "commands"];

pub fn is_reserved_name(name: &str) -> bool {
	RESERVED_COMMAND_NAMES.contains(&name)
}

/// Normalizes a user-entered command name into the form registered with
/// Discord: surrounding whitespace dropped, letters lowercased, and interior
/// whitespace runs collapsed into single hyphens.
pub fn normalize_command_name(name: &str) -> String {
	let lowered = name.trim().to_lowercase();
	let words: Vec<&str> = lowered.split_whitespace().collect();
	words.join("-")
}

/// The key under which a custom command's message content is stored.
pub fn storage_key(guild_id: Id<GuildMarker>, command_id: Id<CommandMarker>) -> String {
	format!("{}:{}", guild_id.get(), command_id.get())
}

/// The key prefix shared by all of a guild's custom commands.
pub fn guild_prefix(guild_id: Id<GuildMarker>) -> String {
	format!("{}:", guild_id.get())
}

/// A validated command definition ready to be registered and stored.
#[derive(Clone, Debug, PartialEq)]
pub struct NewCustomCommand {
	pub name: String,
	pub description: String,
	pub content: String,
}

impl NewCustomCommand {
	fn metadata(&self) -> CustomCommandMetadata {
		CustomCommandMetadata {
			name: self.name.clone(),
			description: self.description.clone(),
		}
	}
}

/// Registers a new guild command with Discord, then records its message
/// content. Registration goes first; a stored record must always refer to a
/// command Discord knows about.
pub async fn create_command(
	registry: &dyn CommandRegistry,
	store: &dyn CommandStore,
	guild_id: Id<GuildMarker>,
	command: &NewCustomCommand,
) -> Result<Id<CommandMarker>> {
	let command_id = registry
		.create_command(guild_id, &command.name, &command.description)
		.await?;
	store
		.put(&storage_key(guild_id, command_id), &command.content, &command.metadata())
		.await?;
	Ok(command_id)
}

/// Pushes the updated definition to Discord, then replaces the stored record.
pub async fn update_command(
	registry: &dyn CommandRegistry,
	store: &dyn CommandStore,
	guild_id: Id<GuildMarker>,
	command_id: Id<CommandMarker>,
	command: &NewCustomCommand,
) -> Result<()> {
	registry
		.update_command(guild_id, command_id, &command.name, &command.description)
		.await?;
	store
		.put(&storage_key(guild_id, command_id), &command.content, &command.metadata())
		.await?;
	Ok(())
}

/// Unregisters the command from Discord, then removes the stored record. When
/// Discord rejects the deletion, the record stays put and the command keeps
/// working.
pub async fn delete_command(
	registry: &dyn CommandRegistry,
	store: &dyn CommandStore,
	guild_id: Id<GuildMarker>,
	command_id: Id<CommandMarker>,
) -> Result<()> {
	registry.delete_command(guild_id, command_id).await?;
	store.delete(&storage_key(guild_id, command_id)).await?;
	Ok(())
}

pub async fn lookup_content(
	store: &dyn CommandStore,
	guild_id: Id<GuildMarker>,
	command_id: Id<CommandMarker>,
) -> Result<Option<String>> {
	store.get(&storage_key(guild_id, command_id)).await
}

pub async fn fetch_record(
	store: &dyn CommandStore,
	guild_id: Id<GuildMarker>,
	command_id: Id<CommandMarker>,
) -> Result<Option<(String, CustomCommandMetadata)>> {
	store.get_with_metadata(&storage_key(guild_id, command_id)).await
}

pub async fn list_for_guild(store: &dyn CommandStore, guild_id: Id<GuildMarker>) -> Result<Vec<StoredKey>> {
	store.list(&guild_prefix(guild_id)).await
}
