// © 2025 the Moonlight project developers
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Doubles and fixtures for exercising interaction handling without Discord
//! or Cloudflare on the other end.

use crate::config::{ConfigData, DiscordConfig, KvConfig, WebConfig};
use crate::discord::registry::CommandRegistry;
use crate::discord::{InteractionContext, InteractionOutcome};
use crate::store::{CommandStore, CustomCommandMetadata, StoredKey};
use crate::web::AppState;
use async_trait::async_trait;
use ed25519_dalek::SigningKey;
use miette::{Result, bail};
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use twilight_model::application::command::CommandType;
use twilight_model::application::interaction::application_command::CommandData;
use twilight_model::application::interaction::modal::{
	ModalInteractionData, ModalInteractionDataActionRow, ModalInteractionDataComponent,
};
use twilight_model::channel::message::component::ComponentType;
use twilight_model::http::interaction::InteractionResponse;
use twilight_model::id::Id;
use twilight_model::id::marker::{CommandMarker, GuildMarker};

/// In-memory stand-in for the Workers KV store.
#[derive(Default)]
pub struct MemoryStore {
	entries: Mutex<BTreeMap<String, (String, CustomCommandMetadata)>>,
}

impl MemoryStore {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn insert(&self, key: &str, content: &str, metadata: CustomCommandMetadata) {
		self.entries
			.lock()
			.unwrap()
			.insert(String::from(key), (String::from(content), metadata));
	}

	pub fn is_empty(&self) -> bool {
		self.entries.lock().unwrap().is_empty()
	}
}

#[async_trait]
impl CommandStore for MemoryStore {
	async fn get(&self, key: &str) -> Result<Option<String>> {
		let entries = self.entries.lock().unwrap();
		Ok(entries.get(key).map(|(content, _)| content.clone()))
	}

	async fn get_with_metadata(&self, key: &str) -> Result<Option<(String, CustomCommandMetadata)>> {
		let entries = self.entries.lock().unwrap();
		Ok(entries.get(key).cloned())
	}

	async fn put(&self, key: &str, value: &str, metadata: &CustomCommandMetadata) -> Result<()> {
		self.insert(key, value, metadata.clone());
		Ok(())
	}

	async fn delete(&self, key: &str) -> Result<()> {
		self.entries.lock().unwrap().remove(key);
		Ok(())
	}

	async fn list(&self, prefix: &str) -> Result<Vec<StoredKey>> {
		let entries = self.entries.lock().unwrap();
		Ok(entries
			.iter()
			.filter(|(key, _)| key.starts_with(prefix))
			.map(|(key, (_, metadata))| StoredKey {
				name: key.clone(),
				metadata: Some(metadata.clone()),
			})
			.collect())
	}
}

#[derive(Clone, Debug, PartialEq)]
pub enum RegistryCall {
	Create {
		guild_id: Id<GuildMarker>,
		name: String,
		description: String,
	},
	Update {
		guild_id: Id<GuildMarker>,
		command_id: Id<CommandMarker>,
		name: String,
		description: String,
	},
	Delete {
		guild_id: Id<GuildMarker>,
		command_id: Id<CommandMarker>,
	},
}

/// Registry double that records every call. Flip `fail_requests` to make
/// subsequent calls fail after being recorded, as a Discord API outage would.
pub struct RecordingRegistry {
	calls: Mutex<Vec<RegistryCall>>,
	pub fail_requests: AtomicBool,
	next_command_id: AtomicU64,
}

impl RecordingRegistry {
	pub fn new() -> Self {
		Self {
			calls: Mutex::new(Vec::new()),
			fail_requests: AtomicBool::new(false),
			// Start well clear of the IDs tests assign to fixtures.
			next_command_id: AtomicU64::new(9000),
		}
	}

	pub fn calls(&self) -> Vec<RegistryCall> {
		self.calls.lock().unwrap().clone()
	}

	fn record(&self, call: RegistryCall) -> Result<()> {
		self.calls.lock().unwrap().push(call);
		if self.fail_requests.load(Ordering::SeqCst) {
			bail!("Simulated Discord API failure");
		}
		Ok(())
	}
}

#[async_trait]
impl CommandRegistry for RecordingRegistry {
	async fn create_command(
		&self,
		guild_id: Id<GuildMarker>,
		name: &str,
		description: &str,
	) -> Result<Id<CommandMarker>> {
		self.record(RegistryCall::Create {
			guild_id,
			name: String::from(name),
			description: String::from(description),
		})?;
		Ok(Id::new(self.next_command_id.fetch_add(1, Ordering::SeqCst)))
	}

	async fn update_command(
		&self,
		guild_id: Id<GuildMarker>,
		command_id: Id<CommandMarker>,
		name: &str,
		description: &str,
	) -> Result<()> {
		self.record(RegistryCall::Update {
			guild_id,
			command_id,
			name: String::from(name),
			description: String::from(description),
		})
	}

	async fn delete_command(&self, guild_id: Id<GuildMarker>, command_id: Id<CommandMarker>) -> Result<()> {
		self.record(RegistryCall::Delete { guild_id, command_id })
	}
}

pub struct TestContext {
	pub store: Arc<MemoryStore>,
	pub registry: Arc<RecordingRegistry>,
	pub context: InteractionContext,
}

pub fn test_context() -> TestContext {
	let store = Arc::new(MemoryStore::new());
	let registry = Arc::new(RecordingRegistry::new());
	let context = InteractionContext {
		registry: Arc::clone(&registry) as Arc<dyn CommandRegistry>,
		store: Arc::clone(&store) as Arc<dyn CommandStore>,
	};
	TestContext {
		store,
		registry,
		context,
	}
}

/// Web state wired to the test context, with a throwaway signing key whose
/// public half the state trusts.
pub fn test_state(test: &TestContext) -> (AppState, SigningKey) {
	let signing_key = SigningKey::from_bytes(&[7; 32]);
	let config = ConfigData {
		discord: DiscordConfig {
			application_id: Id::new(1),
			public_key: hex::encode(signing_key.verifying_key().to_bytes()),
			bot_token: String::from("test-token"),
		},
		kv: KvConfig {
			account_id: String::from("account"),
			namespace_id: String::from("namespace"),
			api_token: String::from("kv-token"),
		},
		web: WebConfig {
			bind_addr: String::from("127.0.0.1:0"),
		},
	};
	let state = AppState {
		config: Arc::new(config),
		public_key: signing_key.verifying_key(),
		context: test.context.clone(),
	};
	(state, signing_key)
}

pub fn command_data(name: &str, command_id: u64) -> CommandData {
	CommandData {
		guild_id: None,
		id: Id::new(command_id),
		name: String::from(name),
		kind: CommandType::ChatInput,
		options: Vec::new(),
		resolved: None,
		target_id: None,
	}
}

pub fn modal_data(custom_id: &str, fields: &[(&str, &str)]) -> ModalInteractionData {
	let components = fields
		.iter()
		.map(|(field_id, value)| ModalInteractionDataActionRow {
			components: vec![ModalInteractionDataComponent {
				custom_id: String::from(*field_id),
				kind: ComponentType::TextInput,
				value: Some(String::from(*value)),
			}],
		})
		.collect();
	ModalInteractionData {
		custom_id: String::from(custom_id),
		components,
	}
}

pub fn message_content(response: &InteractionResponse) -> &str {
	let Some(data) = &response.data else {
		panic!("response has no data: {:?}", response);
	};
	let Some(content) = &data.content else {
		panic!("response has no content: {:?}", response);
	};
	content
}

pub fn response_content(outcome: &InteractionOutcome) -> &str {
	let InteractionOutcome::Response(response) = outcome else {
		panic!("expected a response, got {:?}", outcome);
	};
	message_content(response)
}
