// © 2025 the Moonlight project developers
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use moonlight_discord::config::config_from_env;
use moonlight_discord::discord::registry::{CommandRegistry, DiscordCommandRegistry};
use moonlight_discord::discord::{InteractionContext, register_commands, set_up_client};
use moonlight_discord::store::{CommandStore, WorkersKv};
use moonlight_discord::web::{AppState, decode_public_key, run_server};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> miette::Result<()> {
	// Deployments set real environment variables; a .env file covers local runs.
	dotenvy::dotenv().ok();
	tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
		.init();

	let config = Arc::new(config_from_env()?);
	let public_key = decode_public_key(&config.discord.public_key)?;

	let http_client = set_up_client(&config);
	register_commands(&http_client, config.discord.application_id).await?;

	let registry: Arc<dyn CommandRegistry> = Arc::new(DiscordCommandRegistry::new(
		Arc::clone(&http_client),
		config.discord.application_id,
	));
	let store: Arc<dyn CommandStore> = Arc::new(WorkersKv::new(&config.kv));
	let context = InteractionContext { registry, store };

	let state = AppState {
		config,
		public_key,
		context,
	};
	run_server(state).await
}
