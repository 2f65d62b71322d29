// © 2025 the Moonlight project developers
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use miette::{IntoDiagnostic, Result, bail};
use std::env;
use twilight_model::id::Id;
use twilight_model::id::marker::ApplicationMarker;

/// Reads the service configuration from the environment. Call after any
/// `.env` file has been loaded so deployments can use either mechanism.
pub fn config_from_env() -> Result<ConfigData> {
	let application_id = required_var("DISCORD_APPLICATION_ID")?;
	let application_id: u64 = application_id.parse().into_diagnostic()?;
	let Some(application_id) = Id::new_checked(application_id) else {
		bail!("DISCORD_APPLICATION_ID must be a nonzero Discord snowflake");
	};

	let discord = DiscordConfig {
		application_id,
		public_key: required_var("DISCORD_PUBLIC_KEY")?,
		bot_token: required_var("DISCORD_TOKEN")?,
	};
	let kv = KvConfig {
		account_id: required_var("CLOUDFLARE_ACCOUNT_ID")?,
		namespace_id: required_var("KV_NAMESPACE_ID")?,
		api_token: required_var("CLOUDFLARE_API_TOKEN")?,
	};
	let web = WebConfig {
		bind_addr: env::var("BIND_ADDR").unwrap_or_else(|_| String::from("0.0.0.0:8787")),
	};

	Ok(ConfigData { discord, kv, web })
}

fn required_var(name: &str) -> Result<String> {
	match env::var(name) {
		Ok(value) => Ok(value),
		Err(_) => bail!("Missing required environment variable {}", name),
	}
}

#[derive(Clone, Debug)]
pub struct ConfigData {
	pub discord: DiscordConfig,
	pub kv: KvConfig,
	pub web: WebConfig,
}

#[derive(Clone, Debug)]
pub struct DiscordConfig {
	pub application_id: Id<ApplicationMarker>,
	/// Hex-encoded Ed25519 public key from the application's developer portal
	/// page; interaction requests are verified against it.
	pub public_key: String,
	pub bot_token: String,
}

/// Credentials and addressing for the Workers KV namespace that holds custom
/// command content.
#[derive(Clone, Debug)]
pub struct KvConfig {
	pub account_id: String,
	pub namespace_id: String,
	pub api_token: String,
}

#[derive(Clone, Debug)]
pub struct WebConfig {
	pub bind_addr: String,
}
