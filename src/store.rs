// © 2025 the Moonlight project developers
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::config::KvConfig;
use async_trait::async_trait;
use miette::{IntoDiagnostic, Result};
use reqwest::StatusCode;
use reqwest::multipart::Form;
use serde::{Deserialize, Serialize};

/// Display data stored alongside a custom command's message content. Old
/// records may predate one or both fields, so everything defaults.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct CustomCommandMetadata {
	#[serde(default)]
	pub name: String,
	#[serde(default)]
	pub description: String,
}

/// A key returned by a store listing.
#[derive(Clone, Debug, Deserialize)]
pub struct StoredKey {
	pub name: String,
	#[serde(default)]
	pub metadata: Option<CustomCommandMetadata>,
}

/// The key-value records backing custom commands. Split behind a trait so
/// command handling can run against an in-memory store in tests.
#[async_trait]
pub trait CommandStore: Send + Sync {
	async fn get(&self, key: &str) -> Result<Option<String>>;
	async fn get_with_metadata(&self, key: &str) -> Result<Option<(String, CustomCommandMetadata)>>;
	async fn put(&self, key: &str, value: &str, metadata: &CustomCommandMetadata) -> Result<()>;
	async fn delete(&self, key: &str) -> Result<()>;
	/// Lists keys starting with `prefix`. Only the first page of results is
	/// fetched; callers get at most the store's page size.
	async fn list(&self, prefix: &str) -> Result<Vec<StoredKey>>;
}

/// Store implementation backed by a Cloudflare Workers KV namespace, reached
/// over the Cloudflare v4 REST API.
pub struct WorkersKv {
	http_client: reqwest::Client,
	base_url: String,
	api_token: String,
}

impl WorkersKv {
	pub fn new(config: &KvConfig) -> Self {
		let base_url = format!(
			"https://api.cloudflare.com/client/v4/accounts/{}/storage/kv/namespaces/{}",
			config.account_id, config.namespace_id
		);
		Self {
			http_client: reqwest::Client::new(),
			base_url,
			api_token: config.api_token.clone(),
		}
	}
}

#[async_trait]
impl CommandStore for WorkersKv {
	async fn get(&self, key: &str) -> Result<Option<String>> {
		let response = self
			.http_client
			.get(format!("{}/values/{}", self.base_url, key))
			.bearer_auth(&self.api_token)
			.send()
			.await
			.into_diagnostic()?;
		if response.status() == StatusCode::NOT_FOUND {
			return Ok(None);
		}
		let response = response.error_for_status().into_diagnostic()?;
		let value = response.text().await.into_diagnostic()?;
		Ok(Some(value))
	}

	async fn get_with_metadata(&self, key: &str) -> Result<Option<(String, CustomCommandMetadata)>> {
		let Some(value) = self.get(key).await? else {
			return Ok(None);
		};

		let response = self
			.http_client
			.get(format!("{}/metadata/{}", self.base_url, key))
			.bearer_auth(&self.api_token)
			.send()
			.await
			.into_diagnostic()?;
		if response.status() == StatusCode::NOT_FOUND {
			return Ok(Some((value, CustomCommandMetadata::default())));
		}
		let response = response.error_for_status().into_diagnostic()?;
		let envelope: MetadataEnvelope = response.json().await.into_diagnostic()?;
		Ok(Some((value, envelope.result.unwrap_or_default())))
	}

	async fn put(&self, key: &str, value: &str, metadata: &CustomCommandMetadata) -> Result<()> {
		let metadata_json = serde_json::to_string(metadata).into_diagnostic()?;
		let form = Form::new().text("value", value.to_string()).text("metadata", metadata_json);
		self.http_client
			.put(format!("{}/values/{}", self.base_url, key))
			.bearer_auth(&self.api_token)
			.multipart(form)
			.send()
			.await
			.into_diagnostic()?
			.error_for_status()
			.into_diagnostic()?;
		Ok(())
	}

	async fn delete(&self, key: &str) -> Result<()> {
		let response = self
			.http_client
			.delete(format!("{}/values/{}", self.base_url, key))
			.bearer_auth(&self.api_token)
			.send()
			.await
			.into_diagnostic()?;
		// Deleting a key that's already gone counts as deleted.
		if response.status() == StatusCode::NOT_FOUND {
			return Ok(());
		}
		response.error_for_status().into_diagnostic()?;
		Ok(())
	}

	async fn list(&self, prefix: &str) -> Result<Vec<StoredKey>> {
		let response = self
			.http_client
			.get(format!("{}/keys", self.base_url))
			.query(&[("prefix", prefix)])
			.bearer_auth(&self.api_token)
			.send()
			.await
			.into_diagnostic()?
			.error_for_status()
			.into_diagnostic()?;
		let envelope: ListEnvelope = response.json().await.into_diagnostic()?;
		Ok(envelope.result)
	}
}

#[derive(Debug, Deserialize)]
struct MetadataEnvelope {
	#[serde(default)]
	result: Option<CustomCommandMetadata>,
}

#[derive(Debug, Deserialize)]
struct ListEnvelope {
	#[serde(default)]
	result: Vec<StoredKey>,
}
