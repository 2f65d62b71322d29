// © 2025 the Moonlight project developers
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::config::ConfigData;
use crate::discord::InteractionContext;
use ed25519_dalek::VerifyingKey;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
	pub config: Arc<ConfigData>,
	pub public_key: VerifyingKey,
	pub context: InteractionContext,
}
