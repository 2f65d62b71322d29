// © 2025 the Moonlight project developers
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use ed25519_dalek::{Signature, VerifyingKey};
use miette::{IntoDiagnostic, Result, bail};

/// Parses the hex-encoded Ed25519 public key Discord shows in the developer
/// portal.
pub fn decode_public_key(public_key_hex: &str) -> Result<VerifyingKey> {
	let key_bytes = hex::decode(public_key_hex).into_diagnostic()?;
	let Ok(key_bytes) = <[u8; 32]>::try_from(key_bytes) else {
		bail!("The Discord public key must be 32 bytes of hex");
	};
	VerifyingKey::from_bytes(&key_bytes).into_diagnostic()
}

/// Checks a request's detached signature over the timestamp header followed by
/// the raw body. Anything malformed fails closed.
pub fn verify_signature(public_key: &VerifyingKey, signature_hex: &str, timestamp: &str, body: &[u8]) -> bool {
	let Ok(signature_bytes) = hex::decode(signature_hex) else {
		return false;
	};
	let Ok(signature_bytes) = <[u8; 64]>::try_from(signature_bytes) else {
		return false;
	};
	let signature = Signature::from_bytes(&signature_bytes);

	let mut message = Vec::with_capacity(timestamp.len() + body.len());
	message.extend_from_slice(timestamp.as_bytes());
	message.extend_from_slice(body);
	public_key.verify_strict(&message, &signature).is_ok()
}
