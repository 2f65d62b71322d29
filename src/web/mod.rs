// © 2025 the Moonlight project developers
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

mod server;
mod signature;
mod state;

pub use server::run_server;
pub use signature::decode_public_key;
pub use state::AppState;
