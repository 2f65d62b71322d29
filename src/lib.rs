// © 2025 the Moonlight project developers
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

pub mod config;
pub mod custom_commands;
pub mod discord;
pub mod store;
pub mod web;

#[cfg(test)]
pub mod test_utils;
