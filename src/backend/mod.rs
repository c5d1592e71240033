// Copyright 2023 the Druid Authors
// SPDX-License-Identifier: Apache-2.0

//! Bindings of the emulator to concrete host environments.

#[cfg(target_arch = "wasm32")]
pub mod web;
