// Copyright 2023 the Druid Authors
// SPDX-License-Identifier: Apache-2.0

//! Emulator configuration.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::capability::TOUCH_CAPABILITY_FLAGS;

/// Distance in pixels between the two emulated touches of a multi-touch gesture.
///
/// Reserved: only single-touch emulation exists, nothing reads this yet.
pub const MULTI_TOUCH_OFFSET: f64 = 75.0;

/// Settings for a [`TouchEmulator`].
///
/// [`TouchEmulator`]: crate::TouchEmulator
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct Config {
    /// See [`MULTI_TOUCH_OFFSET`].
    pub multi_touch_offset: f64,
    /// The properties defined on the capability hosts at install time.
    pub capability_flags: Vec<String>,
    /// Whether the mouse listeners run in the capture phase.
    pub use_capture: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            multi_touch_offset: MULTI_TOUCH_OFFSET,
            capability_flags: TOUCH_CAPABILITY_FLAGS
                .iter()
                .map(|flag| flag.to_string())
                .collect(),
            use_capture: true,
        }
    }
}

impl Config {
    /// Builder-style method for setting the reserved multi-touch offset.
    pub fn with_multi_touch_offset(mut self, offset: f64) -> Self {
        self.multi_touch_offset = offset;
        self
    }

    /// Builder-style method for replacing the capability flags.
    pub fn with_capability_flags<I, S>(mut self, flags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.capability_flags = flags.into_iter().map(Into::into).collect();
        self
    }

    /// Builder-style method for choosing between capture and bubble listeners.
    pub fn with_capture(mut self, use_capture: bool) -> Self {
        self.use_capture = use_capture;
        self
    }
}
