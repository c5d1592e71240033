// Copyright 2023 the Druid Authors
// SPDX-License-Identifier: Apache-2.0

//! Make feature detection believe touch input is available.
//!
//! Libraries like Modernizr and Hammer only check that the `ontouch*` handler
//! properties exist, so defining them with an inert value is enough to send them
//! down their touch code paths. Nothing backs the flags with functionality.

use tracing::{debug, warn};

use crate::target::CapabilityHost;

/// The handler properties checked by touch feature detection.
pub const TOUCH_CAPABILITY_FLAGS: [&str; 4] =
    ["ontouchstart", "ontouchmove", "ontouchcancel", "ontouchend"];

/// Define every absent flag on every host. Returns the number of flags defined.
///
/// Flags that are already present are left alone, so calling this again is a no-op.
pub fn fake_touch_support<S: AsRef<str>>(hosts: &[&dyn CapabilityHost], flags: &[S]) -> usize {
    let mut defined = 0;
    for host in hosts {
        for flag in flags.iter().map(AsRef::as_ref) {
            if host.has_property(flag) {
                continue;
            }
            match host.define_placeholder(flag) {
                Ok(()) => {
                    debug!("defined capability flag {}", flag);
                    defined += 1;
                }
                Err(e) => warn!("could not define capability flag {}: {}", flag, e),
            }
        }
    }
    defined
}
