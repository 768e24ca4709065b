// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use parkhost_domain::ConflictPolicy;

/// Controller settings fixed for the lifetime of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ControllerConfig {
    /// Which existing slots block new ones.
    pub conflict_policy: ConflictPolicy,
    /// Flush the store through the backend after every store change.
    pub autosave: bool,
}

impl ControllerConfig {
    /// Returns a copy with autosave switched on or off.
    #[must_use]
    pub const fn with_autosave(self, autosave: bool) -> Self {
        Self {
            conflict_policy: self.conflict_policy,
            autosave,
        }
    }

    /// Returns a copy using `policy`.
    #[must_use]
    pub const fn with_conflict_policy(self, policy: ConflictPolicy) -> Self {
        Self {
            conflict_policy: policy,
            autosave: self.autosave,
        }
    }
}
