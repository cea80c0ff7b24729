//! Keyspace-event notification flags
//!
//! The `notify-keyspace-events` parameter takes a set of event
//! categories, each represented by a single letter in the emitted
//! configuration string.

use serde::{Deserialize, Serialize};
use std::ops::{BitOr, BitOrAssign};

/// A set of keyspace-event categories
///
/// Serializes to a character string in the fixed bit order
/// `K E g $ l s h z x e A`; [`KeyspaceEventSet::NONE`] serializes to
/// the empty string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct KeyspaceEventSet(u16);

impl KeyspaceEventSet {
    /// No notifications
    pub const NONE: Self = Self(0);
    /// `K` — Keyspace events, published with a prefix of `__keyspace@<db>__`
    pub const KEYSPACE: Self = Self(1);
    /// `E` — Key-event events, published with a prefix of `__keyevent@<db>__`
    pub const KEY_EVENT: Self = Self(1 << 1);
    /// `g` — Generic, non-type-specific commands such as DEL, EXPIRE, RENAME
    pub const GENERIC: Self = Self(1 << 2);
    /// `$` — String commands
    pub const STRING: Self = Self(1 << 3);
    /// `l` — List commands
    pub const LIST: Self = Self(1 << 4);
    /// `s` — Set commands
    pub const SET: Self = Self(1 << 5);
    /// `h` — Hash commands
    pub const HASH: Self = Self(1 << 6);
    /// `z` — Sorted set commands
    pub const SORTED: Self = Self(1 << 7);
    /// `x` — Expired events, generated every time a key expires
    pub const EXPIRED: Self = Self(1 << 8);
    /// `e` — Evicted events, generated when a key is evicted under memory pressure
    pub const EVICTED: Self = Self(1 << 9);
    /// `A` — Alias for `g$lshzxe`
    pub const ALL_COMMANDS: Self = Self(1 << 10);

    // One character per flag, low bit first
    const FLAG_CHARS: [char; 11] = ['K', 'E', 'g', '$', 'l', 's', 'h', 'z', 'x', 'e', 'A'];

    /// Whether every flag in `other` is set in `self`
    #[inline]
    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Whether no flag is set
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Render the set in the fixed flag order
    #[must_use]
    pub fn to_config_string(self) -> String {
        let mut out = String::new();
        for (bit, ch) in Self::FLAG_CHARS.iter().enumerate() {
            if self.0 & (1 << bit) != 0 {
                out.push(*ch);
            }
        }
        out
    }
}

impl BitOr for KeyspaceEventSet {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for KeyspaceEventSet {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn none_renders_empty() {
        assert_eq!(KeyspaceEventSet::NONE.to_config_string(), "");
        assert!(KeyspaceEventSet::NONE.is_empty());
    }

    #[test]
    fn evicted_and_generic_render_in_flag_order() {
        let set = KeyspaceEventSet::EVICTED | KeyspaceEventSet::GENERIC;
        assert_eq!(set.to_config_string(), "ge");
    }

    #[test]
    fn full_set_renders_every_flag() {
        let mut set = KeyspaceEventSet::NONE;
        set |= KeyspaceEventSet::KEYSPACE;
        set |= KeyspaceEventSet::KEY_EVENT;
        set |= KeyspaceEventSet::GENERIC;
        set |= KeyspaceEventSet::STRING;
        set |= KeyspaceEventSet::LIST;
        set |= KeyspaceEventSet::SET;
        set |= KeyspaceEventSet::HASH;
        set |= KeyspaceEventSet::SORTED;
        set |= KeyspaceEventSet::EXPIRED;
        set |= KeyspaceEventSet::EVICTED;
        set |= KeyspaceEventSet::ALL_COMMANDS;
        assert_eq!(set.to_config_string(), "KEg$lshzxeA");
    }

    #[test]
    fn contains_checks_subsets() {
        let set = KeyspaceEventSet::KEYSPACE | KeyspaceEventSet::HASH;
        assert!(set.contains(KeyspaceEventSet::HASH));
        assert!(set.contains(KeyspaceEventSet::NONE));
        assert!(!set.contains(KeyspaceEventSet::EVICTED));
    }
}
