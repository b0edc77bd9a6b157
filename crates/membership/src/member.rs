//! Labeled member capability used by hash-ring collaborators.

use crate::host_info::HostInfo;

/// A member that can be placed on a consistent-hash ring.
///
/// Rings key members by [`Member::identity`]. Labels are optional metadata a
/// ring may attach to members; implementations are free to not store them.
pub trait Member {
    /// Stable key of the member on the ring
    fn identity(&self) -> &str;

    /// Returns the label stored under `key`, if any
    fn label(&self, key: &str) -> Option<String>;

    /// Stores a label
    fn set_label(&mut self, key: &str, value: &str);
}

/// Host records carry no labels: `label` always reports absence and
/// `set_label` discards the write. This is permanent, not a placeholder.
impl Member for HostInfo {
    fn identity(&self) -> &str {
        Self::identity(self)
    }

    fn label(&self, _key: &str) -> Option<String> {
        None
    }

    fn set_label(&mut self, _key: &str, _value: &str) {}
}
