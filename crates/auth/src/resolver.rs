//! The permission check itself.
//!
//! - No IO
//! - No panics
//! - No business logic (pure policy check)

use crate::Role;

/// Decide whether `current` may see an item gated by `allowed`.
///
/// Rules, in order:
/// - no current role (anonymous) → denied, whatever the allow-list says;
/// - the super-role → allowed, bypassing the allow-list entirely;
/// - an empty allow-list → allowed for any authenticated role;
/// - otherwise, plain membership.
///
/// Role sets are tiny (<20), so the linear scan is deliberate.
pub fn has_permission(allowed: &[Role], current: Option<Role>) -> bool {
    let Some(role) = current else {
        return false;
    };

    if role.is_super() {
        return true;
    }

    allowed.is_empty() || allowed.contains(&role)
}
