//! Named permission groups.
//!
//! Groups are composed strictly additively: a higher-privilege group is the
//! union of a lower-privilege group plus extra roles, so the hierarchy can
//! never form a cycle. The unions are computed once (`LazyLock`); resolution
//! against a group is a flat membership test, never a recursive walk.

use std::sync::LazyLock;

use crate::Role;

/// A named, precomputed set of roles granted a capability.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermissionGroup {
    name: &'static str,
    roles: Vec<Role>,
}

impl PermissionGroup {
    fn root(name: &'static str, roles: &[Role]) -> Self {
        let mut group = Self { name, roles: Vec::new() };
        group.add(roles);
        group
    }

    /// Compose a new group as `base` plus `extra` (the only way to build
    /// on top of another group — strictly additive).
    fn extending(name: &'static str, base: &PermissionGroup, extra: &[Role]) -> Self {
        let mut group = Self { name, roles: base.roles.clone() };
        group.add(extra);
        group
    }

    fn add(&mut self, roles: &[Role]) {
        for role in roles {
            if !self.roles.contains(role) {
                self.roles.push(*role);
            }
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn roles(&self) -> &[Role] {
        &self.roles
    }

    pub fn contains(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }
}

/// Platform administration: superadmin and admin only.
pub static MANAGEMENT: LazyLock<PermissionGroup> =
    LazyLock::new(|| PermissionGroup::root("management", &[Role::Superadmin, Role::Admin]));

/// Day-to-day operations oversight: management plus managers.
pub static OPERATIONS: LazyLock<PermissionGroup> =
    LazyLock::new(|| PermissionGroup::extending("operations", &MANAGEMENT, &[Role::Manager]));

/// Accounting and reporting screens.
pub static FINANCE: LazyLock<PermissionGroup> =
    LazyLock::new(|| PermissionGroup::extending("finance", &OPERATIONS, &[Role::Accountant]));

/// Sales orders and customer screens.
pub static SALES_DESK: LazyLock<PermissionGroup> =
    LazyLock::new(|| PermissionGroup::extending("sales-desk", &OPERATIONS, &[Role::Sales]));

/// Stock and procurement screens.
pub static WAREHOUSE: LazyLock<PermissionGroup> = LazyLock::new(|| {
    PermissionGroup::extending("warehouse", &OPERATIONS, &[Role::Inventory, Role::Purchasing])
});
