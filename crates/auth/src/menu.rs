//! Navigation tree and role-based filtering.

use serde::{Deserialize, Serialize};

use crate::groups::{FINANCE, MANAGEMENT, SALES_DESK, WAREHOUSE};
use crate::{Role, has_permission};

/// A navigation tree node.
///
/// Constructed once as static configuration and never mutated; filtering
/// produces a fresh tree. An empty `required_roles` means the node is
/// visible to any authenticated role (anonymous sessions see nothing,
/// because `has_permission` denies `None` outright).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub label: String,
    /// Route target the UI shell navigates to.
    pub target: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub required_roles: Vec<Role>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<MenuItem>,
}

impl MenuItem {
    pub fn leaf(label: impl Into<String>, target: impl Into<String>, required: &[Role]) -> Self {
        Self {
            label: label.into(),
            target: target.into(),
            required_roles: required.to_vec(),
            children: Vec::new(),
        }
    }

    pub fn section(
        label: impl Into<String>,
        target: impl Into<String>,
        required: &[Role],
        children: Vec<MenuItem>,
    ) -> Self {
        Self {
            label: label.into(),
            target: target.into(),
            required_roles: required.to_vec(),
            children,
        }
    }
}

/// Filter a navigation tree against the current role, top-down.
///
/// A node that fails its own check is dropped with its whole subtree. A
/// node that had children but loses all of them to filtering is dropped
/// too: a category with nothing inside it must not render as a dead end.
pub fn filter_menu(items: &[MenuItem], current: Option<Role>) -> Vec<MenuItem> {
    items
        .iter()
        .filter_map(|item| {
            if !has_permission(&item.required_roles, current) {
                return None;
            }

            if item.children.is_empty() {
                return Some(item.clone());
            }

            let children = filter_menu(&item.children, current);
            if children.is_empty() {
                None
            } else {
                Some(MenuItem { children, ..item.clone() })
            }
        })
        .collect()
}

/// The static ERP navigation tree, wired to the permission groups.
pub fn default_navigation() -> Vec<MenuItem> {
    vec![
        MenuItem::leaf("Dashboard", "/dashboard", &[]),
        MenuItem::section(
            "Sales",
            "/sales",
            SALES_DESK.roles(),
            vec![
                MenuItem::leaf("Orders", "/sales/orders", SALES_DESK.roles()),
                MenuItem::leaf("Customers", "/sales/customers", SALES_DESK.roles()),
                MenuItem::leaf("Invoices", "/sales/invoices", FINANCE.roles()),
            ],
        ),
        MenuItem::section(
            "Warehouse",
            "/warehouse",
            WAREHOUSE.roles(),
            vec![
                MenuItem::leaf("Stock", "/warehouse/stock", WAREHOUSE.roles()),
                MenuItem::leaf("Purchase orders", "/warehouse/purchases", WAREHOUSE.roles()),
                MenuItem::leaf("Suppliers", "/warehouse/suppliers", WAREHOUSE.roles()),
            ],
        ),
        MenuItem::section(
            "Accounting",
            "/accounting",
            FINANCE.roles(),
            vec![
                MenuItem::leaf("Ledger", "/accounting/ledger", FINANCE.roles()),
                MenuItem::leaf("Receivables", "/accounting/receivables", FINANCE.roles()),
            ],
        ),
        MenuItem::section(
            "Administration",
            "/admin",
            MANAGEMENT.roles(),
            vec![
                MenuItem::leaf("Users", "/admin/users", MANAGEMENT.roles()),
                MenuItem::leaf("Roles", "/admin/roles", &[Role::Superadmin]),
            ],
        ),
    ]
}
