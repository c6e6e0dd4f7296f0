//! Permission normalization and authorization checks.
//!
//! User records arrive in several shapes: the role can be a bare name or a
//! full object carrying nested permissions, and permissions can sit directly
//! on the user, on the role, or both. Everything here flattens those shapes
//! into a plain set of permission names and answers allow/deny questions
//! against it. These functions never fail; malformed input degrades to an
//! empty set or `false`.

use std::collections::HashSet;

use crate::entities::User;

/// Flatten a user record into its effective permission set: the union of
/// direct permissions and permissions inherited from the role when the role
/// is a full object. A bare role name contributes nothing; no lookup against
/// the role table is performed here.
pub fn resolve_effective_permissions(user: Option<&User>) -> HashSet<String> {
    let mut permissions = HashSet::new();

    let Some(user) = user else {
        return permissions;
    };

    if let Some(direct) = &user.permissions {
        for entry in direct {
            if let Some(name) = entry.name() {
                permissions.insert(name.to_string());
            }
        }
    }

    if let Some(role) = &user.role {
        for permission in role.permissions() {
            if !permission.name.is_empty() {
                permissions.insert(permission.name.clone());
            }
        }
    }

    permissions
}

/// Uppercased role name, whether the role is a bare string or a full object.
/// Empty string when the user or the role is absent.
pub fn resolve_role_name(user: Option<&User>) -> String {
    user.and_then(|u| u.role.as_ref())
        .and_then(|role| role.name())
        .map(|name| name.to_uppercase())
        .unwrap_or_default()
}

/// Exact membership test. An empty permission set denies everything.
pub fn has_permission(permissions: &HashSet<String>, name: &str) -> bool {
    permissions.contains(name)
}

/// True iff at least one of `names` is held.
pub fn has_any_permission<S: AsRef<str>>(permissions: &HashSet<String>, names: &[S]) -> bool {
    if permissions.is_empty() {
        return false;
    }
    names.iter().any(|name| permissions.contains(name.as_ref()))
}

/// True iff every one of `names` is held. An empty permission set denies
/// even an empty requirement list; callers rely on the fail-closed answer
/// rather than the vacuous-truth one.
pub fn has_all_permissions<S: AsRef<str>>(permissions: &HashSet<String>, names: &[S]) -> bool {
    if permissions.is_empty() {
        return false;
    }
    names.iter().all(|name| permissions.contains(name.as_ref()))
}

/// The three role names the dashboards recognize. Comparison is
/// case-insensitive; anything else parses to `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoleName {
    Admin,
    Manager,
    Employee,
}

impl RoleName {
    pub fn parse(name: &str) -> Option<RoleName> {
        match name.to_uppercase().as_str() {
            "ADMIN" => Some(RoleName::Admin),
            "MANAGER" => Some(RoleName::Manager),
            "EMPLOYEE" => Some(RoleName::Employee),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RoleName::Admin => "ADMIN",
            RoleName::Manager => "MANAGER",
            RoleName::Employee => "EMPLOYEE",
        }
    }
}

/// Which dashboard a user gets. An unrecognized or missing role name matches
/// none of the three branches and lands on `NoAccess`, not on a fallback
/// view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardView {
    Admin,
    Manager,
    Employee,
    NoAccess,
}

pub fn dashboard_view(user: Option<&User>) -> DashboardView {
    let role_name = resolve_role_name(user);
    match RoleName::parse(&role_name) {
        Some(RoleName::Admin) => DashboardView::Admin,
        Some(RoleName::Manager) => DashboardView::Manager,
        Some(RoleName::Employee) => DashboardView::Employee,
        None => DashboardView::NoAccess,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{Permission, PermissionEntry, Role, RoleAssignment};

    fn user_with(role: Option<RoleAssignment>, permissions: Option<Vec<PermissionEntry>>) -> User {
        User {
            id: "u1".to_string(),
            email: "ann@example.com".to_string(),
            first_name: "Ann".to_string(),
            last_name: None,
            role,
            permissions,
            is_active: Some(true),
        }
    }

    #[test]
    fn absent_user_resolves_to_empty_set() {
        assert!(resolve_effective_permissions(None).is_empty());
    }

    #[test]
    fn user_without_any_permissions_resolves_to_empty_set() {
        let user = user_with(Some(RoleAssignment::Name("EMPLOYEE".to_string())), None);
        assert!(resolve_effective_permissions(Some(&user)).is_empty());
    }

    #[test]
    fn direct_and_role_permissions_are_unioned() {
        let role = Role {
            id: None,
            name: "ADMIN".to_string(),
            description: None,
            permissions: vec![Permission::named("MANAGE_ROLES")],
        };
        let user = user_with(
            Some(RoleAssignment::Full(role)),
            Some(vec![PermissionEntry::Full(Permission::named(
                "VIEW_REPORTS",
            ))]),
        );

        let resolved = resolve_effective_permissions(Some(&user));
        assert_eq!(resolved.len(), 2);
        assert!(resolved.contains("MANAGE_ROLES"));
        assert!(resolved.contains("VIEW_REPORTS"));
    }

    #[test]
    fn duplicate_names_collapse() {
        let role = Role {
            id: None,
            name: "ADMIN".to_string(),
            description: None,
            permissions: vec![Permission::named("MANAGE_ROLES")],
        };
        let user = user_with(
            Some(RoleAssignment::Full(role)),
            Some(vec![
                PermissionEntry::Name("MANAGE_ROLES".to_string()),
                PermissionEntry::Full(Permission::named("MANAGE_ROLES")),
            ]),
        );

        let resolved = resolve_effective_permissions(Some(&user));
        assert_eq!(resolved.len(), 1);
    }

    #[test]
    fn malformed_entries_are_skipped() {
        let user = user_with(
            Some(RoleAssignment::Other(serde_json::json!(42))),
            Some(vec![
                PermissionEntry::Other(serde_json::json!({"weird": true})),
                PermissionEntry::Name(String::new()),
                PermissionEntry::Name("VIEW_REPORTS".to_string()),
            ]),
        );

        let resolved = resolve_effective_permissions(Some(&user));
        assert_eq!(resolved.len(), 1);
        assert!(resolved.contains("VIEW_REPORTS"));
    }

    #[test]
    fn bare_role_string_contributes_no_permissions() {
        let user = user_with(Some(RoleAssignment::Name("EMPLOYEE".to_string())), None);
        let resolved = resolve_effective_permissions(Some(&user));
        assert!(!has_permission(&resolved, "MANAGE_ROLES"));
    }

    #[test]
    fn role_name_is_case_insensitive() {
        for role in [
            RoleAssignment::Name("admin".to_string()),
            RoleAssignment::Name("ADMIN".to_string()),
            RoleAssignment::Full(Role {
                id: None,
                name: "Admin".to_string(),
                description: None,
                permissions: vec![],
            }),
        ] {
            let user = user_with(Some(role), None);
            assert_eq!(resolve_role_name(Some(&user)), "ADMIN");
        }
    }

    #[test]
    fn role_name_empty_when_absent() {
        assert_eq!(resolve_role_name(None), "");
        let user = user_with(None, None);
        assert_eq!(resolve_role_name(Some(&user)), "");
    }

    #[test]
    fn empty_set_fails_closed_for_all_checks() {
        let empty = HashSet::new();
        assert!(!has_permission(&empty, "ANY"));
        assert!(!has_any_permission(&empty, &["ANY"]));
        assert!(!has_all_permissions(&empty, &["X"]));
        // Deliberately not vacuous truth.
        assert!(!has_all_permissions::<&str>(&empty, &[]));
    }

    #[test]
    fn quantifier_checks_against_populated_set() {
        let mut set = HashSet::new();
        set.insert("MANAGE_ROLES".to_string());
        set.insert("VIEW_REPORTS".to_string());

        assert!(has_permission(&set, "MANAGE_ROLES"));
        assert!(has_any_permission(&set, &["NOPE", "VIEW_REPORTS"]));
        assert!(!has_any_permission(&set, &["NOPE"]));
        assert!(has_all_permissions(&set, &["MANAGE_ROLES", "VIEW_REPORTS"]));
        assert!(!has_all_permissions(&set, &["MANAGE_ROLES", "NOPE"]));
    }

    #[test]
    fn dashboard_switch_is_exhaustive_with_no_fallback() {
        let admin = user_with(Some(RoleAssignment::Name("admin".to_string())), None);
        let manager = user_with(Some(RoleAssignment::Name("MANAGER".to_string())), None);
        let employee = user_with(Some(RoleAssignment::Name("Employee".to_string())), None);
        let unknown = user_with(Some(RoleAssignment::Name("INTERN".to_string())), None);

        assert_eq!(dashboard_view(Some(&admin)), DashboardView::Admin);
        assert_eq!(dashboard_view(Some(&manager)), DashboardView::Manager);
        assert_eq!(dashboard_view(Some(&employee)), DashboardView::Employee);
        assert_eq!(dashboard_view(Some(&unknown)), DashboardView::NoAccess);
        assert_eq!(dashboard_view(None), DashboardView::NoAccess);
    }
}
