use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Permission {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Permission {
    pub fn named(name: impl Into<String>) -> Self {
        Permission {
            id: None,
            name: name.into(),
            description: None,
        }
    }
}

/// Stable identity of a permission: the `id` when present, otherwise the
/// `name`. Every call site that compares, selects or deduplicates
/// permissions must go through this function.
pub fn permission_key(permission: &Permission) -> &str {
    match permission.id.as_deref() {
        Some(id) if !id.is_empty() => id,
        _ => &permission.name,
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Role {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub permissions: Vec<Permission>,
}

/// A permission entry as it appears on the wire: either a bare name string
/// or a full Permission object. Entries of any other shape are captured as
/// `Other` and skipped during normalization instead of failing the parse.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum PermissionEntry {
    Name(String),
    Full(Permission),
    Other(serde_json::Value),
}

impl PermissionEntry {
    /// Permission name carried by this entry, when present and non-empty.
    pub fn name(&self) -> Option<&str> {
        let name = match self {
            PermissionEntry::Name(name) => name.as_str(),
            PermissionEntry::Full(permission) => permission.name.as_str(),
            PermissionEntry::Other(_) => return None,
        };
        if name.is_empty() {
            None
        } else {
            Some(name)
        }
    }
}

/// The polymorphic `role` field on a user: backends send either a bare
/// role-name string or a full Role object carrying nested permissions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum RoleAssignment {
    Name(String),
    Full(Role),
    Other(serde_json::Value),
}

impl RoleAssignment {
    pub fn name(&self) -> Option<&str> {
        match self {
            RoleAssignment::Name(name) => Some(name.as_str()),
            RoleAssignment::Full(role) => Some(role.name.as_str()),
            RoleAssignment::Other(_) => None,
        }
    }

    /// Permissions carried inline by the role, when it is a full object.
    /// A bare role name contributes nothing; no lookup is performed.
    pub fn permissions(&self) -> &[Permission] {
        match self {
            RoleAssignment::Full(role) => &role.permissions,
            _ => &[],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<RoleAssignment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permissions: Option<Vec<PermissionEntry>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

impl User {
    pub fn display_name(&self) -> String {
        match &self.last_name {
            Some(last) if !last.is_empty() => format!("{} {}", self.first_name, last),
            _ => self.first_name.clone(),
        }
    }
}
