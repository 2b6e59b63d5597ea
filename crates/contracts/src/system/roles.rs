use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Permission {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Grouping key for the permission matrix ("employee", "payroll", ...).
    #[serde(default, alias = "module")]
    pub group: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Role {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, alias = "Permissions")]
    pub permissions: Option<Vec<Permission>>,
}

impl Role {
    pub fn permission_ids(&self) -> Vec<i64> {
        self.permissions
            .as_deref()
            .unwrap_or_default()
            .iter()
            .map(|p| p.id)
            .collect()
    }
}

/// `GET /roles/rolesName?minimal=1` entry — plain strings on newer backends,
/// `{id, name}` objects on older ones.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RoleNameEntry {
    Name(String),
    Ref { id: i64, name: String },
}

impl RoleNameEntry {
    pub fn name(&self) -> &str {
        match self {
            RoleNameEntry::Name(name) => name,
            RoleNameEntry::Ref { name, .. } => name,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateRoleDto {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateRoleDto {
    pub name: Option<String>,
    pub description: Option<String>,
}

/// Body of `PUT /roles/:id/permissions`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetPermissionsDto {
    pub permission_ids: Vec<i64>,
}

/// Checkbox state of the role permission matrix.
///
/// Backed by an ordered set so the saved payload depends only on which ids
/// are selected, never on the order the user clicked them in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PermissionSelection {
    selected: BTreeSet<i64>,
}

impl PermissionSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_role(role: &Role) -> Self {
        Self {
            selected: role.permission_ids().into_iter().collect(),
        }
    }

    pub fn contains(&self, id: i64) -> bool {
        self.selected.contains(&id)
    }

    pub fn set(&mut self, id: i64, checked: bool) {
        if checked {
            self.selected.insert(id);
        } else {
            self.selected.remove(&id);
        }
    }

    pub fn toggle(&mut self, id: i64) {
        if !self.selected.remove(&id) {
            self.selected.insert(id);
        }
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn to_payload(&self) -> SetPermissionsDto {
        SetPermissionsDto {
            permission_ids: self.selected.iter().copied().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_names_parse_both_shapes() {
        let plain: Vec<RoleNameEntry> = serde_json::from_str(r#"["admin", "hr"]"#).unwrap();
        assert_eq!(plain[1].name(), "hr");

        let refs: Vec<RoleNameEntry> =
            serde_json::from_str(r#"[{"id": 1, "name": "admin"}, {"id": 2, "name": "hr"}]"#)
                .unwrap();
        assert_eq!(refs[0].name(), "admin");
    }

    #[test]
    fn selection_payload_ignores_click_order() {
        let mut forward = PermissionSelection::new();
        forward.set(1, true);
        forward.set(3, true);
        forward.set(5, true);

        let mut scrambled = PermissionSelection::new();
        scrambled.set(5, true);
        scrambled.set(1, true);
        scrambled.set(2, true);
        scrambled.set(3, true);
        scrambled.set(2, false);

        assert_eq!(forward, scrambled);
        assert_eq!(forward.to_payload().permission_ids, vec![1, 3, 5]);
        assert_eq!(scrambled.to_payload().permission_ids, vec![1, 3, 5]);
    }

    #[test]
    fn toggle_flips_membership() {
        let mut sel = PermissionSelection::new();
        sel.toggle(7);
        assert!(sel.contains(7));
        sel.toggle(7);
        assert!(!sel.contains(7));
        assert!(sel.is_empty());
    }

    #[test]
    fn selection_seeds_from_role_join() {
        let role: Role = serde_json::from_str(
            r#"{"id": 4, "name": "hr", "Permissions": [
                {"id": 11, "name": "employee.read"},
                {"id": 12, "name": "employee.write"}
            ]}"#,
        )
        .unwrap();
        let sel = PermissionSelection::from_role(&role);
        assert_eq!(sel.len(), 2);
        assert!(sel.contains(11) && sel.contains(12));
    }

    #[test]
    fn set_permissions_body_is_camel_case() {
        let mut sel = PermissionSelection::new();
        sel.set(2, true);
        sel.set(1, true);
        let body = serde_json::to_string(&sel.to_payload()).unwrap();
        assert_eq!(body, r#"{"permissionIds":[1,2]}"#);
    }
}
