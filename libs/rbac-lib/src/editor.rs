//! State machine behind the role permission-editing flow:
//! `Idle -> Editing(selection seeded from the role) -> [toggle*] -> Saving
//! -> Idle` on success, back to `Editing` on failure with the selection
//! preserved and the error kept for display. Cancel discards the selection.

use crate::admin_service::AdminService;
use crate::backend::traits::{AuthApi, RoleApi, UserApi};
use crate::entities::{permission_key, Role};
use crate::errors_service::AdminError;
use crate::session::SessionContext;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorState {
    Idle,
    Editing,
    Saving,
}

#[derive(Debug, Clone, Default)]
pub struct PermissionEditor {
    state: Option<EditingData>,
    saving: bool,
    last_error: Option<String>,
}

#[derive(Debug, Clone)]
struct EditingData {
    role: Role,
    selected: Vec<String>,
}

impl PermissionEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> EditorState {
        match (&self.state, self.saving) {
            (None, _) => EditorState::Idle,
            (Some(_), false) => EditorState::Editing,
            (Some(_), true) => EditorState::Saving,
        }
    }

    /// Open the editor for a role. The selection starts as the role's
    /// current permissions, keyed by id-or-name.
    pub fn begin(&mut self, role: Role) {
        let selected = role
            .permissions
            .iter()
            .map(|p| permission_key(p).to_string())
            .collect();
        self.state = Some(EditingData { role, selected });
        self.saving = false;
        self.last_error = None;
    }

    /// Toggle a permission in the selection. Ignored unless editing.
    pub fn toggle(&mut self, key: &str) {
        if self.saving {
            return;
        }
        let Some(editing) = self.state.as_mut() else {
            return;
        };
        if let Some(pos) = editing.selected.iter().position(|k| k == key) {
            editing.selected.remove(pos);
        } else {
            editing.selected.push(key.to_string());
        }
    }

    pub fn selected(&self) -> &[String] {
        self.state.as_ref().map(|e| e.selected.as_slice()).unwrap_or(&[])
    }

    pub fn role(&self) -> Option<&Role> {
        self.state.as_ref().map(|e| &e.role)
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Discard the selection and return to idle.
    pub fn cancel(&mut self) {
        self.state = None;
        self.saving = false;
        self.last_error = None;
    }

    /// Push the current selection to the backend as a full replace. On
    /// success the editor returns to idle and yields the updated role; on
    /// failure it returns to editing with the selection intact and the
    /// error recorded.
    pub async fn save<R, U, A>(
        &mut self,
        service: &AdminService<R, U, A>,
        session: &SessionContext,
    ) -> Result<Role, AdminError>
    where
        R: RoleApi,
        U: UserApi,
        A: AuthApi,
    {
        let (role_id, selection) = {
            let Some(editing) = self.state.as_ref() else {
                return Err(AdminError::Validation(
                    "no role is being edited".to_string(),
                ));
            };
            let Some(role_id) = editing.role.id.clone() else {
                return Err(AdminError::Validation(
                    "role has no id; it was never persisted".to_string(),
                ));
            };
            (role_id, editing.selected.clone())
        };

        self.saving = true;
        let result = service
            .set_role_permissions(session, &role_id, selection)
            .await;
        self.saving = false;

        match result {
            Ok(updated) => {
                self.state = None;
                self.last_error = None;
                Ok(updated)
            }
            Err(err) => {
                self.last_error = Some(err.to_string());
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Permission;

    fn role_with_permissions() -> Role {
        Role {
            id: Some("r1".to_string()),
            name: "ADMIN".to_string(),
            description: None,
            permissions: vec![
                Permission {
                    id: Some("p2".to_string()),
                    name: "MANAGE_USERS".to_string(),
                    description: None,
                },
                // No id: keyed by name.
                Permission::named("VIEW_REPORTS"),
            ],
        }
    }

    #[test]
    fn begin_seeds_selection_from_role_with_key_fallback() {
        let mut editor = PermissionEditor::new();
        assert_eq!(editor.state(), EditorState::Idle);

        editor.begin(role_with_permissions());
        assert_eq!(editor.state(), EditorState::Editing);
        assert_eq!(editor.selected(), ["p2", "VIEW_REPORTS"]);
    }

    #[test]
    fn toggle_adds_and_removes() {
        let mut editor = PermissionEditor::new();
        editor.begin(role_with_permissions());

        editor.toggle("p2");
        assert_eq!(editor.selected(), ["VIEW_REPORTS"]);

        editor.toggle("p9");
        assert_eq!(editor.selected(), ["VIEW_REPORTS", "p9"]);
    }

    #[test]
    fn toggle_outside_editing_is_ignored() {
        let mut editor = PermissionEditor::new();
        editor.toggle("p1");
        assert_eq!(editor.state(), EditorState::Idle);
        assert!(editor.selected().is_empty());
    }

    #[test]
    fn cancel_discards_selection() {
        let mut editor = PermissionEditor::new();
        editor.begin(role_with_permissions());
        editor.toggle("p9");

        editor.cancel();
        assert_eq!(editor.state(), EditorState::Idle);
        assert!(editor.selected().is_empty());
        assert!(editor.role().is_none());
    }
}
