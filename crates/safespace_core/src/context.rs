//! Explicit workspace context.
//!
//! # Responsibility
//! - Track the current demo user and the toolbar's selected tile kind.
//! - Replace implicit UI providers with a value passed by reference.
//!
//! # Invariants
//! - The current user always refers to an entry of `users`.
//! - Switching to an unknown user leaves the context unchanged.

use crate::model::tile::TileKind;
use log::info;
use serde::Serialize;

/// Default signed-in demo user.
pub const DEFAULT_USER_ID: &str = "michael_chen";

/// Demo account available in the user switcher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DemoUser {
    pub id: &'static str,
    pub name: &'static str,
    pub role: &'static str,
    pub department: &'static str,
    pub can_create_surveys: bool,
}

const DEMO_USERS: &[DemoUser] = &[
    DemoUser {
        id: "sarah_johnson",
        name: "Sarah Johnson",
        role: "CEO",
        department: "Executive",
        can_create_surveys: true,
    },
    DemoUser {
        id: "michael_chen",
        name: "Michael Chen",
        role: "Manager",
        department: "Product",
        can_create_surveys: true,
    },
    DemoUser {
        id: "david_williams",
        name: "David Williams",
        role: "Manager's Manager",
        department: "Operations",
        can_create_surveys: true,
    },
    DemoUser {
        id: "emily_rodriguez",
        name: "Emily Rodriguez",
        role: "Employee",
        department: "Design",
        can_create_surveys: false,
    },
    DemoUser {
        id: "gayathri_sriram",
        name: "Gayathri Sriram",
        role: "HR Admin",
        department: "Human Resources",
        can_create_surveys: true,
    },
];

/// Returns the built-in demo accounts.
pub fn demo_users() -> &'static [DemoUser] {
    DEMO_USERS
}

#[derive(Debug, Clone)]
pub struct WorkspaceContext {
    users: &'static [DemoUser],
    current: usize,
    selected_tile_kind: TileKind,
}

impl Default for WorkspaceContext {
    fn default() -> Self {
        let current = DEMO_USERS
            .iter()
            .position(|user| user.id == DEFAULT_USER_ID)
            .unwrap_or(0);
        Self {
            users: DEMO_USERS,
            current,
            selected_tile_kind: TileKind::default(),
        }
    }
}

impl WorkspaceContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn users(&self) -> &[DemoUser] {
        self.users
    }

    pub fn current_user(&self) -> &DemoUser {
        &self.users[self.current]
    }

    /// Switches to `user_id`. Returns the new user, or `None` if unknown.
    pub fn switch_user(&mut self, user_id: &str) -> Option<&DemoUser> {
        let index = self.users.iter().position(|user| user.id == user_id)?;
        self.current = index;
        info!("event=user_switched module=context status=ok user_id={user_id}");
        Some(&self.users[index])
    }

    pub fn selected_tile_kind(&self) -> TileKind {
        self.selected_tile_kind
    }

    pub fn select_tile_kind(&mut self, kind: TileKind) {
        self.selected_tile_kind = kind;
    }
}

#[cfg(test)]
mod tests {
    use super::{WorkspaceContext, DEFAULT_USER_ID};
    use crate::model::tile::TileKind;

    #[test]
    fn defaults_to_manager_and_note() {
        let context = WorkspaceContext::new();
        assert_eq!(context.current_user().id, DEFAULT_USER_ID);
        assert_eq!(context.selected_tile_kind(), TileKind::Note);
    }

    #[test]
    fn switch_user_updates_current() {
        let mut context = WorkspaceContext::new();
        let user = context
            .switch_user("emily_rodriguez")
            .expect("known user should switch");
        assert_eq!(user.role, "Employee");
        assert!(!context.current_user().can_create_surveys);
    }

    #[test]
    fn unknown_user_leaves_context_unchanged() {
        let mut context = WorkspaceContext::new();
        assert!(context.switch_user("nobody").is_none());
        assert_eq!(context.current_user().id, DEFAULT_USER_ID);
    }

    #[test]
    fn select_tile_kind_is_remembered() {
        let mut context = WorkspaceContext::new();
        context.select_tile_kind(TileKind::Idea);
        assert_eq!(context.selected_tile_kind(), TileKind::Idea);
    }
}
