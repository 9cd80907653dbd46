//! Panel state.

use crate::UserForm;
use serde::{Deserialize, Serialize};
use std::fmt;
use usermgmt_core::{User, UserId};

/// The active panel together with the data it shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Panel {
    /// Table of every user, with an optional selected row.
    Browse {
        rows: Vec<User>,
        selected: Option<UserId>,
    },
    /// Blank form for a new user.
    Add { form: UserForm },
    /// Form primed with the stored fields of `id`.
    Edit { id: UserId, form: UserForm },
    /// Read-only view of one user.
    Details { user: User },
    /// Confirmation for removing one user.
    Delete { user: User },
}

impl Panel {
    /// Returns the panel's kind.
    #[must_use]
    pub const fn kind(&self) -> PanelKind {
        match self {
            Self::Browse { .. } => PanelKind::Browse,
            Self::Add { .. } => PanelKind::Add,
            Self::Edit { .. } => PanelKind::Edit,
            Self::Details { .. } => PanelKind::Details,
            Self::Delete { .. } => PanelKind::Delete,
        }
    }

    /// Returns the form of an Add or Edit panel.
    #[must_use]
    pub const fn form(&self) -> Option<&UserForm> {
        match self {
            Self::Add { form } | Self::Edit { form, .. } => Some(form),
            _ => None,
        }
    }

    /// Returns the Browse rows.
    #[must_use]
    pub fn rows(&self) -> &[User] {
        match self {
            Self::Browse { rows, .. } => rows,
            _ => &[],
        }
    }

    /// Returns the Browse selection.
    #[must_use]
    pub const fn selected(&self) -> Option<UserId> {
        match self {
            Self::Browse { selected, .. } => *selected,
            _ => None,
        }
    }
}

/// Panel discriminant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PanelKind {
    Browse,
    Add,
    Edit,
    Details,
    Delete,
}

impl fmt::Display for PanelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Browse => "browse",
            Self::Add => "add",
            Self::Edit => "edit",
            Self::Details => "details",
            Self::Delete => "delete",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors_outside_browse() {
        let panel = Panel::Add {
            form: UserForm::default(),
        };
        assert_eq!(panel.kind(), PanelKind::Add);
        assert!(panel.rows().is_empty());
        assert_eq!(panel.selected(), None);
        assert_eq!(panel.form(), Some(&UserForm::default()));
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(PanelKind::Details.to_string(), "details");
    }
}
