//! Input messages for the navigation controller.

use crate::UserForm;
use usermgmt_core::UserId;

/// A user action addressed to the active panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Changes the Browse selection. `None` clears it.
    Select(Option<UserId>),
    RequestAdd,
    RequestEdit,
    RequestDetails,
    RequestDelete,
    ConfirmAdd(UserForm),
    ConfirmEdit(UserForm),
    ConfirmDelete,
    Cancel,
    Back,
}

impl Command {
    /// Returns true if the command writes to the store when it applies.
    #[must_use]
    pub const fn is_mutation(&self) -> bool {
        matches!(
            self,
            Self::ConfirmAdd(_) | Self::ConfirmEdit(_) | Self::ConfirmDelete
        )
    }
}
