//! Navigation controller.

use crate::{Command, Panel, PanelKind, UserForm};
use std::sync::Arc;
use tracing::{debug, info, warn};
use usermgmt_core::{User, UserId, UserMgmtError, UserMgmtResult};
use usermgmt_repository::UserDao;

/// Owns the active panel and moves between panels in response to commands.
///
/// Every read and write goes through the one DAO handed in at start. The
/// Browse panel reloads the full record set each time it is entered.
pub struct NavigationController {
    dao: Arc<dyn UserDao>,
    panel: Panel,
    last_error: Option<String>,
}

impl NavigationController {
    /// Opens the Browse panel loaded from `dao`.
    pub async fn start(dao: Arc<dyn UserDao>) -> UserMgmtResult<Self> {
        let rows = dao.find_all().await?;
        info!("Navigation started with {} users", rows.len());
        Ok(Self {
            dao,
            panel: Panel::Browse {
                rows,
                selected: None,
            },
            last_error: None,
        })
    }

    /// Returns the active panel.
    #[must_use]
    pub const fn panel(&self) -> &Panel {
        &self.panel
    }

    /// Returns the active panel's kind.
    #[must_use]
    pub const fn kind(&self) -> PanelKind {
        self.panel.kind()
    }

    /// Returns the message of the last failed command, if the last command failed.
    #[must_use]
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Applies `command` to the active panel and returns the resulting kind.
    ///
    /// On failure the panel is left as it was (a failed reload after a
    /// completed mutation still lands on Browse) and the message is kept
    /// for [`last_error`](Self::last_error).
    pub async fn dispatch(&mut self, command: Command) -> UserMgmtResult<PanelKind> {
        debug!("Dispatching {:?} on {} panel", command, self.kind());
        let mutation = command.is_mutation();

        match self.apply(command).await {
            Ok(()) => {
                self.last_error = None;
                if mutation {
                    info!("Store updated, {} users listed", self.panel.rows().len());
                }
                Ok(self.kind())
            }
            Err(e) => {
                warn!("Command failed on {} panel: {}", self.kind(), e);
                self.last_error = Some(e.to_string());
                Err(e)
            }
        }
    }

    async fn apply(&mut self, command: Command) -> UserMgmtResult<()> {
        match (self.kind(), command) {
            (PanelKind::Browse, Command::Select(id)) => {
                if let Panel::Browse { selected, .. } = &mut self.panel {
                    *selected = id;
                }
                Ok(())
            }
            (PanelKind::Browse, Command::RequestAdd) => {
                self.panel = Panel::Add {
                    form: UserForm::default(),
                };
                Ok(())
            }
            (PanelKind::Browse, Command::RequestEdit) => {
                if let Some((id, user)) = self.prime().await? {
                    self.panel = Panel::Edit {
                        id,
                        form: UserForm::from_user(&user),
                    };
                }
                Ok(())
            }
            (PanelKind::Browse, Command::RequestDetails) => {
                if let Some((_, user)) = self.prime().await? {
                    self.panel = Panel::Details { user };
                }
                Ok(())
            }
            (PanelKind::Browse, Command::RequestDelete) => {
                if let Some((_, user)) = self.prime().await? {
                    self.panel = Panel::Delete { user };
                }
                Ok(())
            }
            (PanelKind::Add, Command::ConfirmAdd(form)) => self.confirm_add(form).await,
            (PanelKind::Edit, Command::ConfirmEdit(form)) => self.confirm_edit(form).await,
            (PanelKind::Delete, Command::ConfirmDelete) => self.confirm_delete().await,
            (PanelKind::Add | PanelKind::Edit | PanelKind::Delete, Command::Cancel)
            | (PanelKind::Details, Command::Back | Command::Cancel) => {
                let rows = self.dao.find_all().await?;
                self.show_browse(rows);
                Ok(())
            }
            (kind, command) => {
                debug!("Ignoring {:?} on {} panel", command, kind);
                Ok(())
            }
        }
    }

    /// Loads the selected user, or returns `None` when nothing is selected.
    async fn prime(&self) -> UserMgmtResult<Option<(UserId, User)>> {
        let Some(id) = self.panel.selected() else {
            debug!("No row selected, request ignored");
            return Ok(None);
        };

        let user = self
            .dao
            .find(id)
            .await?
            .ok_or_else(|| UserMgmtError::not_found("User", id))?;
        Ok(Some((id, user)))
    }

    async fn confirm_add(&mut self, form: UserForm) -> UserMgmtResult<()> {
        let user = self.accept(form, UserForm::to_user)?;
        let created = self.dao.create(&user).await?;
        info!("Added user {:?}: {}", created.id, created.full_name());
        self.refresh().await
    }

    async fn confirm_edit(&mut self, form: UserForm) -> UserMgmtResult<()> {
        let Panel::Edit { id, .. } = self.panel else {
            return Ok(());
        };
        let user = self.accept(form, |form| form.to_user_with_id(id))?;
        self.dao.update(&user).await?;
        info!("Updated user {}", id);
        self.refresh().await
    }

    async fn confirm_delete(&mut self) -> UserMgmtResult<()> {
        let Panel::Delete { user } = &self.panel else {
            return Ok(());
        };
        let user = user.clone();
        self.dao.delete(&user).await?;
        info!("Deleted user {:?}", user.id);
        self.refresh().await
    }

    /// Builds the user from a submitted form, keeping the input in the
    /// panel so it can be corrected.
    fn accept(
        &mut self,
        form: UserForm,
        build: impl FnOnce(&UserForm) -> UserMgmtResult<User>,
    ) -> UserMgmtResult<User> {
        let result = build(&form);
        if let Panel::Add { form: stored } | Panel::Edit { form: stored, .. } = &mut self.panel {
            *stored = form;
        }
        result
    }

    /// Re-enters Browse after a completed mutation.
    async fn refresh(&mut self) -> UserMgmtResult<()> {
        match self.dao.find_all().await {
            Ok(rows) => {
                self.show_browse(rows);
                Ok(())
            }
            Err(e) => {
                self.show_browse(Vec::new());
                Err(e)
            }
        }
    }

    fn show_browse(&mut self, rows: Vec<User>) {
        self.panel = Panel::Browse {
            rows,
            selected: None,
        };
    }
}

impl std::fmt::Debug for NavigationController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NavigationController")
            .field("panel", &self.panel)
            .field("last_error", &self.last_error)
            .finish_non_exhaustive()
    }
}
