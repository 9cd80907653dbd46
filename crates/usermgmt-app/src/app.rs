//! Line-oriented terminal session.
//!
//! Each input line is parsed into an [`Input`], translated into a
//! navigation [`Command`] where one applies, and answered with a fresh
//! rendering of the active panel.

use crate::render::{render_error, render_panel};
use crate::TextCatalog;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info};
use usermgmt_core::{UserId, UserMgmtError, UserMgmtResult};
use usermgmt_navigation::{Command, NavigationController, PanelKind, UserForm};

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Select(Option<UserId>),
    Add,
    Edit,
    Details,
    Delete,
    FirstName(String),
    LastName(String),
    DateOfBirth(String),
    Ok,
    Cancel,
    Back,
    Help,
    Quit,
    Empty,
}

impl Input {
    /// Parses a line. Field values keep everything after the keyword.
    pub fn parse(line: &str) -> Result<Self, String> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let input = match word.to_ascii_lowercase().as_str() {
            "" => Self::Empty,
            "select" => {
                let id = rest
                    .parse::<UserId>()
                    .map_err(|_| format!("select expects a numeric id, got '{}'", rest))?;
                Self::Select(Some(id))
            }
            "clear" => Self::Select(None),
            "add" => Self::Add,
            "edit" => Self::Edit,
            "details" => Self::Details,
            "delete" => Self::Delete,
            "first" => Self::FirstName(rest.to_string()),
            "last" => Self::LastName(rest.to_string()),
            "dob" => Self::DateOfBirth(rest.to_string()),
            "ok" => Self::Ok,
            "cancel" => Self::Cancel,
            "back" => Self::Back,
            "help" | "?" => Self::Help,
            "quit" | "exit" => Self::Quit,
            _ => return Err(line.to_string()),
        };
        Ok(input)
    }
}

/// Whether the session keeps reading input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Terminal session over a navigation controller.
///
/// Field edits go to a local draft; `ok` submits the draft to the Add or
/// Edit panel. The draft is resynchronised with the panel after every
/// command, so a rejected form stays on screen as typed.
#[derive(Debug)]
pub struct Session {
    controller: NavigationController,
    catalog: TextCatalog,
    draft: UserForm,
    notice: Option<String>,
}

impl Session {
    /// Creates a session showing the controller's current panel.
    #[must_use]
    pub fn new(controller: NavigationController, catalog: TextCatalog) -> Self {
        let draft = controller.panel().form().cloned().unwrap_or_default();
        Self {
            controller,
            catalog,
            draft,
            notice: None,
        }
    }

    /// Returns the navigation controller.
    #[must_use]
    pub const fn controller(&self) -> &NavigationController {
        &self.controller
    }

    /// Returns the unsubmitted form input.
    #[must_use]
    pub const fn draft(&self) -> &UserForm {
        &self.draft
    }

    /// Handles one input line.
    ///
    /// Command failures are not returned; they are kept by the controller
    /// and shown by [`render`](Self::render).
    pub async fn handle_line(&mut self, line: &str) -> Flow {
        self.notice = None;

        let input = match Input::parse(line) {
            Ok(input) => input,
            Err(text) => {
                self.notice = Some(format!("{}: {}", self.catalog.get("message.unknownInput"), text));
                return Flow::Continue;
            }
        };
        debug!("Input: {:?}", input);

        let command = match input {
            Input::Quit => return Flow::Quit,
            Input::Empty => return Flow::Continue,
            Input::Help => {
                self.notice = Some(self.catalog.get("message.help").to_string());
                return Flow::Continue;
            }
            Input::FirstName(value) => return self.edit_draft(|form| form.first_name = value),
            Input::LastName(value) => return self.edit_draft(|form| form.last_name = value),
            Input::DateOfBirth(value) => {
                return self.edit_draft(|form| form.date_of_birth = value);
            }
            Input::Select(id) => Command::Select(id),
            Input::Add => Command::RequestAdd,
            Input::Edit => Command::RequestEdit,
            Input::Details => Command::RequestDetails,
            Input::Delete => Command::RequestDelete,
            Input::Ok => match self.controller.kind() {
                PanelKind::Add => Command::ConfirmAdd(self.draft.clone()),
                PanelKind::Edit => Command::ConfirmEdit(self.draft.clone()),
                PanelKind::Delete => Command::ConfirmDelete,
                PanelKind::Details | PanelKind::Browse => Command::Back,
            },
            Input::Cancel => Command::Cancel,
            Input::Back => Command::Back,
        };

        if let Err(e) = self.controller.dispatch(command).await {
            debug!("Command failed, shown on next render: {}", e);
        }
        self.draft = self.controller.panel().form().cloned().unwrap_or_default();
        Flow::Continue
    }

    fn edit_draft(&mut self, apply: impl FnOnce(&mut UserForm)) -> Flow {
        if self.controller.panel().form().is_some() {
            apply(&mut self.draft);
        } else {
            debug!("Field edit ignored on {} panel", self.controller.kind());
        }
        Flow::Continue
    }

    /// Renders the active panel followed by any error or notice.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = render_panel(self.controller.panel(), Some(&self.draft), &self.catalog);
        if let Some(message) = self.controller.last_error() {
            out.push_str(&render_error(message, &self.catalog));
        }
        if let Some(notice) = &self.notice {
            out.push_str(notice);
            out.push('\n');
        }
        out
    }
}

/// Runs the session until `quit` or end of input.
pub async fn run<R, W>(session: &mut Session, reader: R, mut writer: W) -> UserMgmtResult<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    write_screen(&mut writer, &session.render()).await?;

    let mut lines = reader.lines();
    while let Some(line) = lines.next_line().await? {
        if session.handle_line(&line).await == Flow::Quit {
            info!("Quit requested");
            break;
        }
        write_screen(&mut writer, &session.render()).await?;
    }

    writer.flush().await?;
    Ok(())
}

async fn write_screen<W: AsyncWrite + Unpin>(writer: &mut W, screen: &str) -> UserMgmtResult<()> {
    writer.write_all(screen.as_bytes()).await?;
    writer.write_all(b"> ").await?;
    writer.flush().await.map_err(UserMgmtError::from)
}
