//! Plain-text rendering of panels.

use crate::TextCatalog;
use std::fmt::Write;
use usermgmt_core::{format_date, User};
use usermgmt_navigation::{Panel, UserForm};

const ID_WIDTH: usize = 8;
const NAME_WIDTH: usize = 20;

/// Renders `panel` as text.
///
/// Add and Edit show `draft` when given, so field edits that were not yet
/// confirmed are visible.
#[must_use]
pub fn render_panel(panel: &Panel, draft: Option<&UserForm>, catalog: &TextCatalog) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "== {} ==", catalog.get("mainFrame.title"));

    match panel {
        Panel::Browse { rows, selected } => {
            let _ = writeln!(
                out,
                "  {:<id_w$}{:<name_w$}{}",
                catalog.get("userTableModel.id"),
                catalog.get("userTableModel.first.name"),
                catalog.get("userTableModel.last.name"),
                id_w = ID_WIDTH,
                name_w = NAME_WIDTH,
            );
            if rows.is_empty() {
                let _ = writeln!(out, "  {}", catalog.get("browsePanel.empty"));
            }
            for user in rows {
                let marker = if user.id.is_some() && user.id == *selected {
                    '>'
                } else {
                    ' '
                };
                let id = user.id.map(|id| id.to_string()).unwrap_or_default();
                let _ = writeln!(
                    out,
                    "{} {:<id_w$}{:<name_w$}{}",
                    marker,
                    id,
                    user.first_name,
                    user.last_name,
                    id_w = ID_WIDTH,
                    name_w = NAME_WIDTH,
                );
            }
            if let Some(id) = selected {
                let _ = writeln!(out, "{}: {}", catalog.get("browsePanel.selected"), id);
            }
        }
        Panel::Add { form } => {
            let _ = writeln!(out, "-- {} --", catalog.get("addPanel.title"));
            write_form(&mut out, draft.unwrap_or(form), catalog);
        }
        Panel::Edit { id, form } => {
            let _ = writeln!(out, "-- {} #{} --", catalog.get("editPanel.title"), id);
            write_form(&mut out, draft.unwrap_or(form), catalog);
        }
        Panel::Details { user } => {
            let _ = writeln!(out, "-- {} --", catalog.get("detailsPanel.title"));
            write_user(&mut out, user, catalog);
        }
        Panel::Delete { user } => {
            let _ = writeln!(out, "-- {} --", catalog.get("deletePanel.title"));
            write_user(&mut out, user, catalog);
            let _ = writeln!(out, "{}", catalog.get("deletePanel.confirm"));
        }
    }

    out
}

/// Renders an error line.
#[must_use]
pub fn render_error(message: &str, catalog: &TextCatalog) -> String {
    format!("{}: {}\n", catalog.get("message.error"), message)
}

fn write_form(out: &mut String, form: &UserForm, catalog: &TextCatalog) {
    let _ = writeln!(out, "{}: {}", catalog.get("field.firstName"), form.first_name);
    let _ = writeln!(out, "{}: {}", catalog.get("field.lastName"), form.last_name);
    let _ = writeln!(out, "{}: {}", catalog.get("field.dateOfBirth"), form.date_of_birth);
}

fn write_user(out: &mut String, user: &User, catalog: &TextCatalog) {
    if let Some(id) = user.id {
        let _ = writeln!(out, "{}: {}", catalog.get("userTableModel.id"), id);
    }
    let _ = writeln!(out, "{}: {}", catalog.get("field.firstName"), user.first_name);
    let _ = writeln!(out, "{}: {}", catalog.get("field.lastName"), user.last_name);
    let _ = writeln!(
        out,
        "{}: {}",
        catalog.get("field.dateOfBirth"),
        format_date(user.date_of_birth)
    );
    let _ = writeln!(out, "{}: {}", catalog.get("field.fullName"), user.full_name());
}
