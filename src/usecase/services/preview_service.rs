use std::collections::BTreeMap;

use tracing::debug;

use crate::domain::entities::author::{Author, AuthorId, Group, MoveCommand};
use crate::domain::entities::format::{FormatParameters, SourceFile};
use crate::domain::entities::markup::Markup;
use crate::usecase::services::arranger_service::{arrange_authors, generate_markup};

pub const NO_EMAILS_PLACEHOLDER: &str = "No emails are available.";
pub const DUPLICATE_WARNING: &str = "Duplicate author names have been found.";
pub const MISSING_AFFILIATION_NOTICE: &str = "Some authors do not have an affiliation.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Info,
    Warning,
}

impl AlertKind {
    pub fn class(self) -> &'static str {
        match self {
            AlertKind::Info => "info",
            AlertKind::Warning => "warning",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub kind: AlertKind,
    pub message: String,
}

/// What differs between two successive configurations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfigChange {
    pub data_changed: bool,
    pub format_changed: bool,
}

impl ConfigChange {
    /// Manual ordering and removals survive only when the rows are the same.
    pub fn preserves_authors(&self) -> bool {
        !self.data_changed
    }
}

pub fn diff_config(previous: Option<&FormatParameters>, current: &FormatParameters) -> ConfigChange {
    let Some(previous) = previous else {
        return ConfigChange {
            data_changed: true,
            format_changed: true,
        };
    };

    ConfigChange {
        data_changed: previous.file.data != current.file.data,
        format_changed: previous.file.filename != current.file.filename
            || previous.author != current.author
            || previous.affiliation != current.affiliation
            || previous.email != current.email,
    }
}

/// Flags every non-removed author whose field values equal those of another
/// non-removed author. Returns whether any duplicate exists.
pub fn mark_duplicates(authors: &mut [Author]) -> bool {
    let mut counts: BTreeMap<&BTreeMap<String, String>, usize> = BTreeMap::new();
    for author in authors.iter().filter(|author| !author.removed) {
        *counts.entry(&author.fields).or_default() += 1;
    }
    let flags: Vec<bool> = authors
        .iter()
        .map(|author| !author.removed && counts.get(&author.fields).copied().unwrap_or(0) > 1)
        .collect();

    for (author, duplicate) in authors.iter_mut().zip(&flags) {
        author.duplicate = *duplicate;
    }
    flags.into_iter().any(|duplicate| duplicate)
}

/// `Name <email>` entries for included authors with an email, joined by `"; "`.
pub fn generate_emails(file: &SourceFile, email_column: Option<usize>, authors: &[Author]) -> String {
    let Some(column) = email_column else {
        return NO_EMAILS_PLACEHOLDER.to_string();
    };

    let entries: Vec<String> = authors
        .iter()
        .filter(|author| !author.removed)
        .filter_map(|author| {
            let email = file.cell(author.id, column).trim();
            if email.is_empty() {
                return None;
            }
            let first = author.field("First");
            let last = author.field("Last");
            let name = if !first.is_empty() && !last.is_empty() {
                format!("{first} {last}")
            } else {
                author.name.clone()
            };
            Some(format!("{name} <{email}>"))
        })
        .collect();

    let joined = entries.join("; ");
    let joined = joined.trim();
    if joined.is_empty() {
        NO_EMAILS_PLACEHOLDER.to_string()
    } else {
        joined.to_string()
    }
}

/// Moves one author into the target group. With an index the author is placed at
/// that position among the target group's members; without one it keeps its slot.
pub fn apply_move(mut authors: Vec<Author>, command: MoveCommand) -> Vec<Author> {
    let Some(current) = authors.iter().position(|a| a.id == command.author_id) else {
        debug!(author_id = command.author_id, "move ignored: unknown author");
        return authors;
    };
    if authors[current].group() != command.from {
        debug!(
            author_id = command.author_id,
            expected = command.from.label(),
            "move source group does not match author state"
        );
    }

    let mut author = authors.remove(current);
    author.removed = command.to == Group::Removed;

    let insert_at = match command.index {
        None => current,
        Some(index) => {
            let members: Vec<usize> = authors
                .iter()
                .enumerate()
                .filter(|(_, a)| a.group() == command.to)
                .map(|(pos, _)| pos)
                .collect();
            match (members.get(index), members.last()) {
                (Some(&pos), _) => pos,
                (None, Some(&last)) => last + 1,
                (None, None) => authors.len(),
            }
        }
    };
    authors.insert(insert_at.min(authors.len()), author);
    authors
}

pub fn author_order(authors: &[Author]) -> Vec<AuthorId> {
    authors.iter().map(|author| author.id).collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewTab {
    Preview,
    Emails,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedPreview {
    pub markup: Markup,
    pub alerts: Vec<Alert>,
    pub emails: String,
}

/// View state of the preview pane: the current configuration, the author
/// arrangement the user has edited, and the last render.
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewState {
    config: Option<FormatParameters>,
    authors: Vec<Author>,
    rendered: Option<RenderedPreview>,
    pub selected_tab: PreviewTab,
}

impl Default for PreviewState {
    fn default() -> Self {
        Self::new()
    }
}

impl PreviewState {
    pub fn new() -> Self {
        Self {
            config: None,
            authors: Vec::new(),
            rendered: None,
            selected_tab: PreviewTab::Preview,
        }
    }

    pub fn config(&self) -> Option<&FormatParameters> {
        self.config.as_ref()
    }

    pub fn authors(&self) -> &[Author] {
        &self.authors
    }

    pub fn rendered(&self) -> Option<&RenderedPreview> {
        self.rendered.as_ref()
    }

    pub fn members(&self, group: Group) -> impl Iterator<Item = &Author> {
        self.authors.iter().filter(move |author| author.group() == group)
    }

    /// Takes a new configuration and re-renders. Removals and ordering are kept
    /// when the rows are unchanged; otherwise authors are rebuilt from scratch.
    pub fn apply_config(&mut self, config: FormatParameters) -> ConfigChange {
        let change = diff_config(self.config.as_ref(), &config);
        debug!(
            data_changed = change.data_changed,
            format_changed = change.format_changed,
            "preview configuration changed"
        );
        self.config = Some(config);
        self.rendered = None;
        if change.data_changed {
            self.authors.clear();
            self.selected_tab = PreviewTab::Preview;
        }

        let Some(config) = self.config.as_ref() else {
            return change;
        };
        if !config.is_renderable() {
            debug!("preview skipped: configuration is not renderable");
            return change;
        }

        let arranged = arrange_authors(config).authors;
        self.authors = if change.preserves_authors() {
            remap_authors(&self.authors, arranged)
        } else {
            arranged
        };

        self.render();
        change
    }

    /// Applies a drag between groups and re-renders. Returns the new author order.
    pub fn apply_move(&mut self, command: MoveCommand) -> Vec<AuthorId> {
        debug!(
            author_id = command.author_id,
            from = command.from.label(),
            to = command.to.label(),
            index = ?command.index,
            "moving author"
        );
        let authors = std::mem::take(&mut self.authors);
        self.authors = apply_move(authors, command);
        self.render();
        author_order(&self.authors)
    }

    /// Recomputes duplicates and alerts, then regenerates markup and the mailing list.
    pub fn render(&mut self) {
        let Some(config) = self.config.as_ref().filter(|c| c.is_renderable()) else {
            self.rendered = None;
            return;
        };

        let mut alerts = Vec::new();
        if mark_duplicates(&mut self.authors) {
            alerts.push(Alert {
                kind: AlertKind::Warning,
                message: DUPLICATE_WARNING.to_string(),
            });
        }
        if self
            .authors
            .iter()
            .any(|author| !author.removed && author.affiliation.is_none())
        {
            alerts.push(Alert {
                kind: AlertKind::Info,
                message: MISSING_AFFILIATION_NOTICE.to_string(),
            });
        }

        let markup = generate_markup(config, &self.authors);
        let emails = generate_emails(&config.file, config.email.field.column, &self.authors);
        debug!(
            authors = self.authors.len(),
            paragraphs = markup.paragraphs.len(),
            alerts = alerts.len(),
            "preview rendered"
        );
        self.rendered = Some(RenderedPreview {
            markup,
            alerts,
            emails,
        });
    }
}

/// Keeps the existing order and removal flags while taking display fields from a
/// fresh arrangement. Authors missing from the arrangement are dropped and new ones
/// are appended as included.
fn remap_authors(existing: &[Author], arranged: Vec<Author>) -> Vec<Author> {
    let mut fresh: BTreeMap<AuthorId, Author> =
        arranged.iter().map(|author| (author.id, author.clone())).collect();

    let mut authors: Vec<Author> = existing
        .iter()
        .filter_map(|author| {
            fresh.remove(&author.id).map(|updated| Author {
                removed: author.removed,
                duplicate: author.duplicate,
                ..updated
            })
        })
        .collect();

    authors.extend(
        arranged
            .into_iter()
            .filter(|author| fresh.contains_key(&author.id)),
    );
    authors
}
