use dioxus::prelude::*;

use crate::domain::entities::author::{Author, AuthorId, Group, MoveCommand};
use crate::domain::entities::markup::{Inline, Paragraph};
use crate::usecase::services::arranger_service::DUPLICATE_CLASS;
use crate::usecase::services::preview_service::{Alert, AlertKind, PreviewState, PreviewTab};

const CHIP_STYLE: &str =
    "display: inline-flex; align-items: center; gap: 4px; padding: 3px 10px; margin: 3px; border-radius: 12px; border: 1px solid #bbb; background: #fff; cursor: grab; user-select: none;";
const GROUP_STYLE: &str =
    "min-height: 40px; padding: 6px; border: 1px dashed #bbb; border-radius: 8px; background: #fafafa;";
const TAB_STYLE: &str =
    "border: 1px solid #bbb; padding: 4px 12px; border-radius: 6px 6px 0 0; cursor: pointer;";

fn alert_style(kind: AlertKind) -> &'static str {
    match kind {
        AlertKind::Warning => {
            "padding: 8px 12px; margin-bottom: 8px; border-radius: 6px; background: #fff3cd; border: 1px solid #ffe69c; color: #664d03;"
        }
        AlertKind::Info => {
            "padding: 8px 12px; margin-bottom: 8px; border-radius: 6px; background: #cff4fc; border: 1px solid #9eeaf9; color: #055160;"
        }
    }
}

fn tab_background(selected: bool) -> &'static str {
    if selected {
        "#eef4ff"
    } else {
        "#fff"
    }
}

fn render_paragraph(paragraph: &Paragraph) -> Element {
    rsx! {
        p {
            {paragraph.inlines.iter().map(|inline| match inline {
                Inline::Text(text) => rsx!("{text}"),
                Inline::Superscript(text) => rsx!(sup { "{text}" }),
                Inline::Span { class, text } => {
                    let background = if class == DUPLICATE_CLASS { "#fff3cd" } else { "transparent" };
                    rsx!(span { class: "{class}", style: "background: {background};", "{text}" })
                }
            })}
        }
    }
}

#[component]
fn AuthorChip(author: Author, mut dragging: Signal<Option<(AuthorId, Group)>>, on_drop_at: EventHandler<AuthorId>) -> Element {
    let id = author.id;
    let group = author.group();
    let name = author.name.clone();
    let chip_style = CHIP_STYLE;
    let (border, title) = if author.duplicate {
        ("#e0a800", "Duplicate author")
    } else {
        ("#bbb", "")
    };

    rsx! {
        span {
            style: "{chip_style} border-color: {border};",
            draggable: "true",
            title,
            ondragstart: move |_| dragging.set(Some((id, group))),
            ondragend: move |_| dragging.set(None),
            ondragover: move |event| event.prevent_default(),
            ondrop: move |event| {
                event.prevent_default();
                event.stop_propagation();
                on_drop_at.call(id);
            },
            span { style: "color: #999;", "⠿" }
            "{name}"
        }
    }
}

#[component]
fn AuthorGroup(
    group: Group,
    authors: Vec<Author>,
    dragging: Signal<Option<(AuthorId, Group)>>,
    on_move: EventHandler<MoveCommand>,
) -> Element {
    let title = group.label();
    let count = authors.len();
    let positions: Vec<AuthorId> = authors.iter().map(|a| a.id).collect();

    rsx! {
        div {
            style: "margin-bottom: 10px;",
            div { style: "font-weight: 600; margin-bottom: 4px;", "{title} ({count})" }
            div {
                style: GROUP_STYLE,
                ondragover: move |event| event.prevent_default(),
                ondrop: move |event| {
                    event.prevent_default();
                    if let Some((author_id, from)) = dragging() {
                        on_move.call(MoveCommand { author_id, from, to: group, index: None });
                    }
                },
                {authors.into_iter().map(|author| {
                    let positions = positions.clone();
                    let key = author.id;
                    rsx!(
                        AuthorChip {
                            key: "{key}",
                            author,
                            dragging,
                            on_drop_at: move |target: AuthorId| {
                                let Some((author_id, from)) = dragging() else {
                                    return;
                                };
                                if author_id == target {
                                    return;
                                }
                                let index = positions.iter().position(|id| *id == target);
                                on_move.call(MoveCommand { author_id, from, to: group, index });
                            },
                        }
                    )
                })}
            }
        }
    }
}

fn render_alert(alert: &Alert) -> Element {
    let style = alert_style(alert.kind);
    let class = alert.kind.class();
    let message = alert.message.clone();
    rsx! {
        div { class: "alert alert-{class}", style, "{message}" }
    }
}

/// Live preview of the arranged author list with drag-and-drop inclusion,
/// the derived mailing list and document export.
#[component]
pub fn PreviewPane(
    mut preview: Signal<PreviewState>,
    loading: bool,
    on_reorder: EventHandler<Vec<AuthorId>>,
    on_export: EventHandler<()>,
) -> Element {
    let mut dragging = use_signal(|| None::<(AuthorId, Group)>);
    let state = preview.read().clone();

    let on_move = move |command: MoveCommand| {
        dragging.set(None);
        let order = preview.write().apply_move(command);
        on_reorder.call(order);
    };

    let Some(rendered) = state.rendered().cloned() else {
        return rsx! {
            div {
                style: "padding: 16px; color: #666;",
                if loading {
                    p { "Loading…" }
                } else {
                    p { "Map at least one author field and one affiliation field to see a preview." }
                }
            }
        };
    };

    let included: Vec<Author> = state.members(Group::Included).cloned().collect();
    let removed: Vec<Author> = state.members(Group::Removed).cloned().collect();
    let tab = state.selected_tab;
    let emails = rendered.emails.clone();
    let opacity = if loading { 0.5 } else { 1.0 };
    let tab_style = TAB_STYLE;
    let preview_background = tab_background(tab == PreviewTab::Preview);
    let emails_background = tab_background(tab == PreviewTab::Emails);

    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 8px; opacity: {opacity};",
            {rendered.alerts.iter().map(render_alert)}
            AuthorGroup { group: Group::Included, authors: included, dragging, on_move }
            AuthorGroup { group: Group::Removed, authors: removed, dragging, on_move }
            div {
                style: "display: flex; gap: 4px; align-items: flex-end;",
                button {
                    style: "{tab_style} background: {preview_background};",
                    onclick: move |_| preview.write().selected_tab = PreviewTab::Preview,
                    "Preview"
                }
                button {
                    style: "{tab_style} background: {emails_background};",
                    onclick: move |_| preview.write().selected_tab = PreviewTab::Emails,
                    "Emails"
                }
                div { style: "flex: 1;" }
                button {
                    style: "border: 1px solid #0d6efd; background: #0d6efd; color: #fff; padding: 4px 12px; border-radius: 6px; cursor: pointer;",
                    disabled: rendered.markup.is_empty(),
                    onclick: move |_| on_export.call(()),
                    "Download .docx"
                }
            }
            if tab == PreviewTab::Preview {
                div {
                    style: "border: 1px solid #ddd; border-radius: 0 8px 8px 8px; padding: 12px 16px; max-height: 60vh; overflow-y: auto; background: #fff; font-family: serif;",
                    {rendered.markup.paragraphs.iter().map(render_paragraph)}
                }
            } else {
                textarea {
                    style: "width: 100%; min-height: 200px; border: 1px solid #ddd; border-radius: 0 8px 8px 8px; padding: 8px; font-family: monospace;",
                    readonly: true,
                    value: "{emails}",
                }
            }
        }
    }
}
