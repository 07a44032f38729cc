use dioxus::prelude::*;

use crate::domain::entities::format::{
    FieldMapping, FormatParameters, LabelPosition, LabelStyle, SourceFile,
};
use crate::domain::labels::to_column_name;

const NONE_OPTION_VALUE: &str = "__none__";

const SECTION_STYLE: &str =
    "border: 1px solid #ddd; border-radius: 8px; padding: 10px 12px; margin-bottom: 12px; background: #fff;";
const ROW_STYLE: &str =
    "display: flex; align-items: center; justify-content: space-between; gap: 8px; padding: 3px 0;";
const INPUT_STYLE: &str =
    "border: 1px solid #bbb; background: #fff; padding: 3px 8px; border-radius: 6px; min-width: 180px;";

/// `C: Last Name` style labels for every column of the sheet.
pub fn column_options(file: &SourceFile) -> Vec<String> {
    let headers = file.headers();
    (0..file.column_count())
        .map(|idx| {
            let letter = to_column_name(idx);
            match headers.get(idx).map(|h| h.trim()).filter(|h| !h.is_empty()) {
                Some(header) => format!("{letter}: {header}"),
                None => letter,
            }
        })
        .collect()
}

fn label_style_text(style: LabelStyle) -> &'static str {
    match style {
        LabelStyle::Numeric => "1, 2, 3",
        LabelStyle::Alphabetic => "a, b, c",
        LabelStyle::Roman => "i, ii, iii",
    }
}

fn label_position_text(position: LabelPosition) -> &'static str {
    match position {
        LabelPosition::Superscript => "Superscript",
        LabelPosition::Inline => "Inline",
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Section {
    Author,
    Affiliation,
    Email,
}

fn mapping_mut(config: &mut FormatParameters, section: Section, idx: usize) -> Option<&mut FieldMapping> {
    match section {
        Section::Author => config.author.fields.get_mut(idx),
        Section::Affiliation => config.affiliation.fields.get_mut(idx),
        Section::Email => Some(&mut config.email.field),
    }
}

#[component]
fn ColumnSelect(
    label: String,
    columns: Vec<String>,
    selected: Option<usize>,
    on_select: EventHandler<Option<usize>>,
) -> Element {
    rsx! {
        div {
            style: ROW_STYLE,
            span { "{label}" }
            select {
                style: INPUT_STYLE,
                onchange: move |event| {
                    on_select.call(event.value().parse::<usize>().ok());
                },
                option {
                    value: NONE_OPTION_VALUE,
                    selected: selected.is_none(),
                    "(not mapped)"
                }
                {columns.iter().enumerate().map(|(idx, column)| {
                    let column = column.clone();
                    rsx!(
                        option {
                            value: "{idx}",
                            selected: selected == Some(idx),
                            "{column}"
                        }
                    )
                })}
            }
        }
    }
}

#[component]
fn MappingSection(
    title: &'static str,
    section: Section,
    fields: Vec<FieldMapping>,
    columns: Vec<String>,
    config: FormatParameters,
    on_change: EventHandler<FormatParameters>,
) -> Element {
    rsx! {
        {fields.into_iter().enumerate().map(|(idx, field)| {
            let config = config.clone();
            rsx!(
                ColumnSelect {
                    key: "{title}-{idx}",
                    label: field.name.clone(),
                    columns: columns.clone(),
                    selected: field.column,
                    on_select: move |column: Option<usize>| {
                        let mut next = config.clone();
                        if let Some(mapping) = mapping_mut(&mut next, section, idx) {
                            mapping.column = column;
                        }
                        on_change.call(next);
                    },
                }
            )
        })}
    }
}

#[component]
pub fn MappingPanel(config: FormatParameters, on_change: EventHandler<FormatParameters>) -> Element {
    let columns = column_options(&config.file);

    if columns.is_empty() {
        return rsx! {
            div { style: SECTION_STYLE, p { style: "color: #666;", "No spreadsheet loaded." } }
        };
    }

    let author_separator = config.author.separator.clone();
    let affiliation_separator = config.affiliation.separator.clone();
    let label_style = config.affiliation.label_style;
    let label_position = config.affiliation.label_position;
    let config_for_author_sep = config.clone();
    let config_for_affiliation_sep = config.clone();
    let config_for_style = config.clone();
    let config_for_position = config.clone();

    rsx! {
        div {
            style: SECTION_STYLE,
            h3 { style: "margin: 0 0 8px 0;", "Authors" }
            MappingSection {
                title: "author",
                section: Section::Author,
                fields: config.author.fields.clone(),
                columns: columns.clone(),
                config: config.clone(),
                on_change,
            }
            div {
                style: ROW_STYLE,
                span { "Separator" }
                input {
                    style: INPUT_STYLE,
                    value: "{author_separator}",
                    oninput: move |event| {
                        let mut next = config_for_author_sep.clone();
                        next.author.separator = event.value();
                        on_change.call(next);
                    }
                }
            }
        }
        div {
            style: SECTION_STYLE,
            h3 { style: "margin: 0 0 8px 0;", "Affiliations" }
            MappingSection {
                title: "affiliation",
                section: Section::Affiliation,
                fields: config.affiliation.fields.clone(),
                columns: columns.clone(),
                config: config.clone(),
                on_change,
            }
            div {
                style: ROW_STYLE,
                span { "Separator" }
                input {
                    style: INPUT_STYLE,
                    value: "{affiliation_separator}",
                    oninput: move |event| {
                        let mut next = config_for_affiliation_sep.clone();
                        next.affiliation.separator = event.value();
                        on_change.call(next);
                    }
                }
            }
            div {
                style: ROW_STYLE,
                span { "Labels" }
                select {
                    style: INPUT_STYLE,
                    onchange: move |event| {
                        if let Some(style) = LabelStyle::from_key(&event.value()) {
                            let mut next = config_for_style.clone();
                            next.affiliation.label_style = style;
                            on_change.call(next);
                        }
                    },
                    {LabelStyle::ALL.into_iter().map(|style| {
                        let text = label_style_text(style);
                        rsx!(
                            option {
                                value: style.key(),
                                selected: style == label_style,
                                "{text}"
                            }
                        )
                    })}
                }
            }
            div {
                style: ROW_STYLE,
                span { "Position" }
                select {
                    style: INPUT_STYLE,
                    onchange: move |event| {
                        if let Some(position) = LabelPosition::from_key(&event.value()) {
                            let mut next = config_for_position.clone();
                            next.affiliation.label_position = position;
                            on_change.call(next);
                        }
                    },
                    {LabelPosition::ALL.into_iter().map(|position| {
                        let text = label_position_text(position);
                        rsx!(
                            option {
                                value: position.key(),
                                selected: position == label_position,
                                "{text}"
                            }
                        )
                    })}
                }
            }
        }
        div {
            style: SECTION_STYLE,
            h3 { style: "margin: 0 0 8px 0;", "Email" }
            MappingSection {
                title: "email",
                section: Section::Email,
                fields: vec![config.email.field.clone()],
                columns,
                config: config.clone(),
                on_change,
            }
        }
    }
}
