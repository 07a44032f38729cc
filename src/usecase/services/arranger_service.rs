use std::collections::BTreeMap;

use crate::domain::entities::author::{ArrangedAuthors, Author};
use crate::domain::entities::format::{
    FieldMapping, FormatParameters, LabelPosition, LabelStyle, SourceFile,
};
use crate::domain::entities::markup::{Inline, Markup, Paragraph};
use crate::domain::labels::{to_column_name, to_roman_numerals};

pub const DUPLICATE_CLASS: &str = "duplicate";

/// Logical field name to cell value for the mapped fields of one row.
pub fn author_fields(file: &SourceFile, fields: &[FieldMapping], row: usize) -> BTreeMap<String, String> {
    fields
        .iter()
        .filter_map(|field| {
            field
                .column
                .map(|column| (field.name.clone(), file.cell(row, column).to_string()))
        })
        .collect()
}

fn join_mapped(file: &SourceFile, fields: &[FieldMapping], row: usize, separator: &str) -> String {
    fields
        .iter()
        .filter_map(|field| field.column)
        .map(|column| file.cell(row, column).trim())
        .filter(|value| !value.is_empty())
        .collect::<Vec<_>>()
        .join(separator)
}

/// One author per data row with a non-empty name, in row order.
pub fn arrange_authors(config: &FormatParameters) -> ArrangedAuthors {
    let authors = (1..config.file.data.len())
        .filter_map(|row| {
            let name = join_mapped(&config.file, &config.author.fields, row, " ");
            if name.is_empty() {
                return None;
            }
            let affiliation = join_mapped(
                &config.file,
                &config.affiliation.fields,
                row,
                &config.affiliation.separator,
            );
            Some(Author {
                id: row,
                name,
                fields: author_fields(&config.file, &config.author.fields, row),
                affiliation: (!affiliation.is_empty()).then_some(affiliation),
                removed: false,
                duplicate: false,
            })
        })
        .collect();

    ArrangedAuthors { authors }
}

/// Affiliation label for a zero-based affiliation index.
pub fn affiliation_label(style: LabelStyle, index: usize) -> String {
    match style {
        LabelStyle::Numeric => (index + 1).to_string(),
        LabelStyle::Alphabetic => to_column_name(index).to_lowercase(),
        LabelStyle::Roman => u32::try_from(index + 1)
            .map(to_roman_numerals)
            .unwrap_or_default()
            .to_lowercase(),
    }
}

/// Author paragraph followed by one paragraph per distinct affiliation of the
/// included authors, numbered by first appearance.
pub fn generate_markup(config: &FormatParameters, authors: &[Author]) -> Markup {
    let included: Vec<&Author> = authors.iter().filter(|author| !author.removed).collect();
    if included.is_empty() {
        return Markup::default();
    }

    let mut affiliations: Vec<&str> = Vec::new();
    let mut author_line = Paragraph::default();
    let style = config.affiliation.label_style;
    let position = config.affiliation.label_position;

    for (idx, author) in included.iter().enumerate() {
        if idx > 0 {
            author_line.push_text(config.author.separator.as_str());
        }
        if author.duplicate {
            author_line.push(Inline::Span {
                class: DUPLICATE_CLASS.to_string(),
                text: author.name.clone(),
            });
        } else {
            author_line.push_text(author.name.as_str());
        }

        let Some(affiliation) = author.affiliation.as_deref() else {
            continue;
        };
        let affiliation_idx = match affiliations.iter().position(|a| *a == affiliation) {
            Some(existing) => existing,
            None => {
                affiliations.push(affiliation);
                affiliations.len() - 1
            }
        };
        let label = affiliation_label(style, affiliation_idx);
        match position {
            LabelPosition::Superscript => author_line.push(Inline::Superscript(label)),
            LabelPosition::Inline => author_line.push_text(format!(" ({label})")),
        }
    }

    let mut paragraphs = vec![author_line];
    for (idx, affiliation) in affiliations.iter().enumerate() {
        let label = affiliation_label(style, idx);
        let mut paragraph = Paragraph::default();
        match position {
            LabelPosition::Superscript => paragraph.push(Inline::Superscript(label)),
            LabelPosition::Inline => paragraph.push_text(format!("{label}. ")),
        }
        paragraph.push_text(*affiliation);
        paragraphs.push(paragraph);
    }

    Markup { paragraphs }
}
