use std::fs;
use std::io::{Cursor, Read};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::config::{ensure_webview_data_dir, parse_render_delay};
use crate::domain::entities::author::{Author, Group, MoveCommand};
use crate::domain::entities::format::{FormatParameters, LabelPosition, LabelStyle, SourceFile};
use crate::domain::entities::markup::Inline;
use crate::infra::export::docx::DocxExporter;
use crate::infra::import::ImportError;
use crate::ui::components::mapping_panel::column_options;
use crate::usecase::ports::exporter::{DocumentExporter, ExportError};
use crate::usecase::services::arranger_service::{
    affiliation_label, arrange_authors, generate_markup,
};
use crate::usecase::services::export_service::{export_filename, ExportService};
use crate::usecase::services::import_service::{auto_map, load_source_file};
use crate::usecase::services::preview_service::{
    apply_move, author_order, diff_config, generate_emails, mark_duplicates, AlertKind,
    PreviewState, PreviewTab, DUPLICATE_WARNING, MISSING_AFFILIATION_NOTICE,
    NO_EMAILS_PLACEHOLDER,
};
use crate::usecase::services::render_scheduler::DEFAULT_RENDER_DELAY;

fn unique_test_dir(prefix: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock should be after epoch")
        .as_nanos();
    std::env::temp_dir().join(format!("author-arranger-{prefix}-{nanos}"))
}

fn rows(data: &[&[&str]]) -> Vec<Vec<String>> {
    data.iter()
        .map(|row| row.iter().map(|cell| cell.to_string()).collect())
        .collect()
}

fn sample_rows() -> Vec<Vec<String>> {
    rows(&[
        &["First", "Last", "Department", "Institution", "Email"],
        &["Ada", "Lovelace", "Mathematics", "University of London", "ada@example.org"],
        &["Alan", "Turing", "Computing", "University of Manchester", ""],
        &["Grace", "Hopper", "Computing", "University of Manchester", "grace@example.org"],
    ])
}

fn config_with_rows(data: Vec<Vec<String>>) -> FormatParameters {
    let mut config = FormatParameters::with_file(SourceFile {
        filename: "authors.xlsx".to_string(),
        data,
    });
    auto_map(&mut config);
    config
}

fn sample_config() -> FormatParameters {
    config_with_rows(sample_rows())
}

fn author(id: usize, first: &str, last: &str) -> Author {
    Author {
        id,
        name: format!("{first} {last}"),
        fields: [
            ("First".to_string(), first.to_string()),
            ("Last".to_string(), last.to_string()),
        ]
        .into_iter()
        .collect(),
        affiliation: Some("Somewhere".to_string()),
        removed: false,
        duplicate: false,
    }
}

fn ids(authors: &[Author]) -> Vec<usize> {
    authors.iter().map(|a| a.id).collect()
}

#[test]
fn auto_map_matches_headers_by_normalized_name() {
    let config = sample_config();

    let author_columns: Vec<(String, Option<usize>)> = config
        .author
        .fields
        .iter()
        .map(|f| (f.name.clone(), f.column))
        .collect();
    assert!(author_columns.contains(&("First".to_string(), Some(0))));
    assert!(author_columns.contains(&("Last".to_string(), Some(1))));
    assert!(author_columns.contains(&("Title".to_string(), None)));
    assert_eq!(config.affiliation.fields[0].column, Some(2), "Department");
    assert_eq!(config.affiliation.fields[1].column, Some(3), "Institution");
    assert_eq!(config.email.field.column, Some(4));
}

#[test]
fn auto_map_accepts_prefix_and_keeps_existing_mappings() {
    let mut config = config_with_rows(rows(&[
        &["e-mail address", "First name", "Last name", "Institution (primary)"],
        &["x@example.org", "Ada", "Lovelace", "London"],
    ]));
    assert_eq!(config.author.fields[1].column, Some(1), "First");
    assert_eq!(config.author.fields[3].column, Some(2), "Last");
    assert_eq!(config.affiliation.fields[1].column, Some(3));
    assert_eq!(config.email.field.column, Some(0));

    config.author.fields[1].column = Some(2);
    auto_map(&mut config);
    assert_eq!(config.author.fields[1].column, Some(2), "manual mapping must survive");
}

#[test]
fn renderable_requires_rows_and_mapped_fields() {
    assert!(sample_config().is_renderable());

    let header_only = config_with_rows(rows(&[&["First", "Last", "Department"]]));
    assert!(!header_only.is_renderable());

    let mut no_affiliation = sample_config();
    for field in &mut no_affiliation.affiliation.fields {
        field.column = None;
    }
    assert!(!no_affiliation.is_renderable());

    assert!(!FormatParameters::default().is_renderable());
}

#[test]
fn arrange_authors_builds_names_and_affiliations_in_row_order() {
    let mut data = sample_rows();
    data.push(vec!["".into(), " ".into(), "Physics".into()]);
    let arranged = arrange_authors(&config_with_rows(data));

    assert_eq!(ids(&arranged.authors), vec![1, 2, 3], "blank names are skipped");
    let ada = &arranged.authors[0];
    assert_eq!(ada.name, "Ada Lovelace");
    assert_eq!(ada.field("First"), "Ada");
    assert_eq!(ada.field("Last"), "Lovelace");
    assert_eq!(ada.affiliation.as_deref(), Some("Mathematics, University of London"));
    assert!(!ada.removed && !ada.duplicate);
}

#[test]
fn markup_numbers_shared_affiliations_once() {
    let config = sample_config();
    let authors = arrange_authors(&config).authors;
    let markup = generate_markup(&config, &authors);

    assert_eq!(
        markup.to_html(),
        "<p>Ada Lovelace<sup>1</sup>, Alan Turing<sup>2</sup>, Grace Hopper<sup>2</sup></p>\
         <p><sup>1</sup>Mathematics, University of London</p>\
         <p><sup>2</sup>Computing, University of Manchester</p>"
    );
}

#[test]
fn markup_inline_alphabetic_labels_skip_removed_authors() {
    let mut config = sample_config();
    config.author.separator = "; ".to_string();
    config.affiliation.label_style = LabelStyle::Alphabetic;
    config.affiliation.label_position = LabelPosition::Inline;
    let mut authors = arrange_authors(&config).authors;
    authors[0].removed = true;

    let markup = generate_markup(&config, &authors);

    assert_eq!(
        markup.to_html(),
        "<p>Alan Turing (a); Grace Hopper (a)</p>\
         <p>a. Computing, University of Manchester</p>"
    );
}

#[test]
fn markup_is_empty_when_everyone_is_removed() {
    let config = sample_config();
    let mut authors = arrange_authors(&config).authors;
    for author in &mut authors {
        author.removed = true;
    }
    assert!(generate_markup(&config, &authors).is_empty());
}

#[test]
fn affiliation_labels_follow_style() {
    assert_eq!(affiliation_label(LabelStyle::Numeric, 0), "1");
    assert_eq!(affiliation_label(LabelStyle::Numeric, 11), "12");
    assert_eq!(affiliation_label(LabelStyle::Alphabetic, 0), "a");
    assert_eq!(affiliation_label(LabelStyle::Alphabetic, 26), "aa");
    assert_eq!(affiliation_label(LabelStyle::Roman, 3), "iv");
    assert_eq!(affiliation_label(LabelStyle::Roman, 8), "ix");
}

#[test]
fn duplicate_markup_uses_classed_span() {
    let mut data = sample_rows();
    data.push(rows(&[&["Ada", "Lovelace", "Physics", "Cambridge", ""]]).remove(0));
    let config = config_with_rows(data);
    let mut authors = arrange_authors(&config).authors;
    mark_duplicates(&mut authors);

    let markup = generate_markup(&config, &authors);
    assert!(markup.paragraphs[0].inlines.contains(&Inline::Span {
        class: "duplicate".to_string(),
        text: "Ada Lovelace".to_string(),
    }));
}

#[test]
fn duplicates_require_two_included_authors_with_equal_fields() {
    let mut authors = vec![
        author(1, "Ada", "Lovelace"),
        author(2, "Alan", "Turing"),
        author(3, "Ada", "Lovelace"),
    ];

    assert!(mark_duplicates(&mut authors));
    let flags: Vec<bool> = authors.iter().map(|a| a.duplicate).collect();
    assert_eq!(flags, vec![true, false, true]);

    authors[2].removed = true;
    assert!(!mark_duplicates(&mut authors));
    assert!(authors.iter().all(|a| !a.duplicate), "removed twin clears both flags");
}

#[test]
fn duplicates_among_three_survive_one_removal() {
    let mut authors = vec![
        author(1, "Ada", "Lovelace"),
        author(2, "Ada", "Lovelace"),
        author(3, "Ada", "Lovelace"),
    ];
    authors[0].removed = true;

    assert!(mark_duplicates(&mut authors));
    let flags: Vec<bool> = authors.iter().map(|a| a.duplicate).collect();
    assert_eq!(flags, vec![false, true, true]);
}

#[test]
fn emails_skip_removed_and_missing_addresses() {
    let config = sample_config();
    let mut authors = arrange_authors(&config).authors;

    let emails = generate_emails(&config.file, config.email.field.column, &authors);
    assert_eq!(
        emails,
        "Ada Lovelace <ada@example.org>; Grace Hopper <grace@example.org>"
    );

    authors[0].removed = true;
    let emails = generate_emails(&config.file, config.email.field.column, &authors);
    assert_eq!(emails, "Grace Hopper <grace@example.org>");

    authors[2].removed = true;
    let emails = generate_emails(&config.file, config.email.field.column, &authors);
    assert_eq!(emails, NO_EMAILS_PLACEHOLDER);
}

#[test]
fn emails_fall_back_to_derived_name_without_first_and_last() {
    let file = SourceFile {
        filename: "a.csv".to_string(),
        data: rows(&[&["Name", "Email"], &["Dr. Ada", " ada@example.org "]]),
    };
    let mut ada = author(1, "", "");
    ada.name = "Dr. Ada".to_string();

    assert_eq!(
        generate_emails(&file, Some(1), &[ada.clone()]),
        "Dr. Ada <ada@example.org>"
    );
    assert_eq!(generate_emails(&file, None, &[ada]), NO_EMAILS_PLACEHOLDER);
}

#[test]
fn diff_reports_data_and_format_changes_separately() {
    let config = sample_config();

    let first = diff_config(None, &config);
    assert!(first.data_changed && first.format_changed);

    let same = diff_config(Some(&config), &config.clone());
    assert!(!same.data_changed && !same.format_changed);
    assert!(same.preserves_authors());

    let mut restyled = config.clone();
    restyled.affiliation.label_style = LabelStyle::Roman;
    let change = diff_config(Some(&config), &restyled);
    assert!(!change.data_changed);
    assert!(change.format_changed);

    let mut edited = config.clone();
    edited.file.data[1][0] = "Augusta".to_string();
    let change = diff_config(Some(&config), &edited);
    assert!(change.data_changed);
    assert!(!change.preserves_authors());
}

#[test]
fn move_to_removed_keeps_slot_without_index() {
    let authors = vec![author(1, "A", "A"), author(2, "B", "B"), author(3, "C", "C")];
    let moved = apply_move(
        authors,
        MoveCommand {
            author_id: 2,
            from: Group::Included,
            to: Group::Removed,
            index: None,
        },
    );

    assert_eq!(ids(&moved), vec![1, 2, 3]);
    assert!(moved[1].removed);
    assert!(!moved[0].removed && !moved[2].removed);
}

#[test]
fn move_with_index_reorders_within_target_group() {
    let authors = vec![author(1, "A", "A"), author(2, "B", "B"), author(3, "C", "C")];
    let moved = apply_move(
        authors,
        MoveCommand {
            author_id: 3,
            from: Group::Included,
            to: Group::Included,
            index: Some(0),
        },
    );
    assert_eq!(ids(&moved), vec![3, 1, 2]);

    let moved = apply_move(
        moved,
        MoveCommand {
            author_id: 3,
            from: Group::Included,
            to: Group::Included,
            index: Some(10),
        },
    );
    assert_eq!(ids(&moved), vec![1, 2, 3], "index past the end appends to the group");
}

#[test]
fn move_back_from_removed_clears_flag() {
    let mut authors = vec![author(1, "A", "A"), author(2, "B", "B")];
    authors[0].removed = true;

    let moved = apply_move(
        authors,
        MoveCommand {
            author_id: 1,
            from: Group::Removed,
            to: Group::Included,
            index: Some(1),
        },
    );

    assert_eq!(ids(&moved), vec![2, 1]);
    assert!(moved.iter().all(|a| !a.removed));
}

#[test]
fn move_of_unknown_author_is_ignored() {
    let authors = vec![author(1, "A", "A"), author(2, "B", "B")];
    let moved = apply_move(
        authors.clone(),
        MoveCommand {
            author_id: 99,
            from: Group::Included,
            to: Group::Removed,
            index: None,
        },
    );
    assert_eq!(moved, authors);
    assert_eq!(author_order(&moved), vec![1, 2]);
}

#[test]
fn preview_render_produces_markup_emails_and_alerts() {
    let mut data = sample_rows();
    data.push(rows(&[&["Ada", "Lovelace", "", "", ""]]).remove(0));
    let mut preview = PreviewState::new();

    let change = preview.apply_config(config_with_rows(data));
    assert!(change.data_changed);

    let rendered = preview.rendered().expect("preview should render");
    let messages: Vec<(AlertKind, &str)> = rendered
        .alerts
        .iter()
        .map(|a| (a.kind, a.message.as_str()))
        .collect();
    assert_eq!(
        messages,
        vec![
            (AlertKind::Warning, DUPLICATE_WARNING),
            (AlertKind::Info, MISSING_AFFILIATION_NOTICE),
        ]
    );
    assert_eq!(
        rendered.emails,
        "Ada Lovelace <ada@example.org>; Grace Hopper <grace@example.org>"
    );
    assert!(!rendered.markup.is_empty());
}

#[test]
fn preview_move_rerenders_and_returns_order() {
    let mut preview = PreviewState::new();
    preview.apply_config(sample_config());

    let order = preview.apply_move(MoveCommand {
        author_id: 1,
        from: Group::Included,
        to: Group::Removed,
        index: None,
    });

    assert_eq!(order, vec![1, 2, 3]);
    assert_eq!(preview.members(Group::Removed).count(), 1);
    let rendered = preview.rendered().expect("preview should render");
    assert_eq!(rendered.emails, "Grace Hopper <grace@example.org>");
    assert!(!rendered.markup.to_html().contains("Ada"));
}

#[test]
fn unchanged_rows_preserve_removals_and_order() {
    let mut preview = PreviewState::new();
    preview.apply_config(sample_config());
    preview.apply_move(MoveCommand {
        author_id: 2,
        from: Group::Included,
        to: Group::Removed,
        index: None,
    });
    preview.apply_move(MoveCommand {
        author_id: 3,
        from: Group::Included,
        to: Group::Included,
        index: Some(0),
    });
    preview.selected_tab = PreviewTab::Emails;

    let mut restyled = sample_config();
    restyled.affiliation.label_style = LabelStyle::Roman;
    let change = preview.apply_config(restyled);

    assert!(!change.data_changed);
    assert_eq!(ids(preview.authors()), vec![3, 1, 2]);
    let removed: Vec<usize> = preview.members(Group::Removed).map(|a| a.id).collect();
    assert_eq!(removed, vec![2]);
    assert_eq!(preview.selected_tab, PreviewTab::Emails);
    let html = preview.rendered().expect("preview should render").markup.to_html();
    assert!(html.contains("<sup>i</sup>"), "{html}");
}

#[test]
fn unchanged_rows_remap_display_fields() {
    let mut preview = PreviewState::new();
    preview.apply_config(sample_config());
    preview.apply_move(MoveCommand {
        author_id: 1,
        from: Group::Included,
        to: Group::Removed,
        index: None,
    });

    let mut remapped = sample_config();
    remapped.author.fields.retain(|field| field.name == "Last");
    preview.apply_config(remapped);

    let names: Vec<&str> = preview.authors().iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, vec!["Lovelace", "Turing", "Hopper"]);
    assert!(preview.authors()[0].removed);
    assert_eq!(preview.authors()[0].field("First"), "");
}

#[test]
fn changed_rows_reset_removals() {
    let mut preview = PreviewState::new();
    preview.apply_config(sample_config());
    preview.apply_move(MoveCommand {
        author_id: 1,
        from: Group::Included,
        to: Group::Removed,
        index: None,
    });
    preview.selected_tab = PreviewTab::Emails;

    let mut data = sample_rows();
    data[2][0] = "Alan M.".to_string();
    let change = preview.apply_config(config_with_rows(data));

    assert!(change.data_changed);
    assert!(preview.authors().iter().all(|a| !a.removed));
    assert_eq!(preview.selected_tab, PreviewTab::Preview);
    assert_eq!(preview.authors()[1].name, "Alan M. Turing");
}

#[test]
fn unrenderable_config_is_skipped_silently() {
    let mut preview = PreviewState::new();
    preview.apply_config(sample_config());
    assert!(preview.rendered().is_some());

    let header_only = config_with_rows(rows(&[&["First", "Last", "Department"]]));
    preview.apply_config(header_only);

    assert!(preview.rendered().is_none());
}

#[test]
fn new_file_without_mapping_drops_previous_removals() {
    let mut preview = PreviewState::new();
    preview.apply_config(sample_config());
    preview.apply_move(MoveCommand {
        author_id: 2,
        from: Group::Included,
        to: Group::Removed,
        index: None,
    });

    let mut unmapped = config_with_rows(rows(&[
        &["Given", "Family", "Dept", "Inst", "Mail"],
        &["Marie", "Curie", "Physics", "Sorbonne", ""],
        &["Niels", "Bohr", "Physics", "Copenhagen", ""],
        &["Lise", "Meitner", "Physics", "Berlin", ""],
    ]));
    for mapping in unmapped.mappings_mut() {
        mapping.column = None;
    }
    let change = preview.apply_config(unmapped.clone());
    assert!(change.data_changed);
    assert!(preview.rendered().is_none());
    assert!(preview.authors().is_empty());

    let mut mapped = unmapped;
    for field in &mut mapped.author.fields {
        field.column = match field.name.as_str() {
            "First" => Some(0),
            "Last" => Some(1),
            _ => None,
        };
    }
    mapped.affiliation.fields[0].column = Some(2);
    let change = preview.apply_config(mapped);

    assert!(!change.data_changed);
    assert_eq!(ids(preview.authors()), vec![1, 2, 3]);
    assert!(preview.authors().iter().all(|a| !a.removed));
    assert_eq!(preview.authors()[1].name, "Niels Bohr");
}

#[test]
fn remap_appends_newly_named_authors_as_included() {
    let mut data = sample_rows();
    data.push(vec![
        "".into(),
        "".into(),
        "Physics".into(),
        "Cambridge".into(),
        "".into(),
    ]);
    let mut preview = PreviewState::new();
    preview.apply_config(config_with_rows(data.clone()));
    assert_eq!(ids(preview.authors()), vec![1, 2, 3], "blank name is skipped");
    preview.apply_move(MoveCommand {
        author_id: 2,
        from: Group::Included,
        to: Group::Removed,
        index: None,
    });
    preview.apply_move(MoveCommand {
        author_id: 3,
        from: Group::Included,
        to: Group::Included,
        index: Some(0),
    });

    let mut remapped = config_with_rows(data);
    remapped.author.fields[0].column = Some(2);
    let change = preview.apply_config(remapped);

    assert!(!change.data_changed);
    assert_eq!(ids(preview.authors()), vec![3, 1, 2, 4]);
    let removed: Vec<usize> = preview.members(Group::Removed).map(|a| a.id).collect();
    assert_eq!(removed, vec![2]);
    let appended = &preview.authors()[3];
    assert_eq!(appended.name, "Physics");
    assert!(!appended.removed);
}

#[test]
fn export_filename_replaces_or_appends_extension() {
    assert_eq!(export_filename("data.xlsx", "docx"), "data.docx");
    assert_eq!(export_filename("data", "docx"), "data.docx");
    assert_eq!(export_filename("my.authors.csv", "docx"), "my.authors.docx");
    assert_eq!(export_filename("dir.v1/data", "docx"), "dir.v1/data.docx");
    assert_eq!(export_filename("data.", "docx"), "data..docx");
}

struct HtmlEchoExporter;

impl DocumentExporter for HtmlEchoExporter {
    fn extension(&self) -> &'static str {
        "html"
    }

    fn to_document(&self, html: &str) -> Result<Vec<u8>, ExportError> {
        Ok(html.as_bytes().to_vec())
    }
}

#[test]
fn export_service_renders_current_preview() {
    let service = ExportService::new(Arc::new(HtmlEchoExporter));
    let mut preview = PreviewState::new();

    assert!(matches!(
        service.render_document(&preview),
        Err(ExportError::NothingToExport)
    ));
    assert_eq!(service.suggested_filename(&preview), None);

    preview.apply_config(sample_config());
    let bytes = service
        .render_document(&preview)
        .expect("render should succeed");
    let html = String::from_utf8(bytes).expect("echo exporter returns utf-8");

    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("Ada Lovelace<sup>1</sup>"));
    assert_eq!(
        service.suggested_filename(&preview).as_deref(),
        Some("authors.html")
    );
}

#[test]
fn export_writes_docx_package_to_disk() {
    let temp_dir = unique_test_dir("export");
    fs::create_dir_all(&temp_dir).expect("should create temp dir");
    let out_path = temp_dir.join("authors.docx");

    let service = ExportService::new(Arc::new(DocxExporter));
    let mut preview = PreviewState::new();
    preview.apply_config(sample_config());
    service
        .export_to(&preview, &out_path)
        .expect("export should succeed");

    let bytes = fs::read(&out_path).expect("should read exported file");
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).expect("export should be a zip");
    for part in [
        "[Content_Types].xml",
        "_rels/.rels",
        "docProps/core.xml",
        "word/document.xml",
        "word/_rels/document.xml.rels",
        "word/afchunk.mht",
    ] {
        assert!(archive.by_name(part).is_ok(), "missing part {part}");
    }

    let mut document = String::new();
    archive
        .by_name("word/document.xml")
        .expect("document part")
        .read_to_string(&mut document)
        .expect("document should be utf-8");
    assert!(document.contains("w:altChunk r:id=\"htmlChunk\""));

    let mut chunk = String::new();
    archive
        .by_name("word/afchunk.mht")
        .expect("html chunk part")
        .read_to_string(&mut chunk)
        .expect("chunk should be utf-8");
    assert!(chunk.contains("Content-Type: multipart/related"));
    let decoded = chunk.replace("=\r\n", "").replace("=3D", "=");
    assert!(decoded.contains("Ada Lovelace<sup>1</sup>"), "{decoded}");

    fs::remove_dir_all(&temp_dir).expect("should cleanup temp dir");
}

#[test]
fn load_csv_source_file_keeps_header_row() {
    let temp_dir = unique_test_dir("import-csv");
    fs::create_dir_all(&temp_dir).expect("should create temp dir");
    let csv_path = temp_dir.join("people.csv");
    fs::write(
        &csv_path,
        "First,Last,Institution\nAda,Lovelace,\"University of London, UK\"\nAlan,Turing\n,,\n",
    )
    .expect("should write csv fixture");

    let file = load_source_file(&csv_path).expect("import should succeed");

    assert_eq!(file.filename, "people.csv");
    assert_eq!(file.data.len(), 3, "trailing blank row is dropped");
    assert_eq!(file.headers(), ["First", "Last", "Institution"]);
    assert_eq!(file.cell(1, 2), "University of London, UK");
    assert_eq!(file.cell(2, 2), "", "short rows read as blank");
    assert_eq!(file.column_count(), 3);

    fs::remove_dir_all(&temp_dir).expect("should cleanup temp dir");
}

#[test]
fn load_rejects_unsupported_extension() {
    let result = load_source_file(&PathBuf::from("notes.txt"));
    assert!(
        matches!(result, Err(ImportError::UnsupportedExtension(ref ext)) if ext == "txt"),
        "unexpected result: {result:?}"
    );
}

#[test]
fn column_options_label_columns_with_letters_and_headers() {
    let file = SourceFile {
        filename: "a.csv".to_string(),
        data: rows(&[&["First", "", "Email"], &["Ada", "x", "y", "z"]]),
    };

    assert_eq!(
        column_options(&file),
        vec!["A: First", "B", "C: Email", "D"]
    );
}

#[test]
fn render_delay_parses_env_value_with_default() {
    assert_eq!(parse_render_delay(None), DEFAULT_RENDER_DELAY);
    assert_eq!(parse_render_delay(Some("")), DEFAULT_RENDER_DELAY);
    assert_eq!(parse_render_delay(Some(" 120 ")), Duration::from_millis(120));
    assert_eq!(parse_render_delay(Some("soon")), DEFAULT_RENDER_DELAY);
}

#[test]
fn webview_data_dir_is_created_under_base() {
    let temp_dir = unique_test_dir("webview");

    let created = ensure_webview_data_dir(&temp_dir).expect("should create webview dir");

    assert_eq!(created, temp_dir.join("webview2"));
    assert!(created.is_dir());

    fs::remove_dir_all(&temp_dir).expect("should cleanup temp dir");
}
