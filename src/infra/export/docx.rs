//! WordprocessingML export that embeds the preview HTML as an `altChunk`.
//!
//! Word converts the embedded MHT part into native paragraphs when the file is
//! opened, so superscripts and spans survive without an HTML-to-OOXML translator.

use std::io::{Cursor, Write};

use chrono::Utc;
use zip::write::FileOptions;
use zip::ZipWriter;

use crate::usecase::ports::exporter::{DocumentExporter, ExportError};

const MHT_BOUNDARY: &str = "----=mhtDocumentPart";
const QP_LINE_LIMIT: usize = 73;

const CONTENT_TYPES_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/><Default Extension="xml" ContentType="application/xml"/><Default Extension="mht" ContentType="message/rfc822"/><Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/><Override PartName="/docProps/core.xml" ContentType="application/vnd.openxmlformats-package.core-properties+xml"/></Types>"#;

const ROOT_RELS_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document.xml"/><Relationship Id="rId2" Type="http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties" Target="docProps/core.xml"/></Relationships>"#;

const DOCUMENT_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships"><w:body><w:altChunk r:id="htmlChunk"/><w:sectPr><w:pgSz w:w="12240" w:h="15840" w:orient="portrait"/><w:pgMar w:top="1440" w:right="1440" w:bottom="1440" w:left="1440" w:header="720" w:footer="720" w:gutter="0"/></w:sectPr></w:body></w:document>"#;

const DOCUMENT_RELS_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="htmlChunk" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/aFChunk" Target="/word/afchunk.mht"/></Relationships>"#;

#[derive(Debug, Clone, Copy, Default)]
pub struct DocxExporter;

impl DocumentExporter for DocxExporter {
    fn extension(&self) -> &'static str {
        "docx"
    }

    fn to_document(&self, html: &str) -> Result<Vec<u8>, ExportError> {
        let created = Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string();
        build_package(html, &created).map_err(|err| ExportError::Package(err.to_string()))
    }
}

fn build_package(html: &str, created: &str) -> zip::result::ZipResult<Vec<u8>> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    let parts = [
        ("[Content_Types].xml", CONTENT_TYPES_XML.to_string()),
        ("_rels/.rels", ROOT_RELS_XML.to_string()),
        ("docProps/core.xml", core_properties_xml(created)),
        ("word/document.xml", DOCUMENT_XML.to_string()),
        ("word/_rels/document.xml.rels", DOCUMENT_RELS_XML.to_string()),
        ("word/afchunk.mht", mht_document(html)),
    ];
    for (name, body) in parts {
        writer.start_file(name, options)?;
        writer.write_all(body.as_bytes())?;
    }

    let cursor = writer.finish()?;
    Ok(cursor.into_inner())
}

fn core_properties_xml(created: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:dcterms="http://purl.org/dc/terms/" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance"><dc:title>Author List</dc:title><dcterms:created xsi:type="dcterms:W3CDTF">{created}</dcterms:created></cp:coreProperties>"#
    )
}

fn mht_document(html: &str) -> String {
    format!(
        "MIME-Version: 1.0\r\n\
         Content-Type: multipart/related; type=\"text/html\"; boundary=\"{MHT_BOUNDARY}\"\r\n\
         \r\n\
         --{MHT_BOUNDARY}\r\n\
         Content-Type: text/html; charset=\"utf-8\"\r\n\
         Content-Transfer-Encoding: quoted-printable\r\n\
         Content-Location: file:///C:/fake/document.html\r\n\
         \r\n\
         {body}\r\n\
         \r\n\
         --{MHT_BOUNDARY}--\r\n",
        body = quoted_printable(html)
    )
}

/// Quoted-printable encoding with soft line breaks.
pub(crate) fn quoted_printable(input: &str) -> String {
    let mut out = String::with_capacity(input.len() + input.len() / 8);
    let mut line_len = 0;
    for byte in input.bytes() {
        let encoded = match byte {
            b'\n' => {
                out.push_str("\r\n");
                line_len = 0;
                continue;
            }
            b'\r' => continue,
            b' ' | 33..=60 | 62..=126 => (byte as char).to_string(),
            _ => format!("={byte:02X}"),
        };
        if line_len + encoded.len() > QP_LINE_LIMIT {
            out.push_str("=\r\n");
            line_len = 0;
        }
        line_len += encoded.len();
        out.push_str(&encoded);
    }
    out
}
