pub const DEFAULT_AUTHOR_FIELDS: [&str; 5] = ["Title", "First", "Middle", "Last", "Degree"];
pub const DEFAULT_AFFILIATION_FIELDS: [&str; 7] = [
    "Department",
    "Institution",
    "Street",
    "City",
    "State",
    "Postal Code",
    "Country",
];
pub const EMAIL_FIELD: &str = "Email";

/// Spreadsheet contents as loaded from disk. Row 0 is the header row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceFile {
    pub filename: String,
    pub data: Vec<Vec<String>>,
}

impl SourceFile {
    pub fn headers(&self) -> &[String] {
        self.data.first().map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn column_count(&self) -> usize {
        self.data.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Cell text, empty when the row or column does not exist.
    pub fn cell(&self, row: usize, column: usize) -> &str {
        self.data
            .get(row)
            .and_then(|r| r.get(column))
            .map(String::as_str)
            .unwrap_or("")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldMapping {
    pub name: String,
    pub column: Option<usize>,
}

impl FieldMapping {
    pub fn unmapped(name: &str) -> Self {
        Self {
            name: name.to_string(),
            column: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelStyle {
    Numeric,
    Alphabetic,
    Roman,
}

impl LabelStyle {
    pub const ALL: [LabelStyle; 3] = [LabelStyle::Numeric, LabelStyle::Alphabetic, LabelStyle::Roman];

    pub fn key(self) -> &'static str {
        match self {
            LabelStyle::Numeric => "numeric",
            LabelStyle::Alphabetic => "alphabetic",
            LabelStyle::Roman => "roman",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|style| style.key() == key)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelPosition {
    Superscript,
    Inline,
}

impl LabelPosition {
    pub const ALL: [LabelPosition; 2] = [LabelPosition::Superscript, LabelPosition::Inline];

    pub fn key(self) -> &'static str {
        match self {
            LabelPosition::Superscript => "superscript",
            LabelPosition::Inline => "inline",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|position| position.key() == key)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorFormat {
    pub fields: Vec<FieldMapping>,
    pub separator: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AffiliationFormat {
    pub fields: Vec<FieldMapping>,
    pub separator: String,
    pub label_style: LabelStyle,
    pub label_position: LabelPosition,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailFormat {
    pub field: FieldMapping,
}

/// Everything the preview needs: the source rows plus how to read and format them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatParameters {
    pub file: SourceFile,
    pub author: AuthorFormat,
    pub affiliation: AffiliationFormat,
    pub email: EmailFormat,
}

impl Default for FormatParameters {
    fn default() -> Self {
        Self {
            file: SourceFile::default(),
            author: AuthorFormat {
                fields: DEFAULT_AUTHOR_FIELDS
                    .iter()
                    .map(|name| FieldMapping::unmapped(name))
                    .collect(),
                separator: ", ".to_string(),
            },
            affiliation: AffiliationFormat {
                fields: DEFAULT_AFFILIATION_FIELDS
                    .iter()
                    .map(|name| FieldMapping::unmapped(name))
                    .collect(),
                separator: ", ".to_string(),
                label_style: LabelStyle::Numeric,
                label_position: LabelPosition::Superscript,
            },
            email: EmailFormat {
                field: FieldMapping::unmapped(EMAIL_FIELD),
            },
        }
    }
}

impl FormatParameters {
    pub fn with_file(file: SourceFile) -> Self {
        Self {
            file,
            ..Self::default()
        }
    }

    /// At least one data row below the header and at least one mapped author and
    /// affiliation field.
    pub fn is_renderable(&self) -> bool {
        self.file.data.len() > 1
            && self.author.fields.iter().any(|f| f.column.is_some())
            && self.affiliation.fields.iter().any(|f| f.column.is_some())
    }

    /// Mutable access to every mapping, in panel order.
    pub fn mappings_mut(&mut self) -> impl Iterator<Item = &mut FieldMapping> {
        self.author
            .fields
            .iter_mut()
            .chain(self.affiliation.fields.iter_mut())
            .chain(std::iter::once(&mut self.email.field))
    }
}
