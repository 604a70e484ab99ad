use once_cell::sync::Lazy;
use regex::Regex;

/// Header that must appear before any course-load row is read.
pub const DEFAULT_SECTION_HEADER: &str = "Carga Horária Integralizada/Pendente";
/// Label of the required-hours row.
pub const DEFAULT_REQUIRED_LABEL: &str = "Exigido";
/// Label of the completed-hours row.
pub const DEFAULT_COMPLETED_LABEL: &str = "Integralizado";
/// Label of the pending-hours row.
pub const DEFAULT_PENDING_LABEL: &str = "Pendente";
/// Status token of a component the student is currently registered in.
pub const DEFAULT_ENROLLMENT_KEYWORD: &str = "MATRICULADO";

static DEFAULT_CONFIG: Lazy<ParsingConfig> =
    Lazy::new(|| ParsingConfigBuilder::new().build().unwrap());

/// A row label together with its compiled line patterns.
#[derive(Debug, Clone)]
pub struct RowLabel {
    label: String,
    /// `^<blank>*<label><blank>+(.*)$`, case-insensitive, multi-line. Blanks
    /// exclude `\n`, so a label never takes its values from the next line.
    pub(crate) line_re: Regex,
}

impl RowLabel {
    pub fn new(label: &str) -> Result<Self, regex::Error> {
        let line_re = Regex::new(&format!(
            r"(?mi)^[^\S\n]*{}[^\S\n]+(.*)$",
            regex::escape(label)
        ))?;
        Ok(Self {
            label: label.to_string(),
            line_re,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.label
    }
}

/// Vocabulary and compiled patterns used by every parsing step.
///
/// The defaults are the Portuguese labels printed on the transcript. Use
/// [`ParsingConfigBuilder`] to override individual labels.
#[derive(Debug, Clone)]
pub struct ParsingConfig {
    pub(crate) section_header: String,
    pub(crate) required: RowLabel,
    pub(crate) completed: RowLabel,
    pub(crate) pending: RowLabel,
    /// `^\s*<pending>\s+.*?(\d+)\s*h\s*$`: last hour value on the pending line.
    pub(crate) pending_total_re: Regex,
    /// Stored uppercased; lines are uppercased before comparison.
    pub(crate) enrollment_keyword: String,
}

impl Default for ParsingConfig {
    fn default() -> Self {
        DEFAULT_CONFIG.clone()
    }
}

impl ParsingConfig {
    pub fn section_header(&self) -> &str {
        &self.section_header
    }

    pub fn required_label(&self) -> &str {
        self.required.as_str()
    }

    pub fn completed_label(&self) -> &str {
        self.completed.as_str()
    }

    pub fn pending_label(&self) -> &str {
        self.pending.as_str()
    }

    pub fn enrollment_keyword(&self) -> &str {
        &self.enrollment_keyword
    }
}

/// Builder for [`ParsingConfig`].
///
/// Labels are plain text, not patterns; they are escaped before being
/// compiled in [`build()`](Self::build). Empty strings keep the default.
#[derive(Debug, Clone, Default)]
pub struct ParsingConfigBuilder {
    section_header: Option<String>,
    required_label: Option<String>,
    completed_label: Option<String>,
    pending_label: Option<String>,
    enrollment_keyword: Option<String>,
}

fn non_empty(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

impl ParsingConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn section_header(mut self, header: &str) -> Self {
        self.section_header = non_empty(header);
        self
    }

    pub fn required_label(mut self, label: &str) -> Self {
        self.required_label = non_empty(label);
        self
    }

    pub fn completed_label(mut self, label: &str) -> Self {
        self.completed_label = non_empty(label);
        self
    }

    pub fn pending_label(mut self, label: &str) -> Self {
        self.pending_label = non_empty(label);
        self
    }

    pub fn enrollment_keyword(mut self, keyword: &str) -> Self {
        self.enrollment_keyword = non_empty(keyword);
        self
    }

    /// Compile all labels into line patterns and produce a [`ParsingConfig`].
    pub fn build(self) -> Result<ParsingConfig, regex::Error> {
        let pending_label = self
            .pending_label
            .unwrap_or_else(|| DEFAULT_PENDING_LABEL.to_string());

        let pending_total_re = Regex::new(&format!(
            r"(?mi)^\s*{}\s+.*?([0-9]+)\s*h\s*$",
            regex::escape(&pending_label)
        ))?;

        Ok(ParsingConfig {
            section_header: self
                .section_header
                .unwrap_or_else(|| DEFAULT_SECTION_HEADER.to_string()),
            required: RowLabel::new(
                self.required_label
                    .as_deref()
                    .unwrap_or(DEFAULT_REQUIRED_LABEL),
            )?,
            completed: RowLabel::new(
                self.completed_label
                    .as_deref()
                    .unwrap_or(DEFAULT_COMPLETED_LABEL),
            )?,
            pending: RowLabel::new(&pending_label)?,
            pending_total_re,
            enrollment_keyword: self
                .enrollment_keyword
                .as_deref()
                .unwrap_or(DEFAULT_ENROLLMENT_KEYWORD)
                .to_uppercase(),
        })
    }
}
