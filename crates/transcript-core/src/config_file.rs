use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// On-disk TOML configuration structure.
/// All fields are optional so partial configs work (merge with defaults).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    pub converter: Option<ConverterConfig>,
    pub labels: Option<LabelsConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConverterConfig {
    /// Program name or path of the pdftotext-compatible converter.
    pub program: Option<String>,
}

/// Overrides for the transcript vocabulary.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LabelsConfig {
    pub section_header: Option<String>,
    pub required: Option<String>,
    pub completed: Option<String>,
    pub pending: Option<String>,
    pub enrollment_keyword: Option<String>,
}

/// Platform config directory path: `<config_dir>/transcript-status/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("transcript-status").join("config.toml"))
}

/// Load config by cascading CWD `.transcript-status.toml` over platform config.
/// CWD values override platform values.
pub fn load_config() -> ConfigFile {
    let platform = config_path().and_then(|p| load_from_path(&p));
    let cwd = load_from_path(Path::new(".transcript-status.toml"));

    match (platform, cwd) {
        (None, None) => ConfigFile::default(),
        (Some(p), None) => p,
        (None, Some(c)) => c,
        (Some(p), Some(c)) => merge(p, c),
    }
}

/// Load a config from a specific path. Returns `None` if the file doesn't
/// exist or can't be parsed.
pub fn load_from_path(path: &Path) -> Option<ConfigFile> {
    let content = std::fs::read_to_string(path).ok()?;
    toml::from_str(&content).ok()
}

/// Merge two configs: `overlay` values take precedence over `base`.
pub fn merge(base: ConfigFile, overlay: ConfigFile) -> ConfigFile {
    let base_labels = base.labels.unwrap_or_default();
    let overlay_labels = overlay.labels.unwrap_or_default();

    ConfigFile {
        converter: Some(ConverterConfig {
            program: overlay
                .converter
                .and_then(|c| c.program)
                .or_else(|| base.converter.and_then(|c| c.program)),
        }),
        labels: Some(LabelsConfig {
            section_header: overlay_labels
                .section_header
                .or(base_labels.section_header),
            required: overlay_labels.required.or(base_labels.required),
            completed: overlay_labels.completed.or(base_labels.completed),
            pending: overlay_labels.pending.or(base_labels.pending),
            enrollment_keyword: overlay_labels
                .enrollment_keyword
                .or(base_labels.enrollment_keyword),
        }),
    }
}
