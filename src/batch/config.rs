//! Batch configuration.

use crate::outline::ParseOptions;
use crate::xmind::constants::DEFAULT_CREATOR;
use std::path::PathBuf;

/// Default folder scanned for outlines
pub const DEFAULT_INPUT_DIR: &str = "mindmaps";

/// Default folder receiving per-document outputs
pub const DEFAULT_OUTPUT_DIR: &str = "generated";

/// Default extension of outline files, without the dot
pub const DEFAULT_EXTENSION: &str = "md";

/// Configuration for batch conversion.
///
/// # Examples
///
/// ```rust
/// use outline2xmind::batch::BatchConfig;
///
/// let config = BatchConfig::new()
///     .with_input_dir("notes")
///     .with_output_dir("maps")
///     .with_extension("txt");
/// assert_eq!(config.extension, "txt");
/// ```
#[derive(Debug, Clone)]
pub struct BatchConfig {
    /// Folder scanned for outline files
    pub input_dir: PathBuf,
    /// Folder that receives one subfolder per document
    pub output_dir: PathBuf,
    /// Extension (without the dot) that marks an outline file
    pub extension: String,
    /// Creator name written to meta.xml
    pub creator: String,
    /// Title detection options
    pub parse_options: ParseOptions,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from(DEFAULT_INPUT_DIR),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            extension: DEFAULT_EXTENSION.to_string(),
            creator: DEFAULT_CREATOR.to_string(),
            parse_options: ParseOptions::default(),
        }
    }
}

impl BatchConfig {
    /// Create a configuration with the default folders.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn with_input_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.input_dir = dir.into();
        self
    }

    #[inline]
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Set the outline file extension. A leading dot is ignored.
    #[inline]
    pub fn with_extension(mut self, extension: &str) -> Self {
        self.extension = extension.trim_start_matches('.').to_string();
        self
    }

    #[inline]
    pub fn with_creator(mut self, creator: impl Into<String>) -> Self {
        self.creator = creator.into();
        self
    }

    #[inline]
    pub fn with_parse_options(mut self, options: ParseOptions) -> Self {
        self.parse_options = options;
        self
    }

    /// Whether `path` carries the configured outline extension.
    pub fn matches_extension(&self, path: &std::path::Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext == self.extension)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_defaults() {
        let config = BatchConfig::default();
        assert_eq!(config.input_dir, Path::new("mindmaps"));
        assert_eq!(config.output_dir, Path::new("generated"));
        assert_eq!(config.creator, "GitHub Action");
    }

    #[test]
    fn test_extension_matching() {
        let config = BatchConfig::new().with_extension(".md");
        assert!(config.matches_extension(Path::new("a/plan.md")));
        assert!(!config.matches_extension(Path::new("plan.MD")));
        assert!(!config.matches_extension(Path::new("plan.md.bak")));
        assert!(!config.matches_extension(Path::new("README")));
    }
}
