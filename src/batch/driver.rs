//! Batch driver.

use super::config::BatchConfig;
use crate::common::{Error, Result};
use crate::convert::{XmindParts, read_outline};
use crate::outline::OutlineParser;
use crate::xmind::constants::{CONTENT_XML, META_XML};
use std::fs;
use std::path::{Path, PathBuf};

/// Outcome of one batch run.
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Set when the input folder was missing and has just been created
    pub created_input_dir: bool,
    /// Inputs whose outputs were written, in processing order
    pub converted: Vec<PathBuf>,
    /// Inputs that failed, with the error that stopped them
    pub failed: Vec<(PathBuf, Error)>,
}

impl BatchReport {
    /// Number of documents attempted
    pub fn attempted(&self) -> usize {
        self.converted.len() + self.failed.len()
    }
}

/// Convert one outline file into `content.xml` and `meta.xml` under `out_dir`.
///
/// `out_dir` is created if needed. The two writes are not atomic as a pair.
pub fn process_document(input: &Path, out_dir: &Path, config: &BatchConfig) -> Result<()> {
    let text = read_outline(input)?;
    let doc = OutlineParser::new(config.parse_options.clone()).parse(&text);
    log::debug!(
        "Parsed {}: title {:?}, {} topics",
        input.display(),
        doc.title,
        doc.node_count()
    );

    let parts = XmindParts::from_document(&doc, &config.creator);
    fs::create_dir_all(out_dir)?;
    fs::write(out_dir.join(CONTENT_XML), &parts.content)?;
    fs::write(out_dir.join(META_XML), &parts.meta)?;
    Ok(())
}

/// List outline files in the input folder, sorted by name.
fn collect_inputs(config: &BatchConfig) -> Result<Vec<PathBuf>> {
    let mut inputs = Vec::new();
    for entry in fs::read_dir(&config.input_dir)? {
        let path = entry?.path();
        if !path.is_file() {
            log::debug!("Skipping non-file {}", path.display());
            continue;
        }
        if !config.matches_extension(&path) {
            log::debug!("Skipping {} (not .{})", path.display(), config.extension);
            continue;
        }
        inputs.push(path);
    }
    inputs.sort();
    Ok(inputs)
}

/// Run batch mode over `config.input_dir`.
///
/// A missing input folder is created and the run ends there. Errors listing
/// the folders propagate; errors on individual documents are logged and
/// recorded in the report.
pub fn run_batch(config: &BatchConfig) -> Result<BatchReport> {
    let mut report = BatchReport::default();

    if !config.input_dir.exists() {
        fs::create_dir_all(&config.input_dir)?;
        log::info!("Created {} directory", config.input_dir.display());
        report.created_input_dir = true;
        return Ok(report);
    }

    fs::create_dir_all(&config.output_dir)?;

    for input in collect_inputs(config)? {
        let file_name = input
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let Some(base_name) = input.file_stem().map(|s| s.to_os_string()) else {
            continue;
        };
        let out_dir = config.output_dir.join(base_name);

        log::info!("Processing {file_name}...");
        match process_document(&input, &out_dir, config) {
            Ok(()) => {
                log::info!("Generated files for {}", out_dir.display());
                report.converted.push(input);
            },
            Err(e) => {
                log::error!("Error processing {file_name}: {e}");
                report.failed.push((input, e));
            },
        }
    }

    log::info!(
        "Batch finished: {} converted, {} failed",
        report.converted.len(),
        report.failed.len()
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn config_in(root: &TempDir) -> BatchConfig {
        BatchConfig::new()
            .with_input_dir(root.path().join("mindmaps"))
            .with_output_dir(root.path().join("generated"))
    }

    #[test]
    fn test_first_run_creates_input_dir_only() {
        let root = tempfile::tempdir().unwrap();
        let config = config_in(&root);

        let report = run_batch(&config).unwrap();

        assert!(report.created_input_dir);
        assert_eq!(report.attempted(), 0);
        assert!(config.input_dir.is_dir());
        assert!(!config.output_dir.exists());
    }

    #[test]
    fn test_empty_input_dir_creates_output_dir() {
        let root = tempfile::tempdir().unwrap();
        let config = config_in(&root);
        fs::create_dir(&config.input_dir).unwrap();

        let report = run_batch(&config).unwrap();

        assert!(!report.created_input_dir);
        assert_eq!(report.attempted(), 0);
        assert!(config.output_dir.is_dir());
    }

    #[test]
    fn test_converts_each_document() {
        let root = tempfile::tempdir().unwrap();
        let config = config_in(&root);
        fs::create_dir(&config.input_dir).unwrap();
        fs::write(config.input_dir.join("demo.md"), "Title: Demo\n# A\n- B\n- C\n").unwrap();
        fs::write(config.input_dir.join("second.md"), "# Only\n").unwrap();

        let report = run_batch(&config).unwrap();
        assert_eq!(report.converted.len(), 2);
        assert!(report.failed.is_empty());

        let demo = config.output_dir.join("demo");
        let content = fs::read_to_string(demo.join("content.xml")).unwrap();
        assert!(content.contains("<title>Demo</title>"));
        assert!(content.contains("<title>C</title>"));
        let meta = fs::read_to_string(demo.join("meta.xml")).unwrap();
        assert!(meta.contains("<name>GitHub Action</name>"));

        let second = fs::read_to_string(config.output_dir.join("second/content.xml")).unwrap();
        assert!(second.contains("<title>Untitled</title>"));
        assert!(second.contains("<title>Only</title>"));
    }

    #[test]
    fn test_bad_encoding_does_not_stop_batch() {
        let root = tempfile::tempdir().unwrap();
        let config = config_in(&root);
        fs::create_dir(&config.input_dir).unwrap();
        fs::write(config.input_dir.join("a_broken.md"), [0x23, 0x20, 0xc3, 0x28]).unwrap();
        fs::write(config.input_dir.join("b_good.md"), "Title: Good\n# Fine\n").unwrap();

        let report = run_batch(&config).unwrap();

        assert_eq!(report.failed.len(), 1);
        assert!(matches!(report.failed[0].1, Error::Encoding { .. }));
        assert_eq!(report.converted, [config.input_dir.join("b_good.md")]);
        let content = fs::read_to_string(config.output_dir.join("b_good/content.xml")).unwrap();
        assert!(content.contains("<title>Fine</title>"));
        assert!(!config.output_dir.join("a_broken/content.xml").exists());
    }

    #[test]
    fn test_other_files_are_skipped() {
        let root = tempfile::tempdir().unwrap();
        let config = config_in(&root);
        fs::create_dir(&config.input_dir).unwrap();
        fs::create_dir(config.input_dir.join("nested.md")).unwrap();
        fs::write(config.input_dir.join("notes.txt"), "# ignored\n").unwrap();
        fs::write(config.input_dir.join("map.md"), "# kept\n").unwrap();

        let report = run_batch(&config).unwrap();

        assert_eq!(report.converted, [config.input_dir.join("map.md")]);
        assert!(!config.output_dir.join("notes").exists());
        assert!(!config.output_dir.join("nested").exists());
    }

    #[test]
    fn test_custom_creator_and_title_prefix() {
        let root = tempfile::tempdir().unwrap();
        let config = config_in(&root)
            .with_creator("Docs Bot")
            .with_parse_options(crate::outline::ParseOptions::new().with_title_prefix("Map:"));
        fs::create_dir(&config.input_dir).unwrap();
        fs::write(config.input_dir.join("x.md"), "Map: Custom\n# A\n").unwrap();

        run_batch(&config).unwrap();

        let out = config.output_dir.join("x");
        let content = fs::read_to_string(out.join("content.xml")).unwrap();
        assert!(content.contains("<title>Custom</title>"));
        let meta = fs::read_to_string(out.join("meta.xml")).unwrap();
        assert!(meta.contains("<name>Docs Bot</name>"));
    }
}
