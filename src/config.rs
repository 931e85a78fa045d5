// src/config.rs

use std::fs;
use std::path::{Path, PathBuf};

use crate::data_analysis::frame_filter::LinkEndpoints;
use crate::error::JitterError;

/// Validated run configuration.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    pub data_dir: PathBuf,
    pub figure_dir: PathBuf,
    pub save: bool,
    pub show: bool,
    pub export_csv: bool,
    pub endpoints: LinkEndpoints,
}

impl RenderConfig {
    /// Rejects runs that would produce nothing: figures neither shown nor
    /// saved, and no CSV export either.
    pub fn new(
        data_dir: PathBuf,
        figure_dir: PathBuf,
        save: bool,
        show: bool,
        export_csv: bool,
        endpoints: LinkEndpoints,
    ) -> Result<Self, JitterError> {
        if !show && !save && !export_csv {
            return Err(JitterError::NothingToDo);
        }
        Ok(Self {
            data_dir,
            figure_dir,
            save,
            show,
            export_csv,
            endpoints,
        })
    }

    /// Whether any figure has to be rendered at all.
    pub fn renders_figures(&self) -> bool {
        self.save || self.show
    }

    /// Where the figure for `capture_name` is written. Unsaved figures go to
    /// `scratch_dir` so they can still be shown.
    pub fn figure_path(&self, capture_name: &str, scratch_dir: &Path) -> PathBuf {
        let file_name = format!("{capture_name}.png");
        if self.save {
            self.figure_dir.join(file_name)
        } else {
            scratch_dir.join(file_name)
        }
    }

    pub fn export_path(&self, capture_name: &str) -> PathBuf {
        self.figure_dir.join(format!("{capture_name}_jitter.csv"))
    }

    /// Creates the figure directory when anything will be written to it.
    pub fn prepare_output_dir(&self) -> Result<(), JitterError> {
        if self.save || self.export_csv {
            ensure_dir(&self.figure_dir)?;
        }
        Ok(())
    }
}

fn ensure_dir(dir: &Path) -> Result<(), JitterError> {
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(save: bool, show: bool, export_csv: bool) -> Result<RenderConfig, JitterError> {
        RenderConfig::new(
            PathBuf::from("data"),
            PathBuf::from("figures"),
            save,
            show,
            export_csv,
            LinkEndpoints::default(),
        )
    }

    #[test]
    fn test_hidden_and_unsaved_is_rejected() {
        assert!(matches!(config(false, false, false), Err(JitterError::NothingToDo)));
        assert!(config(false, false, true).is_ok());
        assert!(config(true, false, false).is_ok());
        assert!(config(false, true, false).is_ok());
    }

    #[test]
    fn test_figure_paths() {
        let scratch = Path::new("/scratch");
        let saved = config(true, false, false).unwrap();
        assert_eq!(
            saved.figure_path("run1", scratch),
            PathBuf::from("figures/run1.png")
        );
        assert_eq!(
            saved.export_path("run1"),
            PathBuf::from("figures/run1_jitter.csv")
        );

        let shown = config(false, true, false).unwrap();
        assert_eq!(
            shown.figure_path("run1", scratch),
            PathBuf::from("/scratch/run1.png")
        );
        assert!(shown.renders_figures());
        assert!(!config(false, false, true).unwrap().renders_figures());
    }

    #[test]
    fn test_prepare_output_dir_creates_when_saving() {
        let tmp = tempfile::tempdir().unwrap();
        let figure_dir = tmp.path().join("nested").join("figures");
        let cfg = RenderConfig::new(
            tmp.path().to_path_buf(),
            figure_dir.clone(),
            true,
            false,
            false,
            LinkEndpoints::default(),
        )
        .unwrap();
        cfg.prepare_output_dir().unwrap();
        assert!(figure_dir.is_dir());
    }
}

// src/config.rs
