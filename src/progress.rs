use chrono::Local;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Mutex;

use crate::constants::PROGRESS_STAMP_FORMAT;
use crate::error::Result;

/// Milestone sink injected into the pipeline. The run aborts if a milestone
/// cannot be recorded; the log is the only coarse failure-point indicator an
/// operator gets.
pub trait ProgressLog {
    fn milestone(&self, message: &str) -> Result<()>;
}

/// Appends `"<stamp> : <message>"` lines to a plain-text file. The file is
/// never truncated or rotated by this tool.
pub struct FileProgressLog {
    path: PathBuf,
}

impl FileProgressLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ProgressLog for FileProgressLog {
    fn milestone(&self, message: &str) -> Result<()> {
        let stamp = Local::now().format(PROGRESS_STAMP_FORMAT);
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{stamp} : {message}")?;
        Ok(())
    }
}

/// Capturing sink for tests; records milestones in order without touching
/// the filesystem.
#[derive(Default)]
pub struct MemoryProgressLog {
    milestones: Mutex<Vec<String>>,
}

impl MemoryProgressLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn milestones(&self) -> Vec<String> {
        self.milestones.lock().unwrap().clone()
    }
}

impl ProgressLog for MemoryProgressLog {
    fn milestone(&self, message: &str) -> Result<()> {
        self.milestones.lock().unwrap().push(message.to_string());
        Ok(())
    }
}
