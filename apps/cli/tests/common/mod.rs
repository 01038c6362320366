//! Shared helpers for driving the `flashcards` binary.
//!
//! Every test gets its own temporary data directory, passed through
//! `FLASHCARDS_DIR`, and a fixed `FLASHCARDS_SEED`.

#![allow(dead_code)]

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use serde_json::Value;
use tempfile::TempDir;

pub const FLASHCARDS_FILE: &str = "flashcards.json";
pub const HIGH_INCORRECT_FILE: &str = "high_incorrect_flashcards.json";
pub const SCORES_FILE: &str = "scores.json";

/// Temporary data directory for one test.
pub struct TestContext {
    pub dir: TempDir,
}

impl TestContext {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    /// Create a context whose flashcard file already holds `content`.
    pub fn with_flashcards(content: &str) -> Self {
        let ctx = Self::new();
        ctx.write(FLASHCARDS_FILE, content);
        ctx
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn write(&self, file: &str, content: &str) {
        fs::write(self.path().join(file), content).expect("Failed to write fixture");
    }

    /// Parse one of the data files.
    pub fn read_json(&self, file: &str) -> Value {
        let content = fs::read_to_string(self.path().join(file)).expect("Failed to read data file");
        serde_json::from_str(&content).expect("Data file is not JSON")
    }

    pub fn exists(&self, file: &str) -> bool {
        self.path().join(file).exists()
    }

    /// The binary, pointed at this context's data directory.
    pub fn flashcards(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("flashcards").expect("binary should build");
        cmd.current_dir(self.path())
            .env("FLASHCARDS_DIR", self.path())
            .env("FLASHCARDS_SEED", "7")
            .env_remove("RUST_LOG");
        cmd
    }
}
