//! Prompt text input and output.

use std::fs;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};

/// Read a prompt from `path`, or from stdin when `path` is `None` or `-`.
pub fn read_prompt(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => {
            fs::read_to_string(path).with_context(|| format!("read prompt {}", path.display()))
        }
        _ => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("read prompt from stdin")?;
            Ok(buf)
        }
    }
}

/// Atomically replace the prompt file (temp file + rename).
pub fn write_prompt(path: &Path, contents: &str) -> Result<()> {
    let tmp_path = path.with_extension("tmp");
    fs::write(&tmp_path, contents)
        .with_context(|| format!("write temp prompt {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path).with_context(|| format!("replace prompt {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::TestDir;

    #[test]
    fn write_then_read_preserves_text() {
        let dir = TestDir::new().expect("tempdir");
        let path = dir.path().join("prompt.md");
        write_prompt(&path, "you are a pirate.\n").expect("write");
        assert_eq!(read_prompt(Some(&path)).expect("read"), "you are a pirate.\n");
        assert!(!dir.path().join("prompt.tmp").exists());
    }

    #[test]
    fn missing_file_reports_path() {
        let dir = TestDir::new().expect("tempdir");
        let err = read_prompt(Some(&dir.path().join("nope.md"))).unwrap_err();
        assert!(format!("{err:#}").contains("nope.md"));
    }
}
