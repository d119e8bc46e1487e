use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::convert::Sources;

/// One block as it appears in a source file, terminated by a newline.
pub fn block_text(header: &str, content: &str) -> String {
    format!("---\n{header}\n---\n{content}\n")
}

pub fn document_text(blocks: &[(&str, &str)]) -> String {
    blocks
        .iter()
        .map(|(header, content)| block_text(header, content))
        .collect()
}

/// Scratch directory holding the input files of one conversion.
pub struct TempSources {
    dir: TempDir,
}

impl TempSources {
    pub fn new() -> Self {
        Self { dir: tempfile::tempdir().expect("should create temp dir") }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    pub fn write(&self, name: &str, text: &str) -> PathBuf {
        let path = self.path(name);
        std::fs::write(&path, text).expect("should write fixture");
        path
    }

    /// `system.md` and `completions.md` in this directory, plus the named appendix.
    pub fn sources(&self, appendix: Option<&str>) -> Sources {
        Sources {
            system: self.path("system.md"),
            completions: self.path("completions.md"),
            appendix: appendix.map(|name| self.path(name)),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::test_utils::*;

    #[test]
    fn fixture_tests() {
        assert_eq!(block_text("role: user", "hi"), "---\nrole: user\n---\nhi\n");
        assert_eq!(document_text(&[]), "");

        let sources = TempSources::new();
        let path = sources.write("a.md", "x");
        assert_eq!(std::fs::read_to_string(path).unwrap(), "x");
        assert!(sources.sources(None).appendix.is_none());
    }
}
