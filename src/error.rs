use std::{fmt, path::Path, path::PathBuf};

#[derive(Debug)]
pub enum ConvertError {
    /// Reading or writing a file failed. `message` is the I/O error's text.
    FileAccess { path: PathBuf, message: String },
    /// No system prompt text, or no completion blocks.
    MissingData,
    /// An appendix path was given but nothing usable came out of it.
    AppendixReadFailure,
    Encode(serde_json::Error),
}

use ConvertError::*;

impl ConvertError {
    pub fn file_access(path: &Path, err: &std::io::Error) -> Self {
        FileAccess { path: path.to_path_buf(), message: err.to_string() }
    }
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileAccess { path, message } => write!(f, "{}: {message}", path.display()),
            MissingData => write!(f, "System or Completions data is missing."),
            AppendixReadFailure => write!(f, "Appendix data failed."),
            Encode(err) => write!(f, "cannot encode record: {err}"),
        }
    }
}

impl std::error::Error for ConvertError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Encode(err) => Some(err),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_access_keeps_message() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "No such file or directory");
        let err = ConvertError::file_access(Path::new("system.md"), &io);
        assert_eq!(err.to_string(), "system.md: No such file or directory");
    }

    #[test]
    fn fixed_messages() {
        assert_eq!(MissingData.to_string(), "System or Completions data is missing.");
        assert_eq!(AppendixReadFailure.to_string(), "Appendix data failed.");
    }
}
