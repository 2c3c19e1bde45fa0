use std::fmt;
use std::path::{Path, PathBuf};

/// The filesystem step that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Open,
    Read,
    Delete,
    Create,
    Write,
    Flush,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = match self {
            Self::Open => "open",
            Self::Read => "read",
            Self::Delete => "delete",
            Self::Create => "create",
            Self::Write => "write",
            Self::Flush => "flush",
        };
        f.write_str(verb)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to {action} {}: {source}", .path.display())]
    Io {
        action: Action,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub(crate) fn io(action: Action, path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            action,
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn action(&self) -> Action {
        match self {
            Self::Io { action, .. } => *action,
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            Self::Io { path, .. } => path,
        }
    }

    /// Kind of the underlying I/O error.
    pub fn kind(&self) -> std::io::ErrorKind {
        match self {
            Self::Io { source, .. } => source.kind(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_display_names_action_and_path() {
        let err = Error::io(
            Action::Create,
            Path::new("/no/such/dir/out.txt"),
            std::io::Error::new(std::io::ErrorKind::NotFound, "No such file or directory"),
        );
        assert_eq!(
            err.to_string(),
            "failed to create /no/such/dir/out.txt: No such file or directory"
        );
    }

    #[test]
    fn test_accessors_and_source() {
        let err = Error::io(
            Action::Read,
            Path::new("notes.txt"),
            std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                "stream did not contain valid UTF-8",
            ),
        );
        assert_eq!(err.action(), Action::Read);
        assert_eq!(err.path(), Path::new("notes.txt"));
        assert_eq!(err.kind(), std::io::ErrorKind::InvalidData);
        assert!(err.source().is_some());
    }
}
