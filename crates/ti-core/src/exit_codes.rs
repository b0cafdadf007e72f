//! Exit codes for the ti CLI.
//!
//! Exit codes communicate operation outcome without requiring output
//! parsing.

use ti_common::Error;

/// Exit codes for ti operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Operation completed
    Ok = 0,

    /// Configuration error (malformed override document)
    ConfigError = 10,

    /// I/O error
    IoError = 13,

    /// Internal/unknown error
    InternalError = 99,
}

impl ExitCode {
    /// Convert to i32 for process exit.
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Map a core error onto its exit code band.
    pub fn from_error(err: &Error) -> Self {
        match err {
            Error::Parse(_) => ExitCode::ConfigError,
            Error::Storage(_) | Error::Io(_) | Error::Json(_) => ExitCode::IoError,
        }
    }
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_errors_map_to_config_band() {
        let err = Error::Parse("bad".into());
        assert_eq!(ExitCode::from_error(&err), ExitCode::ConfigError);
        assert_eq!(ExitCode::from_error(&err).as_i32(), 10);
    }

    #[test]
    fn io_errors_map_to_io_band() {
        let err = Error::Io(std::io::Error::other("disk"));
        assert_eq!(ExitCode::from_error(&err), ExitCode::IoError);
    }
}
