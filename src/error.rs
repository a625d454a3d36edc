use nix::errno::Errno;
use snafu::Snafu;
use std::path::PathBuf;

/// Failure to translate a `-f` argument into mount flags.
#[derive(Debug, Snafu, Clone, PartialEq, Eq)]
#[snafu(visibility(pub(crate)), context(suffix(false)))]
pub enum FlagCodeError {
    #[snafu(display("unknown mount flag code '{code}'"))]
    UnknownCode { code: char },
}

/// Failure of the mount call itself.
/// The message is the operating system's description of the errno, verbatim.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)), context(suffix(false)))]
pub enum MountError {
    #[snafu(display("{}", error.desc()))]
    MountFailed {
        #[snafu(source)]
        error: Errno,
        source_path: PathBuf,
        target: PathBuf,
    },
}

impl MountError {
    /// The errno the kernel returned.
    pub fn errno(&self) -> Errno {
        match self {
            Self::MountFailed { error, .. } => *error,
        }
    }
}
