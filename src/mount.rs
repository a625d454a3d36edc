//! The mount request and the function which carries it out.
use crate::{
    error::{MountError, MountFailed},
    flag::show,
    trace::MountTrace,
};

use nix::{errno::Errno, mount::MsFlags};
use snafu::ResultExt;
use std::{
    ffi::{OsStr, OsString},
    path::{Path, PathBuf},
};
use tracing::{debug, error};

/// Everything needed for a single mount call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MountRequest {
    source: PathBuf,
    target: PathBuf,
    fstype: Option<OsString>,
    flags: MsFlags,
    data: Option<OsString>,
}

impl MountRequest {
    /// New request with no fstype, no flags and no data.
    pub fn new(source: impl Into<PathBuf>, target: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            fstype: None,
            flags: MsFlags::empty(),
            data: None,
        }
    }
    /// Set the filesystem type, eg: `ext4`.
    #[must_use]
    pub fn with_fstype(mut self, fstype: Option<OsString>) -> Self {
        self.fstype = fstype;
        self
    }
    #[must_use]
    pub fn with_flags(mut self, flags: MsFlags) -> Self {
        self.flags = flags;
        self
    }
    /// Set the filesystem-specific data string.
    /// Passed to the kernel byte for byte, it need not be UTF-8.
    #[must_use]
    pub fn with_data(mut self, data: Option<OsString>) -> Self {
        self.data = data;
        self
    }

    pub fn source(&self) -> &Path {
        &self.source
    }
    pub fn target(&self) -> &Path {
        &self.target
    }
    pub fn fstype(&self) -> Option<&OsStr> {
        self.fstype.as_deref()
    }
    pub fn flags(&self) -> MsFlags {
        self.flags
    }
    pub fn data(&self) -> Option<&OsStr> {
        self.data.as_deref()
    }
}

/// Performs the actual mount of a request.
pub trait Mounter {
    /// Mount according to the request, returning the raw errno on failure.
    fn mount(&self, request: &MountRequest) -> Result<(), Errno>;
}

/// Mount the request with the given mounter.
/// The OS error is carried as is, there are no retries.
pub fn run(request: &MountRequest, mounter: &impl Mounter) -> Result<(), MountError> {
    let trace = MountTrace::new_dbg(request);

    debug!(
        "Mounting {} onto {} (fstype: {}, flags: {}, data: {})",
        request.source().display(),
        request.target().display(),
        request.fstype().map_or("none".into(), OsStr::to_string_lossy),
        show(request.flags()),
        request.data().map_or("none".into(), OsStr::to_string_lossy),
    );

    mounter
        .mount(request)
        .context(MountFailed {
            source_path: request.source(),
            target: request.target(),
        })
        .inspect_err(|error| {
            error!(
                error = %error,
                errno = ?error.errno(),
                "Failed to mount {} onto {}",
                request.source().display(),
                request.target().display()
            )
        })?;

    trace.info_ok();
    Ok(())
}
