//! Backend calling into the kernel's mount.
use crate::mount::{MountRequest, Mounter};

use nix::errno::Errno;

/// Mounts through `mount(2)`.
/// A missing fstype or data string is passed to the kernel as NULL.
#[derive(Debug, Default, Clone, Copy)]
pub struct SysMounter;

impl Mounter for SysMounter {
    fn mount(&self, request: &MountRequest) -> Result<(), Errno> {
        nix::mount::mount(
            Some(request.source()),
            request.target(),
            request.fstype(),
            request.flags(),
            request.data(),
        )
    }
}
