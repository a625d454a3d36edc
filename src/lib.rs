//! Mount a filesystem from command line options.
//!
//! The options are `-t fstype`, `-o data` and `-f mountflags`, where the mount flags are given
//! as single character codes (see [`flag::FlagCode`]). The resulting [`mount::MountRequest`] is
//! handed to a [`mount::Mounter`], which in production is [`mount_utils::SysMounter`].

/// Command line parsing.
pub mod cli;
/// Error types.
pub mod error;
/// Flag code to mount flag translation.
pub mod flag;
/// The mount request and its execution.
pub mod mount;
/// Kernel mount backend.
pub mod mount_utils;
/// Tracing setup and request timing.
pub mod trace;
