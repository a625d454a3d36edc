//! Single-character mount flag codes and their translation into `MsFlags`.
use crate::error::{FlagCodeError, UnknownCode};

use nix::mount::MsFlags;
use snafu::OptionExt;
use std::str::FromStr;
use strum::IntoEnumIterator;
use strum_macros::{EnumIter, IntoStaticStr};

/// A mount flag selectable with `-f`.
/// The strum name is the kernel constant the code stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, IntoStaticStr)]
pub enum FlagCode {
    #[strum(serialize = "MS_BIND")]
    Bind,
    #[strum(serialize = "MS_DIRSYNC")]
    DirSync,
    #[strum(serialize = "MS_MANDLOCK")]
    MandLock,
    #[strum(serialize = "MS_MOVE")]
    Move,
    #[strum(serialize = "MS_NOATIME")]
    NoAtime,
    #[strum(serialize = "MS_NODEV")]
    NoDev,
    #[strum(serialize = "MS_NODIRATIME")]
    NoDirAtime,
    #[strum(serialize = "MS_NOEXEC")]
    NoExec,
    #[strum(serialize = "MS_NOSUID")]
    NoSuid,
    #[strum(serialize = "MS_RDONLY")]
    ReadOnly,
    #[strum(serialize = "MS_REC")]
    Recursive,
    #[strum(serialize = "MS_REMOUNT")]
    Remount,
    #[strum(serialize = "MS_SYNCHRONOUS")]
    Synchronous,
}

impl FlagCode {
    /// The character used on the command line.
    pub fn code(self) -> char {
        match self {
            Self::Bind => 'b',
            Self::DirSync => 'd',
            Self::MandLock => 'l',
            Self::Move => 'm',
            Self::NoAtime => 'A',
            Self::NoDev => 'V',
            Self::NoDirAtime => 'D',
            Self::NoExec => 'E',
            Self::NoSuid => 'S',
            Self::ReadOnly => 'r',
            Self::Recursive => 'c',
            Self::Remount => 'R',
            Self::Synchronous => 's',
        }
    }

    /// The mount flag bit.
    pub fn flag(self) -> MsFlags {
        match self {
            Self::Bind => MsFlags::MS_BIND,
            Self::DirSync => MsFlags::MS_DIRSYNC,
            Self::MandLock => MsFlags::MS_MANDLOCK,
            Self::Move => MsFlags::MS_MOVE,
            Self::NoAtime => MsFlags::MS_NOATIME,
            Self::NoDev => MsFlags::MS_NODEV,
            Self::NoDirAtime => MsFlags::MS_NODIRATIME,
            Self::NoExec => MsFlags::MS_NOEXEC,
            Self::NoSuid => MsFlags::MS_NOSUID,
            Self::ReadOnly => MsFlags::MS_RDONLY,
            Self::Recursive => MsFlags::MS_REC,
            Self::Remount => MsFlags::MS_REMOUNT,
            Self::Synchronous => MsFlags::MS_SYNCHRONOUS,
        }
    }

    /// The kernel constant name, eg `MS_RDONLY`.
    pub fn constant(self) -> &'static str {
        self.into()
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Bind => "create a bind mount",
            Self::DirSync => "synchronous directory updates",
            Self::MandLock => "permit mandatory locking",
            Self::Move => "atomically move subtree",
            Self::NoAtime => "don't update atime (last access time)",
            Self::NoDev => "don't permit device access",
            Self::NoDirAtime => "don't update atime on directories",
            Self::NoExec => "don't allow executables",
            Self::NoSuid => "disable set-user/group-ID programs",
            Self::ReadOnly => "read-only mount",
            Self::Recursive => "recursive mount",
            Self::Remount => "remount",
            Self::Synchronous => "make writes synchronous",
        }
    }
}

impl TryFrom<char> for FlagCode {
    type Error = FlagCodeError;

    fn try_from(code: char) -> Result<Self, Self::Error> {
        Self::iter()
            .find(|flag| flag.code() == code)
            .context(UnknownCode { code })
    }
}

/// The bitmask accumulated from one `-f` argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlagCodes(MsFlags);

impl FlagCodes {
    pub fn flags(&self) -> MsFlags {
        self.0
    }
}

impl FromStr for FlagCodes {
    type Err = FlagCodeError;

    fn from_str(codes: &str) -> Result<Self, Self::Err> {
        codes
            .chars()
            .try_fold(MsFlags::empty(), |flags, code| {
                Ok(flags | FlagCode::try_from(code)?.flag())
            })
            .map(Self)
    }
}

/// Help listing of every flag code, one per line.
pub fn help_table() -> String {
    let mut table = String::from("Mount flag codes for -f:\n");
    for flag in FlagCode::iter() {
        table.push_str(&format!(
            "  {} - {:<15} {}\n",
            flag.code(),
            flag.constant(),
            flag.description()
        ));
    }
    table
}

// Used for displaying a set of flags in logs.
pub(crate) fn show(flags: MsFlags) -> String {
    let list: Vec<&str> = FlagCode::iter()
        .filter(|flag| flags.contains(flag.flag()))
        .map(FlagCode::constant)
        .collect();

    if list.is_empty() {
        return String::from("none");
    }

    list.join(",")
}
