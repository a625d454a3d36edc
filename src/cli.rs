//! Command line options for the mount binary.
use crate::{
    flag::{help_table, FlagCodes},
    mount::MountRequest,
};

use clap::{
    error::{ContextKind, ContextValue, ErrorKind},
    CommandFactory, Parser,
};
use nix::mount::MsFlags;
use std::{ffi::OsString, path::PathBuf};

/// Mount the filesystem at `source` onto the `target` directory.
#[derive(Clone, Debug, Parser)]
#[command(
    name = "t_mount",
    args_override_self = true,
    disable_help_flag = true,
    after_help = help_table()
)]
pub struct CliArgs {
    /// Filesystem type, eg: 'ext2' or 'reiserfs'.
    #[arg(
        short = 't',
        value_name = "FSTYPE",
        allow_hyphen_values = true,
        value_parser = clap::value_parser!(OsString)
    )]
    pub fstype: Option<OsString>,

    /// Filesystem-dependent options, eg: 'bsdgroups' for ext2.
    #[arg(
        short = 'o',
        value_name = "DATA",
        allow_hyphen_values = true,
        value_parser = clap::value_parser!(OsString)
    )]
    pub data: Option<OsString>,

    /// Mount flag codes, any of the characters listed below.
    /// May be repeated, the flags of every occurrence are combined.
    #[arg(short = 'f', value_name = "MOUNTFLAGS")]
    pub flags: Vec<FlagCodes>,

    /// The device, directory or pseudo-source to mount.
    pub source: PathBuf,

    /// The mountpoint.
    pub target: PathBuf,
}

impl CliArgs {
    /// Parse the process arguments.
    /// A usage error is printed to stderr along with the option list and the flag codes, then
    /// the process exits.
    pub fn parse_or_exit() -> Self {
        Self::try_parse().unwrap_or_else(|error| {
            let error = Self::with_usage(error);
            eprint!("{}", Self::usage_error(&error));
            std::process::exit(error.exit_code())
        })
    }

    /// The full text reported for a usage error.
    pub fn usage_error(error: &clap::Error) -> String {
        let mut message = String::new();
        if Self::wrong_number_of_arguments(error) {
            message.push_str("Wrong number of arguments\n");
        }
        message.push_str(&error.render().to_string());
        message.push('\n');
        message.push_str(&Self::usage_listing());
        message
    }

    /// Every option and every flag code, without the usage line.
    pub fn usage_listing() -> String {
        Self::command()
            .help_template("Available options:\n{options}\n\n{after-help}")
            .render_help()
            .to_string()
    }

    // Missing positionals, or an extra one which clap reports as an unexpected argument.
    fn wrong_number_of_arguments(error: &clap::Error) -> bool {
        match error.kind() {
            ErrorKind::MissingRequiredArgument => true,
            ErrorKind::UnknownArgument => matches!(
                error.get(ContextKind::InvalidArg),
                Some(ContextValue::String(arg)) if !arg.starts_with('-')
            ),
            _ => false,
        }
    }

    // Value parser failures are reported without a usage line, so rebuild them.
    fn with_usage(error: clap::Error) -> clap::Error {
        if error.kind() != ErrorKind::ValueValidation {
            return error;
        }
        let Some(reason) = std::error::Error::source(&error).map(ToString::to_string) else {
            return error;
        };
        Self::command().error(
            ErrorKind::ValueValidation,
            format!("invalid value for '-f <MOUNTFLAGS>': {reason}"),
        )
    }

    /// All `-f` codes combined into one set of flags.
    pub fn mount_flags(&self) -> MsFlags {
        self.flags
            .iter()
            .fold(MsFlags::empty(), |flags, codes| flags | codes.flags())
    }

    /// Build the mount request described by the arguments.
    pub fn request(&self) -> MountRequest {
        MountRequest::new(&self.source, &self.target)
            .with_fstype(self.fstype.clone())
            .with_flags(self.mount_flags())
            .with_data(self.data.clone())
    }
}
