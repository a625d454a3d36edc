use std::process::ExitCode;
use t_mount::{cli::CliArgs, mount, mount_utils::SysMounter, trace};

fn main() -> ExitCode {
    // Usage errors print the usage to stderr and exit here, before any mount.
    let args = CliArgs::parse_or_exit();
    trace::init_tracing();

    match mount::run(&args.request(), &SysMounter) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("{error}");
            ExitCode::FAILURE
        }
    }
}
