use anyhow::Result;

mod args;
mod run;

pub use args::{Arguments, BuildArgs, CheckArgs, Command, CommonArgs};

/// Exit code meanings: 0 success, 1 completed with failures reported,
/// 2 fatal error (mapped in main from the Err path).
pub fn run_cli(args: Arguments) -> Result<u8> {
    let Some(Arguments {
        command: Some(command),
    }) = args.with_command_or_help()
    else {
        return Ok(0);
    };

    match command {
        Command::Build(build) => run::run_build(build),
        Command::Check(check) => run::run_check(check),
        Command::Init => run::run_init(),
    }
}
