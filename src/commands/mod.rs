pub mod init;
pub mod run;
pub mod settings;
pub mod show;

use anyhow::Result;

use sweep::presentation::{Cli, Commands};

/// Run the selected subcommand and return the process exit code
pub fn dispatch(cli: &Cli) -> Result<i32> {
    match cli.command.as_ref().unwrap_or(&Commands::Run) {
        Commands::Run => run::cmd_run(cli),
        Commands::Show => show::cmd_show(cli),
        Commands::Init { force } => init::cmd_init(cli, *force),
    }
}

/// Name used in JSON error events
pub fn command_name(cli: &Cli) -> &'static str {
    match cli.command {
        None | Some(Commands::Run) => "run",
        Some(Commands::Show) => "show",
        Some(Commands::Init { .. }) => "init",
    }
}
