use clap::Parser;
use colored::Colorize;
use mailrank_core::cli::{self, Cli};
use mailrank_core::exit::MailRankExit;
use tracing_subscriber::EnvFilter;

fn main() -> MailRankExit {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let Some(cmd) = cli.command else {
        use clap::CommandFactory;
        let _ = Cli::command().print_help();
        return MailRankExit::Success;
    };

    match cli::dispatch::execute(&cmd) {
        Ok(output) => {
            print!("{output}");
            MailRankExit::Success
        }
        Err(e) => {
            eprintln!("{} {e:#}", "error:".red().bold());
            MailRankExit::for_error(&e)
        }
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
