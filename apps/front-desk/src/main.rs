//! Hotel front desk entry point.

use std::process::ExitCode;

use clap::Parser;

use front_desk::cli::Cli;

#[tokio::main]
async fn main() -> ExitCode {
    front_desk::init_tracing();

    let cli = Cli::parse();
    let json = cli.json;

    match front_desk::run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            front_desk::report_error(&err, json);
            ExitCode::FAILURE
        }
    }
}
