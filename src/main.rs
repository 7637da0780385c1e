use clap::Parser;

use chiplead::adapter::inbound::cli::command::Cli;
use chiplead::adapter::inbound::cli::output::{self, OutputConfig};
use chiplead::adapter::inbound::cli::run;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    output::configure(OutputConfig::new(cli.json, cli.quiet, cli.verbose), cli.color);

    if let Err(e) = run::execute(&cli).await {
        output::error(&e.to_string());
        std::process::exit(1);
    }
}
