//! Command dispatch.

use std::path::Path;
use std::sync::Arc;

use tracing::debug;

use super::command::{Cli, Commands, ConfigCommand};
use super::{config, game, leaderboard, player, progression, schedule, summary, tournaments};
use crate::adapter::outbound::league_api::LeagueApiClient;
use crate::application::LeagueReports;
use crate::error::Result;
use crate::infrastructure::config::logging::LoggingConfig;
use crate::infrastructure::config::settings::Config;

/// Execute the parsed command line.
pub async fn execute(cli: &Cli) -> Result<()> {
    if let Commands::Config(command) = &cli.command {
        init_logging(&LoggingConfig::default(), cli);
        return match command {
            ConfigCommand::Init(args) => config::execute_init(&cli.config, args.force),
            ConfigCommand::Show => config::execute_show(&cli.config),
            ConfigCommand::Validate => config::execute_validate(&cli.config),
        };
    }

    let reports = Arc::new(build_reports(&cli.config, cli)?);
    match &cli.command {
        Commands::Tournaments => tournaments::execute(&reports).await,
        Commands::Leaderboard(args) => leaderboard::execute(reports, args).await,
        Commands::Player(args) => player::execute(&reports, args).await,
        Commands::Game(args) => game::execute(&reports, args).await,
        Commands::Schedule(args) => schedule::execute(&reports, args).await,
        Commands::Summary(args) => summary::execute(&reports, args).await,
        Commands::Progression(args) => progression::execute(&reports, args).await,
        Commands::Config(_) => Ok(()),
    }
}

fn init_logging(logging: &LoggingConfig, cli: &Cli) {
    let level = logging.effective_level(cli.verbose, cli.quiet);
    logging.init(&level);
}

fn build_reports(path: &Path, cli: &Cli) -> Result<LeagueReports> {
    let config = Config::load(path)?;
    init_logging(&config.logging, cli);
    debug!(path = %path.display(), base_url = %config.api.base_url, "Loaded configuration");

    let client = LeagueApiClient::from_config(&config.api)?;
    Ok(LeagueReports::new(Arc::new(client), config.organization_id()))
}
