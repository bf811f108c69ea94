//! Studio CLI binary entry point.

use clap::Parser;
use studio_cli::auth::client::StudioAuthClient;
use studio_cli::auth::store::ConfigCredentialStore;
use studio_cli::cli::{commands, Cli, Commands};
use studio_cli::config::{ConfigStore, Settings};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let settings = Settings::from_env();
    let store = ConfigCredentialStore::new(ConfigStore::new(settings.config_dir.clone()));

    let code = match cli.command {
        Commands::Login(args) => {
            let client = StudioAuthClient::new();
            commands::login(&client, &store, &settings, &args).await
        }
        Commands::Logout => commands::logout(&store),
        Commands::Token => commands::token(&store),
    };
    std::process::exit(code);
}
