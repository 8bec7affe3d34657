//! Entry point: parse CLI and dispatch to command handlers.

use clap::Parser;
use pandascore::{
    cli::{Commands, PandaScore},
    commands::{
        games::handle_games,
        query::{handle_get, GetParams},
    },
    logging, Result,
};

/// Run the CLI.
#[tokio::main]
async fn main() -> Result<()> {
    let app = PandaScore::parse();
    logging::init(app.verbose);

    match app.command {
        Commands::Get {
            game,
            path,
            query,
            all,
            token,
            base_url,
        } => {
            handle_get(GetParams {
                game,
                path,
                query,
                all,
                token,
                base_url,
            })
            .await?
        }

        Commands::Games => handle_games()?,
    }

    Ok(())
}
