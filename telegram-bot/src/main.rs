//! `relay-bot` binary: `run` starts the bot, `users` lists registered users.

use anyhow::Result;
use clap::Parser;
use telegram_bot::{list_users, load_config, run_bot, Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { token } => {
            let config = load_config(token)?;
            run_bot(config).await
        }
        Commands::Users => {
            let config = load_config(None)?;
            for line in list_users(&config).await? {
                println!("{}", line);
            }
            Ok(())
        }
    }
}
