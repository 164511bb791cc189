mod fetch;
mod intent;
mod render;
mod session;
#[cfg(test)]
mod testing;
mod ticker;

use std::sync::Arc;

use clap::{Parser, Subcommand};
use dealboard_core::{AppConfig, Board};
use dealboard_feed::OffersClient;
use tracing_subscriber::EnvFilter;

use crate::fetch::fetch_board;
use crate::render::{render_board, render_grid};
use crate::session::Session;

#[derive(Debug, Parser)]
#[command(name = "dealboard")]
#[command(about = "Browse current supermarket promotions")]
struct Cli {
    /// Display width in pixels; picks the layout breakpoint.
    #[arg(long, global = true)]
    width: Option<u32>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Interactive board with a rotating top-deals carousel (default).
    Watch,
    /// Print the filtered product listing once.
    List {
        /// Case-insensitive product name filter.
        #[arg(long)]
        search: Option<String>,
        /// Exact supermarket name.
        #[arg(long)]
        store: Option<String>,
        /// Include products that are not on offer.
        #[arg(long)]
        all: bool,
    },
    /// Print the top deals, grouped as the carousel would show them.
    Deals {
        #[arg(long)]
        all: bool,
    },
    /// Print the supermarkets present in the current data.
    Stores {
        #[arg(long)]
        all: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = dealboard_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let width = cli.width.unwrap_or(config.display_width);

    let client = OffersClient::new(
        &config.api_url,
        config.request_timeout_secs,
        &config.user_agent,
    )?;
    tracing::debug!(env = %config.env, api_url = %client.api_url(), width, "starting dealboard");

    match cli.command.unwrap_or(Commands::Watch) {
        Commands::Watch => {
            let session = Session::new(Arc::new(client), &config, width);
            let stdin = tokio::io::BufReader::new(tokio::io::stdin());
            session.run(stdin, &mut std::io::stdout()).await?;
        }
        Commands::List { search, store, all } => {
            let mut board = load(&client, &config, !all, width).await?;
            board.handle(dealboard_core::Intent::Search(search.unwrap_or_default()));
            board.handle(dealboard_core::Intent::SelectStore(store));
            print!("{}", render_board(&board));
        }
        Commands::Deals { all } => {
            let board = load(&client, &config, !all, width).await?;
            print_deals(&board);
        }
        Commands::Stores { all } => {
            let board = load(&client, &config, !all, width).await?;
            for store in board.stores() {
                println!("{store}");
            }
        }
    }

    Ok(())
}

async fn load(
    client: &OffersClient,
    config: &AppConfig,
    offers_only: bool,
    width: u32,
) -> anyhow::Result<Board> {
    fetch_board(client, offers_only, width, config.top_deals_limit).await
}

fn print_deals(board: &Board) {
    if board.groups().is_empty() {
        println!("No deals right now.");
        return;
    }
    let columns = board.breakpoint().columns_per_row().unwrap_or(1);
    for (index, group) in board.groups().iter().enumerate() {
        println!("--- group {}/{} ---", index + 1, board.groups().len());
        let cards: Vec<_> = group.iter().collect();
        print!("{}", render_grid(&cards, columns));
    }
}

#[cfg(test)]
mod tests;
