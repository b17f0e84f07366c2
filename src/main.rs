use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use ghfollowers::config::Config;
use ghfollowers::followers::{FollowerListModel, FollowerRecord};
use ghfollowers::github::FollowerClient;
use ghfollowers::logging::init_tracing;

/// Browse and search the followers of a GitHub account.
#[derive(Debug, Parser)]
#[command(name = "ghfollowers", version, about)]
struct Cli {
    /// Account whose followers are listed (overrides config)
    #[arg(long, value_name = "NAME")]
    account: Option<String>,

    /// Config file to use instead of the default location
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Print followers whose login contains TEXT, without the TUI
    #[arg(long, value_name = "TEXT")]
    query: Option<String>,

    /// Print all followers without the TUI
    #[arg(long)]
    plain: bool,

    /// Print a JSON array instead of opening the TUI
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn is_plain(&self) -> bool {
        self.plain || self.query.is_some() || self.json
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("Failed to load configuration")?
    .with_account(cli.account.clone());
    config.validate().context("Failed to load configuration")?;

    let client = FollowerClient::new(&config.github, &config.defaults)?;
    let runtime = tokio::runtime::Runtime::new().context("Failed to start async runtime")?;

    if cli.is_plain() {
        return runtime.block_on(print_followers(&client, &cli));
    }

    tracing::info!(account = %client.account(), "Starting follower browser");
    ghfollowers::ui::run(client, runtime.handle()).context("Terminal UI failed")?;
    Ok(())
}

async fn print_followers(client: &FollowerClient, cli: &Cli) -> anyhow::Result<()> {
    let mut model = FollowerListModel::new();
    model.set_followers(client.fetch_followers().await?);
    if let Some(query) = &cli.query {
        model.set_query(query.as_str());
    }

    let followers = model.filtered_followers();
    let mut stdout = io::stdout().lock();
    if cli.json {
        serde_json::to_writer_pretty(&mut stdout, &followers)?;
        writeln!(stdout)?;
    } else {
        for follower in followers {
            writeln!(stdout, "{}", plain_line(follower))?;
        }
    }
    Ok(())
}

fn plain_line(follower: &FollowerRecord) -> String {
    format!("{}\t{}\t{}", follower.id, follower.login, follower.avatar_url)
}
