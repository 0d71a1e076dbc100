//! `project-board` -- headless driver for the projects dashboard.
//!
//! # Environment variables
//!
//! | Variable                  | Required | Default                              | Description                 |
//! |---------------------------|----------|--------------------------------------|-----------------------------|
//! | `GRAPHQL_URL`             | no       | `http://localhost:3000/api/graphql`  | GraphQL endpoint            |
//! | `NEXT_PUBLIC_GRAPHQL_URL` | no       | --                                   | Fallback name for the above |
//! | `GRAPHQL_TIMEOUT_SECS`    | no       | none                                 | Request timeout             |
//! | `RUST_LOG`                | no       | `project_board=info`                 | Log filter                  |

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use project_board::commands::{self, CreateProjectArgs};
use project_board::utils::logging;
use project_board::{Config, GraphqlClient};

#[derive(Parser)]
#[command(name = "project-board", version, about = "Projects dashboard client")]
struct Cli {
    /// GraphQL endpoint, overrides GRAPHQL_URL
    #[arg(long, global = true)]
    url: Option<String>,

    /// Directory for log files
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render the projects page
    List,
    /// Create a project through the create dialog
    Create(CreateProjectArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_dir = cli.log_dir.clone().or_else(logging::default_log_dir);
    let _guard = logging::init_logging(log_dir.as_deref());

    let mut config = Config::from_env().context("Failed to load configuration")?;
    if let Some(url) = &cli.url {
        config.graphql_url = Config::new(url)?.graphql_url;
    }
    tracing::info!(endpoint = %config.graphql_url, "Starting project-board");

    let client = GraphqlClient::new(&config)?;

    match cli.command {
        Command::List => {
            print!("{}", commands::list_projects(client).await);
        }
        Command::Create(args) => match commands::create_project(client, &args).await {
            Ok(rendered) => print!("{}", rendered),
            Err((err, rendered)) => {
                print!("{}", rendered);
                return Err(err).context("Project was not created");
            }
        },
    }

    Ok(())
}
