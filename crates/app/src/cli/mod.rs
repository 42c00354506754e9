use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use roster_app::{
    database::{DatabaseOptions, Db},
    pagination::ListRequest,
};

mod db;
mod role;
mod tenant;

#[derive(Debug, Parser)]
#[command(name = "roster-app", about = "Roster CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Tenant(tenant::TenantCommand),
    Role(role::RoleCommand),
    Db(db::DbCommand),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        match self.command {
            Commands::Tenant(command) => tenant::run(command).await,
            Commands::Role(command) => role::run(command).await,
            Commands::Db(command) => db::run(command).await,
        }
    }
}

/// Connection flags shared by every command.
#[derive(Debug, Args)]
pub(crate) struct DatabaseArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,

    /// Per-statement deadline in milliseconds
    #[arg(long, env = "DATABASE_QUERY_TIMEOUT_MS", default_value_t = 5_000)]
    database_query_timeout_ms: u64,
}

impl DatabaseArgs {
    pub(crate) async fn connect(&self) -> Result<Db, String> {
        let options = DatabaseOptions {
            max_connections: 1,
            query_timeout: Duration::from_millis(self.database_query_timeout_ms),
            ..DatabaseOptions::new(&self.database_url)
        };

        Db::connect(&options)
            .await
            .map_err(|error| format!("failed to connect to database: {error}"))
    }
}

/// Search, sort and paging flags for list commands.
#[derive(Debug, Args)]
pub(crate) struct ListArgs {
    /// Substring to match against id and name
    #[arg(long)]
    query: Option<String>,

    /// Field to sort by
    #[arg(long)]
    sort_by: Option<String>,

    /// ASC or DESC
    #[arg(long)]
    sort_order: Option<String>,

    /// Return rows after this id
    #[arg(long)]
    after_id: Option<String>,

    /// Sort value of the `--after-id` row
    #[arg(long)]
    after_value: Option<String>,

    /// Maximum rows to return
    #[arg(long)]
    limit: Option<u32>,
}

impl From<ListArgs> for ListRequest {
    fn from(args: ListArgs) -> Self {
        ListRequest {
            query: args.query,
            sort_by: args.sort_by,
            sort_order: args.sort_order,
            after_id: args.after_id,
            after_value: args.after_value,
            limit: args.limit,
            ..ListRequest::default()
        }
    }
}

fn or_none(value: Option<&str>) -> &str {
    value.unwrap_or("-")
}
