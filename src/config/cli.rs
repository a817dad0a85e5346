use crate::config::toml_config::TomlConfig;
use crate::config::ServiceConfig;
use crate::utils::error::Result;
use crate::utils::validation::{validate_socket_addr, Validate};
use clap::{Args, Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "meter-graphql")]
#[command(about = "A GraphQL read service for meter records")]
pub struct Cli {
    #[command(flatten)]
    pub common: CommonArgs,

    #[command(flatten)]
    pub serve: ServeArgs,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// JSON file holding the meter records
    #[arg(long, global = true)]
    pub data_file: Option<String>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Serve the GraphQL API over HTTP (default)
    Serve,
    /// Run a single query operation and print the result as JSON
    Query(QueryArgs),
}

#[derive(Debug, Clone, Default, Args)]
pub struct ServeArgs {
    /// Address to listen on, e.g. 127.0.0.1:8080
    #[arg(long, global = true)]
    pub bind: Option<String>,

    /// Do not serve the GraphiQL page
    #[arg(long, global = true)]
    pub no_graphiql: bool,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,
}

#[derive(Debug, Clone, Args)]
pub struct QueryArgs {
    /// Operation name: getMeterById or getAllMeters
    pub operation: String,

    /// Meter id for getMeterById
    #[arg(long)]
    pub id: Option<String>,
}

impl Cli {
    /// Builds the effective configuration: defaults, then the TOML file, then flags.
    pub fn resolve(&self) -> Result<ServiceConfig> {
        let mut config = match &self.common.config {
            Some(path) => TomlConfig::from_file(path)?.to_service_config()?,
            None => ServiceConfig::default(),
        };

        if let Some(data_file) = &self.common.data_file {
            config.meters_file = data_file.clone();
        }

        if let Some(bind) = &self.serve.bind {
            config.bind_address = validate_socket_addr("--bind", bind)?;
        }
        if self.serve.no_graphiql {
            config.graphiql = false;
        }
        if self.serve.json_logs {
            config.json_logs = true;
        }

        config.validate()?;
        Ok(config)
    }
}
