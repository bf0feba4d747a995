use anyhow::Result;
use clap::Parser;

use bookql::cli::handlers::{
    CommandContext, handle_init, handle_mutate, handle_query, handle_schema, handle_serve,
};
use bookql::cli::{Cli, Commands};
use bookql::logging;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.log_file);

    let config_path = cli.config;
    let load = || CommandContext::load(config_path.as_deref());

    match cli.command {
        Commands::Init => handle_init(),
        Commands::Serve {
            host,
            port,
            no_graphiql,
        } => handle_serve(load()?, host, port, no_graphiql),
        Commands::Query { query, variables } => handle_query(load()?, query, variables),
        Commands::Mutate {
            mutation,
            variables,
        } => handle_mutate(load()?, mutation, variables),
        Commands::Schema => handle_schema(load()?),
    }
}
