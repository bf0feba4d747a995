use crate::graphql::run_server;
use anyhow::Result;

use super::CommandContext;

pub fn handle_serve(
    mut ctx: CommandContext,
    host: Option<String>,
    port: Option<u16>,
    no_graphiql: bool,
) -> Result<()> {
    if let Some(h) = host {
        ctx.config.server.host = h;
    }
    if let Some(p) = port {
        ctx.config.server.port = p;
    }
    if no_graphiql {
        ctx.config.server.graphiql = false;
    }

    let schema = ctx.schema()?;
    let settings = ctx.config.server;

    println!(
        "Starting GraphQL server on http://{}:{}/graphql",
        settings.host, settings.port
    );
    if settings.graphiql {
        println!(
            "GraphiQL: http://{}:{}/graphql",
            settings.host, settings.port
        );
    }

    tokio::runtime::Runtime::new()?.block_on(run_server(schema, &settings))?;
    Ok(())
}
