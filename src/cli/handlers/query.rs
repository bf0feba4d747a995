use anyhow::{Context, Result};

use super::CommandContext;

pub fn handle_query(ctx: CommandContext, query: String, variables: Option<String>) -> Result<()> {
    execute_and_print(&ctx, &query, variables)
}

/// Runs one document against a fresh store and prints the response as JSON.
pub(super) fn execute_and_print(
    ctx: &CommandContext,
    document: &str,
    variables: Option<String>,
) -> Result<()> {
    let schema = ctx.schema()?;

    let vars: async_graphql::Variables = if let Some(v) = variables {
        serde_json::from_str(&v).context("Variables must be a JSON object")?
    } else {
        async_graphql::Variables::default()
    };

    let request = async_graphql::Request::new(document).variables(vars);
    let response = tokio::runtime::Runtime::new()?.block_on(schema.execute(request));
    if response.is_err() {
        tracing::debug!(errors = response.errors.len(), "Document finished with errors");
    }

    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}
