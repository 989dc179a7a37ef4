use anyhow::Context;
use params_api::{config::Config, router::ApiDoc};
use std::path::Path;
use utoipa::OpenApi;

/// Generates the OpenAPI specification and writes it to a file.
fn generate_spec(api_doc: utoipa::openapi::OpenApi, path: &Path) -> anyhow::Result<()> {
    let spec_json = api_doc.to_pretty_json()?;
    std::fs::write(path, spec_json)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let config = Config::from_env().context("Failed to load configuration")?;
    generate_spec(ApiDoc::openapi(), &config.openapi_output)?;
    println!("OpenAPI document written to {}", config.openapi_output.display());
    Ok(())
}
