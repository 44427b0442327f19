use anyhow::Result;
use tracing_subscriber::EnvFilter;

use typegen::{config::GeneratorConfig, Pipeline, RustTypeCompiler, SchemaStore};

fn main() -> Result<()> {
    dotenv::dotenv().ok();
    init_tracing();

    let config = GeneratorConfig::from_env()?;
    tracing::info!(
        component = "generate_types",
        schema_dir = %config.schema_dir.display(),
        output_dir = %config.output_dir.display(),
        schemas = config.schemas.len(),
        "loaded generator configuration"
    );

    let store = SchemaStore::new(&config.schema_dir, &config.schemas);
    let pipeline = Pipeline::new(store, RustTypeCompiler::new(), &config.output_dir);
    let report = pipeline.run()?;

    for (name, path) in report.generated() {
        println!("Successfully generated types for {name} -> {}", path.display());
    }

    if !report.is_success() {
        eprintln!("{} schema(s) failed:", report.failures().count());
        for (name, err) in report.failures() {
            eprintln!("  {name}: {} — {err}", err.kind());
        }
        std::process::exit(1);
    }

    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}
