use std::env;
use std::path::PathBuf;

use anyhow::{ensure, Result};

pub const DEFAULT_SCHEMA_DIR: &str = "json_schemas";
pub const DEFAULT_OUTPUT_DIR: &str = "generated";

/// Production schema roster. Fixed at configuration time; the pipeline never
/// discovers schemas dynamically.
pub const DEFAULT_SCHEMAS: &[&str] = &[
    "client_schema",
    "financialanalysis_schema",
    "assessment_schema",
    "document_schema",
    "documentmetadata_schema",
    "subscription_schema",
    "user_schema",
];

#[derive(Clone, Debug)]
pub struct GeneratorConfig {
    pub schema_dir: PathBuf,
    pub output_dir: PathBuf,
    pub schemas: Vec<String>,
}

impl GeneratorConfig {
    /// Configuration from the environment, falling back to the production
    /// defaults. With nothing set this reproduces the stock layout:
    /// `json_schemas/` in, `generated/` out, the full roster.
    pub fn from_env() -> Result<Self> {
        let schema_dir = env::var("SCHEMA_DIR").unwrap_or_else(|_| DEFAULT_SCHEMA_DIR.to_string());
        let output_dir =
            env::var("TYPES_OUTPUT_DIR").unwrap_or_else(|_| DEFAULT_OUTPUT_DIR.to_string());
        let schemas = match env::var("SCHEMA_LIST") {
            Ok(raw) => parse_schema_list(&raw)?,
            Err(_) => default_schemas(),
        };

        Ok(Self {
            schema_dir: schema_dir.into(),
            output_dir: output_dir.into(),
            schemas,
        })
    }

    /// Fabricated configuration for tests and embedding: explicit directories
    /// and roster, no environment involved.
    pub fn new<S: AsRef<str>>(
        schema_dir: impl Into<PathBuf>,
        output_dir: impl Into<PathBuf>,
        schemas: &[S],
    ) -> Self {
        Self {
            schema_dir: schema_dir.into(),
            output_dir: output_dir.into(),
            schemas: schemas.iter().map(|name| name.as_ref().to_string()).collect(),
        }
    }
}

fn default_schemas() -> Vec<String> {
    DEFAULT_SCHEMAS.iter().map(|name| name.to_string()).collect()
}

fn parse_schema_list(raw: &str) -> Result<Vec<String>> {
    let schemas: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect();
    ensure!(!schemas.is_empty(), "SCHEMA_LIST must name at least one schema");
    Ok(schemas)
}

#[cfg(test)]
mod tests {
    use super::{default_schemas, parse_schema_list, DEFAULT_SCHEMAS};

    #[test]
    fn default_roster_matches_the_schema_directory() {
        assert_eq!(default_schemas().len(), DEFAULT_SCHEMAS.len());
        assert!(default_schemas().iter().any(|name| name == "client_schema"));
    }

    #[test]
    fn parses_comma_separated_roster() {
        let schemas = parse_schema_list("client_schema, user_schema,document_schema").unwrap();
        assert_eq!(schemas, ["client_schema", "user_schema", "document_schema"]);
    }

    #[test]
    fn rejects_empty_roster() {
        assert!(parse_schema_list(" , ,").is_err());
        assert!(parse_schema_list("").is_err());
    }
}
