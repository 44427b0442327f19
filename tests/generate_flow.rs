use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tempfile::TempDir;
use typegen::config::DEFAULT_SCHEMAS;
use typegen::{Pipeline, RustTypeCompiler, SchemaStore};

struct TestStore {
    schema_dir: TempDir,
    output_root: TempDir,
}

impl TestStore {
    fn new() -> Result<Self> {
        Ok(Self {
            schema_dir: TempDir::new().context("schema dir")?,
            output_root: TempDir::new().context("output dir")?,
        })
    }

    fn write_schema(&self, name: &str, body: &str) -> Result<()> {
        let path = self.schema_dir.path().join(format!("{name}.json"));
        fs::write(&path, body).with_context(|| format!("writing {}", path.display()))?;
        Ok(())
    }

    fn output_dir(&self) -> PathBuf {
        self.output_root.path().join("generated")
    }

    fn pipeline<S: AsRef<str>>(&self, names: &[S]) -> Pipeline<RustTypeCompiler> {
        let store = SchemaStore::new(self.schema_dir.path(), names);
        Pipeline::new(store, RustTypeCompiler::new(), self.output_dir())
    }
}

const WIDGET_SCHEMA: &str = r#"{
    "type": "object",
    "required": ["id"],
    "properties": {
        "id": { "type": "string" },
        "note": { "type": ["string", "null"] }
    }
}"#;

#[test]
fn widget_schema_generates_expected_artifact() -> Result<()> {
    let fixture = TestStore::new()?;
    fixture.write_schema("widget_schema", WIDGET_SCHEMA)?;

    let report = fixture.pipeline(&["widget_schema"]).run()?;
    assert!(report.is_success());

    let artifact = fixture.output_dir().join("widget.rs");
    let source = fs::read_to_string(&artifact).context("generated artifact")?;
    assert!(source.contains("pub struct Widget {"));
    assert!(source.contains("    pub id: String,\n"));
    assert!(source.contains("    pub note: Option<String>,\n"));
    Ok(())
}

#[test]
fn one_bad_schema_does_not_block_the_rest() -> Result<()> {
    let fixture = TestStore::new()?;
    fixture.write_schema("widget_schema", WIDGET_SCHEMA)?;
    fixture.write_schema("broken_schema", "{ this is not json")?;
    fixture.write_schema("scalar_schema", r#"{ "type": "string" }"#)?;
    fixture.write_schema(
        "gadget_schema",
        r#"{ "type": "object", "required": ["name"], "properties": { "name": { "type": "string" } } }"#,
    )?;

    let report = fixture
        .pipeline(&[
            "widget_schema",
            "broken_schema",
            "scalar_schema",
            "gadget_schema",
        ])
        .run()?;

    assert!(!report.is_success());

    let generated: Vec<&str> = report.generated().map(|(name, _)| name).collect();
    assert_eq!(generated, ["widget_schema", "gadget_schema"]);
    assert!(fixture.output_dir().join("widget.rs").exists());
    assert!(fixture.output_dir().join("gadget.rs").exists());

    let failures: Vec<(&str, &str)> = report
        .failures()
        .map(|(name, err)| (name, err.kind()))
        .collect();
    assert_eq!(
        failures,
        [
            ("broken_schema", "parse error"),
            ("scalar_schema", "compile failure")
        ]
    );
    Ok(())
}

#[test]
fn missing_document_is_isolated_and_named() -> Result<()> {
    let fixture = TestStore::new()?;
    fixture.write_schema("widget_schema", WIDGET_SCHEMA)?;

    let report = fixture.pipeline(&["ghost_schema", "widget_schema"]).run()?;

    assert!(!report.is_success());
    let failures: Vec<(&str, &str)> = report
        .failures()
        .map(|(name, err)| (name, err.kind()))
        .collect();
    assert_eq!(failures, [("ghost_schema", "not found")]);
    assert!(fixture.output_dir().join("widget.rs").exists());
    Ok(())
}

#[test]
fn rerunning_an_unchanged_store_is_idempotent() -> Result<()> {
    let fixture = TestStore::new()?;
    fixture.write_schema("widget_schema", WIDGET_SCHEMA)?;
    fixture.write_schema(
        "gadget_schema",
        r#"{ "type": "object", "required": ["status"], "properties": { "status": { "enum": ["ACTIVE", "INACTIVE"] } } }"#,
    )?;
    let roster = ["widget_schema", "gadget_schema"];

    fixture.pipeline(&roster).run()?;
    let first = read_artifacts(&fixture.output_dir())?;

    fixture.pipeline(&roster).run()?;
    let second = read_artifacts(&fixture.output_dir())?;

    assert_eq!(first, second);
    Ok(())
}

#[test]
fn colliding_names_fail_fast_with_no_output() -> Result<()> {
    let fixture = TestStore::new()?;
    fixture.write_schema("document_metadata_schema", WIDGET_SCHEMA)?;
    fixture.write_schema("document__metadata_schema", WIDGET_SCHEMA)?;

    let result = fixture
        .pipeline(&["document_metadata_schema", "document__metadata_schema"])
        .run();

    let err = result.expect_err("colliding roster must abort");
    assert!(err.to_string().contains("naming collision"));
    assert!(!fixture.output_dir().exists());
    Ok(())
}

#[test]
fn production_roster_generates_every_artifact() -> Result<()> {
    let schema_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("json_schemas");
    let output_root = TempDir::new()?;
    let output_dir = output_root.path().join("generated");

    let store = SchemaStore::new(&schema_dir, DEFAULT_SCHEMAS);
    let pipeline = Pipeline::new(store, RustTypeCompiler::new(), &output_dir);
    let report = pipeline.run()?;

    assert!(report.is_success(), "failures: {}", report.summary());
    assert_eq!(report.generated().count(), DEFAULT_SCHEMAS.len());

    for file in [
        "client.rs",
        "financialanalysis.rs",
        "assessment.rs",
        "document.rs",
        "documentmetadata.rs",
        "subscription.rs",
        "user.rs",
    ] {
        assert!(output_dir.join(file).exists(), "missing {file}");
    }

    let client = fs::read_to_string(output_dir.join("client.rs"))?;
    assert!(client.contains("pub struct Client {"));
    assert!(client.contains("pub enum EmploymentStatus {"));
    assert!(client.contains("    pub annual_income: MonetaryAmount,\n"));

    let document = fs::read_to_string(output_dir.join("document.rs"))?;
    assert!(document.contains("    pub r#type: String,\n"));
    assert!(document.contains("    pub validation_errors: Option<Vec<String>>,\n"));

    let metadata = fs::read_to_string(output_dir.join("documentmetadata.rs"))?;
    assert!(metadata.contains("#[serde(untagged)]"));
    assert!(metadata.contains("    BankStatementData(BankStatementData),\n"));
    assert!(metadata.contains("HashMap<String, Vec<Transaction>>"));

    Ok(())
}

fn read_artifacts(dir: &Path) -> Result<Vec<(String, Vec<u8>)>> {
    let mut artifacts = Vec::new();
    for entry in fs::read_dir(dir).context("listing output dir")? {
        let entry = entry?;
        artifacts.push((
            entry.file_name().to_string_lossy().into_owned(),
            fs::read(entry.path())?,
        ));
    }
    artifacts.sort();
    Ok(artifacts)
}
