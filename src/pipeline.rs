use std::collections::HashMap;
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{error, info};

use crate::compiler::SchemaCompiler;
use crate::error::{EntryError, PipelineError};
use crate::naming::{derive_output_file, derive_type_name};
use crate::store::SchemaStore;

/// Outcome of one schema entry, in roster order.
#[derive(Debug)]
pub struct EntryOutcome {
    pub name: String,
    pub result: Result<PathBuf, EntryError>,
}

/// Aggregate result of one generation pass. Successful artifacts are kept on
/// disk even when other entries failed; the batch as a whole succeeds only
/// when every entry did.
#[derive(Debug)]
pub struct BatchReport {
    outcomes: Vec<EntryOutcome>,
}

impl BatchReport {
    pub fn outcomes(&self) -> &[EntryOutcome] {
        &self.outcomes
    }

    pub fn generated(&self) -> impl Iterator<Item = (&str, &Path)> {
        self.outcomes.iter().filter_map(|outcome| {
            outcome
                .result
                .as_ref()
                .ok()
                .map(|path| (outcome.name.as_str(), path.as_path()))
        })
    }

    pub fn failures(&self) -> impl Iterator<Item = (&str, &EntryError)> {
        self.outcomes.iter().filter_map(|outcome| {
            outcome
                .result
                .as_ref()
                .err()
                .map(|err| (outcome.name.as_str(), err))
        })
    }

    pub fn is_success(&self) -> bool {
        self.outcomes.iter().all(|outcome| outcome.result.is_ok())
    }

    /// Human-readable listing of every entry by name with its outcome.
    pub fn summary(&self) -> String {
        let mut out = String::new();
        for outcome in &self.outcomes {
            match &outcome.result {
                Ok(path) => {
                    let _ = writeln!(out, "{}: generated {}", outcome.name, path.display());
                }
                Err(err) => {
                    let _ = writeln!(out, "{}: {} — {err}", outcome.name, err.kind());
                }
            }
        }
        out
    }
}

/// Sequential generation pass over a schema store. Entries are processed one
/// at a time in roster order; per-entry failures are recorded and do not stop
/// the batch. Only a naming collision in the roster itself aborts the run.
pub struct Pipeline<C> {
    store: SchemaStore,
    compiler: C,
    output_dir: PathBuf,
}

impl<C: SchemaCompiler> Pipeline<C> {
    pub fn new(store: SchemaStore, compiler: C, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            store,
            compiler,
            output_dir: output_dir.into(),
        }
    }

    pub fn run(&self) -> Result<BatchReport, PipelineError> {
        let plan = self.check_roster()?;

        fs::create_dir_all(&self.output_dir).map_err(|source| PipelineError::OutputDir {
            path: self.output_dir.clone(),
            source,
        })?;

        let mut outcomes = Vec::with_capacity(plan.len());
        for (entry_index, (type_name, file_name)) in plan.into_iter().enumerate() {
            let entry = &self.store.entries()[entry_index];
            let result = self.generate(entry_index, &type_name, &file_name);
            match &result {
                Ok(path) => {
                    info!(
                        schema = %entry.name,
                        type_name = %type_name,
                        path = %path.display(),
                        "generated type declarations"
                    );
                }
                Err(err) => {
                    error!(schema = %entry.name, error = %err, "schema entry failed");
                }
            }
            outcomes.push(EntryOutcome {
                name: entry.name.clone(),
                result,
            });
        }

        Ok(BatchReport { outcomes })
    }

    fn generate(
        &self,
        entry_index: usize,
        type_name: &str,
        file_name: &str,
    ) -> Result<PathBuf, EntryError> {
        let entry = &self.store.entries()[entry_index];
        let document = self.store.load(entry)?;
        let source = self.compiler.compile(&document, type_name)?;

        let path = self.output_dir.join(file_name);
        fs::write(&path, source).map_err(|source| EntryError::Write {
            path: path.clone(),
            source,
        })?;
        Ok(path)
    }

    /// Derive every entry's type name and output file up front and reject
    /// duplicates. Runs before anything touches the filesystem, so a
    /// colliding roster writes no output at all.
    fn check_roster(&self) -> Result<Vec<(String, String)>, PipelineError> {
        let mut type_names: HashMap<String, String> = HashMap::new();
        let mut files: HashMap<String, String> = HashMap::new();
        let mut plan = Vec::with_capacity(self.store.entries().len());

        for entry in self.store.entries() {
            let type_name = derive_type_name(&entry.name);
            let file_name = derive_output_file(&entry.name);

            if let Some(first) = type_names.insert(type_name.clone(), entry.name.clone()) {
                return Err(PipelineError::NamingCollision {
                    first,
                    second: entry.name.clone(),
                    what: "type name",
                    derived: type_name,
                });
            }
            if let Some(first) = files.insert(file_name.clone(), entry.name.clone()) {
                return Err(PipelineError::NamingCollision {
                    first,
                    second: entry.name.clone(),
                    what: "output file",
                    derived: file_name,
                });
            }

            plan.push((type_name, file_name));
        }

        Ok(plan)
    }
}
