//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::fs;
use std::path::Path;

use crate::config::GeneratorConfig;
use crate::generator::{self, GenerationError};
use crate::model::CompilationUnit;

use super::{CliError, CliResult, ExitCode};

/// Maximum model file size (100 MB)
///
/// Files larger than this are rejected to prevent out-of-memory conditions
/// while loading the declaration model.
const MAX_SOURCE_SIZE: u64 = 100 * 1024 * 1024;

/// Read source file contents.
///
/// ## Errors
///
/// Returns an error if:
/// - The file cannot be read (I/O error)
/// - The file exceeds `MAX_SOURCE_SIZE` (100 MB)
pub fn read_source(file_path: &Path) -> CliResult<String> {
    let metadata = fs::metadata(file_path)
        .map_err(|e| CliError::failure(format!("Cannot access file '{}': {}", file_path.display(), e)))?;

    if metadata.len() > MAX_SOURCE_SIZE {
        return Err(CliError::failure(format!(
            "Source file '{}' is too large ({} bytes, max {} bytes)",
            file_path.display(),
            metadata.len(),
            MAX_SOURCE_SIZE
        )));
    }

    fs::read_to_string(file_path)
        .map_err(|e| CliError::failure(format!("Error reading file '{}': {}", file_path.display(), e)))
}

/// Load the declaration model of one compilation unit.
pub fn load_unit(model_path: &Path) -> CliResult<CompilationUnit> {
    let source = read_source(model_path)?;
    CompilationUnit::from_json(&source).map_err(|e| {
        let err = GenerationError::from(e);
        CliError::failure(format!("{}: {:?}", model_path.display(), miette::Report::new(err)))
    })
}

/// Generate the unit's source text, with failures rendered as diagnostics.
pub fn generate_source(model_path: &Path, config: &GeneratorConfig) -> CliResult<String> {
    let unit = load_unit(model_path)?;
    generator::generate_unit(&unit, config).map_err(|e| {
        CliError::failure(format!(
            "Code generation failed for {}: {:?}",
            model_path.display(),
            miette::Report::new(e)
        ))
    })
}

/// Generate a unit to `output` (or stdout), or verify `output` is current when `check` is set.
pub fn generate_file(
    model_path: &Path,
    output: Option<&Path>,
    check: bool,
    config: &GeneratorConfig,
) -> CliResult<ExitCode> {
    let generated = generate_source(model_path, config)?;

    let Some(output) = output else {
        print!("{}", generated);
        return Ok(ExitCode::SUCCESS);
    };

    if check {
        let current = fs::read_to_string(output).ok();
        if current.as_deref() == Some(generated.as_str()) {
            println!("✓ {} is up to date", output.display());
            return Ok(ExitCode::SUCCESS);
        }
        return Err(CliError::failure(format!(
            "{} is out of date; regenerate it from {}",
            output.display(),
            model_path.display()
        )));
    }

    fs::write(output, &generated)
        .map_err(|e| CliError::failure(format!("Error writing {}: {}", output.display(), e)))?;
    tracing::info!(output = %output.display(), bytes = generated.len(), "wrote generated actions");
    Ok(ExitCode::SUCCESS)
}

/// Print each qualifying declaration with the artifacts it would produce.
pub fn list_file(model_path: &Path, config: &GeneratorConfig) -> CliResult<ExitCode> {
    let unit = load_unit(model_path)?;
    let generated = generator::generate_actions(&unit, config).map_err(|e| {
        CliError::failure(format!(
            "Code generation failed for {}: {:?}",
            model_path.display(),
            miette::Report::new(e)
        ))
    })?;

    for line in describe_actions(&generated) {
        println!("{}", line);
    }
    Ok(ExitCode::SUCCESS)
}

/// One line per container: `<name>: dispatchers+names` or `<name>: names`.
pub fn describe_actions(generated: &[generator::GeneratedActions]) -> Vec<String> {
    generated
        .iter()
        .map(|actions| {
            let artifacts = if actions.dispatcher.is_some() {
                "dispatchers+names"
            } else {
                "names"
            };
            format!("{}: {}", actions.container, artifacts)
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("actiongen_{}_{}", std::process::id(), name))
    }

    const MODEL: &str = r#"{
        "declarations": [
            {"name": "Foo", "supertypes": ["ReduxActions"], "constructors": [{}, {"name": "_"}],
             "fields": [{"name": "bar", "type": {"kind": "parameterized", "name": "ActionDispatcher",
                                                 "args": [{"kind": "named", "name": "Baz"}]}}]},
            {"name": "Other", "supertypes": ["ReduxActions"], "constructors": [{}]}
        ],
        "library": [{"name": "ReduxActions"}]
    }"#;

    #[test]
    fn test_generate_then_check() {
        let model = temp_path("check_model.json");
        let output = temp_path("check_out.g.dart");
        fs::write(&model, MODEL).unwrap();
        let _ = fs::remove_file(&output);
        let config = GeneratorConfig::default();

        assert!(generate_file(&model, Some(&output), true, &config).is_err());
        assert_eq!(
            generate_file(&model, Some(&output), false, &config).unwrap(),
            ExitCode::SUCCESS
        );
        assert_eq!(
            generate_file(&model, Some(&output), true, &config).unwrap(),
            ExitCode::SUCCESS
        );

        let written = fs::read_to_string(&output).unwrap();
        assert!(written.contains("class _$Foo extends Foo {"));
        assert!(written.contains("class OtherNames {"));

        let _ = fs::remove_file(&model);
        let _ = fs::remove_file(&output);
    }

    #[test]
    fn test_load_unit_reports_invalid_json() {
        let model = temp_path("bad_model.json");
        fs::write(&model, "{ not json").unwrap();
        let err = load_unit(&model).unwrap_err();
        assert_eq!(err.exit_code, ExitCode::FAILURE);
        assert!(err.message.contains("bad_model.json"));
        let _ = fs::remove_file(&model);
    }

    #[test]
    fn test_read_source_missing_file() {
        let err = read_source(&temp_path("does_not_exist.json")).unwrap_err();
        assert!(err.message.starts_with("Cannot access file"));
    }

    #[test]
    fn test_describe_actions() {
        let unit = CompilationUnit::from_json(MODEL).unwrap();
        let generated = generator::generate_actions(&unit, &GeneratorConfig::default()).unwrap();
        assert_eq!(
            describe_actions(&generated),
            vec!["Foo: dispatchers+names".to_string(), "Other: names".to_string()]
        );
    }
}
