use std::{
    fs,
    path::{Path, PathBuf},
};

use tempfile::tempdir;

use meshwork_cli::Args;

/// Collects all .toml files from a directory of the workspace's demos
fn collect_demo_files(subdir: &str) -> Vec<PathBuf> {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("../../demos")
        .join(subdir);
    let mut files = if let Ok(entries) = fs::read_dir(&dir) {
        entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| {
                path.is_file() && path.extension().and_then(|s| s.to_str()) == Some("toml")
            })
            .collect()
    } else {
        Vec::new()
    };

    // Sort for consistent test output
    files.sort();
    files
}

fn args_for(input: &Path, output: &Path) -> Args {
    Args {
        input: input.to_string_lossy().to_string(),
        output: output.to_string_lossy().to_string(),
        config: None,
        log_level: "off".to_string(),
    }
}

#[test]
fn e2e_smoke_test_valid_demos() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let demos = collect_demo_files("");

    assert!(!demos.is_empty(), "No demos found in demos/");

    let mut failed_demos = Vec::new();

    for demo_path in &demos {
        let output_path = temp_dir.path().join(format!(
            "{}.layout.toml",
            demo_path.file_stem().unwrap().to_string_lossy()
        ));

        match meshwork_cli::run(&args_for(demo_path, &output_path)) {
            Ok(()) => {
                let written = fs::read_to_string(&output_path).expect("Failed to read output");
                let document: toml::Table = toml::from_str(&written).expect("Output is not TOML");
                assert!(document.contains_key("nodes"), "{}", demo_path.display());
                assert!(document.contains_key("edges"), "{}", demo_path.display());
            }
            Err(err) => failed_demos.push((demo_path.clone(), err)),
        }
    }

    if !failed_demos.is_empty() {
        eprintln!("\nDemos that failed:");
        for (path, err) in &failed_demos {
            eprintln!("  - {}: {}", path.display(), err);
        }
        panic!("{} demo(s) failed unexpectedly", failed_demos.len());
    }
}

#[test]
fn e2e_smoke_test_error_demos() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let error_demos = collect_demo_files("errors");

    assert!(!error_demos.is_empty(), "No error demos found in demos/errors/");

    let mut unexpectedly_succeeded = Vec::new();

    for demo_path in &error_demos {
        let output_path = temp_dir.path().join(format!(
            "error_{}.layout.toml",
            demo_path.file_stem().unwrap().to_string_lossy()
        ));

        if meshwork_cli::run(&args_for(demo_path, &output_path)).is_ok() {
            unexpectedly_succeeded.push(demo_path.clone());
        }
    }

    if !unexpectedly_succeeded.is_empty() {
        eprintln!("\nError demos that unexpectedly succeeded:");
        for path in &unexpectedly_succeeded {
            eprintln!("  - {}", path.display());
        }
        panic!(
            "{} error demo(s) succeeded unexpectedly",
            unexpectedly_succeeded.len()
        );
    }
}

#[test]
fn e2e_explicit_config_is_applied() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("config.toml");
    fs::write(&config_path, "[force]\nmax_steps = 0\n").expect("Failed to write config");
    let input = collect_demo_files("")
        .into_iter()
        .find(|path| path.ends_with("triangle.toml"))
        .expect("triangle demo is missing");
    let output_path = temp_dir.path().join("triangle.layout.toml");

    let mut args = args_for(&input, &output_path);
    args.config = Some(config_path.to_string_lossy().to_string());
    meshwork_cli::run(&args).expect("Failed to run with explicit config");

    let document: toml::Table =
        toml::from_str(&fs::read_to_string(&output_path).unwrap()).unwrap();
    assert_eq!(document["steps"].as_integer(), Some(0));
    assert_eq!(document["stable"].as_bool(), Some(false));
}

#[test]
fn e2e_missing_input_file() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let args = args_for(
        &temp_dir.path().join("absent.toml"),
        &temp_dir.path().join("out.toml"),
    );

    let result = meshwork_cli::run(&args);
    assert!(matches!(result, Err(meshwork_cli::CliError::MissingFile(_))));
}
