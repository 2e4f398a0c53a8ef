mod common;

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use common::write_resources;
use pt_text_clean::ResourceConfig;
use tempfile::TempDir;

const BIN: &str = env!("CARGO_BIN_EXE_pt-text-clean");

/// Binary invocation rooted in `workspace`, isolated from the caller's
/// environment.
fn command(workspace: &Path) -> Command {
    let mut cmd = Command::new(BIN);
    cmd.current_dir(workspace)
        .env_remove("PT_CLEAN_DICT_DIR")
        .env_remove("PT_CLEAN_OUTPUT_DIR")
        .env_remove("RUST_LOG");
    cmd
}

fn run(cmd: &mut Command) -> (Output, String, String) {
    let output = cmd.output().expect("spawn pt-text-clean");
    let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
    let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
    (output, stdout, stderr)
}

fn write_config(path: &Path, dict_dir: &Path) {
    let json = serde_json::json!({ "dict_dir": dict_dir });
    fs::write(path, json.to_string()).expect("write config file");
}

#[test]
fn dict_dir_flag_overrides_config_file() {
    let workspace = TempDir::new().expect("temp workspace");
    let config_path = workspace.path().join("resources.json");
    write_config(&config_path, Path::new("/from/json"));

    let resolved = ResourceConfig::resolve(Some(config_path.as_path()), Some(Path::new("/from/flag"))).unwrap();
    assert_eq!(resolved.dict_dir, Path::new("/from/flag"));

    let resolved = ResourceConfig::resolve(Some(config_path.as_path()), None).unwrap();
    assert_eq!(resolved.dict_dir, Path::new("/from/json"));
}

#[test]
fn dict_dir_flag_wins_over_config_in_binary() {
    let workspace = TempDir::new().expect("temp workspace");
    let dicts = workspace.path().join("dicts");
    write_resources(&dicts);
    let config_path = workspace.path().join("resources.json");
    write_config(&config_path, &workspace.path().join("absent"));
    fs::write(workspace.path().join("doril.txt"), "Casa azull").expect("write input");

    let (output, stdout, _) = run(command(workspace.path())
        .arg("--config")
        .arg(&config_path)
        .arg("--dict-dir")
        .arg(&dicts)
        .arg("doril.txt"));
    assert!(output.status.success(), "stdout: {stdout}");
    assert!(stdout.contains("Texto final processado salvo em:"));
    let saved = fs::read_to_string(workspace.path().join("processados/doril_processado.txt")).unwrap();
    assert_eq!(saved, "casa azul\n");

    // Without the flag the config's missing directory is used and loading fails.
    let (output, _, _) = run(command(workspace.path())
        .arg("--config")
        .arg(&config_path)
        .arg("doril.txt"));
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn missing_input_is_reported_and_the_rest_still_run() {
    let workspace = TempDir::new().expect("temp workspace");
    let dicts = workspace.path().join("dicts");
    write_resources(&dicts);
    let out_dir = workspace.path().join("saida");
    fs::write(workspace.path().join("doril.txt"), "voce casa").expect("write input");

    let (output, stdout, _) = run(command(workspace.path())
        .env("PT_CLEAN_DICT_DIR", &dicts)
        .env("PT_CLEAN_OUTPUT_DIR", &out_dir)
        .args(["no14011801.txt", "doril.txt"]));

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout.contains("Erro: Arquivo não encontrado em no14011801.txt"), "stdout: {stdout}");
    assert!(stdout.contains("Texto final processado salvo em:"));
    let saved = fs::read_to_string(out_dir.join("doril_processado.txt")).unwrap();
    assert_eq!(saved, "você casa\n");
    assert!(!out_dir.join("no14011801_processado.txt").exists());
}

#[test]
fn default_inputs_and_output_dir() {
    let workspace = TempDir::new().expect("temp workspace");
    let dicts = workspace.path().join("dicts");
    write_resources(&dicts);
    fs::write(workspace.path().join("doril.txt"), "casa").expect("write input");
    fs::write(workspace.path().join("no14011801.txt"), "azul").expect("write input");

    let (output, _, _) = run(command(workspace.path()).env("PT_CLEAN_DICT_DIR", &dicts));

    assert!(output.status.success());
    let out_dir = workspace.path().join("processados");
    assert_eq!(fs::read_to_string(out_dir.join("doril_processado.txt")).unwrap(), "casa\n");
    assert_eq!(fs::read_to_string(out_dir.join("no14011801_processado.txt")).unwrap(), "azul\n");
}

#[test]
fn non_portuguese_input_logs_a_warning() {
    let workspace = TempDir::new().expect("temp workspace");
    let dicts = workspace.path().join("dicts");
    write_resources(&dicts);
    fs::write(
        workspace.path().join("english.txt"),
        "The children walked to school every morning and came back home in the afternoon, \
         telling their parents about everything they had learned.",
    )
    .expect("write input");

    let (output, _, stderr) = run(command(workspace.path())
        .env("PT_CLEAN_DICT_DIR", &dicts)
        .arg("english.txt"));

    assert!(output.status.success());
    assert!(stderr.contains("input does not look like Portuguese"), "stderr: {stderr}");
}
