use std::path::PathBuf;
use std::process::{Command, Output};

fn pdegym(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_pdegym"))
        .args(args)
        .output()
        .expect("failed to spawn pdegym")
}

fn sample_config() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("configs/burgers.json")
}

fn stdout_json(output: &Output) -> serde_json::Value {
    assert!(
        output.status.success(),
        "pdegym failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("stdout is json")
}

#[test]
fn params_prints_flat_dictionary() {
    let json = stdout_json(&pdegym(&["params", "--seed", "3"]));
    assert_eq!(json["id"], "burgers");
    assert_eq!(json["seed"], 3);
    assert_eq!(json["n_state"], 256);
    assert_eq!(json["diffusivity_constant"], 0.001);
}

#[test]
fn operators_report_is_finite_for_sample_config() {
    let config = sample_config();
    let json = stdout_json(&pdegym(&["operators", "--config", config.to_str().unwrap()]));
    assert_eq!(json["init_mode"], "fixed_pulse");
    assert_eq!(json["n_modes"], 129);
    assert_eq!(json["oversampled_len"], 384);
    let rhs = json["rhs_max_abs"].as_f64().unwrap();
    let advection = json["advection_l2"].as_f64().unwrap();
    assert!(rhs.is_finite() && rhs > 0.0);
    assert!(advection.is_finite() && advection > 0.0);
    assert_eq!(json["projected_target"].as_array().unwrap().len(), 10);
}

#[test]
fn init_mode_flag_overrides_config() {
    let config = sample_config();
    let json = stdout_json(&pdegym(&[
        "operators",
        "--config",
        config.to_str().unwrap(),
        "--init-mode",
        "random_uniform",
    ]));
    assert_eq!(json["init_mode"], "random_uniform");
}

#[test]
fn invalid_config_exits_with_error() {
    let dir = std::env::temp_dir().join(format!("pdegym-cli-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("bad.json");
    std::fs::write(&path, r#"{"diffusivity_constant": -1.0}"#).unwrap();

    let output = pdegym(&["params", "--config", path.to_str().unwrap()]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("diffusivity_constant"));
}
