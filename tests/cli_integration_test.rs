//! End-to-end tests for the `toppingrank` binary.
//!
//! Every test runs inside its own temporary directory so that no
//! `.toppingrank.toml` from the developer's checkout leaks in.

use assert_cmd::prelude::*;
use pretty_assertions::assert_eq;
use serde_json::Value;
use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

const DATASET: &str = r#"[
  {"toppings": ["pepperoni"]},
  {"toppings": ["Bacon", "feta cheese"]},
  {"toppings": ["feta cheese", " bacon "]},
  {"toppings": ["pepperoni"]},
  {"toppings": ["PEPPERONI"]},
  {"toppings": null},
  {"toppings": ["ham", "pineapple"]}
]"#;

fn workspace() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("pizzas.json"), DATASET).unwrap();
    dir
}

fn toppingrank(dir: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_toppingrank"));
    cmd.current_dir(dir)
        .env_remove("TOPPINGRANK_URL")
        .env_remove("TOPPINGRANK_TOP")
        .env_remove("TOPPINGRANK_MIN_ORDERS")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1");
    cmd
}

fn rank_json(dir: &Path, extra: &[&str]) -> Value {
    let output = toppingrank(dir)
        .args(["rank", "--file", "pizzas.json", "--stdout", "json"])
        .args(extra)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    serde_json::from_slice(&output).expect("stdout is not valid JSON")
}

fn labels(rows: &Value) -> Vec<(String, u64)> {
    rows.as_array()
        .unwrap()
        .iter()
        .map(|row| {
            (
                row["Toppings"].as_str().unwrap().to_string(),
                row["Orders"].as_u64().unwrap(),
            )
        })
        .collect()
}

#[test]
fn ranks_combinations_as_json() {
    let dir = workspace();
    let rows = rank_json(dir.path(), &[]);

    assert_eq!(
        labels(&rows),
        vec![
            ("pepperoni".to_string(), 3),
            ("bacon,feta cheese".to_string(), 2),
            ("ham,pineapple".to_string(), 1),
        ]
    );
    assert_eq!(rows[0]["Rank"], 1);
    assert!(rows[0].get("Percent").is_none());
}

#[test]
fn percent_column_uses_all_orders() {
    let dir = workspace();
    let rows = rank_json(dir.path(), &["--percent"]);

    // 3 of 7 orders, the toppings-less order included
    assert_eq!(rows[0]["Percent"], "42.9%");
}

#[test]
fn singles_and_co_occurrence_modes() {
    let dir = workspace();

    let singles = rank_json(dir.path(), &["--singles"]);
    assert_eq!(
        labels(&singles),
        vec![
            ("pepperoni".to_string(), 3),
            ("bacon".to_string(), 2),
            ("feta cheese".to_string(), 2),
            ("ham".to_string(), 1),
            ("pineapple".to_string(), 1),
        ]
    );

    let with_bacon = rank_json(dir.path(), &["--with", "BACON", "--singles"]);
    assert_eq!(labels(&with_bacon), vec![("feta cheese".to_string(), 2)]);
}

#[test]
fn filters_and_pagination() {
    let dir = workspace();

    let rows = rank_json(dir.path(), &["--min-combo-size", "2", "--exclude-topping", "ham"]);
    assert_eq!(labels(&rows), vec![("bacon,feta cheese".to_string(), 2)]);

    let page = rank_json(dir.path(), &["--top", "1", "--offset", "1"]);
    assert_eq!(labels(&page), vec![("bacon,feta cheese".to_string(), 2)]);
    assert_eq!(page[0]["Rank"], 2);

    let ascending = rank_json(dir.path(), &["--sort", "asc", "--top", "1"]);
    assert_eq!(labels(&ascending), vec![("ham,pineapple".to_string(), 1)]);
}

#[test]
fn json_stats_wraps_results() {
    let dir = workspace();
    let doc = rank_json(dir.path(), &["--stats"]);

    assert_eq!(doc["Results"].as_array().unwrap().len(), 3);
    assert_eq!(doc["Results"][0]["Toppings"], "pepperoni");
    assert_eq!(doc["Stats"]["TotalOrders"], 7);
    assert_eq!(doc["Stats"]["UniqueToppings"], 5);
    assert_eq!(doc["Stats"]["MostPopularTopping"], "pepperoni");
    assert!(doc["Stats"].get("total_orders").is_none());
}

#[test]
fn csv_stdout_keeps_stats_on_stderr() {
    let dir = workspace();
    let output = toppingrank(dir.path())
        .args(["rank", "--file", "pizzas.json", "--stdout", "csv", "--stats"])
        .assert()
        .success()
        .get_output()
        .clone();

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(
        stdout,
        "Rank,Toppings,Orders\n1,\"pepperoni\",3\n2,\"bacon,feta cheese\",2\n3,\"ham,pineapple\",1\n"
    );
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("--- Dataset Statistics ---"));
    assert!(stderr.contains("Most popular:     pepperoni"));
}

#[test]
fn table_reports_empty_result() {
    let dir = workspace();
    let output = toppingrank(dir.path())
        .args(["rank", "--file", "pizzas.json", "--topping", "anchovies"])
        .assert()
        .success()
        .get_output()
        .clone();

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Toppings"));
    assert!(stdout.contains("No combinations match the specified filters."));
}

#[test]
fn exports_csv_and_json() {
    let dir = workspace();

    let output = toppingrank(dir.path())
        .args(["rank", "--file", "pizzas.json", "--export", "out.csv"])
        .assert()
        .success()
        .get_output()
        .clone();
    assert!(String::from_utf8(output.stdout)
        .unwrap()
        .contains("Results exported to: out.csv"));
    let csv = fs::read_to_string(dir.path().join("out.csv")).unwrap();
    assert!(csv.starts_with("Rank,Toppings,Orders\n1,\"pepperoni\",3\n"));

    toppingrank(dir.path())
        .args(["rank", "--file", "pizzas.json", "--export", "out.JSON", "--percent"])
        .assert()
        .success();
    let json: Value =
        serde_json::from_str(&fs::read_to_string(dir.path().join("out.JSON")).unwrap()).unwrap();
    assert_eq!(json.as_array().unwrap().len(), 3);
    assert_eq!(json[2]["Percent"], "14.3%");
}

#[test]
fn export_confirmation_keeps_json_stdout_parseable() {
    let dir = workspace();
    let output = toppingrank(dir.path())
        .args(["rank", "--file", "pizzas.json", "--stdout", "json", "--export", "out.csv"])
        .assert()
        .success()
        .get_output()
        .clone();

    let rows: Value = serde_json::from_slice(&output.stdout).expect("stdout is not valid JSON");
    assert_eq!(rows.as_array().unwrap().len(), 3);
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Results exported to: out.csv"));
    assert!(dir.path().join("out.csv").exists());
}

#[test]
fn missing_file_fails_with_context() {
    let dir = workspace();
    let output = toppingrank(dir.path())
        .args(["rank", "--file", "nope.json"])
        .assert()
        .failure()
        .get_output()
        .clone();

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Could not load orders from nope.json"));
}

#[test]
fn zero_top_is_rejected() {
    let dir = workspace();
    toppingrank(dir.path())
        .args(["rank", "--file", "pizzas.json", "--top", "0"])
        .assert()
        .failure();
}

#[test]
fn config_file_supplies_defaults() {
    let dir = workspace();
    fs::write(
        dir.path().join(".toppingrank.toml"),
        "[output]\ntop = 1\n\n[filters]\nmin_orders = 2\n",
    )
    .unwrap();

    let rows = rank_json(dir.path(), &[]);
    assert_eq!(labels(&rows), vec![("pepperoni".to_string(), 3)]);

    // Command-line flags win over the file
    let rows = rank_json(dir.path(), &["--top", "5", "--min-orders", "1"]);
    assert_eq!(rows.as_array().unwrap().len(), 3);
}

#[test]
fn environment_overrides_config_file() {
    let dir = workspace();
    fs::write(dir.path().join(".toppingrank.toml"), "[output]\ntop = 1\n").unwrap();

    let output = toppingrank(dir.path())
        .env("TOPPINGRANK_TOP", "2")
        .args(["rank", "--file", "pizzas.json", "--stdout", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let rows: Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(rows.as_array().unwrap().len(), 2);
}

#[test]
fn init_writes_config_once() {
    let dir = TempDir::new().unwrap();

    toppingrank(dir.path()).arg("init").assert().success();
    let written = fs::read_to_string(dir.path().join(".toppingrank.toml")).unwrap();
    assert!(written.contains("[output]"));

    toppingrank(dir.path()).arg("init").assert().failure();
    toppingrank(dir.path()).args(["init", "--force"]).assert().success();
}
