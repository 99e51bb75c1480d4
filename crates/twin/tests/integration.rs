//! End-to-end CLI tests for the `twin` binary.
//!
//! Each test runs the binary as a subprocess via `assert_cmd`, in its own
//! temporary directory so no stray `.twin/` configuration is picked up.

use assert_cmd::Command;
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use tempfile::TempDir;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// A `twin` command running in `dir` with a clean environment.
fn twin(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("twin").unwrap();
    cmd.current_dir(dir.path())
        .env_remove("TWIN_DIR")
        .env_remove("TWIN_LOCALE")
        .env_remove("TWIN_CURRENCY")
        .env_remove("TWIN_CATALOG")
        .env_remove("TWIN_LINE_IDS")
        .env_remove("CLICOLOR_FORCE")
        .env("NO_COLOR", "1");
    cmd
}

fn json_output(cmd: &mut Command) -> serde_json::Value {
    let output = cmd.output().unwrap();
    assert!(
        output.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).unwrap()
}

fn write_config(dir: &TempDir, yaml: &str) {
    let twin_dir = dir.path().join(".twin");
    std::fs::create_dir_all(&twin_dir).unwrap();
    std::fs::write(twin_dir.join("config.yaml"), yaml).unwrap();
}

// ---------------------------------------------------------------------------
// Catalog views
// ---------------------------------------------------------------------------

#[test]
fn categories_json_lists_every_tab() {
    let tmp = TempDir::new().unwrap();
    let json = json_output(twin(&tmp).args(["categories", "--json"]));
    let tabs = json.as_array().unwrap();
    assert_eq!(tabs.len(), 11);
    assert_eq!(tabs[0]["slug"], "menus-midi");
    assert_eq!(tabs[2]["slug"], "tacos");
    assert_eq!(tabs[2]["items"], 3);
}

#[test]
fn menu_shows_prices_in_french_format() {
    let tmp = TempDir::new().unwrap();
    twin(&tmp)
        .args(["menu", "--category", "tacos"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Twin Pizza"))
        .stdout(predicate::str::contains("tacos-solo"))
        .stdout(predicate::str::contains("7,50 €"))
        .stdout(predicate::str::contains("meat > sauce > quantity"));
}

#[test]
fn menu_rejects_unknown_category() {
    let tmp = TempDir::new().unwrap();
    twin(&tmp)
        .args(["menu", "--category", "desserts"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown category 'desserts'"));
}

#[test]
fn profile_json_for_souffles() {
    let tmp = TempDir::new().unwrap();
    let json = json_output(twin(&tmp).args(["profile", "souffles", "--json"]));
    assert_eq!(json["category"], "souffles");
    assert_eq!(
        json["steps"],
        serde_json::json!(["meat", "sauce", "garnish", "quantity"])
    );
    assert_eq!(json["sauce_multi"], true);
    assert_eq!(json["garnish_set"], "souffle");
}

#[test]
fn profile_of_unknown_category_is_quantity_only() {
    let tmp = TempDir::new().unwrap();
    let json = json_output(twin(&tmp).args(["profile", "desserts", "--json"]));
    assert_eq!(json["steps"], serde_json::json!(["quantity"]));
}

// ---------------------------------------------------------------------------
// Quote
// ---------------------------------------------------------------------------

#[test]
fn quote_tacos() {
    let tmp = TempDir::new().unwrap();
    let json = json_output(twin(&tmp).args([
        "quote",
        "tacos-solo",
        "--meat",
        "Poulet",
        "--sauce",
        "Algerienne",
        "--qty",
        "2",
        "--json",
    ]));
    assert_eq!(json["item"], "tacos-solo");
    assert_eq!(json["quantity"], 2);
    assert_eq!(json["meats"], serde_json::json!(["Poulet"]));
    assert_eq!(json["price"], "15.00");
    assert_eq!(json["id"], "line-1");
}

#[test]
fn quote_human_output() {
    let tmp = TempDir::new().unwrap();
    twin(&tmp)
        .args(["quote", "souffle-solo", "--meat", "Tenders", "--sauce", "Ketchup"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 x Soufflé Solo"))
        .stdout(predicate::str::contains("Tenders · Ketchup"))
        .stdout(predicate::str::contains("7,50 €"));
}

#[test]
fn quote_names_blocking_step() {
    let tmp = TempDir::new().unwrap();
    twin(&tmp)
        .args(["quote", "midi-senior", "--drink", "Coca 33cl"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error:"))
        .stderr(predicate::str::contains("pizza-choice"));
}

#[test]
fn quote_error_as_json() {
    let tmp = TempDir::new().unwrap();
    let output = twin(&tmp)
        .args(["quote", "kebab", "--json"])
        .output()
        .unwrap();
    assert!(!output.status.success());
    let err: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert!(err["error"].as_str().unwrap().contains("kebab"));
}

// ---------------------------------------------------------------------------
// Interactive order
// ---------------------------------------------------------------------------

#[test]
fn order_script_json_cart() {
    let tmp = TempDir::new().unwrap();
    let script = "\
add tacos-double
Poulet
Merguez
n
Biggy
n
+
n
add fries
n
done
";
    let json = json_output(twin(&tmp).args(["order", "--json"]).write_stdin(script));
    let lines = json["lines"].as_array().unwrap();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0]["meats"], serde_json::json!(["Poulet", "Merguez"]));
    assert_eq!(lines[0]["price"], "18.00");
    assert_eq!(lines[1]["id"], "line-2");
    assert_eq!(json["item_count"], 3);
    assert_eq!(json["total"], "21.00");
}

#[test]
fn order_script_human() {
    let tmp = TempDir::new().unwrap();
    twin(&tmp)
        .arg("order")
        .write_stdin("add drink-coca\nn\ntotal\nremove line-7\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("added line-1  1 x Boisson 33cl"))
        .stdout(predicate::str::contains("Total: 2,00 €"))
        .stdout(predicate::str::contains("no line 'line-7'"));
}

#[test]
fn order_cancelled_wizard_leaves_cart_empty() {
    let tmp = TempDir::new().unwrap();
    let json = json_output(
        twin(&tmp)
            .args(["order", "--json"])
            .write_stdin("add mlawi\nb\nadd makloub\nx\n"),
    );
    assert_eq!(json["lines"], serde_json::json!([]));
    assert_eq!(json["total"], "0.00");
}

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

#[test]
fn config_file_changes_locale() {
    let tmp = TempDir::new().unwrap();
    write_config(&tmp, "locale: en-US\nrestaurant: Twin Pizza Rouen\n");
    twin(&tmp)
        .args(["menu", "--category", "fries"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Twin Pizza Rouen"))
        .stdout(predicate::str::contains("€3.00"));
}

#[test]
fn config_found_from_subdirectory() {
    let tmp = TempDir::new().unwrap();
    write_config(&tmp, "line-id-prefix: cmd\n");
    let sub = tmp.path().join("a").join("b");
    std::fs::create_dir_all(&sub).unwrap();

    let mut cmd = twin(&tmp);
    cmd.current_dir(&sub)
        .args(["quote", "fries", "--json"]);
    let json = json_output(&mut cmd);
    assert_eq!(json["id"], "cmd-1");
}

#[test]
fn env_overrides_config_file() {
    let tmp = TempDir::new().unwrap();
    write_config(&tmp, "locale: en-US\n");
    twin(&tmp)
        .env("TWIN_LOCALE", "fr-FR")
        .args(["quote", "fries"])
        .assert()
        .success()
        .stdout(predicate::str::contains("3,00 €"));
}

#[test]
fn hash_line_ids() {
    let tmp = TempDir::new().unwrap();
    write_config(&tmp, "line-ids: hash\n");
    let json = json_output(twin(&tmp).args(["quote", "fries", "--json"]));
    let id = json["id"].as_str().unwrap();
    assert!(id.starts_with("line-"), "{id}");
    assert_eq!(id.len(), "line-".len() + 6);
}

#[test]
fn invalid_config_is_reported() {
    let tmp = TempDir::new().unwrap();
    write_config(&tmp, "line-ids: random\n");
    twin(&tmp)
        .arg("categories")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load configuration"));
}

#[test]
fn catalog_flag_loads_custom_menu() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("menu.yaml");
    std::fs::write(
        &path,
        "\
items:
  - id: tiramisu
    name: Tiramisu
    category: desserts
    base_price: 4.5
",
    )
    .unwrap();

    let json = json_output(twin(&tmp).args([
        "--catalog",
        path.to_str().unwrap(),
        "quote",
        "tiramisu",
        "--qty",
        "2",
        "--json",
    ]));
    assert_eq!(json["category"], "desserts");
    assert_eq!(json["price"], "9.00");
}

#[test]
fn invalid_catalog_fails() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("menu.json");
    std::fs::write(
        &path,
        r#"{"items":[{"id":"t","name":"Tacos","category":"tacos","base_price":7}]}"#,
    )
    .unwrap();

    twin(&tmp)
        .args(["--catalog", path.to_str().unwrap(), "categories"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid catalog"));
}

// ---------------------------------------------------------------------------
// Misc
// ---------------------------------------------------------------------------

#[test]
fn version_and_completion() {
    let tmp = TempDir::new().unwrap();
    twin(&tmp)
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("twin version"));
    twin(&tmp)
        .args(["completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("twin"));
}

#[test]
fn verbose_logs_to_stderr() {
    let tmp = TempDir::new().unwrap();
    twin(&tmp)
        .args(["-v", "quote", "fries"])
        .assert()
        .success()
        .stderr(predicate::str::contains("wizard: confirm"));
}
