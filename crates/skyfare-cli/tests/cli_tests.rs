//! Integration tests for CLI commands: recording flights, soft-delete and
//! restore, and cheapest-route queries in text and JSON formats.

use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Temporary ledger database for one test.
struct TestEnv {
    _temp_dir: TempDir,
    db_path: PathBuf,
}

impl TestEnv {
    fn new() -> Self {
        let temp_dir = TempDir::new().expect("create temp dir");
        let db_path = temp_dir.path().join("flights.db");
        Self {
            _temp_dir: temp_dir,
            db_path,
        }
    }

    fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("skyfare-cli").expect("binary exists");
        cmd.args(["--db", self.db_path.to_str().unwrap()]);
        cmd
    }

    fn add_flight(&self, name: &str, origin: &str, destination: &str, cost: &str) {
        self.cmd()
            .args([
                "add",
                "--name",
                name,
                "--origin",
                origin,
                "--destination",
                destination,
                "--cost",
                cost,
            ])
            .assert()
            .success()
            .stdout(predicate::str::contains(format!("Added flight {name}")));
    }

    /// Extract the generated flight id from the `add` output.
    fn add_flight_returning_id(
        &self,
        name: &str,
        origin: &str,
        destination: &str,
        cost: &str,
    ) -> String {
        self.add_flight(name, origin, destination, cost);
        let output = self.cmd().args(["list", "--all"]).output().expect("list");
        let stdout = String::from_utf8(output.stdout).expect("utf8");
        let line = stdout
            .lines()
            .find(|line| line.contains(name))
            .expect("added flight listed");
        line.split_whitespace().next().expect("id column").to_string()
    }
}

#[test]
fn route_prefers_cheaper_connection_over_direct_flight() {
    let env = TestEnv::new();
    env.add_flight("SF100", "A", "B", "100");
    env.add_flight("SF200", "B", "C", "50");
    env.add_flight("SF300", "A", "C", "200");

    env.cmd()
        .args(["route", "--from", "A", "--to", "C"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cheapest route A -> C (2 legs)"))
        .stdout(predicate::str::contains("SF100 A -> B (100.00)"))
        .stdout(predicate::str::contains("SF200 B -> C (50.00)"))
        .stdout(predicate::str::contains("Total cost: 150.00"));
}

#[test]
fn route_json_output_is_machine_readable() {
    let env = TestEnv::new();
    env.add_flight("SF100", "A", "B", "80");

    let output = env
        .cmd()
        .args(["route", "--from", "A", "--to", "B", "--format", "json"])
        .output()
        .expect("run route");
    assert!(output.status.success());

    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout is valid json");
    assert_eq!(value["origin"], "A");
    assert_eq!(value["destination"], "B");
    assert_eq!(value["total_cost"], 80.0);
    assert_eq!(value["legs"][0]["flight_name"], "SF100");
}

#[test]
fn missing_route_reports_both_endpoints() {
    let env = TestEnv::new();
    env.add_flight("SF100", "A", "B", "10");

    env.cmd()
        .args(["route", "--from", "B", "--to", "A"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no route found between B and A"));
}

#[test]
fn degenerate_route_query_fails_as_not_found() {
    let env = TestEnv::new();
    env.add_flight("SF100", "A", "B", "10");
    env.add_flight("SF200", "B", "A", "10");

    env.cmd()
        .args(["route", "--from", "A", "--to", "A"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no route found between A and A"));
}

#[test]
fn blank_origin_is_a_validation_failure() {
    let env = TestEnv::new();
    env.add_flight("SF100", "A", "B", "10");

    env.cmd()
        .args(["route", "--from", " ", "--to", "B"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("airport code for origin is required"));
}

#[test]
fn negative_cost_is_rejected_on_add() {
    let env = TestEnv::new();

    env.cmd()
        .args([
            "add",
            "--name",
            "SF100",
            "--origin",
            "A",
            "--destination",
            "B",
            "--cost=-5",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("non-negative"));
}

#[test]
fn soft_deleted_flight_leaves_the_route_graph_until_restored() {
    let env = TestEnv::new();
    let id = env.add_flight_returning_id("SF100", "A", "B", "10");

    env.cmd().args(["delete", &id]).assert().success();
    env.cmd()
        .args(["route", "--from", "A", "--to", "B"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no route found"));

    env.cmd()
        .args(["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No flights recorded."));
    env.cmd()
        .args(["list", "--all"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[deleted]"));

    env.cmd().args(["restore", &id]).assert().success();
    env.cmd()
        .args(["route", "--from", "A", "--to", "B"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total cost: 10.00"));
}

#[test]
fn restoring_an_active_flight_fails() {
    let env = TestEnv::new();
    let id = env.add_flight_returning_id("SF100", "A", "B", "10");

    env.cmd()
        .args(["restore", &id])
        .assert()
        .failure()
        .stderr(predicate::str::contains("is not deleted"));
}
