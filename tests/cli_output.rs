#![cfg(feature = "cli")]

use predicates::prelude::*;

#[test]
fn single_converts_raw_to_cooked() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("rawcook");
    cmd.args(["single", "250", "100", "--raw", "200"]);

    cmd.assert()
        .success()
        .stdout("200.0g raw -> 80.00g cooked\n");
}

#[test]
fn single_converts_cooked_to_raw() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("rawcook");
    cmd.args(["single", "250", "100", "--cooked", "12.5"]);

    cmd.assert()
        .success()
        .stdout("12.5g cooked -> 31.25g raw\n");
}

#[test]
fn multi_prints_one_line_per_ingredient_in_given_order() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("rawcook");
    cmd.args([
        "multi", "-i", "rice:300", "--ingredient", "beans:100", "800", "200",
    ]);

    cmd.assert()
        .success()
        .stdout("rice: 150.00g\nbeans: 50.00g\n");
}

#[test]
fn single_json_output() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("rawcook");
    cmd.args(["--json", "single", "250", "100", "--raw", "200"]);

    let out = cmd.assert().success().get_output().stdout.clone();
    let v: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(v["direction"], "raw_to_cooked");
    assert_eq!(v["converted"], 80.0);
    assert_eq!(v["raw_total"], 250.0);
}

#[test]
fn multi_json_output_keeps_order() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("rawcook");
    cmd.args(["multi", "-i", "b:1", "-i", "a:3", "40", "20", "--json"]);

    let out = cmd.assert().success().get_output().stdout.clone();
    let v: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(v["portion_weight"], 20.0);
    assert_eq!(v["ingredients"][0]["name"], "b");
    assert_eq!(v["ingredients"][0]["weight"], 5.0);
    assert_eq!(v["ingredients"][1]["name"], "a");
    assert_eq!(v["ingredients"][1]["weight"], 15.0);
}

#[test]
fn verbose_logs_go_to_stderr_only() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("rawcook");
    cmd.args(["-v", "single", "250", "100", "--raw", "200"]);

    cmd.assert()
        .success()
        .stdout("200.0g raw -> 80.00g cooked\n")
        .stderr(predicate::str::contains("converted portion"));
}
