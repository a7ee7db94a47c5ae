//! CLI command tests

use std::io::Write;

use clap::Parser;
use tempfile::NamedTempFile;

use crate::cli::{Cli, Commands};
use crate::commands;

fn budget_fixture() -> serde_json::Value {
    serde_json::json!({
        "currency": "CAD",
        "today": "2024-03-01",
        "balance_now": 2000.0,
        "income": {
            "payFrequency": "monthly",
            "netPayAmount": 5000.0,
            "nextPayDate": "2024-03-15"
        },
        "fixedExpenses": [
            {"name": "Rent", "amountMonthly": 2000.0, "enabled": true}
        ]
    })
}

fn write_fixture(value: &serde_json::Value) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", value).unwrap();
    file
}

// ========== Calc Command Tests ==========

#[test]
fn test_cmd_calc_reads_budget_file() {
    let file = write_fixture(&budget_fixture());
    let result = commands::cmd_calc(Some(file.path()), false);
    assert!(result.is_ok());
}

#[test]
fn test_cmd_calc_pretty_output() {
    let file = write_fixture(&budget_fixture());
    let result = commands::cmd_calc(Some(file.path()), true);
    assert!(result.is_ok());
}

#[test]
fn test_cmd_calc_missing_file_fails() {
    let result = commands::cmd_calc(Some(std::path::Path::new("/nonexistent/budget.json")), false);
    assert!(result.is_err());
}

#[test]
fn test_cmd_calc_rejects_malformed_json() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{{not json").unwrap();
    let result = commands::cmd_calc(Some(file.path()), false);
    assert!(result.is_err());
}

#[test]
fn test_cmd_calc_surfaces_engine_errors() {
    let mut fixture = budget_fixture();
    fixture["income"]["payFrequency"] = serde_json::json!("quarterly");
    let file = write_fixture(&fixture);

    let result = commands::cmd_calc(Some(file.path()), false);
    let err = result.unwrap_err();
    assert!(err.to_string().contains("Unknown pay frequency"));
}

// ========== Argument Parsing Tests ==========

#[test]
fn test_parse_calc_args() {
    let cli = Cli::try_parse_from(["budgetpilot", "calc", "--file", "budget.json", "--pretty"])
        .unwrap();
    match cli.command {
        Commands::Calc { file, pretty } => {
            assert_eq!(file.unwrap().to_str().unwrap(), "budget.json");
            assert!(pretty);
        }
        _ => panic!("expected calc subcommand"),
    }
}

#[test]
fn test_parse_serve_defaults() {
    let cli = Cli::try_parse_from(["budgetpilot", "serve"]).unwrap();
    match cli.command {
        Commands::Serve {
            port,
            host,
            cors_origin,
        } => {
            assert_eq!(port, 8000);
            assert_eq!(host, "127.0.0.1");
            assert!(cors_origin.is_empty());
        }
        _ => panic!("expected serve subcommand"),
    }
}
