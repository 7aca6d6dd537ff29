//! CLI integration tests for the summary command orchestration.
//!
//! Tests cover:
//! - Config parsing (load_config, build_data_port)
//! - Summary pipeline over a CSV fixture directory
//! - Exit codes for bad periods, unknown tickers and missing data
//! - Catalog listing

use oreboard::adapters::file_config_adapter::FileConfigAdapter;
use oreboard::cli;
use oreboard::domain::error::OreboardError;
use oreboard::ports::config_port::ConfigPort;
use std::io::Write;
use std::path::{Path, PathBuf};

fn write_temp_ini(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

fn write_stock_csv(dir: &Path, ticker: &str, rows: &[(&str, f64)]) {
    let mut content = String::from("date,open,high,low,close,volume\n");
    for (date, close) in rows {
        content.push_str(&format!(
            "{},{:.1},{:.1},{:.1},{:.1},50000\n",
            date,
            close - 1.0,
            close + 1.0,
            close - 2.0,
            close
        ));
    }
    std::fs::write(dir.join(format!("{}.csv", ticker)), content).unwrap();
}

fn csv_config(dir: &Path) -> tempfile::NamedTempFile {
    write_temp_ini(&format!(
        "[data]\nsource = csv\ncsv_dir = {}\n",
        dir.display()
    ))
}

mod config_loading {
    use super::*;

    #[test]
    fn load_config_reads_ini_from_disk() {
        let file = write_temp_ini("[web]\nlisten = 0.0.0.0:8080\n\n[data]\nsource = yahoo\n");
        let path = PathBuf::from(file.path());

        let adapter = cli::load_config(&path).unwrap();

        assert_eq!(
            adapter.get_string("web", "listen"),
            Some("0.0.0.0:8080".to_string())
        );
        assert_eq!(
            adapter.get_string("data", "source"),
            Some("yahoo".to_string())
        );
    }

    #[test]
    fn load_config_missing_file_fails() {
        let path = PathBuf::from("/nonexistent/path/oreboard.ini");
        assert!(cli::load_config(&path).is_err());
    }
}

mod data_port_config {
    use super::*;

    #[test]
    fn default_source_is_yahoo() {
        let adapter = FileConfigAdapter::from_string("[data]\n").unwrap();
        assert!(cli::build_data_port(&adapter).is_ok());
    }

    #[test]
    fn csv_source_requires_csv_dir() {
        let adapter = FileConfigAdapter::from_string("[data]\nsource = csv\n").unwrap();
        let result = cli::build_data_port(&adapter);
        assert!(
            matches!(result, Err(OreboardError::ConfigMissing { key, .. }) if key == "csv_dir")
        );
    }

    #[test]
    fn csv_source_with_dir_builds() {
        let adapter = FileConfigAdapter::from_string(
            "[data]\nsource = csv\ncsv_dir = /var/lib/oreboard/data\n",
        )
        .unwrap();
        assert!(cli::build_data_port(&adapter).is_ok());
    }

    #[test]
    fn unknown_source_is_rejected() {
        let adapter = FileConfigAdapter::from_string("[data]\nsource = sqlite\n").unwrap();
        let result = cli::build_data_port(&adapter);
        assert!(matches!(result, Err(OreboardError::ConfigInvalid { key, .. }) if key == "source"));
    }

    #[test]
    fn non_positive_timeout_is_rejected() {
        let adapter = FileConfigAdapter::from_string("[data]\ntimeout_secs = 0\n").unwrap();
        let result = cli::build_data_port(&adapter);
        assert!(
            matches!(result, Err(OreboardError::ConfigInvalid { key, .. }) if key == "timeout_secs")
        );
    }
}

mod summary_pipeline {
    use super::*;

    #[test]
    fn summary_over_csv_fixture_succeeds() {
        let dir = tempfile::TempDir::new().unwrap();
        write_stock_csv(
            dir.path(),
            "BHP.AX",
            &[("2024-01-15", 100.0), ("2024-01-16", 110.0)],
        );
        let ini = csv_config(dir.path());
        let path = PathBuf::from(ini.path());

        let exit_code = cli::run_summary(Some("BHP.AX"), Some("1y"), Some(&path));

        let report = format!("{exit_code:?}");
        assert!(report.contains("0"), "expected success, got: {report}");
    }

    #[test]
    fn summary_continues_past_missing_instruments() {
        let dir = tempfile::TempDir::new().unwrap();
        write_stock_csv(
            dir.path(),
            "BHP.AX",
            &[("2024-01-15", 100.0), ("2024-01-16", 110.0)],
        );
        let ini = csv_config(dir.path());
        let path = PathBuf::from(ini.path());

        let exit_code = cli::run_summary(Some("BHP.AX,RIO.AX"), None, Some(&path));

        let report = format!("{exit_code:?}");
        assert!(report.contains("0"), "expected success, got: {report}");
    }

    #[test]
    fn summary_with_no_displayable_data_exits_5() {
        let dir = tempfile::TempDir::new().unwrap();
        let ini = csv_config(dir.path());
        let path = PathBuf::from(ini.path());

        let exit_code = cli::run_summary(Some("BHP.AX"), None, Some(&path));

        let report = format!("{exit_code:?}");
        assert!(report.contains("5"), "expected no-data exit, got: {report}");
        assert!(!report.contains("0"), "expected failure, got: {report}");
    }

    #[test]
    fn summary_invalid_period_exits_4() {
        let exit_code = cli::run_summary(Some("BHP.AX"), Some("14d"), None);

        let report = format!("{exit_code:?}");
        assert!(report.contains("4"), "expected period exit, got: {report}");
        assert!(!report.contains("0"), "expected failure, got: {report}");
    }

    #[test]
    fn summary_only_unknown_tickers_exits_2() {
        let exit_code = cli::run_summary(Some("ZZZ.AX,QQQ.AX"), None, None);

        let report = format!("{exit_code:?}");
        assert!(report.contains("2"), "expected config exit, got: {report}");
        assert!(!report.contains("0"), "expected failure, got: {report}");
    }

    #[test]
    fn summary_csv_source_without_dir_exits_2() {
        let ini = write_temp_ini("[data]\nsource = csv\n");
        let path = PathBuf::from(ini.path());

        let exit_code = cli::run_summary(Some("BHP.AX"), None, Some(&path));

        let report = format!("{exit_code:?}");
        assert!(report.contains("2"), "expected config exit, got: {report}");
        assert!(!report.contains("0"), "expected failure, got: {report}");
    }
}

mod catalog_listing {
    use super::*;

    #[test]
    fn list_instruments_succeeds() {
        let exit_code = cli::run_list_instruments();
        let report = format!("{exit_code:?}");
        assert!(report.contains("0"), "expected success, got: {report}");
    }
}
