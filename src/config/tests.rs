use super::{apply_config, load_config_file, types::ConfigFile};
use clap::{CommandFactory, FromArgMatches};
use std::time::Duration;
use tempfile::tempdir;

use crate::args::{OutputFormat, TesterArgs};

fn parse_with_matches(argv: &[&str]) -> Result<(TesterArgs, clap::ArgMatches), String> {
    let matches = TesterArgs::command()
        .try_get_matches_from(argv)
        .map_err(|err| format!("parse failed: {}", err))?;
    let args = TesterArgs::from_arg_matches(&matches)
        .map_err(|err| format!("from_arg_matches failed: {}", err))?;
    Ok((args, matches))
}

#[test]
fn parse_toml_config() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let path = dir.path().join("stresstest.toml");
    let content = r#"
url = "http://localhost:3000"
requests = 250
concurrency = 25
timeout = "5s"
output_format = "json"
"#;
    std::fs::write(&path, content).map_err(|err| format!("write failed: {}", err))?;

    let config = load_config_file(&path).map_err(|err| err.to_string())?;
    if config.url.as_deref() != Some("http://localhost:3000") {
        return Err("Unexpected url".to_owned());
    }
    if config.requests != Some(250) {
        return Err("Unexpected requests".to_owned());
    }
    if config.concurrency != Some(25) {
        return Err("Unexpected concurrency".to_owned());
    }
    let timeout = match config.timeout.as_ref() {
        Some(timeout) => timeout.to_duration().map_err(|err| err.to_string())?,
        None => return Err("Expected timeout".to_owned()),
    };
    if timeout != Duration::from_secs(5) {
        return Err(format!("Unexpected timeout: {:?}", timeout));
    }
    if config.output_format != Some(OutputFormat::Json) {
        return Err("Unexpected output_format".to_owned());
    }
    Ok(())
}

#[test]
fn parse_json_config_with_numeric_timeout() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let path = dir.path().join("stresstest.json");
    let content = r#"{ "url": "http://localhost:3000", "timeout": 12 }"#;
    std::fs::write(&path, content).map_err(|err| format!("write failed: {}", err))?;

    let config = load_config_file(&path).map_err(|err| err.to_string())?;
    let timeout = match config.timeout.as_ref() {
        Some(timeout) => timeout.to_duration().map_err(|err| err.to_string())?,
        None => return Err("Expected timeout".to_owned()),
    };
    if timeout != Duration::from_secs(12) {
        return Err(format!("Unexpected timeout: {:?}", timeout));
    }
    Ok(())
}

#[test]
fn config_rejects_unknown_extension() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let path = dir.path().join("stresstest.yaml");
    std::fs::write(&path, "url: x").map_err(|err| format!("write failed: {}", err))?;
    if load_config_file(&path).is_ok() {
        return Err("Expected unsupported extension error".to_owned());
    }
    Ok(())
}

#[test]
fn config_rejects_unknown_fields() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let path = dir.path().join("stresstest.toml");
    std::fs::write(&path, "rate = 10\n").map_err(|err| format!("write failed: {}", err))?;
    if load_config_file(&path).is_ok() {
        return Err("Expected unknown field error".to_owned());
    }
    Ok(())
}

#[test]
fn apply_config_fills_unset_flags() -> Result<(), String> {
    let (mut args, matches) = parse_with_matches(&["stresstest"])?;
    let config = ConfigFile {
        url: Some("http://localhost:9000".to_owned()),
        requests: Some(40),
        concurrency: Some(4),
        timeout: Some(super::types::DurationValue::Text("250ms".to_owned())),
        output_format: Some(OutputFormat::Json),
        verbose: Some(true),
        no_color: None,
    };

    apply_config(&mut args, &matches, &config).map_err(|err| err.to_string())?;

    if args.url.as_deref() != Some("http://localhost:9000") {
        return Err("Unexpected url".to_owned());
    }
    if args.requests != 40 || args.concurrency.get() != 4 {
        return Err("Unexpected request split".to_owned());
    }
    if args.request_timeout != Duration::from_millis(250) {
        return Err("Unexpected timeout".to_owned());
    }
    if args.output_format != OutputFormat::Json || !args.verbose {
        return Err("Unexpected output flags".to_owned());
    }
    Ok(())
}

#[test]
fn apply_config_keeps_cli_values() -> Result<(), String> {
    let (mut args, matches) =
        parse_with_matches(&["stresstest", "-u", "http://cli", "-n", "7", "-c", "2"])?;
    let config = ConfigFile {
        url: Some("http://config".to_owned()),
        requests: Some(500),
        concurrency: Some(50),
        ..ConfigFile::default()
    };

    apply_config(&mut args, &matches, &config).map_err(|err| err.to_string())?;

    if args.url.as_deref() != Some("http://cli") {
        return Err("CLI url should win".to_owned());
    }
    if args.requests != 7 || args.concurrency.get() != 2 {
        return Err("CLI counts should win".to_owned());
    }
    Ok(())
}

#[test]
fn apply_config_rejects_zero_concurrency() -> Result<(), String> {
    let (mut args, matches) = parse_with_matches(&["stresstest"])?;
    let config = ConfigFile {
        concurrency: Some(0),
        ..ConfigFile::default()
    };
    if apply_config(&mut args, &matches, &config).is_ok() {
        return Err("Expected zero concurrency to be rejected".to_owned());
    }
    Ok(())
}
