
use std::fs;

use tempfile::tempdir;

use support_single::{run_stresstest, spawn_http_server, unreachable_url};

fn stdout_of(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn describe(output: &std::process::Output) -> String {
    format!(
        "stdout: {}\nstderr: {}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    )
}

#[test]
fn e2e_single_cli_basic() -> Result<(), String> {
    let (url, server) = spawn_http_server()?;

    let output = run_stresstest(["-u", url.as_str(), "-n", "20", "-c", "4"])?;
    if !output.status.success() {
        return Err(describe(&output));
    }

    let stdout = stdout_of(&output);
    for expected in [
        "Starting the load test for",
        "Total requests: 20",
        "Successful requests (HTTP 200): 20",
        "Requests per second:",
    ] {
        if !stdout.contains(expected) {
            return Err(format!("Missing '{}'\n{}", expected, describe(&output)));
        }
    }
    if stdout.contains("Network errors") {
        return Err(format!("Unexpected network errors\n{}", describe(&output)));
    }
    if server.served() != 20 {
        return Err(format!("Server saw {} requests", server.served()));
    }
    Ok(())
}

#[test]
fn e2e_single_json_output() -> Result<(), String> {
    let (url, _server) = spawn_http_server()?;

    let output = run_stresstest([
        "--url",
        url.as_str(),
        "--requests",
        "10",
        "--concurrency",
        "3",
        "--output-format",
        "json",
    ])?;
    if !output.status.success() {
        return Err(describe(&output));
    }

    let stdout = stdout_of(&output);
    let start = stdout
        .find('{')
        .ok_or_else(|| format!("No JSON in output\n{}", describe(&output)))?;
    let json: serde_json::Value = serde_json::from_str(stdout.get(start..).unwrap_or_default())
        .map_err(|err| format!("Invalid JSON: {}\n{}", err, describe(&output)))?;

    if json["total_requests"] != 10 || json["network_errors"] != 0 {
        return Err(format!("Unexpected totals: {}", json));
    }
    if json["status_counts"]["200"] != 10 {
        return Err(format!("Unexpected status counts: {}", json["status_counts"]));
    }
    Ok(())
}

#[test]
fn e2e_single_unreachable_target_still_succeeds() -> Result<(), String> {
    let url = unreachable_url()?;

    let output = run_stresstest(["-u", url.as_str(), "-n", "5", "-c", "2", "--timeout", "5s"])?;
    if !output.status.success() {
        return Err(describe(&output));
    }

    let stdout = stdout_of(&output);
    if !stdout.contains("Network errors: 5") {
        return Err(format!("Expected 5 network errors\n{}", describe(&output)));
    }
    if !stdout.contains("Successful requests (HTTP 200): 0") {
        return Err(format!("Expected no successes\n{}", describe(&output)));
    }
    Ok(())
}

#[test]
fn e2e_single_missing_url_fails() -> Result<(), String> {
    let output = run_stresstest(["-n", "5"])?;
    if output.status.success() {
        return Err(format!("Expected failure without a URL\n{}", describe(&output)));
    }
    Ok(())
}

#[test]
fn e2e_single_zero_requests() -> Result<(), String> {
    let (url, server) = spawn_http_server()?;

    let output = run_stresstest(["-u", url.as_str(), "-n", "0", "-c", "4"])?;
    if !output.status.success() {
        return Err(describe(&output));
    }
    let stdout = stdout_of(&output);
    if !stdout.contains("Requests per second: 0.00") {
        return Err(format!("Expected zero throughput\n{}", describe(&output)));
    }
    if server.served() != 0 {
        return Err(format!("Server saw {} requests", server.served()));
    }
    Ok(())
}

#[test]
fn e2e_single_config_file() -> Result<(), String> {
    let (url, server) = spawn_http_server()?;
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let path = dir.path().join("stresstest.toml");
    let content = format!("url = \"{}\"\nrequests = 6\nconcurrency = 4\n", url);
    fs::write(&path, content).map_err(|err| format!("write config failed: {}", err))?;

    let path_arg = path.to_string_lossy().into_owned();
    let output = run_stresstest(["--config", path_arg.as_str(), "-n", "8"])?;
    if !output.status.success() {
        return Err(describe(&output));
    }

    let stdout = stdout_of(&output);
    if !stdout.contains("Total requests: 8") {
        return Err(format!("CLI request count should win\n{}", describe(&output)));
    }
    if server.served() != 8 {
        return Err(format!("Server saw {} requests", server.served()));
    }
    Ok(())
}
