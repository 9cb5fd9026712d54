use anyhow::{Context, Result, bail};
use serde_json::Value;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};
use tempfile::NamedTempFile;

pub fn edufinder_binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_edufinder"))
}

/// Command for the binary with ambient configuration cleared.
pub fn edufinder() -> Command {
    let mut cmd = Command::new(edufinder_binary());
    cmd.env_remove("EDUFINDER_CATALOG")
        .env_remove("EDUFINDER_LOG")
        .env_remove("RUST_LOG");
    cmd
}

pub fn run_command(mut cmd: Command) -> Result<Output> {
    let output = cmd
        .output()
        .with_context(|| format!("failed to run command: {:?}", cmd))?;
    if output.status.success() {
        Ok(output)
    } else {
        bail!(
            "command {:?} failed: status {:?}\nstdout: {}\nstderr: {}",
            cmd,
            output.status.code(),
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        )
    }
}

/// Run a command that is expected to fail and return its stderr.
pub fn run_failing_command(mut cmd: Command) -> Result<String> {
    let output = cmd
        .output()
        .with_context(|| format!("failed to run command: {:?}", cmd))?;
    if output.status.success() {
        bail!(
            "command {:?} unexpectedly succeeded\nstdout: {}",
            cmd,
            String::from_utf8_lossy(&output.stdout)
        );
    }
    Ok(String::from_utf8_lossy(&output.stderr).into_owned())
}

pub fn run_with_stdin(mut cmd: Command, input: &str) -> Result<Output> {
    cmd.stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());
    let mut child = cmd.spawn().context("failed to spawn command")?;
    child
        .stdin
        .take()
        .context("stdin not captured")?
        .write_all(input.as_bytes())?;
    let output = child.wait_with_output()?;
    if !output.status.success() {
        bail!(
            "interactive command failed: status {:?}\nstderr: {}",
            output.status.code(),
            String::from_utf8_lossy(&output.stderr)
        );
    }
    Ok(output)
}

pub fn write_catalog(value: &Value) -> Result<NamedTempFile> {
    write_catalog_text(&serde_json::to_string(value)?)
}

pub fn write_catalog_text(text: &str) -> Result<NamedTempFile> {
    let mut file = NamedTempFile::new().context("failed to allocate catalog file")?;
    file.write_all(text.as_bytes())?;
    file.flush()?;
    Ok(file)
}

pub fn stdout_text(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}
