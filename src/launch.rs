use std::{
    path::PathBuf,
    process::{
        Command,
        ExitStatus,
        Stdio,
    },
};

use which::which;

use crate::{
    error::LaunchError,
    java::Invocation,
};

/// How a launched process ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    /// Exit code, `None` when the process was killed by a signal
    pub code: Option<i32>,
    /// Whether the process exited successfully
    pub success: bool,
}

impl Outcome {
    /// Outcome of a process that exited with `code`
    pub fn exited(code: i32) -> Self {
        Self {
            code: Some(code),
            success: code == 0,
        }
    }
}

impl From<ExitStatus> for Outcome {
    fn from(status: ExitStatus) -> Self {
        Self {
            code: status.code(),
            success: status.success(),
        }
    }
}

/// Something that can run an [`Invocation`] to completion.
pub trait Launcher {
    /// Runs `invocation` and blocks until it exits
    fn launch(&self, invocation: &Invocation) -> Result<Outcome, LaunchError>;
}

/// Launches real processes, sharing this process's terminal.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemLauncher;

/// Finds and returns the path to `tool` on `PATH`
pub fn tool_path(tool: &str) -> Result<PathBuf, LaunchError> {
    which(tool).map_err(|source| LaunchError::ToolNotFound {
        tool: tool.to_string(),
        source,
    })
}

impl Launcher for SystemLauncher {
    fn launch(&self, invocation: &Invocation) -> Result<Outcome, LaunchError> {
        let program = tool_path(&invocation.program)?;
        tracing::info!("Running `{}` in {}", invocation, invocation.cwd.display());

        let status = Command::new(program)
            .args(&invocation.args)
            .current_dir(&invocation.cwd)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|source| LaunchError::Spawn {
                tool: invocation.program.clone(),
                source,
            })?;

        Ok(status.into())
    }
}
