use std::path::PathBuf;

use thiserror::Error;

/// Reasons the project root could not be resolved.
#[derive(Debug, Error)]
pub enum RootError {
    /// No component of the path is the project name
    #[error("no `{name}` directory in {}", .cwd.display())]
    NotFound {
        /// path that was searched
        cwd: PathBuf,
        /// component that was looked for
        name: String,
    },
    /// Root resolution only works on absolute paths
    #[error("{} is not an absolute path", .0.display())]
    NotAbsolute(PathBuf),
    /// The resolved root is missing or is not a directory
    #[error("{} is not an accessible directory", .0.display())]
    Inaccessible(PathBuf),
    /// The process working directory could not be read
    #[error("could not read the current directory")]
    CurrentDir(#[source] std::io::Error),
}

/// Reasons a subprocess could not be started or waited on.
#[derive(Debug, Error)]
pub enum LaunchError {
    /// The tool is not on `PATH`
    #[error("cannot find `{tool}` on path")]
    ToolNotFound {
        /// binary that was looked up
        tool: String,
        /// lookup failure
        #[source]
        source: which::Error,
    },
    /// Spawning or waiting on the child failed
    #[error("failed to run `{tool}`")]
    Spawn {
        /// binary that was started
        tool: String,
        /// I/O failure reported by the OS
        #[source]
        source: std::io::Error,
    },
}
