//! # capstone-run
//!
//! Builds or runs the capstone project from anywhere inside its directory
//! tree. The project root is found by looking for a `capstone` component in
//! the current path; `javac` and `java` are then issued from that root with a
//! fixed classpath and entry point.

#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

/// Fixed layout of the capstone project
pub mod constants;
/// Build and run steps, and the dispatcher that issues them
pub mod dispatch;
/// Error types
pub mod error;
/// Command lines for javac and java
pub mod java;
/// Launching subprocesses
pub mod launch;
/// Locating the project root
pub mod root;

pub use dispatch::{
    Dispatcher,
    Flags,
    Report,
    RunMode,
    Step,
};
pub use error::{
    LaunchError,
    RootError,
};
pub use java::Invocation;
pub use launch::{
    Launcher,
    Outcome,
    SystemLauncher,
};
pub use root::ProjectRoot;
