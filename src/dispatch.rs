use colored::Colorize;

use crate::{
    error::LaunchError,
    java::{
        build_invocation,
        run_invocation,
        Invocation,
    },
    launch::{
        Launcher,
        Outcome,
    },
    root::ProjectRoot,
};

/// The three switches accepted on the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Flags {
    /// compile before anything else
    pub build:     bool,
    /// run with a GUI
    pub graphical: bool,
    /// run from the terminal; wins over `graphical`
    pub terminal:  bool,
}

/// How the compiled program is started
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    /// headless, drawing in the terminal
    Terminal,
    /// with AWT available
    Graphical,
}

impl Flags {
    /// Picks the run mode, if any.
    pub fn run_mode(&self) -> Option<RunMode> {
        if self.terminal {
            Some(RunMode::Terminal)
        } else if self.graphical {
            Some(RunMode::Graphical)
        } else {
            None
        }
    }
}

/// One subprocess the dispatcher issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// compile with javac
    Build,
    /// start with java
    Run(RunMode),
}

impl Step {
    /// Line printed before the step is launched
    pub fn message(&self) -> &'static str {
        match self {
            Step::Build => "Building ...",
            Step::Run(RunMode::Terminal) => "Starting Terminal ...",
            Step::Run(RunMode::Graphical) => "Starting GUI ...",
        }
    }

    /// Command line for this step, issued from `root`
    pub fn invocation(&self, root: &ProjectRoot) -> Invocation {
        match *self {
            Step::Build => build_invocation(root),
            Step::Run(mode) => run_invocation(root, mode),
        }
    }
}

/// What happened to each launched step, in order.
#[derive(Debug, Default)]
pub struct Report {
    /// launched steps with their outcome
    pub steps: Vec<(Step, Result<Outcome, LaunchError>)>,
}

impl Report {
    /// Steps that were launched, without their outcome
    pub fn launched(&self) -> Vec<Step> {
        self.steps.iter().map(|(step, _)| *step).collect()
    }

    /// True if every launched step started and exited successfully
    pub fn all_succeeded(&self) -> bool {
        self.steps
            .iter()
            .all(|(_, res)| matches!(res, Ok(outcome) if outcome.success))
    }
}

/// Issues the build and run commands for a project root.
///
/// * `root`: directory every command is issued from
/// * `launcher`: runs the commands
pub struct Dispatcher<L: Launcher> {
    root:     ProjectRoot,
    launcher: L,
}

impl<L: Launcher> Dispatcher<L> {
    /// Returns a new dispatcher
    pub fn new(root: ProjectRoot, launcher: L) -> Self {
        Self { root, launcher }
    }

    /// Get a reference to the project root.
    pub fn root(&self) -> &ProjectRoot {
        &self.root
    }

    /// Get a reference to the launcher.
    pub fn launcher(&self) -> &L {
        &self.launcher
    }

    /// Steps `flags` ask for, build first.
    pub fn plan(flags: &Flags) -> Vec<Step> {
        let mut steps = vec![];
        if flags.build {
            steps.push(Step::Build);
        }
        if let Some(mode) = flags.run_mode() {
            steps.push(Step::Run(mode));
        }
        steps
    }

    /// Launches every planned step in order.
    ///
    /// A failed build does not stop the run; failures are reported, not
    /// returned.
    pub fn dispatch(&self, flags: &Flags) -> Report {
        let mut report = Report::default();

        for step in Self::plan(flags) {
            println!("{}", step.message());
            let invocation = step.invocation(&self.root);
            let res = self.launcher.launch(&invocation);

            match &res {
                Ok(outcome) if outcome.success => {
                    tracing::info!("`{}` exited successfully", invocation);
                }
                Ok(outcome) => {
                    let code = outcome
                        .code
                        .map(|c| c.to_string())
                        .unwrap_or_else(|| "none".into());
                    tracing::warn!("`{}` exited unsuccessfully (code {})", invocation, code);
                    println!("{}", "Exited unsuccessfully.".bright_red().bold());
                }
                Err(e) => {
                    tracing::warn!("Could not launch `{}`: {}", invocation, e);
                    println!(
                        "{}",
                        format!("Could not launch {}.", invocation.program)
                            .bright_red()
                            .bold()
                    );
                }
            }

            report.steps.push((step, res));
        }

        report
    }
}
