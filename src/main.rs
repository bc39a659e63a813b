//! # capstone-run
//!
//! Build or run the capstone project.
//!
//! Run it from the project root or any directory below it:
//!
//! * `capstone-run -b` compiles `source/Main.java`
//! * `capstone-run -t` starts the game in the terminal
//! * `capstone-run -g` starts the game with a GUI
//!
//! `-b` can be combined with either run flag; `-t` wins over `-g`.

#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use anyhow::{
    Context,
    Result,
};
use bpaf::*;
use capstone_run::{
    constants::PROJECT_NAME,
    Dispatcher,
    Flags,
    ProjectRoot,
    SystemLauncher,
};

/// Command line parser for the three switches
fn options() -> OptionParser<Flags> {
    let build = short('b')
        .long("build")
        .help("build the project")
        .switch();

    let graphical = short('g')
        .long("graphical")
        .help("run the project with a GUI, if possible.")
        .switch();

    let terminal = short('t')
        .long("terminal")
        .help("run the project from the terminal, if possible.")
        .switch();

    construct!(Flags {
        build,
        graphical,
        terminal
    })
    .to_options()
    .descr("Build or run the capstone project")
}

fn main() -> Result<()> {
    let flags = options().run();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_max_level(tracing::Level::INFO)
        .init();

    let root = ProjectRoot::discover()
        .with_context(|| format!("Cannot find path to {} root!", PROJECT_NAME))?;

    let report = Dispatcher::new(root, SystemLauncher).dispatch(&flags);
    if !report.all_succeeded() {
        tracing::info!("Some steps did not finish successfully, see output above");
    }

    Ok(())
}
