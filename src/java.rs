use std::{
    fmt,
    path::{
        Path,
        PathBuf,
    },
};

use crate::{
    constants::*,
    dispatch::RunMode,
    root::ProjectRoot,
};

/// A program to launch, its arguments, and the directory to launch it from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// binary name, looked up on `PATH` when launched
    pub program: String,
    /// arguments in order, passed without a shell
    pub args:    Vec<String>,
    /// working directory of the child process
    pub cwd:     PathBuf,
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Joins classpath entries with the platform separator
pub fn classpath<P: AsRef<Path>>(entries: &[P]) -> String {
    entries
        .iter()
        .map(|p| p.as_ref().display().to_string())
        .collect::<Vec<String>>()
        .join(*SEPARATOR)
}

/// Compiles the entry file and everything it imports against the bundled jar.
pub fn build_invocation(root: &ProjectRoot) -> Invocation {
    Invocation {
        program: JAVAC.into(),
        args: vec![
            "-cp".into(),
            classpath(&[LANTERNA_JAR.as_path(), SOURCE_DIR.as_path()]),
            ENTRY_FILE.display().to_string(),
        ],
        cwd: root.path().to_path_buf(),
    }
}

/// Starts the entry class, headless in terminal mode.
pub fn run_invocation(root: &ProjectRoot, mode: RunMode) -> Invocation {
    let mut args = vec![];
    if mode == RunMode::Terminal {
        args.push(HEADLESS_PROPERTY.to_string());
    }
    args.push("-cp".into());
    args.push(classpath(&[
        Path::new(ROOT_ENTRY),
        LANTERNA_JAR.as_path(),
        SOURCE_DIR.as_path(),
    ]));
    args.push(ENTRY_CLASS.into());

    Invocation {
        program: JAVA.into(),
        args,
        cwd: root.path().to_path_buf(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn root() -> (tempfile::TempDir, ProjectRoot) {
        let dir = tempfile::tempdir().unwrap();
        let root = ProjectRoot::from_path(dir.path()).unwrap();
        (dir, root)
    }

    #[test]
    fn build_uses_javac_on_entry_file() {
        let (dir, root) = root();
        let inv = build_invocation(&root);
        assert_eq!(inv.program, "javac");
        assert_eq!(inv.cwd, dir.path());
        assert_eq!(inv.args[0], "-cp");
        assert_eq!(
            PathBuf::from(&inv.args[2]),
            PathBuf::from("source").join("Main.java")
        );
        assert_eq!(inv.args.len(), 3);
    }

    #[cfg(unix)]
    #[test]
    fn build_classpath_has_jar_and_sources() {
        let (_dir, root) = root();
        let inv = build_invocation(&root);
        assert_eq!(inv.args[1], "lib/lanterna-2.1.9.jar:source");
        assert_eq!(
            inv.to_string(),
            "javac -cp lib/lanterna-2.1.9.jar:source source/Main.java"
        );
    }

    #[cfg(unix)]
    #[test]
    fn terminal_run_is_headless() {
        let (_dir, root) = root();
        let inv = run_invocation(&root, RunMode::Terminal);
        assert_eq!(inv.program, "java");
        assert_eq!(
            inv.args,
            vec![
                "-Djava.awt.headless=true",
                "-cp",
                ".:lib/lanterna-2.1.9.jar:source",
                "Main"
            ]
        );
    }

    #[cfg(unix)]
    #[test]
    fn graphical_run_keeps_awt() {
        let (_dir, root) = root();
        let inv = run_invocation(&root, RunMode::Graphical);
        assert_eq!(
            inv.args,
            vec!["-cp", ".:lib/lanterna-2.1.9.jar:source", "Main"]
        );
    }

    #[test]
    fn runs_share_classpath_and_entry() {
        let (_dir, root) = root();
        let terminal = run_invocation(&root, RunMode::Terminal);
        let graphical = run_invocation(&root, RunMode::Graphical);
        assert_eq!(terminal.args[1..], graphical.args[..]);
        assert_eq!(terminal.cwd, graphical.cwd);
    }

    #[test]
    fn empty_classpath() {
        let entries: [&Path; 0] = [];
        assert_eq!(classpath(&entries), "");
    }
}
