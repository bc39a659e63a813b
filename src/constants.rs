#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::path::PathBuf;

use lazy_static::lazy_static;

lazy_static! {
    /// Directory holding third-party jars, relative to the project root
    pub static ref LIB_DIR: PathBuf = PathBuf::from("lib");
    /// Terminal UI library the capstone project is compiled against
    pub static ref LANTERNA_JAR: PathBuf = LIB_DIR.join("lanterna-2.1.9.jar");
    /// Directory for source files
    pub static ref SOURCE_DIR: PathBuf = PathBuf::from("source");
    /// Source file handed to the compiler; javac follows its imports
    pub static ref ENTRY_FILE: PathBuf = SOURCE_DIR.join("Main.java");
    /// Platform specific separator character for javac paths
    pub static ref SEPARATOR: &'static str = if cfg!(windows) { ";" } else { ":" };
}

/// Path component that marks the project root
pub const PROJECT_NAME: &str = "capstone";

/// Class with the `main` method
pub const ENTRY_CLASS: &str = "Main";

/// Classpath entry standing for the project root itself
pub const ROOT_ENTRY: &str = ".";

/// System property that keeps AWT from opening a window
pub const HEADLESS_PROPERTY: &str = "-Djava.awt.headless=true";

/// Name of the Java compiler binary
pub const JAVAC: &str = "javac";

/// Name of the Java runtime binary
pub const JAVA: &str = "java";
