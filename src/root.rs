use std::path::{
    Path,
    PathBuf,
};

use crate::{
    constants::PROJECT_NAME,
    error::RootError,
};

/// Returns the prefix of `cwd` ending at the last component named `name`.
///
/// * `cwd`: absolute path to search, usually the current directory
/// * `name`: path component that marks the root
pub fn find_project_root(cwd: &Path, name: &str) -> Result<PathBuf, RootError> {
    if !cwd.is_absolute() {
        return Err(RootError::NotAbsolute(cwd.to_path_buf()));
    }

    let mut prefix = PathBuf::new();
    let mut found = None;
    for component in cwd.components() {
        prefix.push(component);
        if component.as_os_str() == name {
            found = Some(prefix.clone());
        }
    }

    found.ok_or_else(|| RootError::NotFound {
        cwd: cwd.to_path_buf(),
        name: name.to_string(),
    })
}

/// Directory every build and run command is issued from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectRoot {
    /// absolute path to the root directory
    path: PathBuf,
}

impl ProjectRoot {
    /// Resolves the root from the current directory of the process.
    pub fn discover() -> Result<Self, RootError> {
        let cwd = std::env::current_dir().map_err(RootError::CurrentDir)?;
        let path = find_project_root(&cwd, PROJECT_NAME)?;
        tracing::info!("Resolved {} to project root {}", cwd.display(), path.display());
        Self::from_path(path)
    }

    /// Wraps a known root, checking that it is an existing directory.
    pub fn from_path(path: impl Into<PathBuf>) -> Result<Self, RootError> {
        let path = path.into();
        if !path.is_dir() {
            return Err(RootError::Inaccessible(path));
        }
        Ok(Self { path })
    }

    /// Get a reference to the root directory.
    pub fn path(&self) -> &Path {
        self.path.as_path()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(unix)]
    #[test]
    fn truncates_at_project_segment() {
        let root = find_project_root(Path::new("/home/ada/capstone/source/ui"), "capstone");
        assert_eq!(root.unwrap(), PathBuf::from("/home/ada/capstone"));
    }

    #[cfg(unix)]
    #[test]
    fn root_itself_resolves() {
        let root = find_project_root(Path::new("/home/ada/capstone"), "capstone");
        assert_eq!(root.unwrap(), PathBuf::from("/home/ada/capstone"));
    }

    #[cfg(unix)]
    #[test]
    fn deepest_segment_wins() {
        let root = find_project_root(Path::new("/capstone/work/capstone/lib"), "capstone");
        assert_eq!(root.unwrap(), PathBuf::from("/capstone/work/capstone"));
    }

    #[cfg(unix)]
    #[test]
    fn partial_names_do_not_match() {
        for cwd in ["/home/ada/capstone-old/source", "/home/ada/mycapstone", "/home/ada"] {
            let err = find_project_root(Path::new(cwd), "capstone").unwrap_err();
            assert!(matches!(err, RootError::NotFound { .. }), "{cwd}: {err:?}");
        }
    }

    #[test]
    fn relative_paths_are_rejected() {
        let err = find_project_root(Path::new("capstone/source"), "capstone").unwrap_err();
        assert!(matches!(err, RootError::NotAbsolute(_)));
    }

    #[test]
    fn missing_root_is_inaccessible() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("capstone");
        let err = ProjectRoot::from_path(&missing).unwrap_err();
        assert!(matches!(err, RootError::Inaccessible(p) if p == missing));
    }

    #[test]
    fn existing_root_is_kept() {
        let dir = tempfile::tempdir().unwrap();
        let root = ProjectRoot::from_path(dir.path()).unwrap();
        assert_eq!(root.path(), dir.path());
    }
}
