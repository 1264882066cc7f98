//! Host project abstraction and project root resolution.

use anyhow::Result;
use std::path::{Path, PathBuf};

/// Opaque handle to a project supplied by the embedding host.
pub trait Project {
    /// Display name, used in progress output.
    fn name(&self) -> &str;

    /// Full path identifier of the project file. Empty when the host has
    /// no file backing the project.
    fn full_name(&self) -> &str;

    /// Best-effort property lookup against the host's metadata store.
    /// `Err` means the store itself failed; callers treat that the same
    /// as an absent key.
    fn property(&self, key: &str) -> Result<Option<String>>;
}

/// The set of projects a clean run may touch.
pub trait Workspace {
    /// Projects currently active or selected, possibly empty.
    fn active_projects(&self) -> Vec<&dyn Project>;

    /// Every project the workspace knows about.
    fn all_projects(&self) -> Vec<&dyn Project>;
}

/// Properties consulted for a project's root directory, in priority order.
const ROOT_PROPERTIES: &[&str] = &["FullPath", "ProjectDirectory", "ProjectPath"];

/// Determine the root directory of a project.
///
/// Tries each entry of [`ROOT_PROPERTIES`] in order and takes the first
/// lookup that yields a non-blank value; a lookup that errors or comes back
/// empty falls through to the next key. When no property produces a path but
/// the project's full name refers to an existing file, the file's parent
/// directory is used. Returns `None` when nothing resolves, which callers
/// treat as "nothing to clean" rather than an error.
pub fn resolve_project_root(project: &dyn Project) -> Option<PathBuf> {
    if project.full_name().is_empty() {
        return None;
    }

    let from_property = ROOT_PROPERTIES
        .iter()
        .find_map(|key| match project.property(key) {
            Ok(Some(value)) if !value.trim().is_empty() => Some(PathBuf::from(value)),
            _ => None,
        });

    if from_property.is_some() {
        return from_property;
    }

    // No property produced a path; fall back to the directory containing
    // the project file itself.
    let full_name = Path::new(project.full_name());
    if full_name.is_file() {
        return full_name.parent().map(Path::to_path_buf);
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::bail;
    use std::collections::{HashMap, HashSet};
    use std::fs;

    /// Fake host project with a controllable property store.
    #[derive(Default)]
    struct FakeProject {
        name: String,
        full_name: String,
        properties: HashMap<String, String>,
        failing: HashSet<String>,
    }

    impl FakeProject {
        fn with_full_name(full_name: &str) -> Self {
            FakeProject {
                name: "fake".to_string(),
                full_name: full_name.to_string(),
                ..Default::default()
            }
        }

        fn property_value(mut self, key: &str, value: &str) -> Self {
            self.properties.insert(key.to_string(), value.to_string());
            self
        }

        fn failing_property(mut self, key: &str) -> Self {
            self.failing.insert(key.to_string());
            self
        }
    }

    impl Project for FakeProject {
        fn name(&self) -> &str {
            &self.name
        }

        fn full_name(&self) -> &str {
            &self.full_name
        }

        fn property(&self, key: &str) -> Result<Option<String>> {
            if self.failing.contains(key) {
                bail!("property store failure for {}", key);
            }
            Ok(self.properties.get(key).cloned())
        }
    }

    #[test]
    fn test_full_path_property_wins() {
        let project = FakeProject::with_full_name("/proj/app.csproj")
            .property_value("FullPath", "/proj/app")
            .property_value("ProjectDirectory", "/elsewhere");

        assert_eq!(
            resolve_project_root(&project),
            Some(PathBuf::from("/proj/app"))
        );
    }

    #[test]
    fn test_failing_lookup_falls_through_to_next_key() {
        let project = FakeProject::with_full_name("/proj/app.csproj")
            .failing_property("FullPath")
            .property_value("ProjectDirectory", "/proj/app");

        assert_eq!(
            resolve_project_root(&project),
            Some(PathBuf::from("/proj/app"))
        );
    }

    #[test]
    fn test_blank_property_value_falls_through() {
        let project = FakeProject::with_full_name("/proj/app.csproj")
            .property_value("FullPath", "   ")
            .property_value("ProjectPath", "/proj/app");

        assert_eq!(
            resolve_project_root(&project),
            Some(PathBuf::from("/proj/app"))
        );
    }

    #[test]
    fn test_empty_full_name_short_circuits() {
        let project =
            FakeProject::with_full_name("").property_value("FullPath", "/proj/app");

        assert_eq!(resolve_project_root(&project), None);
    }

    #[test]
    fn test_falls_back_to_project_file_parent() {
        let dir = tempfile::tempdir().unwrap();
        let project_file = dir.path().join("app.csproj");
        fs::write(&project_file, "<Project/>").unwrap();

        let project = FakeProject::with_full_name(project_file.to_str().unwrap());

        assert_eq!(
            resolve_project_root(&project),
            Some(dir.path().to_path_buf())
        );
    }

    #[test]
    fn test_unresolvable_project_yields_none() {
        // Full name set but pointing at nothing on disk, no properties.
        let project = FakeProject::with_full_name("/no/such/app.csproj");

        assert_eq!(resolve_project_root(&project), None);
    }
}
