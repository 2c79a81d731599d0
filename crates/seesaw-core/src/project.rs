//! Project tree - the immutable input describing the target project
//!
//! A project tree is an ordered list of path/description pairs. Order is
//! processing order. The Main role is derived from the description, never
//! stored.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// One file the target project should contain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileSpec {
    /// Target path, unique within a tree. Duplicate paths are not rejected:
    /// later entries silently overwrite earlier generated artifacts.
    pub path: String,
    /// Natural-language description of what the file should do.
    pub description: String,
}

impl FileSpec {
    /// Create a new file spec.
    pub fn new(path: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            description: description.into(),
        }
    }

    /// A spec is Main iff its description contains the case-insensitive
    /// substring "main". Every other spec is a candidate dependency of every
    /// Main encountered.
    pub fn is_main(&self) -> bool {
        self.description.to_lowercase().contains("main")
    }
}

/// Ordered sequence of file specs describing the target project.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectTree {
    specs: Vec<FileSpec>,
}

impl ProjectTree {
    /// Build a tree from specs, preserving order.
    pub fn new(specs: Vec<FileSpec>) -> Self {
        Self { specs }
    }

    /// Parse a tree from its JSON form: an array of `{path, description}`
    /// objects.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// All specs in processing order.
    pub fn specs(&self) -> &[FileSpec] {
        &self.specs
    }

    /// Iterate over specs in processing order.
    pub fn iter(&self) -> std::slice::Iter<'_, FileSpec> {
        self.specs.iter()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.specs.len()
    }

    /// Whether the tree has no entries.
    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    /// The dependency set of a Main: every entry with a different path, in
    /// tree order. Other Main-marked entries are included on purpose — each
    /// Main is in turn generated as a dependency of every other Main.
    pub fn dependencies_of<'a>(
        &'a self,
        main: &'a FileSpec,
    ) -> impl Iterator<Item = &'a FileSpec> {
        self.specs.iter().filter(move |dep| dep.path != main.path)
    }
}

impl<'a> IntoIterator for &'a ProjectTree {
    type Item = &'a FileSpec;
    type IntoIter = std::slice::Iter<'a, FileSpec>;

    fn into_iter(self) -> Self::IntoIter {
        self.specs.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_main_role_is_derived_case_insensitively() {
        assert!(FileSpec::new("app.py", "The MAIN entry point").is_main());
        assert!(FileSpec::new("app.py", "main application loop").is_main());
        assert!(!FileSpec::new("util.py", "string helpers").is_main());
    }

    #[test]
    fn test_dependencies_exclude_only_the_main_path() {
        let tree = ProjectTree::new(vec![
            FileSpec::new("main.py", "main entry point"),
            FileSpec::new("db.py", "database layer"),
            FileSpec::new("api.py", "main api surface"),
        ]);

        let main = &tree.specs()[0];
        let deps: Vec<_> = tree.dependencies_of(main).map(|d| d.path.as_str()).collect();

        // The second Main-marked entry is a dependency of the first.
        assert_eq!(deps, vec!["db.py", "api.py"]);
    }

    #[test]
    fn test_tree_round_trips_through_json() {
        let json = r#"[
            {"path": "main.py", "description": "main entry point"},
            {"path": "db.py", "description": "database layer"}
        ]"#;

        let tree = ProjectTree::from_json(json).unwrap();
        assert_eq!(tree.len(), 2);
        assert_eq!(tree.specs()[0].path, "main.py");

        let encoded = serde_json::to_string(&tree).unwrap();
        let decoded = ProjectTree::from_json(&encoded).unwrap();
        assert_eq!(decoded, tree);
    }
}
