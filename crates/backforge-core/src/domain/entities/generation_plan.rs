use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::path::{Path, PathBuf};

use crate::domain::{
    entities::template::FileTemplate, error::DomainError, value_objects::TemplateGroup,
};

/// Everything that will be written for one project.
///
/// Holds the project root and the collected templates in catalog order.
/// The directory set is derived, never stored.
#[derive(Debug, Clone)]
pub struct GenerationPlan {
    root: PathBuf,
    templates: Vec<FileTemplate>,
}

impl GenerationPlan {
    pub fn new(root: impl Into<PathBuf>, templates: Vec<FileTemplate>) -> Self {
        Self {
            root: root.into(),
            templates,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn templates(&self) -> &[FileTemplate] {
        &self.templates
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Directories implied by the templates, relative to the root.
    ///
    /// Always contains `.` (the root itself) plus every ancestor of every
    /// template path. Sorted, so parents come before children.
    pub fn directories(&self) -> BTreeSet<PathBuf> {
        let mut dirs = BTreeSet::new();
        dirs.insert(PathBuf::from("."));
        for template in &self.templates {
            dirs.extend(template.path.ancestors().map(Path::to_path_buf));
        }
        dirs
    }

    /// Templates tagged with `group`.
    pub fn files_in_group(&self, group: TemplateGroup) -> impl Iterator<Item = &FileTemplate> {
        self.templates.iter().filter(move |t| t.group == group)
    }

    /// File count per group.
    pub fn group_counts(&self) -> BTreeMap<TemplateGroup, usize> {
        let mut counts = BTreeMap::new();
        for template in &self.templates {
            *counts.entry(template.group).or_insert(0) += 1;
        }
        counts
    }

    /// Checks that the plan is non-empty, relative and free of duplicates.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.templates.is_empty() {
            return Err(DomainError::EmptyPlan);
        }

        let mut seen = HashSet::with_capacity(self.templates.len());
        for template in &self.templates {
            let path = template.path.as_path();
            if path.is_absolute() {
                return Err(DomainError::AbsolutePathNotAllowed {
                    path: path.display().to_string(),
                });
            }
            if !seen.insert(path) {
                return Err(DomainError::DuplicatePath {
                    path: path.display().to_string(),
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan(paths: &[&'static str]) -> GenerationPlan {
        let templates = paths
            .iter()
            .map(|p| FileTemplate::new(*p, TemplateGroup::Core, ""))
            .collect();
        GenerationPlan::new("/tmp/demo", templates)
    }

    #[test]
    fn directories_include_root_and_every_ancestor() {
        let dirs = plan(&["README.md", "app/api/v1/router.py", "app/main.py"]).directories();

        let expected: BTreeSet<PathBuf> = [".", "app", "app/api", "app/api/v1"]
            .into_iter()
            .map(PathBuf::from)
            .collect();
        assert_eq!(dirs, expected);
    }

    #[test]
    fn top_level_only_plan_has_just_the_root() {
        let dirs = plan(&["README.md", ".gitignore"]).directories();
        assert_eq!(dirs.len(), 1);
        assert!(dirs.contains(Path::new(".")));
    }

    #[test]
    fn duplicate_paths_are_rejected() {
        let err = plan(&["app/main.py", "app/main.py"]).validate().unwrap_err();
        assert_eq!(
            err,
            DomainError::DuplicatePath {
                path: "app/main.py".into()
            }
        );
    }

    #[test]
    fn empty_plan_is_rejected() {
        assert_eq!(plan(&[]).validate(), Err(DomainError::EmptyPlan));
    }

    #[test]
    fn group_counts_tally_each_group() {
        let templates = vec![
            FileTemplate::new("a", TemplateGroup::Core, ""),
            FileTemplate::new("b", TemplateGroup::Tests, ""),
            FileTemplate::new("c", TemplateGroup::Tests, ""),
        ];
        let plan = GenerationPlan::new(".", templates);

        let counts = plan.group_counts();
        assert_eq!(counts.get(&TemplateGroup::Core), Some(&1));
        assert_eq!(counts.get(&TemplateGroup::Tests), Some(&2));
        assert_eq!(plan.files_in_group(TemplateGroup::Docker).count(), 0);
    }
}
