//! Deletion engine: removes the immediate contents of configured target
//! directories under a project root.

use crate::output::OutputSink;
use crate::project::{resolve_project_root, Workspace};
use std::fs;
use std::ops::{Add, AddAssign};
use std::path::{Path, PathBuf};

/// Outcome counters for one clean run.
///
/// Every delete attempt lands in exactly one field, so
/// `succeeded + failed` is the total number of attempts made.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CleanResult {
    pub succeeded: usize,
    pub failed: usize,
}

impl CleanResult {
    pub fn total(&self) -> usize {
        self.succeeded + self.failed
    }
}

impl Add for CleanResult {
    type Output = CleanResult;

    fn add(self, other: CleanResult) -> CleanResult {
        CleanResult {
            succeeded: self.succeeded + other.succeeded,
            failed: self.failed + other.failed,
        }
    }
}

impl AddAssign for CleanResult {
    fn add_assign(&mut self, other: CleanResult) {
        *self = *self + other;
    }
}

/// An unresolved root travels as an empty path; whitespace counts as empty too.
fn is_blank(root: &Path) -> bool {
    root.as_os_str().to_string_lossy().trim().is_empty()
}

/// Join each configured name onto `root` and keep the ones that currently
/// exist as directories, preserving list order. A blank root yields nothing.
pub fn enumerate_targets(root: &Path, targets: &[String]) -> Vec<PathBuf> {
    if is_blank(root) {
        return Vec::new();
    }

    targets
        .iter()
        .map(|name| root.join(name))
        .filter(|path| path.is_dir())
        .collect()
}

/// Removes the immediate children of every existing target directory under
/// a project root, counting each attempt and writing progress to the sink.
///
/// Failures are isolated per item: one undeletable entry is counted, logged,
/// and skipped, and the run continues with its siblings.
pub struct Cleaner<'a> {
    targets: &'a [String],
    sink: &'a mut dyn OutputSink,
}

impl<'a> Cleaner<'a> {
    pub fn new(targets: &'a [String], sink: &'a mut dyn OutputSink) -> Self {
        Cleaner { targets, sink }
    }

    /// Run both passes (files first, then directories), write the summary
    /// line, and return the combined counts.
    pub fn clean(&mut self, root: &Path) -> CleanResult {
        let result = self.clean_files(root) + self.clean_directories(root);
        self.report(result);
        result
    }

    /// Delete the immediate non-directory children of each target.
    /// Symlinks are removed as files; the link target is never followed.
    pub fn clean_files(&mut self, root: &Path) -> CleanResult {
        self.remove_entries(root, |file_type| !file_type.is_dir(), |path| {
            fs::remove_file(path)
        })
    }

    /// Delete the immediate child directories of each target, each with its
    /// entire subtree in one recursive remove.
    pub fn clean_directories(&mut self, root: &Path) -> CleanResult {
        self.remove_entries(root, |file_type| file_type.is_dir(), |path| {
            fs::remove_dir_all(path)
        })
    }

    fn remove_entries(
        &mut self,
        root: &Path,
        wanted: impl Fn(&fs::FileType) -> bool,
        delete: impl Fn(&Path) -> std::io::Result<()>,
    ) -> CleanResult {
        let mut result = CleanResult::default();

        for target in enumerate_targets(root, self.targets) {
            let entries = match fs::read_dir(&target) {
                Ok(entries) => entries,
                Err(err) => {
                    self.sink.write_line(&format!(
                        "warning: failed to read {}: {}",
                        target.display(),
                        err
                    ));
                    continue;
                }
            };

            for entry in entries.flatten() {
                if !entry.file_type().map(|ft| wanted(&ft)).unwrap_or(false) {
                    continue;
                }

                let name = entry.file_name().to_string_lossy().into_owned();
                self.sink.write(&format!("deleting {} ... ", name));

                match delete(&entry.path()) {
                    Ok(()) => {
                        result.succeeded += 1;
                        self.sink.write_line("done");
                    }
                    Err(err) => {
                        result.failed += 1;
                        self.sink.write_line(&format!("failed: {}", err));
                    }
                }
            }
        }

        result
    }

    fn report(&mut self, result: CleanResult) {
        self.sink.write_line(&format!(
            "clean finished: {} deleted, {} failed",
            result.succeeded, result.failed
        ));
    }
}

/// Clean every project the workspace reports.
///
/// The active/selected set wins; a workspace with nothing active falls back
/// to all of its projects. A project whose root cannot be resolved cleans
/// nothing but still reports (0, 0). An empty target list means there is
/// nothing to do and nothing is written.
pub fn clean_workspace(
    workspace: &dyn Workspace,
    targets: &[String],
    sink: &mut dyn OutputSink,
) -> CleanResult {
    if targets.is_empty() {
        return CleanResult::default();
    }

    sink.write_line("cleaning build artifacts");

    let mut projects = workspace.active_projects();
    if projects.is_empty() {
        projects = workspace.all_projects();
    }

    let mut total = CleanResult::default();
    for project in projects {
        sink.write_line(&format!("project: {}", project.name()));

        let root = resolve_project_root(project).unwrap_or_default();
        total += Cleaner::new(targets, &mut *sink).clean(&root);
    }

    total
}
