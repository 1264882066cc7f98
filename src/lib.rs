//! binsweep - Build Artifact Directory Cleaner
//!
//! binsweep empties configured artifact directories (`bin`, `obj`, ...)
//! under project roots. Unlike a full tree scan it never searches for
//! artifacts: the target list is fixed configuration, and only the
//! immediate children of each existing target directory are deleted.
//!
//! ## Architecture
//!
//! - Target resolution: each configured name is joined onto the project
//!   root and kept only if it exists as a directory.
//! - Deletion runs as two passes over the same targets, files first and
//!   then directories, so a failure in one pass never blocks the other.
//! - Every delete attempt is isolated: failures are counted and logged,
//!   and the run always proceeds to the next item.

pub mod cleaner;
pub mod config;
pub mod output;
pub mod project;

// Re-export commonly used items
pub use cleaner::{clean_workspace, enumerate_targets, CleanResult, Cleaner};
pub use config::{default_targets, load_targets};
pub use output::{BufferSink, NullSink, OutputSink, WriterSink};
pub use project::{resolve_project_root, Project, Workspace};
