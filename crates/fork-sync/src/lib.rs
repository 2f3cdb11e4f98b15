//! Directory synchronization engine for forksync
//!
//! Copies the files a downstream fork modifies between the curated
//! modifications tree and a full upstream checkout. Files are discovered
//! either from version-control status or by walking the whole tree, and a
//! file is only rewritten when its content digest differs.

pub mod change;
pub mod discovery;
pub mod engine;
pub mod error;
pub mod safety;

pub use change::{ChangeKind, DiscoveredEntry, UntrackedFilesMode};
pub use discovery::{FileDiscovery, RecursiveDiscovery, StatusDiscovery, walk_files};
pub use engine::{SyncAction, SyncEngine, SyncOptions, SyncReport, sync_dirs};
pub use error::{Error, Result};
pub use safety::{RootMarkers, validate_roots};
