//! Initializes a git repository on the local file system.
//!
//! **IMPORTANT NOTE:** This only lays down the directories and default files
//! that make a `.git` folder recognizable. It does not store objects, resolve
//! refs, or maintain an index.

mod error;
pub use error::{Error, Result};

pub mod defaults;

mod init;
pub use init::Initializer;

mod path;
pub use path::trim_trailing_separators;

mod report;
pub use report::{LogReport, NoReport, Report};
