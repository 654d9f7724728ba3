//! Fixed values written into a freshly initialized repository.

/// Name of the metadata directory beneath the working tree.
pub const GIT_DIR_NAME: &str = ".git";

/// Branch that `HEAD` points at unless overridden.
pub const DEFAULT_BRANCH: &str = "master";

pub const DESCRIPTION: &str =
    "Unnamed repository; edit this file 'description' to name the repository.\n";

/// Directories created beneath the metadata directory, in creation order.
pub const GIT_SUBDIRS: [&str; 4] = ["branches", "objects", "refs/tags", "refs/heads"];

/// Section of `config` holding [`CORE_SETTINGS`].
pub const CORE_SECTION: &str = "core";

/// Keys written to the `core` section, in order, with their values.
pub const CORE_SETTINGS: [(&str, &str); 3] = [
    ("repositoryformatversion", "0"),
    ("filemode", "false"),
    ("bare", "false"),
];

/// Contents of `HEAD` for a repository whose current branch is `branch`.
pub fn head_ref(branch: &str) -> String {
    format!("ref: refs/heads/{}\n", branch)
}
