use std::path::Path;

use log::info;

/// Receives a one-time notice when an [`Initializer`](super::Initializer)
/// has resolved its paths.
///
/// The initializer calls `initializer_created` exactly once, from its
/// constructor. Supply [`NoReport`] to keep construction silent.
pub trait Report {
    fn initializer_created(&mut self, name: &str, work_dir: &Path, git_dir: &Path);
}

/// Reports through the `log` facade at `info` level.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogReport;

impl Report for LogReport {
    fn initializer_created(&mut self, name: &str, work_dir: &Path, git_dir: &Path) {
        info!(
            "Repo: {}, Worktree: {}, Gitpath: {}",
            name,
            work_dir.display(),
            git_dir.display()
        );
    }
}

/// Discards the construction notice.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoReport;

impl Report for NoReport {
    fn initializer_created(&mut self, _name: &str, _work_dir: &Path, _git_dir: &Path) {}
}
