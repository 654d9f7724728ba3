use std::{
    fs::{self, DirBuilder, File},
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

use log::{debug, info};

use super::{
    defaults,
    report::{LogReport, Report},
    trim_trailing_separators, Error, Result,
};
use crate::config::Config;

/// Lays down the skeleton of a git repository beneath a working tree.
///
/// The metadata directory is always `<work_dir>/.git`; it is resolved once
/// at construction and never changes afterwards. Nothing is touched on disk
/// until [`create_repo`](Initializer::create_repo) is called.
#[derive(Debug)]
pub struct Initializer {
    work_dir: PathBuf,
    git_dir: PathBuf,
    name: String,
    initial_branch: String,
}

impl Initializer {
    /// Prepare to initialize a repository in `work_dir`.
    ///
    /// Trailing separators are removed from `work_dir`. `name` is only a
    /// label for diagnostics. The resolved paths are reported through the
    /// `log` facade.
    pub fn new<P: AsRef<Path>>(work_dir: P, name: &str) -> Self {
        Self::with_report(work_dir, name, &mut LogReport)
    }

    /// Same as [`new`](Initializer::new), but the resolved paths go to
    /// `report` instead.
    pub fn with_report<P: AsRef<Path>>(work_dir: P, name: &str, report: &mut dyn Report) -> Self {
        let work_dir = trim_trailing_separators(work_dir.as_ref());
        let git_dir = work_dir.join(defaults::GIT_DIR_NAME);

        report.initializer_created(name, &work_dir, &git_dir);

        Initializer {
            work_dir,
            git_dir,
            name: name.to_owned(),
            initial_branch: defaults::DEFAULT_BRANCH.to_owned(),
        }
    }

    /// Point `HEAD` at `branch` rather than the default branch.
    pub fn initial_branch(mut self, branch: &str) -> Self {
        self.initial_branch = branch.to_owned();
        self
    }

    /// Return the working directory for this repo.
    pub fn work_dir(&self) -> &Path {
        self.work_dir.as_path()
    }

    /// Return the path to the `.git` directory.
    pub fn git_dir(&self) -> &Path {
        self.git_dir.as_path()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Create the working tree, the `.git` directory and its default contents.
    ///
    /// Directories that already exist are left alone; `description`, `HEAD`
    /// and `config` are rewritten. Running this again on an initialized
    /// repository therefore succeeds and leaves the same contents behind.
    ///
    /// Stops at the first failure. Anything created before that point stays
    /// on disk.
    pub fn create_repo(&self) -> Result<()> {
        if self.work_dir.as_os_str().is_empty() {
            return Err(Error::EmptyWorkDir);
        }

        ensure_dir(&self.work_dir)?;
        ensure_dir(&self.git_dir)?;

        for name in defaults::GIT_SUBDIRS.iter().copied() {
            self.create_git_dir(name)?;
        }

        self.create_git_file("description", |f| {
            f.write_all(defaults::DESCRIPTION.as_bytes())
        })?;

        let head = defaults::head_ref(&self.initial_branch);
        self.create_git_file("HEAD", |f| f.write_all(head.as_bytes()))?;

        let config = default_config();
        self.create_git_file("config", |f| config.write_to(f))?;

        info!(
            "Initialized repository {} in {}",
            self.name,
            self.git_dir.display()
        );

        Ok(())
    }

    fn create_git_dir(&self, name: &'static str) -> Result<()> {
        let path = name
            .split('/')
            .fold(self.git_dir.clone(), |path, segment| path.join(segment));

        debug!("Creating {}", path.display());
        dir_builder()
            .create(&path)
            .map_err(|source| Error::DirCreation { name, source })
    }

    fn create_git_file<F>(&self, name: &'static str, write: F) -> Result<()>
    where
        F: FnOnce(&mut BufWriter<File>) -> io::Result<()>,
    {
        let path = self.git_dir.join(name);
        let file_err = |source: io::Error| Error::FileCreation { name, source };

        debug!("Writing {}", path.display());

        // The handle is closed on drop whether or not the write succeeds.
        let mut w = BufWriter::new(File::create(&path).map_err(file_err)?);
        write(&mut w).map_err(file_err)?;
        w.flush().map_err(file_err)
    }
}

fn default_config() -> Config {
    let mut config = Config::new();

    let core = config.new_section(defaults::CORE_SECTION);
    for (key, value) in defaults::CORE_SETTINGS.iter() {
        core.set(key, value);
    }

    config
}

// Create `path` (and any missing parents) unless it is already a directory.
fn ensure_dir(path: &Path) -> Result<()> {
    let path_err = |source: io::Error| Error::PathAccess {
        path: path.to_path_buf(),
        source,
    };

    match fs::metadata(path) {
        Ok(meta) if meta.is_dir() => Ok(()),
        Ok(_) => Err(Error::NotADirectory(path.to_path_buf())),
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            debug!("Creating {}", path.display());
            dir_builder().create(path).map_err(path_err)
        }
        Err(err) => Err(path_err(err)),
    }
}

fn dir_builder() -> DirBuilder {
    let mut builder = DirBuilder::new();
    builder.recursive(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(0o755);
    }

    builder
}
