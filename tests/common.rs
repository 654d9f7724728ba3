use std::{fs, path::Path};

pub const DESCRIPTION_TXT: &str =
    "Unnamed repository; edit this file 'description' to name the repository.\n";

pub const CONFIG_TXT: &str =
    "[core]\nrepositoryformatversion = 0\nfilemode = false\nbare = false\n";

// Panics unless `work_dir/.git` holds exactly the default skeleton
// with HEAD pointing at `branch`.
#[allow(dead_code)]
pub fn assert_skeleton(work_dir: &Path, branch: &str) {
    let git_dir = work_dir.join(".git");
    assert!(git_dir.is_dir(), "{} is missing", git_dir.display());

    let mut dirs = Vec::new();
    let mut files = Vec::new();
    collect(&git_dir, &git_dir, &mut dirs, &mut files);
    dirs.sort();
    files.sort();

    assert_eq!(
        dirs,
        vec!["branches", "objects", "refs", "refs/heads", "refs/tags"]
    );
    assert_eq!(files, vec!["HEAD", "config", "description"]);

    assert_eq!(
        fs::read_to_string(git_dir.join("description")).unwrap(),
        DESCRIPTION_TXT
    );
    assert_eq!(
        fs::read_to_string(git_dir.join("HEAD")).unwrap(),
        format!("ref: refs/heads/{}\n", branch)
    );
    assert_eq!(
        fs::read_to_string(git_dir.join("config")).unwrap(),
        CONFIG_TXT
    );
}

fn collect(root: &Path, dir: &Path, dirs: &mut Vec<String>, files: &mut Vec<String>) {
    for entry in fs::read_dir(dir).unwrap() {
        let path = entry.unwrap().path();
        let rel = path
            .strip_prefix(root)
            .unwrap()
            .to_string_lossy()
            .replace('\\', "/");

        if path.is_dir() {
            dirs.push(rel);
            collect(root, &path, dirs, files);
        } else {
            files.push(rel);
        }
    }
}
