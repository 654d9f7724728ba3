use std::io::Write;
use std::path::Path;

use super::{Cli, Result};

use gitskel::repo::Initializer;

use clap::{App, Arg, ArgMatches, SubCommand};

pub(crate) fn subcommand<'a, 'b>() -> App<'a, 'b> {
    SubCommand::with_name("init")
        .about("Create an empty git repository")
        .arg(
            Arg::with_name("directory")
                .required(true)
                .help("The directory to create"),
        )
        .arg(
            Arg::with_name("name")
                .long("name")
                .takes_value(true)
                .value_name("NAME")
                .help("Repository name used in diagnostics [default: the directory's name]"),
        )
        .arg(
            Arg::with_name("initial-branch")
                .short("b")
                .long("initial-branch")
                .takes_value(true)
                .value_name("BRANCH")
                .help("Branch that HEAD points at [default: master]"),
        )
}

pub(crate) fn run(cli: &mut Cli, init_matches: &ArgMatches) -> Result {
    let dir = init_matches.value_of("directory").unwrap_or_default();
    let path = Path::new(dir);

    let name = match init_matches.value_of("name") {
        Some(name) => name.to_owned(),
        None => default_name(path),
    };

    let mut r = Initializer::new(path, &name);
    if let Some(branch) = init_matches.value_of("initial-branch") {
        r = r.initial_branch(branch);
    }

    r.create_repo()?;

    writeln!(
        cli,
        "Initialized empty Git repository in {}",
        r.git_dir().display()
    )?;

    Ok(())
}

fn default_name(path: &Path) -> String {
    match path.file_name() {
        Some(name) => name.to_string_lossy().into_owned(),
        None => path.display().to_string(),
    }
}
