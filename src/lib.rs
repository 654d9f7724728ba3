//! Creates the on-disk skeleton of a git repository.
//!
//! The layout written here is the minimal one: `branches`, `objects`,
//! `refs/heads` and `refs/tags` directories plus `description`, `HEAD`
//! and `config` files inside a `.git` directory. See [`repo::Initializer`].

pub mod config;
pub mod repo;
