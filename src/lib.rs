//! A compact summary of a git working copy: stashes, file statuses, and how
//! every local branch relates to its upstream and its merge target.
//!
//! The pipeline runs strictly forward. [`git`] answers queries,
//! [`summary`] classifies branches, assembles styled tokens and renders
//! them within a width, and [`config`] supplies the rules and formats.

pub mod config;
pub mod git;
pub mod shell_exec;
pub mod styling;
pub mod summary;
