//! Command-line interface module.

mod args;
pub mod build;
pub mod meta;
pub mod validate;

pub use args::{BuildArgs, Cli, Commands, MetaArgs};
