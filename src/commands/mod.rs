//! # CLI Command Implementations
//!
//! The tool has a single action, copying a folder or repository, so there
//! is one command module. It follows the usual layout:
//! - An `Args` struct that defines the command's arguments and options,
//!   derived using `clap`.
//! - An `execute` function that takes the parsed `Args` and calls into the
//!   `copy_folder_gitrepo` library.

pub mod copy;
