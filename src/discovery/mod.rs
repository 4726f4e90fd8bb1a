//! Discovery layer: finds the directories whose Terraform files are loaded.
//!
//! This module handles:
//! - Path validation
//! - Directory traversal with hidden/excluded directory pruning
//! - Detection of directories holding `.tf` / `.tf.json` files

pub mod walker;

pub use walker::{DirectoryWalker, WalkConfig, has_terraform_files, validate_directory};
