/// Handles argument parsing and runs the pipeline.
pub mod cli;

/// The immutable project description.
pub mod config;

/// Constants shared across modules.
pub mod constants;

/// Defines custom error types.
pub mod error;

/// Package list and package manager invocation.
pub mod installer;

/// A set of helpers for working with the file system.
pub mod ioutils;

/// `package.json` generation.
pub mod manifest;

/// Template rendering.
pub mod renderer;

/// Scaffold table and planning.
pub mod template;
