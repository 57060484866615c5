/// Handles argument parsing and workflow orchestration.
pub mod cli;

/// Constants used throughout the application.
pub mod constants;

/// Defines custom error types.
pub mod error;

/// Synchronous execution of external commands.
pub mod exec;

/// Installs the uv environment manager when it is missing.
pub mod install;

/// A set of helpers for working with the file system.
pub mod ioutils;

/// Blocking dev-server launch.
pub mod launch;

/// Host platform detection and executable probing.
pub mod platform;

/// Project kinds and their scaffolding recipes.
pub mod project;

/// User input and interaction handling.
pub mod prompt;

/// Builds and executes the scaffolding command plan.
pub mod scaffold;

/// Static file templates written into the new project.
pub mod templates;
