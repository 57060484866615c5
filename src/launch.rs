//! Starts the development server as a blocking foreground process.

use std::path::Path;

use crate::{
    error::Result,
    exec::{self, CommandSpec},
    project::ProjectKind,
};

/// Runs the kind-specific dev-server command in the project directory and
/// blocks on it until the server exits or the user interrupts it.
///
/// A non-zero server exit surfaces as a command failure, so the process exit
/// code mirrors the server's own status.
pub fn launch_dev_server(kind: ProjectKind, project_dir: &Path) -> Result<()> {
    println!("Starting development server...\n");

    let argv = kind.dev_server_argv();
    let spec = CommandSpec::new(argv[0])
        .args(argv[1..].iter().copied())
        .current_dir(project_dir);

    exec::run(&spec)
}
