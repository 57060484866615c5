//! Builds and executes the scaffolding command plan.

use std::path::{Path, PathBuf};

use crate::{
    constants::{PYTHON_VERSION, UV_BINARY},
    error::{Error, Result},
    exec::{self, CommandSpec},
    project::ProjectKind,
    templates,
};

/// The fixed ordered command sequence for a project kind.
///
/// The first command creates the project directory from the current working
/// directory; every later command runs inside it.
pub fn scaffold_plan(kind: ProjectKind, name: &str) -> Vec<CommandSpec> {
    let mut plan = vec![
        CommandSpec::new(UV_BINARY).args(["init", name, "--python", PYTHON_VERSION]),
        CommandSpec::new(UV_BINARY)
            .arg("add")
            .args(kind.dependencies().iter().copied())
            .current_dir(name),
    ];

    if kind == ProjectKind::Django {
        plan.push(
            CommandSpec::new(UV_BINARY)
                .args(["run", "django-admin", "startproject", "config", "."])
                .current_dir(name),
        );
        plan.push(
            CommandSpec::new(UV_BINARY)
                .args(["run", "python", "manage.py", "migrate"])
                .current_dir(name),
        );
    }

    plan
}

/// Refuses to scaffold over an existing directory unless forced.
pub fn check_project_dir(project_dir: &Path, force: bool) -> Result<()> {
    if project_dir.exists() && !force {
        return Err(Error::ProjectDirectoryExistsError {
            project_dir: project_dir.display().to_string(),
        });
    }
    Ok(())
}

/// Runs the plan fail-fast, then writes the template files.
///
/// The first non-zero exit aborts the run with that command's status; a
/// half-created directory is left on disk as-is. No template file is written
/// unless every plan command succeeded.
pub fn scaffold(kind: ProjectKind, name: &str) -> Result<PathBuf> {
    println!("\nCreating {kind} project: {name}");

    for spec in scaffold_plan(kind, name) {
        exec::run(&spec)?;
    }

    let project_dir = PathBuf::from(name);
    templates::write_project_files(kind, &project_dir)?;

    Ok(project_dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn django_plan_is_four_ordered_commands() {
        let plan = scaffold_plan(ProjectKind::Django, "blog");
        let rendered: Vec<String> = plan.iter().map(|spec| spec.to_string()).collect();
        assert_eq!(
            rendered,
            [
                "uv init blog --python 3.12",
                "uv add django",
                "uv run django-admin startproject config .",
                "uv run python manage.py migrate",
            ]
        );
    }

    #[test]
    fn fastapi_plan_is_two_ordered_commands() {
        let plan = scaffold_plan(ProjectKind::FastApi, "demo");
        let rendered: Vec<String> = plan.iter().map(|spec| spec.to_string()).collect();
        assert_eq!(rendered, ["uv init demo --python 3.12", "uv add fastapi uvicorn"]);
    }

    #[test]
    fn only_the_init_command_runs_from_the_current_directory() {
        for kind in [ProjectKind::Django, ProjectKind::FastApi] {
            let plan = scaffold_plan(kind, "demo");
            assert_eq!(plan[0].cwd(), None);
            for spec in &plan[1..] {
                assert_eq!(spec.cwd(), Some(Path::new("demo")));
            }
        }
    }

    #[test]
    fn existing_project_dir_is_refused_without_force() {
        let dir = tempfile::tempdir().unwrap();
        let err = check_project_dir(dir.path(), false).unwrap_err();
        assert!(matches!(err, Error::ProjectDirectoryExistsError { .. }));

        assert!(check_project_dir(dir.path(), true).is_ok());
        assert!(check_project_dir(&dir.path().join("fresh"), false).is_ok());
    }
}
