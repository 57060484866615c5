//! Static file templates written into the new project.

use std::path::Path;

use crate::{
    constants::{DEV_FILE, FASTAPI_MAIN_FILE},
    error::Result,
    ioutils::write_file,
    project::ProjectKind,
};

/// Minimal FastAPI application with a single root route.
pub const FASTAPI_MAIN: &str = r#"from fastapi import FastAPI

app = FastAPI()

@app.get("/")
def read_root():
    return {"Hello": "World"}
"#;

/// Contents of the `dev.py` helper.
///
/// The helper re-invokes the kind-specific dev-server command and exits with
/// the server's own return code.
pub fn dev_script(kind: ProjectKind) -> String {
    let command = kind.dev_server_command();
    format!(
        r#"import subprocess
import sys

def main() -> None:
    try:
        subprocess.run("{command}", shell=True, check=True)
    except subprocess.CalledProcessError as error:
        sys.exit(error.returncode)

if __name__ == "__main__":
    main()
"#
    )
}

/// File names written into the project directory, in write order.
pub fn project_files(kind: ProjectKind) -> &'static [&'static str] {
    match kind {
        ProjectKind::Django => &[DEV_FILE],
        ProjectKind::FastApi => &[FASTAPI_MAIN_FILE, DEV_FILE],
    }
}

/// Writes the dev helper, and for FastAPI the application entry point.
pub fn write_project_files(kind: ProjectKind, project_dir: &Path) -> Result<()> {
    if kind == ProjectKind::FastApi {
        log::debug!("Writing {FASTAPI_MAIN_FILE} into {}", project_dir.display());
        write_file(FASTAPI_MAIN, project_dir.join(FASTAPI_MAIN_FILE))?;
    }

    log::debug!("Writing {DEV_FILE} into {}", project_dir.display());
    write_file(&dev_script(kind), project_dir.join(DEV_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dev_script_embeds_the_run_command_exactly_once() {
        for kind in [ProjectKind::Django, ProjectKind::FastApi] {
            let script = dev_script(kind);
            assert_eq!(script.matches(kind.dev_server_command()).count(), 1);
            assert_eq!(script.matches("subprocess.run").count(), 1);
        }
    }

    #[test]
    fn django_dev_script_has_no_fastapi_command() {
        let script = dev_script(ProjectKind::Django);
        assert!(!script.contains("uvicorn"));
        assert!(script.contains("uv run python manage.py runserver"));
    }

    #[test]
    fn fastapi_main_defines_a_root_route() {
        assert!(FASTAPI_MAIN.contains("app = FastAPI()"));
        assert!(FASTAPI_MAIN.contains("@app.get(\"/\")"));
    }
}
