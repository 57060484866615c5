//! Project kinds and the per-kind scaffolding recipe data.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Supported web frameworks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectKind {
    Django,
    FastApi,
}

impl ProjectKind {
    /// Packages added with `uv add` for this kind.
    pub fn dependencies(&self) -> &'static [&'static str] {
        match self {
            ProjectKind::Django => &["django"],
            ProjectKind::FastApi => &["fastapi", "uvicorn"],
        }
    }

    /// The command line that starts the development server.
    ///
    /// This exact string is embedded into the generated dev helper.
    pub fn dev_server_command(&self) -> &'static str {
        match self {
            ProjectKind::Django => "uv run python manage.py runserver",
            ProjectKind::FastApi => "uv run uvicorn main:app --reload",
        }
    }

    /// The same command as argv parts, for spawning without a shell.
    pub fn dev_server_argv(&self) -> &'static [&'static str] {
        match self {
            ProjectKind::Django => &["uv", "run", "python", "manage.py", "runserver"],
            ProjectKind::FastApi => &["uv", "run", "uvicorn", "main:app", "--reload"],
        }
    }
}

impl Display for ProjectKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ProjectKind::Django => "Django",
            ProjectKind::FastApi => "FastAPI",
        };
        write!(f, "{s}")
    }
}
