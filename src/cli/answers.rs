use serde::Deserialize;

use crate::{
    constants::STDIN_INDICATOR,
    error::{Error, Result},
    ioutils::read_from,
    project::ProjectKind,
    prompt,
};

/// Predefined answers accepted on the command line.
///
/// Keys present here skip the corresponding interactive prompt.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Answers {
    pub kind: Option<ProjectKind>,
    pub name: Option<String>,
}

impl Answers {
    /// Parses the `--answers` argument, reading stdin when it is `-`.
    pub fn from_cli_arg(arg: Option<String>) -> Result<Self> {
        let Some(arg) = arg else {
            return Ok(Self::default());
        };

        let payload =
            if arg == STDIN_INDICATOR { read_from(std::io::stdin())? } else { arg };

        Ok(serde_json::from_str(&payload)?)
    }
}

/// Resolves the project kind and name from predefined answers, falling back
/// to interactive prompts for whatever is missing.
pub struct AnswerCollector {
    non_interactive: bool,
}

impl AnswerCollector {
    pub fn new(non_interactive: bool) -> Self {
        Self { non_interactive }
    }

    pub fn collect(&self, answers: Answers) -> Result<(ProjectKind, String)> {
        let kind = match answers.kind {
            Some(kind) => kind,
            None if self.non_interactive => {
                return Err(Error::ValidationError(
                    "missing 'kind' in answers while running non-interactively".to_string(),
                ))
            }
            None => prompt::ask_project_kind()?,
        };

        let name = match answers.name {
            Some(name) => prompt::normalize_project_name(&name).ok_or_else(|| {
                Error::ValidationError("the project name cannot be empty".to_string())
            })?,
            None if self.non_interactive => {
                return Err(Error::ValidationError(
                    "missing 'name' in answers while running non-interactively".to_string(),
                ))
            }
            None => prompt::ask_project_name()?,
        };

        Ok((kind, name))
    }
}
