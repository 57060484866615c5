use dialoguer::Input;

use crate::{error::Result, project::ProjectKind};

/// Maps a menu selection to a project kind. Only `1` and `2` are valid.
pub fn parse_kind_choice(input: &str) -> Option<ProjectKind> {
    match input.trim() {
        "1" => Some(ProjectKind::Django),
        "2" => Some(ProjectKind::FastApi),
        _ => None,
    }
}

/// Asks which kind of project to create, re-prompting until the selection
/// is valid.
pub fn ask_project_kind() -> Result<ProjectKind> {
    println!("\nWhich kind of project do you want to create?");
    println!("1 - Django");
    println!("2 - FastAPI");

    loop {
        let choice: String =
            Input::new().with_prompt("Choose an option (1 or 2)").interact_text()?;

        match parse_kind_choice(&choice) {
            Some(kind) => return Ok(kind),
            None => println!("Invalid option. Try again."),
        }
    }
}
