use dialoguer::Input;

use crate::error::Result;

/// Trims the input and rejects names that end up empty.
///
/// The name is used verbatim as a directory name, so surrounding whitespace
/// never survives.
pub fn normalize_project_name(input: &str) -> Option<String> {
    let name = input.trim();
    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}

/// Asks for the project name, re-prompting until it is non-empty.
pub fn ask_project_name() -> Result<String> {
    loop {
        let input: String = Input::new()
            .with_prompt("Enter the project name")
            .allow_empty(true)
            .interact_text()?;

        match normalize_project_name(&input) {
            Some(name) => return Ok(name),
            None => println!("The project name cannot be empty."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_and_whitespace_only_names() {
        assert_eq!(normalize_project_name(""), None);
        assert_eq!(normalize_project_name("   "), None);
        assert_eq!(normalize_project_name("\t\n"), None);
    }

    #[test]
    fn trims_surrounding_whitespace() {
        assert_eq!(normalize_project_name("  blog  "), Some("blog".to_string()));
        assert_eq!(normalize_project_name("demo"), Some("demo".to_string()));
    }
}
