//! Installs the uv environment manager when it is missing.

use crate::{
    constants::{install_commands, CURL_BINARY, UV_BINARY, WGET_BINARY},
    error::{Error, Result},
    exec,
    platform::{self, OsFamily},
};

/// Picks the one documented install command for the host.
///
/// Unix-like systems prefer curl and fall back to wget; Windows goes through
/// PowerShell. An unrecognized OS family is fatal.
pub fn select_install_command(
    os: OsFamily,
    has_curl: bool,
    has_wget: bool,
) -> Result<&'static str> {
    match os {
        OsFamily::Linux | OsFamily::MacOs => {
            if has_curl {
                Ok(install_commands::CURL)
            } else if has_wget {
                Ok(install_commands::WGET)
            } else {
                Err(Error::MissingTransferTool)
            }
        }
        OsFamily::Windows => Ok(install_commands::POWERSHELL),
        OsFamily::Unknown => Err(Error::UnsupportedOs { os: os.to_string() }),
    }
}

/// Installs uv with the platform-appropriate command. Single attempt, no
/// retry; a failed install terminates the run.
pub fn install_uv() -> Result<()> {
    let os = OsFamily::detect();
    match os {
        OsFamily::Linux | OsFamily::MacOs => println!("Installing uv for Linux/macOS..."),
        OsFamily::Windows => println!("Installing uv for Windows..."),
        OsFamily::Unknown => {}
    }

    let command = select_install_command(
        os,
        platform::is_tool_available(CURL_BINARY),
        platform::is_tool_available(WGET_BINARY),
    )?;

    exec::run_shell(command)
}

/// Makes sure uv is discoverable on PATH, installing it if necessary.
pub fn ensure_uv() -> Result<()> {
    if platform::is_tool_available(UV_BINARY) {
        log::debug!("uv found on PATH");
        println!("uv is installed and ready to use.");
        return Ok(());
    }

    println!("uv is not installed.");
    install_uv()?;

    // The installer drops the binary into a directory that may only join
    // PATH once the shell is restarted.
    if !platform::is_tool_available(UV_BINARY) {
        return Err(Error::ToolNotOnPath);
    }

    println!("uv is installed and ready to use.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::exit_codes;
    use crate::error::exit_code;

    #[test]
    fn unix_families_prefer_curl_over_wget() {
        for os in [OsFamily::Linux, OsFamily::MacOs] {
            assert_eq!(
                select_install_command(os, true, true).unwrap(),
                install_commands::CURL
            );
            assert_eq!(
                select_install_command(os, true, false).unwrap(),
                install_commands::CURL
            );
            assert_eq!(
                select_install_command(os, false, true).unwrap(),
                install_commands::WGET
            );
        }
    }

    #[test]
    fn windows_always_uses_powershell() {
        for (has_curl, has_wget) in [(false, false), (true, false), (true, true)] {
            assert_eq!(
                select_install_command(OsFamily::Windows, has_curl, has_wget).unwrap(),
                install_commands::POWERSHELL
            );
        }
    }

    #[test]
    fn missing_transfer_tools_are_fatal_with_code_1() {
        let err = select_install_command(OsFamily::Linux, false, false).unwrap_err();
        assert!(matches!(err, Error::MissingTransferTool));
        assert_eq!(exit_code(&err), exit_codes::FAILURE);
    }

    #[test]
    fn unknown_os_is_fatal_with_code_1() {
        let err = select_install_command(OsFamily::Unknown, true, true).unwrap_err();
        match &err {
            Error::UnsupportedOs { os } => assert_eq!(os, "unknown"),
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(exit_code(&err), exit_codes::FAILURE);
    }
}
