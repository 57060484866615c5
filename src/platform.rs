//! Host platform detection and executable probing.

use std::fmt::Display;

/// Operating system families the installer distinguishes between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OsFamily {
    Windows,
    Linux,
    MacOs,
    Unknown,
}

impl OsFamily {
    /// Detects the OS family of the running host.
    pub fn detect() -> Self {
        Self::from_os_name(std::env::consts::OS)
    }

    /// Maps an `std::env::consts::OS` identifier to a family.
    pub fn from_os_name(name: &str) -> Self {
        match name {
            "windows" => OsFamily::Windows,
            "linux" => OsFamily::Linux,
            "macos" => OsFamily::MacOs,
            _ => OsFamily::Unknown,
        }
    }
}

impl Display for OsFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            OsFamily::Windows => "windows",
            OsFamily::Linux => "linux",
            OsFamily::MacOs => "macos",
            OsFamily::Unknown => "unknown",
        };
        write!(f, "{s}")
    }
}

/// Reports whether a named executable is present on the search path.
///
/// Absence is an expected outcome, not an error.
pub fn is_tool_available(name: &str) -> bool {
    which::which(name).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_os_names_to_families() {
        assert_eq!(OsFamily::from_os_name("windows"), OsFamily::Windows);
        assert_eq!(OsFamily::from_os_name("linux"), OsFamily::Linux);
        assert_eq!(OsFamily::from_os_name("macos"), OsFamily::MacOs);
        assert_eq!(OsFamily::from_os_name("freebsd"), OsFamily::Unknown);
        assert_eq!(OsFamily::from_os_name(""), OsFamily::Unknown);
    }

    #[test]
    fn display_os_family_variants() {
        assert_eq!(OsFamily::Windows.to_string(), "windows");
        assert_eq!(OsFamily::Linux.to_string(), "linux");
        assert_eq!(OsFamily::MacOs.to_string(), "macos");
        assert_eq!(OsFamily::Unknown.to_string(), "unknown");
    }

    #[test]
    fn detect_never_panics() {
        let _ = OsFamily::detect();
    }

    #[test]
    fn missing_executable_is_reported_absent() {
        assert!(!is_tool_available("pystrap-no-such-executable"));
    }
}
