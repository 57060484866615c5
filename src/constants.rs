//! Constants used throughout the pystrap application

/// Name of the environment manager executable
pub const UV_BINARY: &str = "uv";

/// Python version pinned when initializing a new project
pub const PYTHON_VERSION: &str = "3.12";

/// Transfer utilities probed on Unix-like systems
pub const CURL_BINARY: &str = "curl";
pub const WGET_BINARY: &str = "wget";

/// Generated dev helper filename
pub const DEV_FILE: &str = "dev.py";

/// Generated FastAPI entry-point filename
pub const FASTAPI_MAIN_FILE: &str = "main.py";

/// STDIN indicator for CLI arguments
pub const STDIN_INDICATOR: &str = "-";

/// Install command lines, one per transfer utility or platform
pub mod install_commands {
    pub const CURL: &str = "curl -LsSf https://astral.sh/uv/install.sh | sh";
    pub const WGET: &str = "wget -qO- https://astral.sh/uv/install.sh | sh";
    pub const POWERSHELL: &str =
        "powershell -ExecutionPolicy ByPass -c \"irm https://astral.sh/uv/install.ps1 | iex\"";
}

/// Exit codes
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const FAILURE: i32 = 1;
}

/// Verbosity levels
pub mod verbosity {
    pub const OFF: u8 = 0;
    pub const INFO: u8 = 1;
    pub const DEBUG: u8 = 2;
    pub const TRACE: u8 = 3;
}
