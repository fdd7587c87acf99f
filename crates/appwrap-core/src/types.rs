//! Shared types used across appwrap.
//!
//! Platform and architecture identifiers follow the strings the Electron
//! packaging toolchain understands (`win32`, `darwin`, `x64`, ...). Values the
//! toolchain may understand but we do not model are carried verbatim in an
//! `Other` variant so validation can be left to the packager.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Target operating system for the packaged application.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Platform {
    /// Windows
    Win32,
    /// macOS
    Darwin,
    /// Linux
    Linux,
    /// Mac App Store build
    Mas,
    /// Any other identifier, kept exactly as supplied
    Other(String),
}

impl Platform {
    /// Map an identifier to a platform without alias folding.
    ///
    /// Only the exact canonical identifiers are recognised; anything else
    /// (including `"Linux"`) becomes [`Platform::Other`].
    #[must_use]
    pub fn from_identifier(id: &str) -> Self {
        match id {
            "win32" => Self::Win32,
            "darwin" => Self::Darwin,
            "linux" => Self::Linux,
            "mas" => Self::Mas,
            other => Self::Other(other.to_string()),
        }
    }

    /// Map a user-supplied platform name to a platform, folding aliases.
    ///
    /// `windows` becomes `win32`, `osx` and `mac` become `darwin`, compared
    /// case-insensitively. Every other value passes through
    /// [`Platform::from_identifier`] unchanged.
    #[must_use]
    pub fn from_alias(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "windows" => Self::Win32,
            "osx" | "mac" => Self::Darwin,
            _ => Self::from_identifier(name),
        }
    }

    /// Identifier string as understood by the packager.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Win32 => "win32",
            Self::Darwin => "darwin",
            Self::Linux => "linux",
            Self::Mas => "mas",
            Self::Other(other) => other,
        }
    }

    /// Whether this is one of the platforms we model explicitly.
    #[must_use]
    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl From<String> for Platform {
    fn from(id: String) -> Self {
        Self::from_identifier(&id)
    }
}

impl From<Platform> for String {
    fn from(platform: Platform) -> Self {
        platform.as_str().to_string()
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Target CPU architecture for the packaged application.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Arch {
    /// 32-bit x86
    Ia32,
    /// 64-bit x86
    X64,
    /// 64-bit ARM
    Arm64,
    /// 32-bit ARM
    Armv7l,
    /// Any other identifier, kept exactly as supplied
    Other(String),
}

impl Arch {
    /// Map an identifier to an architecture.
    #[must_use]
    pub fn from_identifier(id: &str) -> Self {
        match id {
            "ia32" => Self::Ia32,
            "x64" => Self::X64,
            "arm64" => Self::Arm64,
            "armv7l" => Self::Armv7l,
            other => Self::Other(other.to_string()),
        }
    }

    /// Identifier string as understood by the packager.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Ia32 => "ia32",
            Self::X64 => "x64",
            Self::Arm64 => "arm64",
            Self::Armv7l => "armv7l",
            Self::Other(other) => other,
        }
    }
}

impl From<String> for Arch {
    fn from(id: String) -> Self {
        Self::from_identifier(&id)
    }
}

impl From<Arch> for String {
    fn from(arch: Arch) -> Self {
        arch.as_str().to_string()
    }
}

impl fmt::Display for Arch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How much the toolchain logs while resolving and packaging.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verbosity {
    /// Errors only
    #[default]
    Quiet,
    /// Everything, down to trace
    Verbose,
}

impl Verbosity {
    /// Build from the `verbose` request flag.
    #[must_use]
    pub fn from_flag(verbose: bool) -> Self {
        if verbose {
            Self::Verbose
        } else {
            Self::Quiet
        }
    }

    /// Whether verbose output was requested.
    #[must_use]
    pub fn is_verbose(self) -> bool {
        self == Self::Verbose
    }

    /// Default `tracing` filter directive for this verbosity.
    #[must_use]
    pub fn filter_directive(self) -> &'static str {
        match self {
            Self::Quiet => "error",
            Self::Verbose => "trace",
        }
    }
}
