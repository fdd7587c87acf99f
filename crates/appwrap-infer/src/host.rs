//! Host operating system and architecture detection.

use crate::error::{InferError, Result};
use appwrap_core::{Arch, Platform};

/// Synchronous inspection of the machine the packager runs on.
///
/// Used to default the target platform and architecture when a request
/// leaves them out.
pub trait HostInspector: Send + Sync {
    /// Platform of the host.
    fn platform(&self) -> Result<Platform>;

    /// CPU architecture of the host.
    fn arch(&self) -> Result<Arch>;
}

/// Inspects the current process via `std::env::consts`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalHost;

impl HostInspector for LocalHost {
    fn platform(&self) -> Result<Platform> {
        platform_from_os(std::env::consts::OS)
    }

    fn arch(&self) -> Result<Arch> {
        arch_from_target(std::env::consts::ARCH)
    }
}

/// Map a Rust target OS name to a packager platform.
pub fn platform_from_os(os: &str) -> Result<Platform> {
    match os {
        "macos" => Ok(Platform::Darwin),
        "windows" => Ok(Platform::Win32),
        "linux" => Ok(Platform::Linux),
        other => Err(InferError::UnsupportedHost(format!("platform {other}"))),
    }
}

/// Map a Rust target architecture name to a packager architecture.
pub fn arch_from_target(arch: &str) -> Result<Arch> {
    match arch {
        "x86" => Ok(Arch::Ia32),
        "x86_64" => Ok(Arch::X64),
        "aarch64" => Ok(Arch::Arm64),
        "arm" => Ok(Arch::Armv7l),
        other => Err(InferError::UnsupportedHost(format!("architecture {other}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_mapping() {
        assert_eq!(platform_from_os("macos").expect("macos"), Platform::Darwin);
        assert_eq!(platform_from_os("windows").expect("windows"), Platform::Win32);
        assert_eq!(platform_from_os("linux").expect("linux"), Platform::Linux);
        assert!(matches!(
            platform_from_os("freebsd"),
            Err(InferError::UnsupportedHost(_))
        ));
    }

    #[test]
    fn test_arch_mapping() {
        assert_eq!(arch_from_target("x86_64").expect("x86_64"), Arch::X64);
        assert_eq!(arch_from_target("x86").expect("x86"), Arch::Ia32);
        assert_eq!(arch_from_target("aarch64").expect("aarch64"), Arch::Arm64);
        assert!(matches!(
            arch_from_target("riscv64"),
            Err(InferError::UnsupportedHost(_))
        ));
    }
}
