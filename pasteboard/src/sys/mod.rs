//! Platform-specific pasteboard backend implementations.

#[cfg(any(target_os = "windows", target_os = "linux"))]
/// Desktop platform backend.
pub mod desktop;
#[cfg(any(target_os = "windows", target_os = "linux"))]
pub use desktop::*;

#[cfg(target_os = "macos")]
/// Apple platform backend.
pub mod apple;
#[cfg(target_os = "macos")]
pub use apple::*;
