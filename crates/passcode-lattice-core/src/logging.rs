//! Logging facilities for Passcode Lattice.
//!
//! Passcode Lattice uses the `tracing` crate for instrumentation. To see logs,
//! install a tracing subscriber in your application:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("passcode_lattice=debug,passcode_lattice_core::timer=trace")
//!     .init();
//! ```

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Timer system target.
    pub const TIMER: &str = "passcode_lattice_core::timer";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "passcode_lattice_core::signal";
    /// Password widget target (layout, reveal, input).
    pub const PASSWORD: &str = "passcode_lattice::password";
}
