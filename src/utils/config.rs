//! Configuration and constants for the CLI.

/// Opcode that opens a binary pickle and carries its protocol version
pub const PROTO_OPCODE: u8 = 0x80;

/// Highest pickle protocol the loader reads
pub const HIGHEST_SUPPORTED_PROTOCOL: u8 = 4;

/// Protocol written by newer Pythons that the JSON consumers cannot load.
///
/// Refusing it is an expected outcome, reported through its own exit code.
pub const REFUSED_PROTOCOL: u8 = 5;

/// Exit status used when the input artifact uses the refused protocol
pub const UNSUPPORTED_PROTOCOL_EXIT_CODE: i32 = 2;

// Unit values that get a readable label in summaries
pub const MICROSECONDS: f64 = 1e-6;
pub const MILLISECONDS: f64 = 1e-3;
pub const SECONDS: f64 = 1.0;
