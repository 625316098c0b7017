//! Process exit codes (BSD sysexits.h compatible where one fits)

/// Successful termination
pub const OK: i32 = 0;

/// Task not defined in any config file and not in the builtin defaults
pub const UNSET: i32 = 2;

/// Command line usage error
pub const USAGE: i32 = 64;

/// Data format error (malformed config file)
pub const DATAERR: i32 = 65;

/// Input/output error
pub const IOERR: i32 = 74;

/// Permission denied
pub const NOPERM: i32 = 77;

/// Configuration error (cannot determine config location)
pub const CONFIG: i32 = 78;
