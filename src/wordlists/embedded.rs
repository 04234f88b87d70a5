//! Embedded word lists
//!
//! Word lists compiled into the binary at build time. Either list is empty
//! when its data file was absent at build time.

// Include generated word lists from build script
include!(concat!(env!("OUT_DIR"), "/answers.rs"));
include!(concat!(env!("OUT_DIR"), "/allowed.rs"));

/// Whether a solution list was embedded
#[must_use]
pub const fn has_answers() -> bool {
    ANSWERS_COUNT > 0
}
