//! Typescript scrubbing core.
//!
//! Turns the raw character stream of a terminal capture into the text a
//! human saw on screen. The work happens in a strict two-stage pipeline:
//!
//! 1. [`strip_escapes`] deletes terminal escape sequences (CSI, OSC and
//!    single-character escapes), leaving display characters plus any loose
//!    backspace and bell characters.
//! 2. [`replay`] feeds the stripped stream through a virtual write cursor,
//!    applying backspaces destructively and filtering bells.
//!
//! Both stages are pure: fresh state per call, no I/O, no failure modes.
//! The caller decides what a "call" covers - a single line or a whole file
//! buffer - and owns decoding and writing.

mod replay;
mod strip;

pub use replay::replay;
pub use strip::strip_escapes;

/// Flags controlling which control characters survive scrubbing.
///
/// Defaults scrub everything. Keeping backspaces shows text that was typed
/// and then erased (accidental paste of a password, for instance); keeping
/// bells shows where tab completion fired.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CleanOptions {
    /// Treat BACKSPACE as data instead of replaying it.
    pub keep_backspace: bool,
    /// Keep BELL characters in the output.
    pub keep_bell: bool,
}

/// Scrubs one chunk of captured terminal text.
///
/// Strips escape sequences, then replays the remainder through the cursor
/// buffer. Any input is accepted; malformed escape sequences simply fail to
/// match and pass through as a bare ESC.
pub fn clean(input: &str, opts: &CleanOptions) -> String {
    replay(&strip_escapes(input), opts)
}
