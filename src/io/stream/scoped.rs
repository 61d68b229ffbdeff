//! Scoped seeks that always return the stream to where they started

use crate::error::Result;
use std::ops::{Deref, DerefMut};

/// A stream whose cursor can be queried and moved
pub trait Reposition {
    /// Current absolute position
    fn position(&mut self) -> Result<u64>;

    /// Move to an absolute position
    fn seek_to(&mut self, pos: u64) -> Result<()>;
}

/// Guard that seeks a stream to a target and restores the previous
/// position when dropped.
///
/// The guard dereferences to the wrapped stream, so all reads and writes
/// made through it happen at the target position. Restoration runs on
/// every exit path, including early returns through `?`.
///
/// ```rust,ignore
/// let mut at = reader.at(anchor + offset as u64)?;
/// let name = at.read_cstring()?;
/// // `reader` is back at the next table slot here
/// ```
pub struct Scoped<'a, S: Reposition> {
    stream: &'a mut S,
    saved: u64,
}

impl<'a, S: Reposition> Scoped<'a, S> {
    /// Remember the current position of `stream` and move it to `target`
    pub fn new(stream: &'a mut S, target: u64) -> Result<Self> {
        let saved = stream.position()?;
        stream.seek_to(target)?;
        Ok(Scoped { stream, saved })
    }

    /// Position that will be restored on drop
    pub fn saved_position(&self) -> u64 {
        self.saved
    }
}

impl<S: Reposition> Deref for Scoped<'_, S> {
    type Target = S;

    fn deref(&self) -> &S {
        self.stream
    }
}

impl<S: Reposition> DerefMut for Scoped<'_, S> {
    fn deref_mut(&mut self) -> &mut S {
        self.stream
    }
}

impl<S: Reposition> Drop for Scoped<'_, S> {
    fn drop(&mut self) {
        // Restore errors cannot leave a destructor; the next operation on
        // the stream reports them.
        if let Err(err) = self.stream.seek_to(self.saved) {
            tracing::error!("failed to restore stream position {:#X}: {}", self.saved, err);
        }
    }
}
