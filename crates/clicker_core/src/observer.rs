//! The observer capability.

use crate::error::GameError;
use crate::signal::Signal;
use crate::state::Snapshot;

/// A subscriber to [`GameState`](crate::GameState) broadcasts.
///
/// Observers receive a full [`Snapshot`] after every broadcasting mutation and
/// may answer with at most one [`Signal`]. They must not hold a reference to
/// the state itself.
pub trait Observer {
    /// Short name used in logs and errors.
    fn name(&self) -> &str;

    /// Reacts to a state broadcast.
    ///
    /// The default implementation fails with [`GameError::NotImplemented`], so an
    /// observer that forgets to override it aborts the broadcast loudly.
    fn update(&self, snapshot: &Snapshot) -> Result<Option<Signal>, GameError> {
        let _ = snapshot;
        Err(GameError::not_implemented(self.name()))
    }
}
