//! Game error types.

use derive_more::{Display, Error};

/// Errors raised while broadcasting state to observers.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum GameError {
    /// An observer was registered without overriding [`Observer::update`].
    ///
    /// [`Observer::update`]: crate::Observer::update
    #[display("Observer '{observer}' does not implement update")]
    NotImplemented {
        /// Name of the offending observer.
        observer: String,
    },
}

impl GameError {
    /// Creates a [`GameError::NotImplemented`] for the named observer.
    pub fn not_implemented(observer: impl Into<String>) -> Self {
        Self::NotImplemented {
            observer: observer.into(),
        }
    }
}
