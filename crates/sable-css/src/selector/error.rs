//! Errors raised while assembling a selector.

use thiserror::Error;

use super::FragmentKind;

/// A fragment was rejected by the ordering or uniqueness rules.
///
/// The builder that produced this error should be discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelectorError {
    /// The fragment ranks lower than the one appended before it.
    #[error("{kind} fragment cannot follow {after} fragment")]
    OutOfOrder {
        /// Kind that was being appended.
        kind: FragmentKind,
        /// Kind of the previously appended fragment.
        after: FragmentKind,
    },

    /// An element, id or pseudo-element fragment was appended twice.
    #[error("{kind} fragment may appear only once in a selector")]
    DuplicateSingleton {
        /// Kind that was repeated.
        kind: FragmentKind,
    },
}
