// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Containers mapping qubit IDs to per-qubit tracker payloads.
//!
//! The trackers only care about two capability sets: [`Base`], the minimal
//! keyed access they need for gates and measurements, and [`Full`], which
//! adds iteration and bulk initialization. Three backends with different
//! trade-offs implement them:
//!
//! - [`Map`]: an FxHash map; any insertion or removal order, unspecified
//!   iteration order.
//! - [`BufferedVector`]: a plain vector where position k is qubit k; gaps
//!   are buffered with default payloads, removal only from the back.
//! - [`MappedVector`]: a dense vector plus a position index; any insertion
//!   or removal order while staying contiguous in memory.

use thiserror::Error;

use crate::QubitID;

mod buffered_vector;
mod map;
mod mapped_vector;

pub use buffered_vector::BufferedVector;
pub use map::Map;
pub use mapped_vector::MappedVector;

/// The error type for insertions into an already occupied position.
///
/// The rejected payload is handed back to the caller.
#[derive(Clone, Copy, Debug, Error, Eq, PartialEq)]
#[error("qubit {qubit} is already occupied")]
pub struct InsertError<T> {
    pub qubit: QubitID,
    pub payload: T,
}

/// The error type for failed removals.
#[derive(Clone, Copy, Debug, Error, Eq, PartialEq)]
pub enum RemoveError {
    /// There is no payload stored for the qubit.
    #[error("qubit {0} is not present in the storage")]
    NotFound(QubitID),
    /// The backend only supports removing the highest qubit
    /// ([`BufferedVector`]).
    #[error("qubit {0} is not the last qubit in the buffer")]
    NotLast(QubitID),
}

/// Keyed access to per-qubit payloads.
pub trait Base {
    type Payload;

    /// Installs `payload` at `qubit`.
    ///
    /// Backends differ in which keys are insertable (see the module
    /// documentation), but an occupied position is always an error.
    fn insert(
        &mut self,
        qubit: QubitID,
        payload: Self::Payload,
    ) -> Result<(), InsertError<Self::Payload>>;

    /// Removes and returns the payload at `qubit`.
    fn remove(&mut self, qubit: QubitID) -> Result<Self::Payload, RemoveError>;

    #[must_use]
    fn get(&self, qubit: QubitID) -> Option<&Self::Payload>;

    #[must_use]
    fn get_mut(&mut self, qubit: QubitID) -> Option<&mut Self::Payload>;

    /// Mutably borrows two distinct payloads at once.
    ///
    /// Returns `None` if either qubit is absent or if `first == second`.
    #[must_use]
    fn get_two_mut(
        &mut self,
        first: QubitID,
        second: QubitID,
    ) -> Option<(&mut Self::Payload, &mut Self::Payload)>;

    #[must_use]
    fn len(&self) -> usize;

    #[must_use]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// [`Base`] plus iteration and bulk initialization.
pub trait Full: Base + Sized {
    /// Creates a storage holding default payloads for qubits `0..num_qubits`.
    #[must_use]
    fn init(num_qubits: usize) -> Self
    where
        Self::Payload: Default;

    fn iter(&self) -> impl Iterator<Item = (QubitID, &Self::Payload)>;

    fn iter_mut(&mut self) -> impl Iterator<Item = (QubitID, &mut Self::Payload)>;

    /// Consumes the storage, yielding pairs in its iteration order.
    fn into_pairs(self) -> impl Iterator<Item = (QubitID, Self::Payload)>;
}
