// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! A tracker that keeps one running Pauli correction per qubit.

use serde::{Deserialize, Serialize};

use super::Tracker;
use crate::pauli::Pauli;
use crate::storage::{Base, Full, InsertError, RemoveError};
use crate::QubitID;

/// The scalar tracking engine.
///
/// Every gate reads the single encoded Pauli at the addressed qubit,
/// applies the tableau rule and writes it back; `track_*` multiplies the
/// correction onto the entry. Use this engine when only the net correction
/// matters, and [`Frames`](super::frames::Frames) when the contribution of
/// each measurement has to stay separable.
#[must_use]
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct Live<S> {
    storage: S,
}

impl<S> Live<S> {
    pub fn new() -> Self
    where
        S: Default,
    {
        Self {
            storage: S::default(),
        }
    }

    /// Wraps a pre-built storage.
    pub fn wrap(storage: S) -> Self {
        Self { storage }
    }

    #[must_use]
    pub fn as_storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }
}

impl<S> Live<S>
where
    S: Full,
    S::Payload: Pauli,
{
    /// A tracker holding the identity for qubits `0..num_qubits`.
    pub fn init(num_qubits: usize) -> Self {
        Self {
            storage: S::init(num_qubits),
        }
    }
}

impl<S> Tracker for Live<S>
where
    S: Base,
    S::Payload: Pauli,
{
    type Payload = S::Payload;

    fn new_qubit(&mut self, qubit: QubitID) -> Result<(), InsertError<Self::Payload>> {
        self.storage.insert(qubit, Self::Payload::default())
    }

    fn track_x(&mut self, qubit: QubitID) {
        if let Some(pauli) = self.storage.get_mut(qubit) {
            pauli.add_x();
        }
    }

    fn track_y(&mut self, qubit: QubitID) {
        if let Some(pauli) = self.storage.get_mut(qubit) {
            pauli.add_y();
        }
    }

    fn track_z(&mut self, qubit: QubitID) {
        if let Some(pauli) = self.storage.get_mut(qubit) {
            pauli.add_z();
        }
    }

    fn measure(&mut self, qubit: QubitID) -> Result<Self::Payload, RemoveError> {
        self.storage.remove(qubit)
    }

    fn h(&mut self, qubit: QubitID) {
        if let Some(pauli) = self.storage.get_mut(qubit) {
            pauli.h();
        }
    }

    fn s(&mut self, qubit: QubitID) {
        if let Some(pauli) = self.storage.get_mut(qubit) {
            pauli.s();
        }
    }

    fn sx(&mut self, qubit: QubitID) {
        if let Some(pauli) = self.storage.get_mut(qubit) {
            pauli.sx();
        }
    }

    fn cx(&mut self, control: QubitID, target: QubitID) {
        debug_assert_ne!(control, target);
        if let Some((control_pauli, target_pauli)) = self.storage.get_two_mut(control, target) {
            Pauli::cx(control_pauli, target_pauli);
        }
    }

    fn cy(&mut self, control: QubitID, target: QubitID) {
        debug_assert_ne!(control, target);
        if let Some((control_pauli, target_pauli)) = self.storage.get_two_mut(control, target) {
            Pauli::cy(control_pauli, target_pauli);
        }
    }

    fn cz(&mut self, first: QubitID, second: QubitID) {
        debug_assert_ne!(first, second);
        if let Some((first_pauli, second_pauli)) = self.storage.get_two_mut(first, second) {
            Pauli::cz(first_pauli, second_pauli);
        }
    }

    fn swap(&mut self, first: QubitID, second: QubitID) {
        debug_assert_ne!(first, second);
        if let Some((first_pauli, second_pauli)) = self.storage.get_two_mut(first, second) {
            Pauli::swap(first_pauli, second_pauli);
        }
    }

    fn move_x_to_x(&mut self, source: QubitID, destination: QubitID) {
        debug_assert_ne!(source, destination);
        if let Some((source_pauli, destination_pauli)) =
            self.storage.get_two_mut(source, destination)
        {
            Pauli::move_x_to_x(source_pauli, destination_pauli);
        }
    }

    fn move_x_to_z(&mut self, source: QubitID, destination: QubitID) {
        debug_assert_ne!(source, destination);
        if let Some((source_pauli, destination_pauli)) =
            self.storage.get_two_mut(source, destination)
        {
            Pauli::move_x_to_z(source_pauli, destination_pauli);
        }
    }

    fn move_z_to_x(&mut self, source: QubitID, destination: QubitID) {
        debug_assert_ne!(source, destination);
        if let Some((source_pauli, destination_pauli)) =
            self.storage.get_two_mut(source, destination)
        {
            Pauli::move_z_to_x(source_pauli, destination_pauli);
        }
    }

    fn move_z_to_z(&mut self, source: QubitID, destination: QubitID) {
        debug_assert_ne!(source, destination);
        if let Some((source_pauli, destination_pauli)) =
            self.storage.get_two_mut(source, destination)
        {
            Pauli::move_z_to_z(source_pauli, destination_pauli);
        }
    }
}
