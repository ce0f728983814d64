// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::{Base, Full, InsertError, RemoveError};
use crate::QubitID;

/// A dense vector of payloads with a qubit-ID indirection on top.
///
/// Payloads stay contiguous in memory for arbitrary qubit IDs: `position`
/// maps a qubit to its slot in `frames` and `inverse_position` maps the slot
/// back. Removal swap-removes the slot and patches the indirection of the
/// payload that was swapped in, so the three parts always have equal length
/// and `position[inverse_position[i]] == i`.
#[must_use]
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct MappedVector<T> {
    frames: Vec<T>,
    position: FxHashMap<QubitID, usize>,
    inverse_position: Vec<QubitID>,
}

impl<T> MappedVector<T> {
    pub fn new() -> Self {
        Self {
            frames: Vec::new(),
            position: FxHashMap::default(),
            inverse_position: Vec::new(),
        }
    }

    /// The payloads in slot order, exposed for zero-copy interop.
    #[must_use]
    pub fn frames(&self) -> &[T] {
        &self.frames
    }

    /// The qubit ID stored in each slot, exposed for zero-copy interop.
    #[must_use]
    pub fn inverse_position(&self) -> &[QubitID] {
        &self.inverse_position
    }
}

impl<T> Base for MappedVector<T> {
    type Payload = T;

    fn insert(&mut self, qubit: QubitID, payload: T) -> Result<(), InsertError<T>> {
        if self.position.contains_key(&qubit) {
            return Err(InsertError { qubit, payload });
        }
        self.position.insert(qubit, self.frames.len());
        self.inverse_position.push(qubit);
        self.frames.push(payload);
        Ok(())
    }

    fn remove(&mut self, qubit: QubitID) -> Result<T, RemoveError> {
        let slot = self
            .position
            .remove(&qubit)
            .ok_or(RemoveError::NotFound(qubit))?;
        let payload = self.frames.swap_remove(slot);
        self.inverse_position.swap_remove(slot);
        if slot < self.frames.len() {
            self.position.insert(self.inverse_position[slot], slot);
        }
        Ok(payload)
    }

    fn get(&self, qubit: QubitID) -> Option<&T> {
        self.frames.get(*self.position.get(&qubit)?)
    }

    fn get_mut(&mut self, qubit: QubitID) -> Option<&mut T> {
        self.frames.get_mut(*self.position.get(&qubit)?)
    }

    fn get_two_mut(&mut self, first: QubitID, second: QubitID) -> Option<(&mut T, &mut T)> {
        let first_slot = *self.position.get(&first)?;
        let second_slot = *self.position.get(&second)?;
        let [first_payload, second_payload] = self
            .frames
            .get_disjoint_mut([first_slot, second_slot])
            .ok()?;
        Some((first_payload, second_payload))
    }

    fn len(&self) -> usize {
        self.frames.len()
    }
}

impl<T> Full for MappedVector<T> {
    fn init(num_qubits: usize) -> Self
    where
        T: Default,
    {
        let mut frames = Vec::new();
        frames.resize_with(num_qubits, T::default);
        Self {
            frames,
            position: (0..num_qubits).map(|qubit| (qubit, qubit)).collect(),
            inverse_position: (0..num_qubits).collect(),
        }
    }

    fn iter(&self) -> impl Iterator<Item = (QubitID, &T)> {
        self.inverse_position.iter().copied().zip(self.frames.iter())
    }

    fn iter_mut(&mut self) -> impl Iterator<Item = (QubitID, &mut T)> {
        self.inverse_position
            .iter()
            .copied()
            .zip(self.frames.iter_mut())
    }

    fn into_pairs(self) -> impl Iterator<Item = (QubitID, T)> {
        self.inverse_position.into_iter().zip(self.frames)
    }
}
