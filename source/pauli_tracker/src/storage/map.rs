// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::collections::hash_map::Entry;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::{Base, Full, InsertError, RemoveError};
use crate::QubitID;

/// A hash-map storage keyed by qubit ID.
///
/// Expected O(1) insertion, lookup and removal for any key, at the price of
/// an unspecified iteration order.
#[must_use]
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Map<T> {
    storage: FxHashMap<QubitID, T>,
}

impl<T> Map<T> {
    pub fn new() -> Self {
        Self {
            storage: FxHashMap::default(),
        }
    }
}

impl<T> Base for Map<T> {
    type Payload = T;

    fn insert(&mut self, qubit: QubitID, payload: T) -> Result<(), InsertError<T>> {
        match self.storage.entry(qubit) {
            Entry::Occupied(_) => Err(InsertError { qubit, payload }),
            Entry::Vacant(entry) => {
                entry.insert(payload);
                Ok(())
            }
        }
    }

    fn remove(&mut self, qubit: QubitID) -> Result<T, RemoveError> {
        self.storage.remove(&qubit).ok_or(RemoveError::NotFound(qubit))
    }

    fn get(&self, qubit: QubitID) -> Option<&T> {
        self.storage.get(&qubit)
    }

    fn get_mut(&mut self, qubit: QubitID) -> Option<&mut T> {
        self.storage.get_mut(&qubit)
    }

    fn get_two_mut(&mut self, first: QubitID, second: QubitID) -> Option<(&mut T, &mut T)> {
        if first == second {
            return None;
        }
        let [first_payload, second_payload] = self.storage.get_disjoint_mut([&first, &second]);
        Some((first_payload?, second_payload?))
    }

    fn len(&self) -> usize {
        self.storage.len()
    }
}

impl<T> Full for Map<T> {
    fn init(num_qubits: usize) -> Self
    where
        T: Default,
    {
        Self {
            storage: (0..num_qubits).map(|qubit| (qubit, T::default())).collect(),
        }
    }

    fn iter(&self) -> impl Iterator<Item = (QubitID, &T)> {
        self.storage.iter().map(|(&qubit, payload)| (qubit, payload))
    }

    fn iter_mut(&mut self) -> impl Iterator<Item = (QubitID, &mut T)> {
        self.storage.iter_mut().map(|(&qubit, payload)| (qubit, payload))
    }

    fn into_pairs(self) -> impl Iterator<Item = (QubitID, T)> {
        self.storage.into_iter()
    }
}

impl<T> FromIterator<(QubitID, T)> for Map<T> {
    fn from_iter<Iterator: IntoIterator<Item = (QubitID, T)>>(iterator: Iterator) -> Self {
        Self {
            storage: iterator.into_iter().collect(),
        }
    }
}
