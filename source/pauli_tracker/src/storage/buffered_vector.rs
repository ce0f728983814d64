// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::{Base, Full, InsertError, RemoveError};
use crate::QubitID;

/// A dense storage where position k is the payload of qubit k.
///
/// Keys below the current length are occupied by construction, so insertion
/// is only permitted at or beyond the end; inserting beyond the end buffers
/// the gap with default payloads. Removal is only permitted at the back,
/// since anything else would shift the remaining qubits.
#[must_use]
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(transparent)]
pub struct BufferedVector<T> {
    storage: Vec<T>,
}

impl<T> BufferedVector<T> {
    pub fn new() -> Self {
        Self { storage: Vec::new() }
    }
}

impl<T> From<Vec<T>> for BufferedVector<T> {
    fn from(storage: Vec<T>) -> Self {
        Self { storage }
    }
}

impl<T> From<BufferedVector<T>> for Vec<T> {
    fn from(buffered: BufferedVector<T>) -> Self {
        buffered.storage
    }
}

impl<T> FromIterator<T> for BufferedVector<T> {
    fn from_iter<Iterator: IntoIterator<Item = T>>(iterator: Iterator) -> Self {
        Self {
            storage: iterator.into_iter().collect(),
        }
    }
}

impl<T: Default> Base for BufferedVector<T> {
    type Payload = T;

    fn insert(&mut self, qubit: QubitID, payload: T) -> Result<(), InsertError<T>> {
        match qubit.cmp(&self.storage.len()) {
            Ordering::Less => Err(InsertError { qubit, payload }),
            Ordering::Equal => {
                self.storage.push(payload);
                Ok(())
            }
            Ordering::Greater => {
                self.storage.resize_with(qubit, T::default);
                self.storage.push(payload);
                Ok(())
            }
        }
    }

    fn remove(&mut self, qubit: QubitID) -> Result<T, RemoveError> {
        let length = self.storage.len();
        if qubit >= length {
            Err(RemoveError::NotFound(qubit))
        } else if qubit + 1 < length {
            Err(RemoveError::NotLast(qubit))
        } else {
            match self.storage.pop() {
                Some(payload) => Ok(payload),
                None => Err(RemoveError::NotFound(qubit)),
            }
        }
    }

    fn get(&self, qubit: QubitID) -> Option<&T> {
        self.storage.get(qubit)
    }

    fn get_mut(&mut self, qubit: QubitID) -> Option<&mut T> {
        self.storage.get_mut(qubit)
    }

    fn get_two_mut(&mut self, first: QubitID, second: QubitID) -> Option<(&mut T, &mut T)> {
        if first == second {
            return None;
        }
        let [first_payload, second_payload] =
            self.storage.get_disjoint_mut([first, second]).ok()?;
        Some((first_payload, second_payload))
    }

    fn len(&self) -> usize {
        self.storage.len()
    }
}

impl<T: Default> Full for BufferedVector<T> {
    fn init(num_qubits: usize) -> Self {
        let mut storage = Vec::new();
        storage.resize_with(num_qubits, T::default);
        Self { storage }
    }

    fn iter(&self) -> impl Iterator<Item = (QubitID, &T)> {
        self.storage.iter().enumerate()
    }

    fn iter_mut(&mut self) -> impl Iterator<Item = (QubitID, &mut T)> {
        self.storage.iter_mut().enumerate()
    }

    fn into_pairs(self) -> impl Iterator<Item = (QubitID, T)> {
        self.storage.into_iter().enumerate()
    }
}
