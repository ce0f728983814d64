// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! A tracker that keeps the correction of every measurement separable.

use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::Tracker;
use crate::boolean_vector::BooleanVector;
use crate::pauli::{Pauli, PauliStack, PauliTuple};
use crate::storage::{Base, BufferedVector, Full, InsertError, RemoveError};
use crate::QubitID;

/// The stacked tracking engine.
///
/// Each qubit holds a [`PauliStack`] whose frame i is the correction caused
/// by the i-th tracked measurement, and a gate updates all frames of the
/// touched qubits with a fixed, short sequence of whole-row bit operations.
///
/// Stacks are padded lazily: `track_*` grows only the stack it writes to,
/// and every other stack catches up the first time a gate touches it. A
/// stack shorter than [`num_frames`](Self::num_frames) is therefore always
/// read as if padded with trailing identity frames.
#[must_use]
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct Frames<S> {
    storage: S,
    #[serde(rename = "frames_num")]
    num_frames: usize,
}

/// The error type of [`Frames::measure_and_store`]: either the measurement
/// or the insertion into the target storage can fail.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum StoreError<T> {
    #[error("measuring failed: {0}")]
    Measure(#[from] RemoveError),
    #[error("storing failed: {0}")]
    Store(#[from] InsertError<T>),
}

impl<S> Frames<S> {
    pub fn new() -> Self
    where
        S: Default,
    {
        Self {
            storage: S::default(),
            num_frames: 0,
        }
    }

    /// Wraps a pre-built storage as a tracker with `num_frames` frames.
    ///
    /// The caller is responsible for every stack in `storage` holding
    /// exactly `num_frames` frames; this is not validated here, but it is
    /// the precondition of [`stacked_transpose`](Self::stacked_transpose).
    pub fn new_unchecked(storage: S, num_frames: usize) -> Self {
        Self {
            storage,
            num_frames,
        }
    }

    /// The number of tracked frames, which is the number of recorded
    /// measurements.
    #[must_use]
    pub fn num_frames(&self) -> usize {
        self.num_frames
    }

    #[must_use]
    pub fn as_storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }
}

impl<B, S> Frames<S>
where
    B: BooleanVector,
    S: Base<Payload = PauliStack<B>>,
{
    /// Measures `qubit` and installs the returned stack in `storage` under
    /// the same qubit ID.
    pub fn measure_and_store<Target>(
        &mut self,
        qubit: QubitID,
        storage: &mut Target,
    ) -> Result<(), StoreError<PauliStack<B>>>
    where
        Target: Base<Payload = PauliStack<B>>,
    {
        let stack = self.measure(qubit)?;
        storage.insert(qubit, stack)?;
        Ok(())
    }

    // The stack of `qubit`, caught up to the current number of frames.
    fn stack_mut(&mut self, qubit: QubitID) -> Option<&mut PauliStack<B>> {
        let num_frames = self.num_frames;
        let stack = self.storage.get_mut(qubit)?;
        stack.pad_to(num_frames);
        Some(stack)
    }

    // Both stacks, caught up; `None` if the qubits are equal or absent.
    fn stack_pair_mut(
        &mut self,
        first: QubitID,
        second: QubitID,
    ) -> Option<(&mut PauliStack<B>, &mut PauliStack<B>)> {
        let num_frames = self.num_frames;
        let (first_stack, second_stack) = self.storage.get_two_mut(first, second)?;
        first_stack.pad_to(num_frames);
        second_stack.pad_to(num_frames);
        Some((first_stack, second_stack))
    }

    fn track_pauli(&mut self, qubit: QubitID, pauli: PauliTuple) {
        let num_frames = self.num_frames;
        if let Some(stack) = self.storage.get_mut(qubit) {
            stack.pad_to(num_frames);
            stack.push(pauli);
            self.num_frames += 1;
        }
    }
}

impl<B, S> Frames<S>
where
    B: BooleanVector,
    S: Full<Payload = PauliStack<B>>,
{
    /// A tracker over qubits `0..num_qubits` with no recorded frames.
    pub fn init(num_qubits: usize) -> Self {
        Self {
            storage: S::init(num_qubits),
            num_frames: 0,
        }
    }

    /// Measures every qubit, installing the stacks in `storage` under their
    /// qubit IDs, in the iteration order of the tracker's storage.
    ///
    /// Stops at the first insertion clash; the stacks that were not stored
    /// yet are lost with it.
    pub fn measure_and_store_all<Target>(
        &mut self,
        storage: &mut Target,
    ) -> Result<(), StoreError<PauliStack<B>>>
    where
        S: Default,
        Target: Base<Payload = PauliStack<B>>,
    {
        debug!("storing all {} tracked stacks", self.storage.len());
        for (qubit, stack) in std::mem::take(&mut self.storage).into_pairs() {
            storage.insert(qubit, stack)?;
        }
        Ok(())
    }

    /// Rotates the (qubit × frame) bit-matrix by 90 degrees.
    ///
    /// The result holds one [`PauliStack`] per frame, whose position p is
    /// the (x, z) pair of the p-th stack of the input, counted in the
    /// storage's iteration order; callers with sparse qubit IDs do their
    /// own remapping. Every input stack must hold exactly `num_frames`
    /// frames in both rows, which is the caller's responsibility (see
    /// [`new_unchecked`](Self::new_unchecked)). With a word-packed
    /// [`BooleanVector`] the rotation is word-wise.
    pub fn stacked_transpose(self, num_frames: usize) -> BufferedVector<PauliStack<B>> {
        debug!(
            "transposing {} stacks across {} frames",
            self.storage.len(),
            num_frames
        );
        let mut x_rows = Vec::with_capacity(self.storage.len());
        let mut z_rows = Vec::with_capacity(self.storage.len());
        for (_, stack) in self.storage.iter() {
            x_rows.push(stack.x());
            z_rows.push(stack.z());
        }
        let x_columns = B::transposed(&x_rows, num_frames);
        let z_columns = B::transposed(&z_rows, num_frames);
        x_columns
            .into_iter()
            .zip(z_columns)
            .map(|(x, z)| PauliStack::from_rows(x, z))
            .collect()
    }
}

impl<B, S> Tracker for Frames<S>
where
    B: BooleanVector,
    S: Base<Payload = PauliStack<B>>,
{
    type Payload = PauliStack<B>;

    fn new_qubit(&mut self, qubit: QubitID) -> Result<(), InsertError<Self::Payload>> {
        self.storage.insert(qubit, PauliStack::zeros(self.num_frames))
    }

    fn track_x(&mut self, qubit: QubitID) {
        self.track_pauli(qubit, PauliTuple::new_x());
    }

    fn track_y(&mut self, qubit: QubitID) {
        self.track_pauli(qubit, PauliTuple::new_y());
    }

    fn track_z(&mut self, qubit: QubitID) {
        self.track_pauli(qubit, PauliTuple::new_z());
    }

    /// Removes and returns the stack of `qubit` as stored; a stack shorter
    /// than [`num_frames`](Self::num_frames) is implicitly padded with
    /// trailing identity frames.
    fn measure(&mut self, qubit: QubitID) -> Result<Self::Payload, RemoveError> {
        self.storage.remove(qubit)
    }

    fn h(&mut self, qubit: QubitID) {
        if let Some(stack) = self.stack_mut(qubit) {
            stack.h();
        }
    }

    fn s(&mut self, qubit: QubitID) {
        if let Some(stack) = self.stack_mut(qubit) {
            stack.s();
        }
    }

    fn sx(&mut self, qubit: QubitID) {
        if let Some(stack) = self.stack_mut(qubit) {
            stack.sx();
        }
    }

    fn cx(&mut self, control: QubitID, target: QubitID) {
        debug_assert_ne!(control, target);
        if let Some((control_stack, target_stack)) = self.stack_pair_mut(control, target) {
            PauliStack::cx(control_stack, target_stack);
        }
    }

    fn cy(&mut self, control: QubitID, target: QubitID) {
        debug_assert_ne!(control, target);
        if let Some((control_stack, target_stack)) = self.stack_pair_mut(control, target) {
            PauliStack::cy(control_stack, target_stack);
        }
    }

    fn cz(&mut self, first: QubitID, second: QubitID) {
        debug_assert_ne!(first, second);
        if let Some((first_stack, second_stack)) = self.stack_pair_mut(first, second) {
            PauliStack::cz(first_stack, second_stack);
        }
    }

    fn swap(&mut self, first: QubitID, second: QubitID) {
        debug_assert_ne!(first, second);
        if let Some((first_stack, second_stack)) = self.stack_pair_mut(first, second) {
            PauliStack::swap(first_stack, second_stack);
        }
    }

    fn move_x_to_x(&mut self, source: QubitID, destination: QubitID) {
        debug_assert_ne!(source, destination);
        if let Some((source_stack, destination_stack)) = self.stack_pair_mut(source, destination) {
            PauliStack::move_x_to_x(source_stack, destination_stack);
        }
    }

    fn move_x_to_z(&mut self, source: QubitID, destination: QubitID) {
        debug_assert_ne!(source, destination);
        if let Some((source_stack, destination_stack)) = self.stack_pair_mut(source, destination) {
            PauliStack::move_x_to_z(source_stack, destination_stack);
        }
    }

    fn move_z_to_x(&mut self, source: QubitID, destination: QubitID) {
        debug_assert_ne!(source, destination);
        if let Some((source_stack, destination_stack)) = self.stack_pair_mut(source, destination) {
            PauliStack::move_z_to_x(source_stack, destination_stack);
        }
    }

    fn move_z_to_z(&mut self, source: QubitID, destination: QubitID) {
        debug_assert_ne!(source, destination);
        if let Some((source_stack, destination_stack)) = self.stack_pair_mut(source, destination) {
            PauliStack::move_z_to_z(source_stack, destination_stack);
        }
    }
}
