// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::mem;

use serde::{Deserialize, Serialize};

use super::{Pauli, PauliTuple};
use crate::boolean_vector::BooleanVector;

/// A stack of encoded Paulis for one qubit, one per tracked frame.
///
/// The X parts of all frames form one bit row and the Z parts the other, so
/// a Clifford conjugation acts on every frame at once through a fixed, short
/// sequence of whole-row operations; this is the same algebra as on a single
/// [`Pauli`], distributed by bitwise XOR.
///
/// At rest both rows have the same length. The rows may disagree while a
/// caller is resizing them, but every row operation here debug-asserts the
/// invariant through the underlying vectors.
#[must_use]
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct PauliStack<B> {
    x: B,
    z: B,
}

impl<B: BooleanVector> PauliStack<B> {
    pub fn new() -> Self {
        Self::default()
    }

    /// A stack of `length` identity frames.
    pub fn zeros(length: usize) -> Self {
        Self {
            x: B::zeros(length),
            z: B::zeros(length),
        }
    }

    /// Reassembles a stack from its rows.
    pub fn from_rows(x: B, z: B) -> Self {
        Self { x, z }
    }

    /// The X row.
    #[must_use]
    pub fn x(&self) -> &B {
        &self.x
    }

    /// The Z row.
    #[must_use]
    pub fn z(&self) -> &B {
        &self.z
    }

    pub fn x_mut(&mut self) -> &mut B {
        &mut self.x
    }

    pub fn z_mut(&mut self) -> &mut B {
        &mut self.z
    }

    /// Appends one frame.
    pub fn push(&mut self, frame: PauliTuple) {
        self.x.push(frame.x);
        self.z.push(frame.z);
    }

    /// Removes the last frame and returns it.
    pub fn pop(&mut self) -> Option<PauliTuple> {
        debug_assert_eq!(self.x.len(), self.z.len());
        Some(PauliTuple {
            x: self.x.pop()?,
            z: self.z.pop()?,
        })
    }

    /// The Pauli at `frame`, reading rows shorter than `frame + 1` as padded
    /// with trailing identities.
    #[must_use]
    pub fn get(&self, frame: usize) -> PauliTuple {
        PauliTuple {
            x: frame < self.x.len() && self.x.index(frame),
            z: frame < self.z.len() && self.z.index(frame),
        }
    }

    /// Grows both rows to at least `length` frames with identities.
    pub fn pad_to(&mut self, length: usize) {
        if self.x.len() < length {
            self.x.resize(length, false);
        }
        if self.z.len() < length {
            self.z.resize(length, false);
        }
    }

    /// Frame-wise Pauli multiplication.
    pub fn xor_assign(&mut self, other: &Self) {
        self.x.bitxor_assign(&other.x);
        self.z.bitxor_assign(&other.z);
    }

    /// Conjugation with the Hadamard gate on every frame.
    pub fn h(&mut self) {
        mem::swap(&mut self.x, &mut self.z);
    }

    /// Conjugation with the phase gate S on every frame.
    pub fn s(&mut self) {
        debug_assert_eq!(self.x.len(), self.z.len());
        self.z.bitxor_assign(&self.x);
    }

    /// Conjugation with the square root of X on every frame.
    pub fn sx(&mut self) {
        debug_assert_eq!(self.x.len(), self.z.len());
        self.x.bitxor_assign(&self.z);
    }

    /// Conjugation with the controlled X gate on every frame.
    pub fn cx(control: &mut Self, target: &mut Self) {
        target.x.bitxor_assign(&control.x);
        control.z.bitxor_assign(&target.z);
    }

    /// Conjugation with the controlled Y gate on every frame.
    pub fn cy(control: &mut Self, target: &mut Self) {
        // The control's Z row must pick up the pre-gate target rows.
        control.z.bitxor_assign(&target.x);
        control.z.bitxor_assign(&target.z);
        target.x.bitxor_assign(&control.x);
        target.z.bitxor_assign(&control.x);
    }

    /// Conjugation with the controlled Z gate on every frame.
    pub fn cz(first: &mut Self, second: &mut Self) {
        first.z.bitxor_assign(&second.x);
        second.z.bitxor_assign(&first.x);
    }

    /// Conjugation with the swap gate on every frame.
    pub fn swap(first: &mut Self, second: &mut Self) {
        mem::swap(&mut first.x, &mut second.x);
        mem::swap(&mut first.z, &mut second.z);
    }

    pub fn move_x_to_x(source: &mut Self, destination: &mut Self) {
        destination.x.bitxor_assign(&source.x);
        source.x.clear_bits();
    }

    pub fn move_x_to_z(source: &mut Self, destination: &mut Self) {
        destination.z.bitxor_assign(&source.x);
        source.x.clear_bits();
    }

    pub fn move_z_to_x(source: &mut Self, destination: &mut Self) {
        destination.x.bitxor_assign(&source.z);
        source.z.clear_bits();
    }

    pub fn move_z_to_z(source: &mut Self, destination: &mut Self) {
        destination.z.bitxor_assign(&source.z);
        source.z.clear_bits();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boolean_vector::BitVec;
    use crate::pauli::tableau_encoding;

    fn stack_of(encodings: &[u8]) -> PauliStack<BitVec> {
        let mut stack = PauliStack::new();
        for encoding in encodings {
            stack.push(PauliTuple::try_from(*encoding).expect("valid encoding"));
        }
        stack
    }

    #[test]
    fn push_pop_get() {
        let mut stack = stack_of(&[
            tableau_encoding::X,
            tableau_encoding::Y,
            tableau_encoding::Z,
        ]);
        assert_eq!(stack.get(1), PauliTuple::new_y());
        assert_eq!(stack.get(7), PauliTuple::new_i());
        assert_eq!(stack.pop(), Some(PauliTuple::new_z()));
        assert_eq!(stack.x().len(), 2);
        assert_eq!(stack.pop(), Some(PauliTuple::new_y()));
        assert_eq!(stack.pop(), Some(PauliTuple::new_x()));
        assert_eq!(stack.pop(), None);
    }

    #[test]
    fn gates_act_frame_wise() {
        let mut stack = stack_of(&[
            tableau_encoding::I,
            tableau_encoding::Z,
            tableau_encoding::X,
            tableau_encoding::Y,
        ]);
        stack.h();
        for (frame, expected) in [0, 2, 1, 3].into_iter().enumerate() {
            assert_eq!(stack.get(frame).tableau_encoding(), expected);
        }
        let mut stack = stack_of(&[
            tableau_encoding::I,
            tableau_encoding::Z,
            tableau_encoding::X,
            tableau_encoding::Y,
        ]);
        stack.s();
        for (frame, expected) in [0, 1, 3, 2].into_iter().enumerate() {
            assert_eq!(stack.get(frame).tableau_encoding(), expected);
        }
    }

    #[test]
    fn xor_assign_multiplies_frame_wise() {
        let mut left = stack_of(&[
            tableau_encoding::I,
            tableau_encoding::X,
            tableau_encoding::Y,
        ]);
        let right = stack_of(&[
            tableau_encoding::Z,
            tableau_encoding::X,
            tableau_encoding::Z,
        ]);
        left.xor_assign(&right);
        for (frame, expected) in [
            tableau_encoding::Z,
            tableau_encoding::I,
            tableau_encoding::X,
        ]
        .into_iter()
        .enumerate()
        {
            assert_eq!(left.get(frame).tableau_encoding(), expected);
        }
    }

    #[test]
    fn moves_clear_the_source_row() {
        let mut source = stack_of(&[tableau_encoding::Y, tableau_encoding::X]);
        let mut destination = stack_of(&[tableau_encoding::Z, tableau_encoding::I]);
        PauliStack::move_x_to_z(&mut source, &mut destination);
        assert_eq!(source.get(0), PauliTuple::new_z());
        assert_eq!(source.get(1), PauliTuple::new_i());
        assert_eq!(destination.get(0), PauliTuple::new_i());
        assert_eq!(destination.get(1), PauliTuple::new_z());
    }
}
