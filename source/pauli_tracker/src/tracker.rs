// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! The gate surface shared by the tracking engines.
//!
//! A tracker consumes a Clifford circuit as a sequence of gate calls,
//! left-to-right, interleaved with `track_*` calls that record the Pauli
//! correction caused by a measurement, and `measure` calls that pull the
//! accumulated correction for a qubit back out. Gates never fail: a gate
//! addressing a qubit the storage does not hold is a no-op, since the
//! untracked correction is the identity and the identity is absorbing under
//! every conjugation here.

use crate::storage::{InsertError, RemoveError};
use crate::QubitID;

pub mod frames;
pub mod live;

/// The common operations of the tracking engines.
///
/// Only the distinct frame actions are required methods. Gates whose
/// conjugation acts identically on phase-free Paulis (for example `s`, its
/// adjoint and `hxy`) share one implementation, and the composite gates are
/// derived from their decompositions rather than spelled out.
pub trait Tracker {
    /// The per-qubit payload; also what a measurement returns.
    type Payload;

    /// Starts tracking the qubit, with no correction recorded on it.
    fn new_qubit(&mut self, qubit: QubitID) -> Result<(), InsertError<Self::Payload>>;

    /// Records an X correction on `qubit`.
    fn track_x(&mut self, qubit: QubitID);

    /// Records a Y correction on `qubit`.
    fn track_y(&mut self, qubit: QubitID);

    /// Records a Z correction on `qubit`.
    fn track_z(&mut self, qubit: QubitID);

    /// Removes and returns the correction tracked for `qubit`.
    fn measure(&mut self, qubit: QubitID) -> Result<Self::Payload, RemoveError>;

    /// Conjugation with the Hadamard gate: X and Z trade places.
    fn h(&mut self, qubit: QubitID);

    /// Conjugation with the phase gate S: X and Y trade places.
    fn s(&mut self, qubit: QubitID);

    /// Conjugation with the square root of X: Z and Y trade places.
    fn sx(&mut self, qubit: QubitID);

    /// The identity; exists for API symmetry.
    fn id(&mut self, _qubit: QubitID) {}

    /// Pauli X applied to the state; no action on the tracked frame.
    fn x(&mut self, _qubit: QubitID) {}

    /// Pauli Y applied to the state; no action on the tracked frame.
    fn y(&mut self, _qubit: QubitID) {}

    /// Pauli Z applied to the state; no action on the tracked frame.
    fn z(&mut self, _qubit: QubitID) {}

    /// The adjoint of S; acts like [`s`](Self::s) on the frame.
    fn sdg(&mut self, qubit: QubitID) {
        self.s(qubit);
    }

    /// The square root of Z, which is S.
    fn sz(&mut self, qubit: QubitID) {
        self.s(qubit);
    }

    /// The adjoint of the square root of Z; acts like [`s`](Self::s).
    fn szdg(&mut self, qubit: QubitID) {
        self.s(qubit);
    }

    /// The Hadamard on the XY plane: X and Y trade places, like
    /// [`s`](Self::s).
    fn hxy(&mut self, qubit: QubitID) {
        self.s(qubit);
    }

    /// The adjoint of the square root of X; acts like [`sx`](Self::sx).
    fn sxdg(&mut self, qubit: QubitID) {
        self.sx(qubit);
    }

    /// The Hadamard on the YZ plane: Z and Y trade places, like
    /// [`sx`](Self::sx).
    fn hyz(&mut self, qubit: QubitID) {
        self.sx(qubit);
    }

    /// The square root of Y: X and Z trade places, like [`h`](Self::h).
    fn sy(&mut self, qubit: QubitID) {
        self.h(qubit);
    }

    /// The adjoint of the square root of Y; acts like [`h`](Self::h).
    fn sydg(&mut self, qubit: QubitID) {
        self.h(qubit);
    }

    /// Conjugation with S·H, derived from its factors (conjugation applies
    /// the right factor first).
    fn sh(&mut self, qubit: QubitID) {
        self.h(qubit);
        self.s(qubit);
    }

    /// Conjugation with H·S, derived from its factors.
    fn hs(&mut self, qubit: QubitID) {
        self.s(qubit);
        self.h(qubit);
    }

    /// Conjugation with S·H·S, derived from its factors.
    fn shs(&mut self, qubit: QubitID) {
        self.s(qubit);
        self.h(qubit);
        self.s(qubit);
    }

    /// Conjugation with the controlled X gate: X spreads from the control
    /// to the target, Z from the target to the control.
    fn cx(&mut self, control: QubitID, target: QubitID);

    /// Conjugation with the controlled Y gate.
    fn cy(&mut self, control: QubitID, target: QubitID);

    /// Conjugation with the controlled Z gate; symmetric in its operands.
    fn cz(&mut self, first: QubitID, second: QubitID);

    /// Conjugation with the swap gate.
    fn swap(&mut self, first: QubitID, second: QubitID);

    /// Conjugation with the iswap gate, derived from
    /// swap · cz · (s ⊗ s).
    fn iswap(&mut self, first: QubitID, second: QubitID) {
        self.s(first);
        self.s(second);
        self.cz(first, second);
        self.swap(first, second);
    }

    /// Conjugation with the adjoint of iswap, derived from
    /// (sdg ⊗ sdg) · cz · swap; on the frame this equals
    /// [`iswap`](Self::iswap).
    fn iswapdg(&mut self, first: QubitID, second: QubitID) {
        self.swap(first, second);
        self.cz(first, second);
        self.s(first);
        self.s(second);
    }

    /// XORs the X row of `source` onto the X row of `destination`, then
    /// clears it on `source`.
    fn move_x_to_x(&mut self, source: QubitID, destination: QubitID);

    /// XORs the X row of `source` onto the Z row of `destination`, then
    /// clears it on `source`.
    fn move_x_to_z(&mut self, source: QubitID, destination: QubitID);

    /// XORs the Z row of `source` onto the X row of `destination`, then
    /// clears it on `source`.
    fn move_z_to_x(&mut self, source: QubitID, destination: QubitID);

    /// XORs the Z row of `source` onto the Z row of `destination`, then
    /// clears it on `source`.
    fn move_z_to_z(&mut self, source: QubitID, destination: QubitID);
}
