// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! This crate tracks Pauli corrections through Clifford circuits.
//!
//! A Clifford gate conjugates every element of the Pauli group into another
//! element of the Pauli group, so a Pauli correction caused by a mid-circuit
//! measurement never has to be applied to the state right away: it can be
//! pushed through the remaining Clifford gates as a classical two-bit
//! computation per qubit and applied once, at the end. The two engines here
//! do exactly that bookkeeping:
//!
//! - [`tracker::live::Live`] keeps one running encoded Pauli per qubit;
//! - [`tracker::frames::Frames`] keeps one Pauli *stack* per qubit, where
//!   frame i records the correction induced by the i-th tracked measurement,
//!   and gates act on all frames at once through bitwise vector operations.
//!
//! Both are generic over a [`storage::Base`] container mapping qubit IDs to
//! payloads, and the stacked representation is generic over the
//! [`boolean_vector::BooleanVector`] backing its bit rows.

pub mod boolean_vector;
pub mod pauli;
pub mod serialization;
pub mod storage;
pub mod tracker;

pub use boolean_vector::{BitVec, BooleanVector};
pub use pauli::{Pauli, PauliDense, PauliEnum, PauliStack, PauliTuple};
pub use storage::{Base, BufferedVector, Full, Map, MappedVector};
pub use tracker::{frames::Frames, live::Live, Tracker};

/// A qubit ID.
pub type QubitID = usize;
