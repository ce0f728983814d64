// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

use super::{InvalidEncoding, Pauli, PauliEnum};

/// A Pauli operator as an unpacked pair of booleans.
///
/// This is the form in which single frames enter and leave a
/// [`PauliStack`](super::PauliStack); everything else goes through the
/// [`Pauli`] trait defaults.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct PauliTuple {
    pub x: bool,
    pub z: bool,
}

impl Pauli for PauliTuple {
    fn new_product(x: bool, z: bool) -> Self {
        Self { x, z }
    }

    fn x(&self) -> bool {
        self.x
    }

    fn z(&self) -> bool {
        self.z
    }

    fn set_x(&mut self, to: bool) {
        self.x = to;
    }

    fn set_z(&mut self, to: bool) {
        self.z = to;
    }
}

impl TryFrom<u8> for PauliTuple {
    type Error = InvalidEncoding;

    fn try_from(encoding: u8) -> Result<Self, Self::Error> {
        if encoding < 4 {
            Ok(Self::new_product(encoding & 0b10 != 0, encoding & 0b01 != 0))
        } else {
            Err(InvalidEncoding(encoding))
        }
    }
}

impl From<PauliEnum> for PauliTuple {
    fn from(pauli: PauliEnum) -> Self {
        Self::new_product(pauli.x(), pauli.z())
    }
}

impl From<PauliTuple> for PauliEnum {
    fn from(pauli: PauliTuple) -> Self {
        Self::new_product(pauli.x, pauli.z)
    }
}

impl Display for PauliTuple {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", PauliEnum::from(*self))
    }
}
