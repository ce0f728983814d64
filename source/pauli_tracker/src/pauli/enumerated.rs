// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

use super::{tableau_encoding, InvalidEncoding, Pauli};

/// A Pauli operator as a fieldless enum.
///
/// The discriminants match [`tableau_encoding`], so casting with `as u8`
/// yields the encoding directly.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum PauliEnum {
    #[default]
    I = tableau_encoding::I as isize,
    Z = tableau_encoding::Z as isize,
    X = tableau_encoding::X as isize,
    Y = tableau_encoding::Y as isize,
}

impl Pauli for PauliEnum {
    fn new_product(x: bool, z: bool) -> Self {
        match (x, z) {
            (false, false) => Self::I,
            (false, true) => Self::Z,
            (true, false) => Self::X,
            (true, true) => Self::Y,
        }
    }

    fn x(&self) -> bool {
        matches!(self, Self::X | Self::Y)
    }

    fn z(&self) -> bool {
        matches!(self, Self::Z | Self::Y)
    }

    fn set_x(&mut self, to: bool) {
        *self = Self::new_product(to, self.z());
    }

    fn set_z(&mut self, to: bool) {
        *self = Self::new_product(self.x(), to);
    }

    fn tableau_encoding(&self) -> u8 {
        *self as u8
    }

    fn h(&mut self) {
        *self = match self {
            Self::I => Self::I,
            Self::Z => Self::X,
            Self::X => Self::Z,
            Self::Y => Self::Y,
        };
    }

    fn s(&mut self) {
        *self = match self {
            Self::I => Self::I,
            Self::Z => Self::Z,
            Self::X => Self::Y,
            Self::Y => Self::X,
        };
    }

    fn sx(&mut self) {
        *self = match self {
            Self::I => Self::I,
            Self::Z => Self::Y,
            Self::X => Self::X,
            Self::Y => Self::Z,
        };
    }
}

impl TryFrom<u8> for PauliEnum {
    type Error = InvalidEncoding;

    fn try_from(encoding: u8) -> Result<Self, Self::Error> {
        match encoding {
            tableau_encoding::I => Ok(Self::I),
            tableau_encoding::Z => Ok(Self::Z),
            tableau_encoding::X => Ok(Self::X),
            tableau_encoding::Y => Ok(Self::Y),
            _ => Err(InvalidEncoding(encoding)),
        }
    }
}

impl From<PauliEnum> for u8 {
    fn from(pauli: PauliEnum) -> u8 {
        pauli.tableau_encoding()
    }
}

impl Display for PauliEnum {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::I => "I",
            Self::Z => "Z",
            Self::X => "X",
            Self::Y => "Y",
        };
        write!(formatter, "{name}")
    }
}
