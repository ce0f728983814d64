// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

use super::{InvalidEncoding, Pauli, PauliEnum};

/// A Pauli operator packed into the two low bits of a byte.
///
/// Bit 1 is the X part and bit 0 the Z part, so the byte always equals the
/// tableau encoding and the conjugations become single bit operations.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct PauliDense(u8);

impl PauliDense {
    pub const XMASK: u8 = 0b10;
    pub const ZMASK: u8 = 0b01;
}

impl Pauli for PauliDense {
    fn new_product(x: bool, z: bool) -> Self {
        Self(u8::from(x) << 1 | u8::from(z))
    }

    fn x(&self) -> bool {
        self.0 & Self::XMASK != 0
    }

    fn z(&self) -> bool {
        self.0 & Self::ZMASK != 0
    }

    fn set_x(&mut self, to: bool) {
        self.0 = self.0 & Self::ZMASK | u8::from(to) << 1;
    }

    fn set_z(&mut self, to: bool) {
        self.0 = self.0 & Self::XMASK | u8::from(to);
    }

    fn tableau_encoding(&self) -> u8 {
        self.0
    }

    fn xmask(&self) -> u8 {
        self.0 & Self::XMASK
    }

    fn zmask(&self) -> u8 {
        self.0 & Self::ZMASK
    }

    fn multiply(&mut self, other: &Self) {
        self.0 ^= other.0;
    }

    fn add_x(&mut self) {
        self.0 ^= Self::XMASK;
    }

    fn add_y(&mut self) {
        self.0 ^= Self::XMASK | Self::ZMASK;
    }

    fn add_z(&mut self) {
        self.0 ^= Self::ZMASK;
    }

    fn h(&mut self) {
        self.0 = self.0 >> 1 | (self.0 & Self::ZMASK) << 1;
    }

    fn s(&mut self) {
        self.0 ^= self.0 >> 1;
    }

    fn sx(&mut self) {
        self.0 ^= (self.0 & Self::ZMASK) << 1;
    }
}

impl TryFrom<u8> for PauliDense {
    type Error = InvalidEncoding;

    fn try_from(encoding: u8) -> Result<Self, Self::Error> {
        if encoding < 4 {
            Ok(Self(encoding))
        } else {
            Err(InvalidEncoding(encoding))
        }
    }
}

impl From<PauliDense> for u8 {
    fn from(pauli: PauliDense) -> u8 {
        pauli.0
    }
}

impl From<PauliEnum> for PauliDense {
    fn from(pauli: PauliEnum) -> Self {
        Self(pauli.tableau_encoding())
    }
}

impl Display for PauliDense {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match PauliEnum::try_from(self.0) {
            Ok(pauli) => write!(formatter, "{pauli}"),
            Err(_) => unreachable!("the byte is always a valid encoding"),
        }
    }
}
