// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Persisting trackers and storages to files.
//!
//! Every public container in this crate derives serde's traits, so anything
//! can be written out and read back: a human-readable JSON form and a
//! compact, length-prefixed binary form. The two codecs are inverses on
//! every public value, and a [`PauliStack`](crate::pauli::PauliStack)
//! serializes its rows as sequences of booleans regardless of the backing
//! [`BooleanVector`](crate::boolean_vector::BooleanVector), so files do not
//! depend on the in-memory bit packing.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use log::debug;
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

/// The error type for persisting and loading values.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Binary(#[from] postcard::Error),
}

/// Writes `value` to `path` as JSON.
pub fn serialize<T: Serialize>(value: &T, path: impl AsRef<Path>) -> Result<(), Error> {
    let path = path.as_ref();
    debug!("serializing to {}", path.display());
    let writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer(writer, value)?;
    Ok(())
}

/// Reads a value from the JSON file at `path`.
pub fn deserialize<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T, Error> {
    let reader = BufReader::new(File::open(path)?);
    Ok(serde_json::from_reader(reader)?)
}

/// Writes `value` to `path` in the compact binary form.
pub fn serialize_binary<T: Serialize>(value: &T, path: impl AsRef<Path>) -> Result<(), Error> {
    let path = path.as_ref();
    debug!("serializing binary to {}", path.display());
    let bytes = postcard::to_stdvec(value)?;
    std::fs::write(path, bytes)?;
    Ok(())
}

/// Reads a value from the binary file at `path`.
pub fn deserialize_binary<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T, Error> {
    let bytes = std::fs::read(path)?;
    Ok(postcard::from_bytes(&bytes)?)
}
