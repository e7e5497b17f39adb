// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Abstract file access for persisted layout and theme data.

use alloc::string::String;
use alloc::vec::Vec;

/// Minimal file-system surface the toolkit's loaders run against.
///
/// The layout/input core itself performs no I/O; only the (swappable) layout
/// and theme loaders consume this, and tests substitute an in-memory
/// implementation.
pub trait FileSystem {
    /// Whether a file exists at `path`.
    fn exists(&self, path: &str) -> bool;
    /// Read the full contents of a file, or `None` if it cannot be read.
    fn read(&self, path: &str) -> Option<Vec<u8>>;
    /// Write the full contents of a file; `false` on failure.
    fn write(&mut self, path: &str, contents: &[u8]) -> bool;
    /// Join a directory and a relative path with the host's separator.
    fn join(&self, base: &str, relative: &str) -> String;
}
