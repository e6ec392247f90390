// Copyright 2024 linvec developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::error::Error;
use std::fmt;

/// An error related to vector length.
///
/// Only the `try_*` methods return it; the other operations treat a length
/// mismatch as a contract violation and panic.
#[derive(Clone, Debug)]
pub struct LenError {
    // we want to be able to change this representation later
    repr: ErrorKind,
}

impl LenError {
    /// Return the `ErrorKind` of this error.
    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.repr
    }

    /// Create a new `LenError`
    pub fn from_kind(error: ErrorKind) -> Self {
        from_kind(error)
    }
}

/// Error code for an error related to vector length.
///
/// This enumeration is not exhaustive. The representation of the enum
/// is not guaranteed.
#[non_exhaustive]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// operands have different lengths
    IncompatibleLength,
    /// a sub-vector extends past the end of its source
    OutOfBounds,
}

#[inline(always)]
pub fn from_kind(k: ErrorKind) -> LenError {
    LenError { repr: k }
}

impl PartialEq for LenError {
    #[inline(always)]
    fn eq(&self, rhs: &Self) -> bool {
        self.repr == rhs.repr
    }
}

impl Error for LenError {}

impl fmt::Display for LenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let description = match self.kind() {
            ErrorKind::IncompatibleLength => "incompatible lengths",
            ErrorKind::OutOfBounds => "out of bounds sub-vector",
        };
        write!(f, "LenError/{:?}: {}", self.kind(), description)
    }
}

/// Panic unless `lhs == rhs`; `op` names the operation in the message.
#[track_caller]
#[inline]
pub(crate) fn assert_same_len(op: &str, lhs: usize, rhs: usize) {
    if lhs != rhs {
        length_mismatch(op, lhs, rhs);
    }
}

#[cold]
#[track_caller]
#[inline(never)]
fn length_mismatch(op: &str, lhs: usize, rhs: usize) -> ! {
    panic!(
        "linvec: {}: {} ({} vs {})",
        op,
        from_kind(ErrorKind::IncompatibleLength),
        lhs,
        rhs
    )
}

/// Check that a sub-vector of length `n` fits in a vector of length `len`.
pub(crate) fn check_sub_len(n: usize, len: usize) -> Result<(), LenError> {
    if n > len {
        Err(from_kind(ErrorKind::OutOfBounds))
    } else {
        Ok(())
    }
}

#[cold]
#[track_caller]
#[inline(never)]
pub(crate) fn sub_len_out_of_bounds(op: &str, n: usize, len: usize) -> ! {
    panic!(
        "linvec: {}: {} ({} elements requested from a vector of length {})",
        op,
        from_kind(ErrorKind::OutOfBounds),
        n,
        len
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        let e = from_kind(ErrorKind::IncompatibleLength);
        assert_eq!(e.to_string(), "LenError/IncompatibleLength: incompatible lengths");
        let e = LenError::from_kind(ErrorKind::OutOfBounds);
        assert_eq!(e.kind(), ErrorKind::OutOfBounds);
        assert_eq!(e.to_string(), "LenError/OutOfBounds: out of bounds sub-vector");
    }

    #[test]
    #[should_panic(expected = "linvec: dot: LenError/IncompatibleLength")]
    fn mismatch_panics() {
        assert_same_len("dot", 2, 3);
    }

    #[test]
    fn sub_len() {
        assert!(check_sub_len(0, 0).is_ok());
        assert!(check_sub_len(3, 3).is_ok());
        assert_eq!(check_sub_len(4, 3), Err(from_kind(ErrorKind::OutOfBounds)));
    }
}
