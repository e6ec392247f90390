// Copyright 2024 linvec developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Build deterministic test vectors for linvec.

pub mod vector_builder;

pub use crate::vector_builder::{ElementGenerator, VectorBuilder};
