// Copyright 2024 linvec developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use linvec::Vector;

use num_traits::Num;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct VectorBuilder {
    len: usize,
    start: i32,
    generator: ElementGenerator,
}

/// How to generate elements
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ElementGenerator {
    /// `start, start + 1, start + 2, ...`
    Sequential,
    /// `start, start - 1, start + 2, start - 3, ...`
    Alternating,
    /// all zeros
    Zero,
}

impl Default for VectorBuilder {
    fn default() -> Self {
        Self::new(0)
    }
}

impl VectorBuilder {
    pub fn new(len: usize) -> Self {
        VectorBuilder {
            len,
            start: 0,
            generator: ElementGenerator::Sequential,
        }
    }

    /// Set the first element; ignored by `ElementGenerator::Zero`.
    pub fn start(mut self, start: i32) -> Self {
        self.start = start;
        self
    }

    pub fn generator(mut self, generator: ElementGenerator) -> Self {
        self.generator = generator;
        self
    }

    pub fn build<T>(self) -> Vector<T>
    where
        T: Num + Clone,
    {
        let one = T::one();
        let mut start = T::zero();
        for _ in 0..self.start.unsigned_abs() {
            start = if self.start < 0 {
                start - one.clone()
            } else {
                start + one.clone()
            };
        }
        let mut current = start.clone();
        let mut step = T::zero();
        Vector::from_fn(self.len, |i| {
            let ret = match self.generator {
                ElementGenerator::Zero => T::zero(),
                ElementGenerator::Sequential => current.clone(),
                ElementGenerator::Alternating if i % 2 == 1 => start.clone() - step.clone(),
                ElementGenerator::Alternating => start.clone() + step.clone(),
            };
            current = current.clone() + one.clone();
            step = step.clone() + one.clone();
            ret
        })
    }
}

#[test]
fn test_generators() {
    let a = VectorBuilder::new(4).build::<i32>();
    assert_eq!(a.as_slice(), &[0, 1, 2, 3]);

    let b = VectorBuilder::new(3).start(-1).build::<f64>();
    assert_eq!(b.as_slice(), &[-1., 0., 1.]);

    let c = VectorBuilder::new(4)
        .start(1)
        .generator(ElementGenerator::Alternating)
        .build::<i64>();
    assert_eq!(c.as_slice(), &[1, 0, 3, -2]);

    let z = VectorBuilder::new(2)
        .start(5)
        .generator(ElementGenerator::Zero)
        .build::<f32>();
    assert_eq!(z.as_slice(), &[0., 0.]);
}
