use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::InitError;
use crate::init::Initialiser;
use crate::tensor::cube::Cube;
use crate::tensor::matrix::Matrix;

/// Sets every weight to a fixed value. Useful for bias vectors and tests.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ConstantInit {
    value: f32,
}

impl ConstantInit {
    pub fn new(value: f32) -> Self {
        Self { value }
    }

    pub fn value(&self) -> f32 {
        self.value
    }
}

impl Initialiser for ConstantInit {
    fn init_sized<R: Rng + ?Sized>(
        &self,
        w: &mut Matrix,
        rows: usize,
        cols: usize,
        _rng: &mut R,
    ) -> Result<(), InitError> {
        if w.is_empty() {
            w.resize(rows, cols);
        }

        w.as_mut_slice().fill(self.value);
        Ok(())
    }

    fn init<R: Rng + ?Sized>(&self, w: &mut Matrix, _rng: &mut R) -> Result<(), InitError> {
        if w.is_empty() {
            return Err(InitError::EmptyTensor("matrix"));
        }

        w.as_mut_slice().fill(self.value);
        Ok(())
    }

    fn init_cube_sized<R: Rng + ?Sized>(
        &self,
        w: &mut Cube,
        rows: usize,
        cols: usize,
        slices: usize,
        _rng: &mut R,
    ) -> Result<(), InitError> {
        if w.is_empty() {
            w.resize(rows, cols, slices);
        }

        w.as_mut_slice().fill(self.value);
        Ok(())
    }

    fn init_cube<R: Rng + ?Sized>(&self, w: &mut Cube, _rng: &mut R) -> Result<(), InitError> {
        if w.is_empty() {
            return Err(InitError::EmptyTensor("cube"));
        }

        w.as_mut_slice().fill(self.value);
        Ok(())
    }
}
