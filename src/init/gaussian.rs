use rand::Rng;
use rand_distr::{Distribution, Normal};
use serde::{Deserialize, Serialize};

use crate::error::InitError;
use crate::init::Initialiser;
use crate::tensor::cube::Cube;
use crate::tensor::matrix::Matrix;

/// Initialises weights with independent draws from a gaussian of
/// configurable mean and variance.
///
/// The two entry point families deliberately differ: [`Initialiser::init`]
/// and [`Initialiser::init_cube`] sample around the configured mean, while
/// [`Initialiser::init_sized`] and [`Initialiser::init_cube_sized`] always
/// sample around zero and only use the configured variance. Callers that
/// want a non-zero mean must size the target first and use the in-place
/// entry points.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GaussianInit {
    mean: f32,
    variance: f32,
}

impl Default for GaussianInit {
    fn default() -> Self {
        Self {
            mean: 0.0,
            variance: 1.0,
        }
    }
}

impl GaussianInit {
    /// Variance must be non-negative; a negative variance surfaces as
    /// `InvalidDistribution` when a fill is attempted.
    pub fn new(mean: f32, variance: f32) -> Self {
        Self { mean, variance }
    }

    pub fn mean(&self) -> f32 {
        self.mean
    }

    pub fn variance(&self) -> f32 {
        self.variance
    }

    fn distribution(&self, mean: f32) -> Result<Normal<f32>, InitError> {
        Normal::new(mean, self.variance.sqrt()).map_err(|e| {
            InitError::InvalidDistribution(format!(
                "gaussian with mean {} and variance {}: {}",
                mean, self.variance, e
            ))
        })
    }

    fn fill<R: Rng + ?Sized>(dest: &mut [f32], dist: &Normal<f32>, rng: &mut R) {
        for w in dest {
            *w = dist.sample(rng);
        }
    }
}

impl Initialiser for GaussianInit {
    fn init_sized<R: Rng + ?Sized>(
        &self,
        w: &mut Matrix,
        rows: usize,
        cols: usize,
        rng: &mut R,
    ) -> Result<(), InitError> {
        if w.is_empty() {
            w.resize(rows, cols);
        }

        // zero mean here, not the configured one
        let dist = self.distribution(0.0)?;
        Self::fill(w.as_mut_slice(), &dist, rng);
        Ok(())
    }

    fn init<R: Rng + ?Sized>(&self, w: &mut Matrix, rng: &mut R) -> Result<(), InitError> {
        if w.is_empty() {
            return Err(InitError::EmptyTensor("matrix"));
        }

        let dist = self.distribution(self.mean)?;
        Self::fill(w.as_mut_slice(), &dist, rng);
        Ok(())
    }

    fn init_cube_sized<R: Rng + ?Sized>(
        &self,
        w: &mut Cube,
        rows: usize,
        cols: usize,
        slices: usize,
        rng: &mut R,
    ) -> Result<(), InitError> {
        if w.is_empty() {
            w.resize(rows, cols, slices);
        }

        let dist = self.distribution(0.0)?;
        for i in 0..w.slices() {
            Self::fill(w.slice_mut(i), &dist, rng);
        }
        Ok(())
    }

    fn init_cube<R: Rng + ?Sized>(&self, w: &mut Cube, rng: &mut R) -> Result<(), InitError> {
        if w.is_empty() {
            return Err(InitError::EmptyTensor("cube"));
        }

        let dist = self.distribution(self.mean)?;
        for i in 0..w.slices() {
            Self::fill(w.slice_mut(i), &dist, rng);
        }
        Ok(())
    }
}
