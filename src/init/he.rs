use rand::Rng;
use rand_distr::{Distribution, Normal};
use serde::{Deserialize, Serialize};

use crate::error::InitError;
use crate::init::Initialiser;
use crate::tensor::cube::Cube;
use crate::tensor::matrix::Matrix;

/// He (Kaiming) initialisation: zero-mean gaussian with
/// std = sqrt(2 / fan_in), suited to ReLU style activations. The number of
/// columns is taken as fan in, with weights laid out output x input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct HeInit;

impl HeInit {
    pub fn new() -> Self {
        Self
    }

    fn distribution(fan_in: usize) -> Result<Normal<f32>, InitError> {
        let std_dev = (2.0 / fan_in as f32).sqrt();
        Normal::new(0.0, std_dev).map_err(|e| {
            InitError::InvalidDistribution(format!("he with fan_in {}: {}", fan_in, e))
        })
    }

    fn fill<R: Rng + ?Sized>(
        dest: &mut [f32],
        fan_in: usize,
        rng: &mut R,
    ) -> Result<(), InitError> {
        let dist = Self::distribution(fan_in)?;
        for w in dest {
            *w = dist.sample(rng);
        }
        Ok(())
    }
}

impl Initialiser for HeInit {
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

        let fan_in = w.cols();
        Self::fill(w.as_mut_slice(), fan_in, rng)
    }

    fn init<R: Rng + ?Sized>(&self, w: &mut Matrix, rng: &mut R) -> Result<(), InitError> {
        if w.is_empty() {
            return Err(InitError::EmptyTensor("matrix"));
        }

        let fan_in = w.cols();
        Self::fill(w.as_mut_slice(), fan_in, rng)
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

        let fan_in = w.cols();
        for i in 0..w.slices() {
            Self::fill(w.slice_mut(i), fan_in, rng)?;
        }
        Ok(())
    }

    fn init_cube<R: Rng + ?Sized>(&self, w: &mut Cube, rng: &mut R) -> Result<(), InitError> {
        if w.is_empty() {
            return Err(InitError::EmptyTensor("cube"));
        }

        let fan_in = w.cols();
        for i in 0..w.slices() {
            Self::fill(w.slice_mut(i), fan_in, rng)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn std_tracks_fan_in() {
        let mut rng = StdRng::seed_from_u64(21);
        let mut w = Matrix::new();
        HeInit::new().init_sized(&mut w, 64, 200, &mut rng).unwrap();

        let n = w.len() as f32;
        let mean = w.as_slice().iter().sum::<f32>() / n;
        let var = w.as_slice().iter().map(|&v| (v - mean) * (v - mean)).sum::<f32>() / n;
        let expected = (2.0 / 200.0_f32).sqrt();

        assert!(mean.abs() < 0.02);
        assert!((var.sqrt() - expected).abs() < expected * 0.2);
    }

    #[test]
    fn in_place_on_empty_fails() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut w = Matrix::new();
        assert_eq!(
            HeInit::new().init(&mut w, &mut rng).unwrap_err(),
            InitError::EmptyTensor("matrix")
        );
    }
}
