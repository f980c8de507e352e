use rand::Rng;
use rand::distr::{Distribution, Uniform};
use serde::{Deserialize, Serialize};

use crate::error::InitError;
use crate::init::Initialiser;
use crate::tensor::cube::Cube;
use crate::tensor::matrix::Matrix;

/// Glorot (Xavier) uniform initialisation: draws from
/// (-limit, limit) with limit = sqrt(6 / (fan_in + fan_out)), suited to
/// sigmoid and tanh activations. Fan in is the column count, fan out the
/// row count.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GlorotInit;

impl GlorotInit {
    pub fn new() -> Self {
        Self
    }

    fn distribution(fan_in: usize, fan_out: usize) -> Result<Uniform<f32>, InitError> {
        let limit = (6.0 / (fan_in + fan_out) as f32).sqrt();
        Uniform::new(-limit, limit).map_err(|e| {
            InitError::InvalidDistribution(format!(
                "glorot with fan_in {} and fan_out {}: {}",
                fan_in, fan_out, e
            ))
        })
    }

    fn fill<R: Rng + ?Sized>(
        dest: &mut [f32],
        fan_in: usize,
        fan_out: usize,
        rng: &mut R,
    ) -> Result<(), InitError> {
        let dist = Self::distribution(fan_in, fan_out)?;
        for w in dest {
            *w = dist.sample(rng);
        }
        Ok(())
    }
}

impl Initialiser for GlorotInit {
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

        let (fan_in, fan_out) = (w.cols(), w.rows());
        Self::fill(w.as_mut_slice(), fan_in, fan_out, rng)
    }

    fn init<R: Rng + ?Sized>(&self, w: &mut Matrix, rng: &mut R) -> Result<(), InitError> {
        if w.is_empty() {
            return Err(InitError::EmptyTensor("matrix"));
        }

        let (fan_in, fan_out) = (w.cols(), w.rows());
        Self::fill(w.as_mut_slice(), fan_in, fan_out, rng)
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

        let (fan_in, fan_out) = (w.cols(), w.rows());
        for i in 0..w.slices() {
            Self::fill(w.slice_mut(i), fan_in, fan_out, rng)?;
        }
        Ok(())
    }

    fn init_cube<R: Rng + ?Sized>(&self, w: &mut Cube, rng: &mut R) -> Result<(), InitError> {
        if w.is_empty() {
            return Err(InitError::EmptyTensor("cube"));
        }

        let (fan_in, fan_out) = (w.cols(), w.rows());
        for i in 0..w.slices() {
            Self::fill(w.slice_mut(i), fan_in, fan_out, rng)?;
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
    fn values_stay_within_limit() {
        let mut rng = StdRng::seed_from_u64(13);
        let mut w = Matrix::new();
        GlorotInit::new()
            .init_sized(&mut w, 30, 20, &mut rng)
            .unwrap();

        let limit = (6.0 / 50.0_f32).sqrt();
        assert_eq!((w.rows(), w.cols()), (30, 20));
        assert!(w.as_slice().iter().all(|&v| v >= -limit && v < limit));
    }

    #[test]
    fn cube_slices_share_limit() {
        let mut rng = StdRng::seed_from_u64(17);
        let mut w = Cube::new();
        GlorotInit::new()
            .init_cube_sized(&mut w, 10, 10, 4, &mut rng)
            .unwrap();

        let limit = (6.0 / 20.0_f32).sqrt();
        assert_eq!(w.slices(), 4);
        assert!(w.as_slice().iter().all(|&v| v.abs() <= limit));
    }

    #[test]
    fn in_place_on_empty_fails() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut w = Cube::new();
        assert_eq!(
            GlorotInit::new().init_cube(&mut w, &mut rng).unwrap_err(),
            InitError::EmptyTensor("cube")
        );
    }
}
