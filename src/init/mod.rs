pub mod constant;

pub mod gaussian;

pub mod glorot;

pub mod he;

use rand::Rng;

use crate::error::InitError;
use crate::tensor::cube::Cube;
use crate::tensor::matrix::Matrix;

/// Common surface for weight initialisation rules.
///
/// The sized entry points resize an empty target before filling; when the
/// target already has a shape the passed dimensions are advisory and the
/// existing shape wins. The in-place entry points require a shaped target
/// and fail with [`InitError::EmptyTensor`] before writing anything.
pub trait Initialiser {
    fn init_sized<R: Rng + ?Sized>(
        &self,
        w: &mut Matrix,
        rows: usize,
        cols: usize,
        rng: &mut R,
    ) -> Result<(), InitError>;

    fn init<R: Rng + ?Sized>(&self, w: &mut Matrix, rng: &mut R) -> Result<(), InitError>;

    fn init_cube_sized<R: Rng + ?Sized>(
        &self,
        w: &mut Cube,
        rows: usize,
        cols: usize,
        slices: usize,
        rng: &mut R,
    ) -> Result<(), InitError>;

    fn init_cube<R: Rng + ?Sized>(&self, w: &mut Cube, rng: &mut R) -> Result<(), InitError>;
}
