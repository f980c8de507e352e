//! weight-init - Initialisation rules for neural network parameter tensors
//!
//! Each rule fills a weight matrix or a 3rd order weight tensor with values
//! drawn from its distribution. Rules take the random number generator as an
//! argument so callers control seeding.

mod error;

mod init;

mod tensor;

pub use error::InitError;
pub use init::{
    Initialiser, constant::ConstantInit, gaussian::GaussianInit, glorot::GlorotInit, he::HeInit,
};
pub use tensor::{cube::Cube, matrix::Matrix};
