pub mod cube;

pub mod matrix;
