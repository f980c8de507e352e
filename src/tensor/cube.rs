/// Dense 3rd order f32 tensor, a stack of row-major matrices. Slices are
/// stored contiguously so each one can be handed out as a flat view.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Cube {
    rows: usize,
    cols: usize,
    slices: usize,
    data: Vec<f32>,
}

impl Cube {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn zeros(rows: usize, cols: usize, slices: usize) -> Self {
        Self {
            rows,
            cols,
            slices,
            data: vec![0.0; rows * cols * slices],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn slices(&self) -> usize {
        self.slices
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Set new dimensions, discarding any previous contents. All elements
    /// are zero afterwards.
    pub fn resize(&mut self, rows: usize, cols: usize, slices: usize) {
        self.rows = rows;
        self.cols = cols;
        self.slices = slices;
        self.data.clear();
        self.data.resize(rows * cols * slices, 0.0);
    }

    pub fn slice(&self, index: usize) -> &[f32] {
        let n = self.rows * self.cols;
        &self.data[index * n..(index + 1) * n]
    }

    pub fn slice_mut(&mut self, index: usize) -> &mut [f32] {
        let n = self.rows * self.cols;
        &mut self.data[index * n..(index + 1) * n]
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [f32] {
        &mut self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_cube_is_empty() {
        let c = Cube::new();
        assert!(c.is_empty());
        assert_eq!(c.slices(), 0);
    }

    #[test]
    fn slices_are_contiguous_views() {
        let mut c = Cube::zeros(2, 2, 3);
        c.slice_mut(1).fill(4.0);
        assert!(c.slice(0).iter().all(|&v| v == 0.0));
        assert!(c.slice(1).iter().all(|&v| v == 4.0));
        assert!(c.slice(2).iter().all(|&v| v == 0.0));
        assert_eq!(c.len(), 12);
    }

    #[test]
    fn resize_sets_shape() {
        let mut c = Cube::new();
        c.resize(3, 4, 2);
        assert_eq!((c.rows(), c.cols(), c.slices()), (3, 4, 2));
        assert_eq!(c.slice(1).len(), 12);
    }

    #[test]
    #[should_panic]
    fn slice_out_of_range_panics() {
        let c = Cube::zeros(2, 2, 2);
        c.slice(2);
    }
}
