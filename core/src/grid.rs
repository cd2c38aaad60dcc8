use crate::error::{Result, TerrainError};

// Column-major storage: values[col * height + row]
#[derive(Debug, Clone, PartialEq)]
pub struct NoiseGrid {
    width: usize,
    height: usize,
    values: Vec<f64>,
}

impl NoiseGrid {
    pub fn filled(width: usize, height: usize, value: f64) -> Self {
        Self {
            width,
            height,
            values: vec![value; width * height],
        }
    }

    // Build by calling `f(col, row)` in column-major order.
    pub fn from_fn(width: usize, height: usize, mut f: impl FnMut(usize, usize) -> f64) -> Self {
        let mut values = Vec::with_capacity(width * height);
        for col in 0..width {
            for row in 0..height {
                values.push(f(col, row));
            }
        }
        Self {
            width,
            height,
            values,
        }
    }

    // Build from nested columns, indexed `[col][row]`.
    // Every column must have the same length.
    pub fn from_columns(columns: Vec<Vec<f64>>) -> Result<Self> {
        let width = columns.len();
        let height = columns.first().map_or(0, Vec::len);
        if let Some(bad) = columns.iter().find(|c| c.len() != height) {
            return Err(TerrainError::InvalidDimensions {
                width,
                height: bad.len(),
            });
        }
        Ok(Self {
            width,
            height,
            values: columns.into_iter().flatten().collect(),
        })
    }

    pub fn to_columns(&self) -> Vec<Vec<f64>> {
        if self.height == 0 {
            return vec![Vec::new(); self.width];
        }
        self.values.chunks(self.height).map(<[f64]>::to_vec).collect()
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[inline]
    pub fn get(&self, col: usize, row: usize) -> Option<f64> {
        if col < self.width && row < self.height {
            Some(self.values[col * self.height + row])
        } else {
            None
        }
    }

    // Callers inside the crate iterate within bounds
    #[inline]
    pub(crate) fn at(&self, col: usize, row: usize) -> f64 {
        self.values[col * self.height + row]
    }

    #[inline]
    pub(crate) fn at_mut(&mut self, col: usize, row: usize) -> &mut f64 {
        &mut self.values[col * self.height + row]
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    // Smallest and largest sample, `None` for an empty grid.
    pub fn min_max(&self) -> Option<(f64, f64)> {
        if self.values.is_empty() {
            return None;
        }
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for &v in &self.values {
            min = min.min(v);
            max = max.max(v);
        }
        Some((min, max))
    }
}
