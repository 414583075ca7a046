use std::fmt;

/// One decoded grayscale frame, row-major
#[derive(Debug, Clone, PartialEq)]
pub struct PixelFrame {
    pub rows: u32,
    pub columns: u32,
    pub samples: Vec<f32>,
}

impl PixelFrame {
    pub fn new(rows: u32, columns: u32, samples: Vec<f32>) -> Self {
        Self {
            rows,
            columns,
            samples,
        }
    }

    /// Mean sample value, `0.0` for an empty frame
    pub fn mean(&self) -> f64 {
        if self.samples.is_empty() {
            return 0.0;
        }
        let sum: f64 = self.samples.iter().map(|&v| v as f64).sum();
        sum / self.samples.len() as f64
    }

    /// Sample at (`row`, `column`)
    pub fn get(&self, row: u32, column: u32) -> Option<f32> {
        if row >= self.rows || column >= self.columns {
            return None;
        }
        self.samples
            .get(row as usize * self.columns as usize + column as usize)
            .copied()
    }
}

/// How the pixel data of a prepared input is organised
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DicomMode {
    /// Single file, single frame
    TwoD,
    /// Several single-frame files stacked as slices
    ThreeD,
    /// Single multi-frame file
    Enhanced,
}

impl DicomMode {
    pub fn simple_name(&self) -> &'static str {
        match self {
            DicomMode::TwoD => "2D",
            DicomMode::ThreeD => "3D",
            DicomMode::Enhanced => "Enhanced",
        }
    }
}

impl fmt::Display for DicomMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.simple_name())
    }
}
