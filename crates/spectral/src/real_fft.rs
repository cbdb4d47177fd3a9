use std::fmt;
use std::sync::Arc;

use ndarray::{Array1, Array2, ArrayView1, ArrayView2};
use num_complex::Complex64;
use rustfft::{Fft, FftPlanner};

use crate::SpectralError;

/// Number of non-negative frequency modes kept for a real signal of `n` points.
#[must_use]
pub const fn retained_modes(n: usize) -> usize {
    n / 2 + 1
}

/// Planned forward/inverse transform pair for real signals of a fixed length.
///
/// Planning is done once; the plans are immutable and shared behind `Arc`,
/// so cloning a `RealFft` is cheap.
#[derive(Clone)]
pub struct RealFft {
    len: usize,
    forward: Arc<dyn Fft<f64>>,
    inverse: Arc<dyn Fft<f64>>,
}

impl fmt::Debug for RealFft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RealFft").field("len", &self.len).finish_non_exhaustive()
    }
}

impl RealFft {
    /// Plan transforms over `len` grid points.
    ///
    /// # Errors
    ///
    /// Returns [`SpectralError::EmptyTransform`] when `len` is zero.
    pub fn new(len: usize) -> Result<Self, SpectralError> {
        if len == 0 {
            return Err(SpectralError::EmptyTransform);
        }
        let mut planner = FftPlanner::new();
        let forward = planner.plan_fft_forward(len);
        let inverse = planner.plan_fft_inverse(len);
        tracing::trace!(len, "planned real fft");
        Ok(Self { len, forward, inverse })
    }

    /// Grid size in physical space.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Length of the spectra produced by [`RealFft::rfft`].
    #[must_use]
    pub fn spectrum_len(&self) -> usize {
        retained_modes(self.len)
    }

    /// Forward transform. Matches `numpy.fft.rfft(signal)`.
    ///
    /// # Errors
    ///
    /// Returns [`SpectralError::LengthMismatch`] if the signal does not have
    /// exactly `len` samples.
    pub fn rfft(&self, signal: ArrayView1<'_, f64>) -> Result<Array1<Complex64>, SpectralError> {
        if signal.len() != self.len {
            return Err(SpectralError::LengthMismatch {
                expected: self.len,
                actual: signal.len(),
            });
        }
        let mut buffer: Vec<Complex64> = signal.iter().map(|&v| Complex64::new(v, 0.0)).collect();
        self.forward.process(&mut buffer);
        buffer.truncate(self.spectrum_len());
        Ok(Array1::from(buffer))
    }

    /// Inverse transform onto `len` points. Matches `numpy.fft.irfft(spectrum, n=len)`.
    ///
    /// Spectra shorter than `len/2 + 1` are zero padded, longer ones are
    /// truncated.
    #[must_use]
    pub fn irfft(&self, spectrum: ArrayView1<'_, Complex64>) -> Array1<f64> {
        let n = self.len;
        let half = n / 2;
        let mut buffer = vec![Complex64::new(0.0, 0.0); n];

        for (k, &c) in spectrum.iter().take(half + 1).enumerate() {
            if k == 0 || (n % 2 == 0 && k == half) {
                // Self-conjugate modes carry no imaginary part in a real signal.
                buffer[k] = Complex64::new(c.re, 0.0);
            } else {
                buffer[k] = c;
                buffer[n - k] = c.conj();
            }
        }

        self.inverse.process(&mut buffer);
        #[allow(clippy::cast_precision_loss)]
        let scale = 1.0 / n as f64;
        buffer.iter().map(|c| c.re * scale).collect()
    }

    /// Forward transform of every column. Matches `numpy.fft.rfft(matrix, axis=0)`.
    ///
    /// # Errors
    ///
    /// Returns [`SpectralError::LengthMismatch`] if the matrix does not have
    /// exactly `len` rows.
    pub fn rfft_columns(&self, matrix: ArrayView2<'_, f64>) -> Result<Array2<Complex64>, SpectralError> {
        let (rows, cols) = matrix.dim();
        if rows != self.len {
            return Err(SpectralError::LengthMismatch {
                expected: self.len,
                actual: rows,
            });
        }
        let mut out = Array2::<Complex64>::zeros((self.spectrum_len(), cols));
        for (j, column) in matrix.columns().into_iter().enumerate() {
            let spectrum = self.rfft(column)?;
            out.column_mut(j).assign(&spectrum);
        }
        Ok(out)
    }
}
