use ndarray::Array1;

/// Diffusion operator in Fourier space: `-diffusivity * k²` per wavenumber.
///
/// Diffusion is diagonal in Fourier space, so the integrator applies this
/// vector element-wise to the spectral state.
#[must_use]
pub fn fourier_linear_op(wavenumbers: &Array1<f64>, diffusivity_constant: f64) -> Array1<f64> {
    wavenumbers.mapv(|k| -diffusivity_constant * k * k)
}
