use std::f64::consts::PI;

use burgers::{oversampled_len, BurgersEnv, FourierNonlinearOp};
use ndarray::{Array1, Array2};
use pde::{compute_control_sup, Domain, NonlinearOp, PdeDynamics, PdeError};
use spectral::{Complex64, RealFft};

mod common;
use common::max_abs_diff;

/// Domain of length 2π so that wavenumbers are the mode indices.
fn unit_wavenumber_domain(n: usize) -> Domain {
    Domain::new(2.0 * PI, n)
}

fn sample(domain: &Domain, f: impl Fn(f64) -> f64) -> Array1<f64> {
    domain.coordinates().mapv(f)
}

#[test]
fn single_mode_matches_analytic_derivative_of_square() {
    let n = 32;
    let domain = unit_wavenumber_domain(n);
    let op = FourierNonlinearOp::new(&domain, &Array2::zeros((n, 1))).unwrap();
    let fft = RealFft::new(n).unwrap();

    let u = sample(&domain, |x| (3.0 * x).cos());
    let rhs = op.advection(fft.rfft(u.view()).unwrap().view()).unwrap();

    // -u u_x = 1.5 sin(6x), whose spectrum is -0.75 i n at mode 6.
    let mut expected = Array1::from_elem(17, Complex64::new(0.0, 0.0));
    expected[6] = Complex64::new(0.0, -0.75 * n as f64);
    assert!(max_abs_diff(&rhs, &expected) < 1e-9);
}

#[test]
fn band_limited_state_matches_physical_space_product() {
    let n = 32;
    let domain = unit_wavenumber_domain(n);
    let op = FourierNonlinearOp::new(&domain, &Array2::zeros((n, 2))).unwrap();
    let fft = RealFft::new(n).unwrap();

    let u = sample(&domain, |x| (2.0 * x).cos() + 0.5 * (5.0 * x).sin());
    let u_x = sample(&domain, |x| -2.0 * (2.0 * x).sin() + 2.5 * (5.0 * x).cos());
    let expected = fft.rfft((-&u * &u_x).view()).unwrap();

    let rhs = op.advection(fft.rfft(u.view()).unwrap().view()).unwrap();
    assert!(max_abs_diff(&rhs, &expected) < 1e-9);
}

#[test]
fn square_above_retained_band_does_not_alias() {
    let n = 16;
    let domain = unit_wavenumber_domain(n);
    let op = FourierNonlinearOp::new(&domain, &Array2::zeros((n, 1))).unwrap();
    let fft = RealFft::new(n).unwrap();

    // cos²(5x) = ½ + ½ cos(10x); mode 10 lies beyond the 9 retained modes.
    let u = sample(&domain, |x| (5.0 * x).cos());
    let u_hat = fft.rfft(u.view()).unwrap();

    // Squaring on the native grid folds mode 10 onto mode 6.
    let naive = fft.rfft(u.mapv(|v| v * v).view()).unwrap();
    assert!(naive[6].norm() > 1.0, "naive product should alias");

    let rhs = op.advection(u_hat.view()).unwrap();
    for (m, c) in rhs.iter().enumerate() {
        assert!(c.norm() < 1e-10, "aliased content at mode {m}: {c}");
    }
}

#[test]
fn odd_grid_uses_truncated_oversampling() {
    let n = 15;
    let domain = unit_wavenumber_domain(n);
    let op = FourierNonlinearOp::new(&domain, &Array2::zeros((n, 1))).unwrap();
    assert_eq!(oversampled_len(n), 22);
    assert_eq!(op.n_modes(), 8);

    let fft = RealFft::new(n).unwrap();
    let u = sample(&domain, |x| x.sin());
    let rhs = op.advection(fft.rfft(u.view()).unwrap().view()).unwrap();
    assert_eq!(rhs.len(), 8);
    assert!(rhs.iter().all(|c| c.re.is_finite() && c.im.is_finite()));
}

#[test]
fn control_forcing_is_spectrum_of_support_columns() {
    let domain = Domain::new(1.0, 64);
    let sup = compute_control_sup(&domain, 4, 0.2);
    let op = FourierNonlinearOp::new(&domain, &sup).unwrap();
    let fft = RealFft::new(64).unwrap();

    let mut action = Array1::<f64>::zeros(4);
    action[2] = 1.0;
    let forcing = op.control_forcing(action.view()).unwrap();
    let column = fft.rfft(sup.column(2)).unwrap();
    assert!(max_abs_diff(&forcing, &column) < 1e-12);

    let zero = op.control_forcing(Array1::<f64>::zeros(4).view()).unwrap();
    assert!(zero.iter().all(|c| c.norm() < f64::MIN_POSITIVE));
}

#[test]
fn forcing_is_linear_in_action() {
    let env = BurgersEnv::new(common::small_config()).unwrap();
    let op = env.fourier_nonlinear_op().unwrap();
    let u_hat = env.base().to_fourier(env.base().state().view()).unwrap();

    let a1 = Array1::from(vec![0.3, -1.2, 0.0, 2.5]);
    let a2 = Array1::from(vec![-0.7, 0.4, 1.1, -0.2]);
    let sum = &a1 + &a2;
    let zero = Array1::<f64>::zeros(4);

    let f = |a: &Array1<f64>| op.apply(u_hat.view(), a.view()).unwrap();
    let residual = f(&sum) - f(&a1) - (f(&a2) - f(&zero));
    let scale = f(&sum).iter().map(|c| c.norm()).fold(1.0, f64::max);
    assert!(residual.iter().all(|c| c.norm() < 1e-12 * scale));
}

#[test]
fn apply_is_advection_plus_forcing() {
    let env = BurgersEnv::new(common::small_config()).unwrap();
    let op = env.fourier_nonlinear_op().unwrap();
    let u_hat = env.base().to_fourier(env.base().state().view()).unwrap();
    let action = Array1::from(vec![1.0, 2.0, 3.0, 4.0]);

    let rhs = op.apply(u_hat.view(), action.view()).unwrap();
    let parts = op.advection(u_hat.view()).unwrap() + op.control_forcing(action.view()).unwrap();
    assert!(max_abs_diff(&rhs, &parts) < 1e-12);
}

#[test]
fn rejects_inputs_of_wrong_shape() {
    let env = BurgersEnv::new(common::small_config()).unwrap();
    let op = env.fourier_nonlinear_op().unwrap();
    let u_hat = env.base().to_fourier(env.base().state().view()).unwrap();

    let err = op.apply(u_hat.view(), Array1::<f64>::zeros(3).view()).unwrap_err();
    assert_eq!(
        err,
        PdeError::DimensionMismatch {
            name: "action",
            expected: 4,
            actual: 3
        }
    );

    let short = Array1::from_elem(32, Complex64::new(0.0, 0.0));
    let err = op.apply(short.view(), Array1::<f64>::zeros(4).view()).unwrap_err();
    assert!(matches!(err, PdeError::DimensionMismatch { name: "state_fourier", .. }));
}

#[test]
fn operator_depends_only_on_construction() {
    let env = BurgersEnv::new(common::small_config()).unwrap();
    let first = env.fourier_nonlinear_op().unwrap();
    let second = env.fourier_nonlinear_op().unwrap();
    assert_eq!(first.control_sup_fourier(), second.control_sup_fourier());
}
