//! Eigenvalue spectrum and implied timescales.

use nalgebra::{DMatrix, SymmetricEigen};

use crate::model::MarkovStateModel;

/// Eigenvalue magnitudes of the transition matrix, descending.
///
/// Reversible models are symmetrized with `sqrt(π_i / π_j)` so a symmetric
/// eigensolver applies and all eigenvalues come out real; non-reversible
/// models go through the complex eigensolver and contribute their norms.
pub(crate) fn eigenvalue_magnitudes(model: &MarkovStateModel) -> Vec<f64> {
    let t = model.transition_matrix();
    let n = t.nrows();

    let mut magnitudes: Vec<f64> = if model.reversible() {
        let pi = model.stationary_distribution();
        let mut sym = DMatrix::zeros(n, n);
        for i in 0..n {
            for j in 0..n {
                let scale = (pi[i].max(0.0) / pi[j].max(f64::MIN_POSITIVE)).sqrt();
                sym[(i, j)] = scale * t[(i, j)];
            }
        }
        // Average out floating-point asymmetry before the symmetric solver.
        let sym = (&sym + sym.transpose()).scale(0.5);
        SymmetricEigen::new(sym)
            .eigenvalues
            .iter()
            .map(|v| v.abs())
            .collect()
    } else {
        t.complex_eigenvalues().iter().map(|c| c.norm()).collect()
    };

    magnitudes.sort_by(|a, b| b.partial_cmp(a).unwrap_or(std::cmp::Ordering::Equal));
    magnitudes
}

/// The leading `min(k, n - 1)` implied timescales, descending.
pub(crate) fn implied_timescales(model: &MarkovStateModel, k: usize) -> Vec<f64> {
    let magnitudes = eigenvalue_magnitudes(model);
    magnitudes
        .iter()
        .skip(1) // stationary eigenvalue
        .take(k)
        .map(|&m| timescale_from_magnitude(m, model.lagtime()))
        .collect()
}

/// Maps a single eigenvalue magnitude to an implied timescale.
fn timescale_from_magnitude(magnitude: f64, lagtime: usize) -> f64 {
    if magnitude >= 1.0 - 1e-15 {
        f64::INFINITY
    } else if magnitude <= 0.0 {
        0.0
    } else {
        -(lagtime as f64) / magnitude.ln()
    }
}
