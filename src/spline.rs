use nalgebra::{DVector, DVectorView};

use crate::{
    error::{InterpolationError, Result},
    evaluate::Evaluate,
    options::Boundary,
    samples::SampleIndex,
};

/// Cubic spline built from second derivatives of the interpolating function at every knot.
/// Holds one table of second derivatives per prepared column, in the order columns were given.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct SplineEvaluator {
    second_derivatives: Vec<DVector<f64>>,
}

impl SplineEvaluator {
    pub(crate) fn new<'a>(
        samples: &SampleIndex,
        columns: impl IntoIterator<Item = DVectorView<'a, f64>>,
        boundary: Boundary,
    ) -> Self {
        let second_derivatives = columns
            .into_iter()
            .map(|y| second_derivatives(samples, y, boundary))
            .collect();
        SplineEvaluator { second_derivatives }
    }

    /// Second derivatives table prepared for column at position `slot`.
    pub(crate) fn second_derivatives(&self, slot: usize) -> Option<&DVector<f64>> {
        self.second_derivatives.get(slot)
    }
}

impl Evaluate for SplineEvaluator {
    fn evaluate(
        &self,
        samples: &SampleIndex,
        interval: usize,
        q: f64,
        y: DVectorView<'_, f64>,
        slot: usize,
    ) -> Result<f64> {
        let y_sd = &self.second_derivatives[slot];
        let klo = interval;
        let khi = klo + 1;

        let h = samples[khi] - samples[klo];
        if h == 0.0 {
            return Err(InterpolationError::DegenerateInterval { klo, khi });
        }

        let a = (samples[khi] - q) / h;
        let b = (q - samples[klo]) / h;
        Ok(a * y[klo]
            + b * y[khi]
            + ((a * a * a - a) * y_sd[klo] + (b * b * b - b) * y_sd[khi]) * (h * h) / 6.0)
    }
}

/// Solves tridiagonal system for second derivatives of the natural or clamped cubic spline
/// passing through `(samples[i], y[i])`. Boundary derivative at or above the natural threshold
/// sets second derivative at that end to zero.
pub(crate) fn second_derivatives(samples: &SampleIndex, y: DVectorView<'_, f64>, boundary: Boundary) -> DVector<f64> {
    let x = samples.abscissas();
    let n = x.len().min(y.len());
    let mut y_sd = DVector::<f64>::zeros(n);
    if n < 2 {
        return y_sd;
    }
    let mut u = vec![0.0; n - 1];

    if !Boundary::is_natural(boundary.first) {
        y_sd[0] = -0.5;
        u[0] = (3.0 / (x[1] - x[0])) * ((y[1] - y[0]) / (x[1] - x[0]) - boundary.first);
    }

    // decomposition loop of the tridiagonal algorithm
    for i in 1..n - 1 {
        let sig = (x[i] - x[i - 1]) / (x[i + 1] - x[i - 1]);
        let p = sig * y_sd[i - 1] + 2.0;
        y_sd[i] = (sig - 1.0) / p;
        u[i] = (y[i + 1] - y[i]) / (x[i + 1] - x[i]) - (y[i] - y[i - 1]) / (x[i] - x[i - 1]);
        u[i] = (6.0 * u[i] / (x[i + 1] - x[i - 1]) - sig * u[i - 1]) / p;
    }

    let (qn, un) = if Boundary::is_natural(boundary.last) {
        (0.0, 0.0)
    } else {
        let h = x[n - 1] - x[n - 2];
        (0.5, (3.0 / h) * (boundary.last - (y[n - 1] - y[n - 2]) / h))
    };
    y_sd[n - 1] = (un - qn * u[n - 2]) / (qn * y_sd[n - 2] + 1.0);

    // back substitution
    for k in (0..n - 1).rev() {
        y_sd[k] = y_sd[k] * y_sd[k + 1] + u[k];
    }

    log::trace!("second derivatives of {} knots computed", n);
    y_sd
}
