use nalgebra::DVectorView;

use crate::{error::Result, evaluate::Evaluate, samples::SampleIndex};

/// Piecewise linear interpolation between neighbouring samples.
///
/// Interval with equal abscissas evaluates to the ordinate of its left sample.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub(crate) struct LinearEvaluator;

impl Evaluate for LinearEvaluator {
    fn evaluate(
        &self,
        samples: &SampleIndex,
        interval: usize,
        q: f64,
        y: DVectorView<'_, f64>,
        _slot: usize,
    ) -> Result<f64> {
        let (x0, x1) = (samples[interval], samples[interval + 1]);
        let (y0, y1) = (y[interval], y[interval + 1]);

        if x0 == x1 {
            return Ok(y0);
        }
        Ok(y0 + (q - x0) / (x1 - x0) * (y1 - y0))
    }
}
