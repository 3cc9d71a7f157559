use nalgebra::DVectorView;

use crate::{error::Result, samples::SampleIndex};

/// Evaluates interpolating function of one ordinate column inside of an already located interval.
pub(crate) trait Evaluate {
    /// Value at `q` for column values `y`, given `interval` returned by [SampleIndex::locate] for `q`.
    /// `slot` is the position of the column among the columns the evaluator was prepared for.
    fn evaluate(
        &self,
        samples: &SampleIndex,
        interval: usize,
        q: f64,
        y: DVectorView<'_, f64>,
        slot: usize,
    ) -> Result<f64>;
}

/// Rounds `value` to `precision` decimal digits, half away from zero.
/// Negative precision rounds to tens, hundreds and so on.
pub fn round_to(value: f64, precision: i32) -> f64 {
    let factor = 10f64.powi(precision);
    if factor == 0.0 {
        return 0.0 * value.signum();
    }
    let rounded = (value * factor).round() / factor;
    if rounded.is_finite() {
        rounded
    } else {
        value
    }
}
