use std::fmt::Display;

use serde::Deserialize;

use crate::error::{InterpolationError, Result};

/// First derivative value used to request a natural boundary (second derivative equal to zero).
pub const NATURAL: f64 = 1e99;

/// Boundary derivative values greater or equal to this threshold are treated as [NATURAL].
const NATURAL_THRESHOLD: f64 = 0.99e30;

/// Kind of interpolation performed between samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    /// Piecewise linear interpolation.
    #[default]
    Linear,
    /// Cubic spline interpolation with natural or clamped boundaries.
    Cubic,
    /// Recognized but not supported.
    SLinear,
    /// Recognized but not supported.
    Quadratic,
}

impl Kind {
    pub fn is_supported(&self) -> bool {
        matches!(self, Kind::Linear | Kind::Cubic)
    }
}

impl Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Kind::Linear => "linear",
            Kind::Cubic => "cubic",
            Kind::SLinear => "slinear",
            Kind::Quadratic => "quadratic",
        };
        write!(f, "{}", name)
    }
}

/// Selects which ordinate columns take part in interpolation.
/// - `None` - single column ordinates are used as is, multi column ordinates are interpolated over every column,
/// - `Index(i)` - only column `i` is interpolated,
/// - `All` - every column is interpolated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(from = "Option<AxisSpec>")]
pub enum Axis {
    #[default]
    None,
    Index(usize),
    All,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum AxisSpec {
    Index(usize),
    Keyword(AxisKeyword),
}

#[derive(Deserialize)]
#[serde(rename_all = "lowercase")]
enum AxisKeyword {
    All,
}

impl From<Option<AxisSpec>> for Axis {
    fn from(spec: Option<AxisSpec>) -> Self {
        match spec {
            None => Axis::None,
            Some(AxisSpec::Index(index)) => Axis::Index(index),
            Some(AxisSpec::Keyword(AxisKeyword::All)) => Axis::All,
        }
    }
}

/// First derivatives of the spline at the first and the last knot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Boundary {
    pub first: f64,
    pub last: f64,
}

impl Boundary {
    /// Both ends have second derivative fixed to zero.
    pub fn natural() -> Self {
        Boundary { first: NATURAL, last: NATURAL }
    }

    /// Both ends have given first derivative values.
    pub fn clamped(first: f64, last: f64) -> Self {
        Boundary { first, last }
    }

    pub fn is_natural(derivative: f64) -> bool {
        derivative >= NATURAL_THRESHOLD
    }
}

impl Default for Boundary {
    fn default() -> Self {
        Boundary::natural()
    }
}

/// Configuration of an [Interpolator](crate::Interpolator), fixed at construction.
/// - `kind` - interpolation kind, linear by default,
/// - `precision` - number of decimal digits results are rounded to, 3 by default,
/// - `sorted` - set when abscissas are already sorted, otherwise they are sorted together with ordinates,
/// - `axis` - ordinate column selection,
/// - `yp1`, `ypn` - spline first derivatives at the first and the last knot, natural by default.
///
/// Missing fields of a deserialized map take their default values.
/// # Example
/// ```
/// use interp1d::{Axis, InterpolationOptions, Kind};
///
/// let options = InterpolationOptions::cubic().sorted(true).axis(Axis::All);
/// assert_eq!(Kind::Cubic, options.kind);
/// assert_eq!(3, options.precision);
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct InterpolationOptions {
    pub kind: Kind,
    pub precision: i32,
    pub sorted: bool,
    pub axis: Axis,
    pub yp1: f64,
    pub ypn: f64,
}

impl Default for InterpolationOptions {
    fn default() -> Self {
        InterpolationOptions {
            kind: Kind::Linear,
            precision: 3,
            sorted: false,
            axis: Axis::None,
            yp1: NATURAL,
            ypn: NATURAL,
        }
    }
}

impl InterpolationOptions {
    pub fn new(kind: Kind) -> Self {
        InterpolationOptions { kind, ..Default::default() }
    }

    pub fn linear() -> Self {
        Self::new(Kind::Linear)
    }

    pub fn cubic() -> Self {
        Self::new(Kind::Cubic)
    }

    pub fn sorted(mut self, sorted: bool) -> Self {
        self.sorted = sorted;
        self
    }

    pub fn precision(mut self, precision: i32) -> Self {
        self.precision = precision;
        self
    }

    pub fn axis(mut self, axis: Axis) -> Self {
        self.axis = axis;
        self
    }

    /// Sets spline first derivative at the first knot.
    pub fn first_derivative(mut self, yp1: f64) -> Self {
        self.yp1 = yp1;
        self
    }

    /// Sets spline first derivative at the last knot.
    pub fn last_derivative(mut self, ypn: f64) -> Self {
        self.ypn = ypn;
        self
    }

    pub fn boundary(&self) -> Boundary {
        Boundary { first: self.yp1, last: self.ypn }
    }

    /// Checks options against ordinates with `columns` columns.
    pub(crate) fn validate(&self, columns: usize) -> Result<()> {
        if !self.kind.is_supported() {
            log::warn!("rejecting unsupported interpolation kind {}", self.kind);
            return Err(InterpolationError::UnsupportedKind(self.kind));
        }

        if let Axis::Index(axis) = self.axis {
            if axis >= columns {
                log::warn!("rejecting axis {} for {} ordinate column(s)", axis, columns);
                return Err(InterpolationError::AxisOutOfBounds { axis, columns });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let options = InterpolationOptions::default();

        assert_eq!(Kind::Linear, options.kind);
        assert_eq!(3, options.precision);
        assert!(!options.sorted);
        assert_eq!(Axis::None, options.axis);
        assert_eq!(Boundary::natural(), options.boundary());
    }

    #[test]
    fn builder() {
        let options = InterpolationOptions::cubic()
            .sorted(true)
            .precision(5)
            .axis(Axis::Index(2))
            .first_derivative(1.0)
            .last_derivative(-2.0);

        assert_eq!(Kind::Cubic, options.kind);
        assert_eq!(5, options.precision);
        assert!(options.sorted);
        assert_eq!(Axis::Index(2), options.axis);
        assert_eq!(Boundary::clamped(1.0, -2.0), options.boundary());
    }

    #[test]
    fn natural_threshold() {
        assert!(Boundary::is_natural(NATURAL));
        assert!(Boundary::is_natural(1e30));
        assert!(Boundary::is_natural(0.99e30));
        assert!(!Boundary::is_natural(0.98e30));
        assert!(!Boundary::is_natural(0.0));
        assert!(!Boundary::is_natural(-1e99));
    }

    #[test]
    fn partial_map_merges_onto_defaults() {
        let options: InterpolationOptions =
            serde_json::from_str(r#"{ "kind": "cubic", "sorted": true }"#).unwrap();

        assert_eq!(InterpolationOptions::cubic().sorted(true), options);

        let options: InterpolationOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(InterpolationOptions::default(), options);
    }

    #[test]
    fn deserialize_axis() {
        let options: InterpolationOptions = serde_json::from_str(r#"{ "axis": 1 }"#).unwrap();
        assert_eq!(Axis::Index(1), options.axis);

        let options: InterpolationOptions = serde_json::from_str(r#"{ "axis": "all" }"#).unwrap();
        assert_eq!(Axis::All, options.axis);

        let options: InterpolationOptions = serde_json::from_str(r#"{ "axis": null }"#).unwrap();
        assert_eq!(Axis::None, options.axis);

        assert!(serde_json::from_str::<InterpolationOptions>(r#"{ "axis": "some" }"#).is_err());
        assert!(serde_json::from_str::<InterpolationOptions>(r#"{ "axis": -1 }"#).is_err());
    }

    #[test]
    fn deserialize_kind_and_boundaries() {
        let options: InterpolationOptions =
            serde_json::from_str(r#"{ "kind": "slinear", "precision": 2, "yp1": 0.5, "ypn": -0.5 }"#).unwrap();

        assert_eq!(Kind::SLinear, options.kind);
        assert_eq!(2, options.precision);
        assert_eq!(Boundary::clamped(0.5, -0.5), options.boundary());

        assert!(serde_json::from_str::<InterpolationOptions>(r#"{ "kind": "bicubic" }"#).is_err());
    }

    #[test]
    fn validate_kind() {
        assert!(InterpolationOptions::linear().validate(1).is_ok());
        assert!(InterpolationOptions::cubic().validate(1).is_ok());
        assert_eq!(
            Err(InterpolationError::UnsupportedKind(Kind::SLinear)),
            InterpolationOptions::new(Kind::SLinear).validate(1)
        );
        assert_eq!(
            Err(InterpolationError::UnsupportedKind(Kind::Quadratic)),
            InterpolationOptions::new(Kind::Quadratic).validate(1)
        );
    }

    #[test]
    fn validate_axis() {
        let options = InterpolationOptions::linear().axis(Axis::Index(2));

        assert!(options.validate(3).is_ok());
        assert_eq!(
            Err(InterpolationError::AxisOutOfBounds { axis: 2, columns: 2 }),
            options.validate(2)
        );
        assert!(InterpolationOptions::linear().axis(Axis::All).validate(1).is_ok());
    }
}
