//! One dimensional interpolation of sampled data, piecewise linear or with cubic splines.
//! Ordinates may be a single sequence or a matrix with one series per column, in which case
//! every column, or a selected one, is interpolated.
//!
//! # Example
//! ```
//! use interp1d::{Axis, InterpolationOptions, Interpolator, Value};
//! use nalgebra::DMatrix;
//!
//! let x: Vec<f64> = (0..10).map(|i| i as f64).collect();
//! let y: Vec<f64> = x.iter().map(|v| v.exp()).collect();
//!
//! let f = Interpolator::from_slices(&x, &y, InterpolationOptions::cubic()).unwrap();
//! assert_eq!(Some(12.287), f.interpolate(2.5).unwrap().scalar());
//!
//! let nd = DMatrix::from_fn(10, 3, |r, _| y[r]);
//! let f = Interpolator::new(x, nd, InterpolationOptions::linear().axis(Axis::All)).unwrap();
//! assert_eq!(Some(&Value::Columns(vec![13.737, 13.737, 13.737])), f.interpolate(2.5).unwrap().values().first());
//! ```

mod error;
mod evaluate;
mod interpolator;
mod linear;
mod options;
mod ordinates;
mod samples;
mod spline;

pub use error::{InterpolationError, Result};
pub use evaluate::round_to;
pub use interpolator::{Interpolated, Interpolator, Query, Value};
pub use options::{Axis, Boundary, InterpolationOptions, Kind, NATURAL};
pub use ordinates::Ordinates;
pub use samples::SampleIndex;
