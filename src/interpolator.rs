use nalgebra::{DMatrix, DVector, DVectorView};

use crate::{
    error::{InterpolationError, Result},
    evaluate::{round_to, Evaluate},
    linear::LinearEvaluator,
    options::{Axis, InterpolationOptions, Kind},
    ordinates::Ordinates,
    samples::{sorting_permutation, SampleIndex},
    spline::SplineEvaluator,
};

/// Query points: a single value or a batch of values evaluated one by one, in order.
#[derive(Debug, Clone, PartialEq)]
pub enum Query {
    Point(f64),
    Points(Vec<f64>),
}

impl From<f64> for Query {
    fn from(q: f64) -> Self {
        Query::Point(q)
    }
}

impl From<Vec<f64>> for Query {
    fn from(q: Vec<f64>) -> Self {
        Query::Points(q)
    }
}

impl From<&Vec<f64>> for Query {
    fn from(q: &Vec<f64>) -> Self {
        Query::Points(q.clone())
    }
}

impl From<&[f64]> for Query {
    fn from(q: &[f64]) -> Self {
        Query::Points(q.to_vec())
    }
}

impl<const N: usize> From<[f64; N]> for Query {
    fn from(q: [f64; N]) -> Self {
        Query::Points(q.to_vec())
    }
}

/// Result for one query point: a single value, or one value per ordinate column.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Scalar(f64),
    Columns(Vec<f64>),
}

impl Value {
    pub fn as_scalar(&self) -> Option<f64> {
        match self {
            Value::Scalar(v) => Some(*v),
            Value::Columns(_) => None,
        }
    }

    pub fn as_columns(&self) -> Option<&[f64]> {
        match self {
            Value::Scalar(_) => None,
            Value::Columns(v) => Some(v.as_slice()),
        }
    }

    pub fn to_vec(&self) -> Vec<f64> {
        match self {
            Value::Scalar(v) => vec![*v],
            Value::Columns(v) => v.clone(),
        }
    }
}

/// Result of [Interpolator::interpolate], shaped after the [Query].
#[derive(Debug, Clone, PartialEq)]
pub enum Interpolated {
    One(Value),
    Many(Vec<Value>),
}

impl Interpolated {
    /// Scalar result of a single point query.
    pub fn scalar(&self) -> Option<f64> {
        match self {
            Interpolated::One(value) => value.as_scalar(),
            Interpolated::Many(_) => None,
        }
    }

    /// Scalar results of a batched query.
    pub fn scalars(&self) -> Option<Vec<f64>> {
        match self {
            Interpolated::One(_) => None,
            Interpolated::Many(values) => values.iter().map(|v| v.as_scalar()).collect(),
        }
    }

    pub fn values(&self) -> &[Value] {
        match self {
            Interpolated::One(value) => std::slice::from_ref(value),
            Interpolated::Many(values) => values.as_slice(),
        }
    }

    /// Matrix with one row per query point and one column per interpolated ordinate column.
    pub fn into_matrix(self) -> DMatrix<f64> {
        let rows: Vec<Vec<f64>> = self.values().iter().map(|v| v.to_vec()).collect();
        let columns = rows.first().map(|r| r.len()).unwrap_or(0);
        DMatrix::from_fn(rows.len(), columns, |r, c| rows[r][c])
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Evaluator {
    Linear(LinearEvaluator),
    Cubic(SplineEvaluator),
}

impl Evaluate for Evaluator {
    fn evaluate(
        &self,
        samples: &SampleIndex,
        interval: usize,
        q: f64,
        y: DVectorView<'_, f64>,
        slot: usize,
    ) -> Result<f64> {
        match self {
            Evaluator::Linear(linear) => linear.evaluate(samples, interval, q, y, slot),
            Evaluator::Cubic(spline) => spline.evaluate(samples, interval, q, y, slot),
        }
    }
}

/// One dimensional interpolator over single or multi column ordinates.
///
/// All data is fixed at construction, queries only read it, so one instance can be shared between threads.
/// # Example
/// ```
/// use interp1d::{InterpolationOptions, Interpolator};
///
/// let x: Vec<f64> = (0..10).map(|i| i as f64).collect();
/// let y: Vec<f64> = x.iter().map(|v| v.exp()).collect();
///
/// let linear = Interpolator::from_slices(&x, &y, InterpolationOptions::linear()).unwrap();
/// assert_eq!(Some(13.737), linear.interpolate(2.5).unwrap().scalar());
///
/// let cubic = Interpolator::from_slices(&x, &y, InterpolationOptions::cubic().sorted(true)).unwrap();
/// assert_eq!(Some(vec![12.287, 32.577]), cubic.interpolate([2.5, 3.5]).unwrap().scalars());
/// ```
#[derive(Debug, Clone)]
pub struct Interpolator {
    samples: SampleIndex,
    ordinates: Ordinates,
    options: InterpolationOptions,
    targets: Vec<usize>,
    evaluator: Evaluator,
}

impl Interpolator {
    /// Creates interpolator over abscissas `x` and ordinates `y`.
    ///
    /// When lengths of `x` and `y` differ, the longer one is truncated. Unless `options.sorted` is set,
    /// samples are sorted by abscissa together with their ordinates. Cubic spline second derivatives
    /// are computed here, for every interpolated column.
    /// # Errors
    /// - [InterpolationError::UnsupportedKind] for kinds without implementation,
    /// - [InterpolationError::AxisOutOfBounds] when selected column does not exist,
    /// - [InterpolationError::NotEnoughSamples] when less than 2 samples remain.
    pub fn new(x: Vec<f64>, y: impl Into<Ordinates>, options: InterpolationOptions) -> Result<Self> {
        let ordinates: Ordinates = y.into();
        options.validate(ordinates.columns())?;

        let size = x.len().min(ordinates.rows());
        if size != x.len() || size != ordinates.rows() {
            log::debug!(
                "truncating {} abscissas and {} ordinate rows to {} samples",
                x.len(),
                ordinates.rows(),
                size
            );
        }
        let mut x = x;
        x.truncate(size);
        let mut ordinates = ordinates.truncate(size);

        if !options.sorted {
            if let Some(order) = sorting_permutation(&x) {
                log::debug!("sorting {} samples by abscissa", size);
                x = order.iter().map(|i| x[*i]).collect();
                ordinates = ordinates.permute(&order);
            }
        }
        let samples = SampleIndex::new(x)?;

        let targets: Vec<usize> = match options.axis {
            Axis::Index(column) => vec![column],
            Axis::None | Axis::All => (0..ordinates.columns()).collect(),
        };

        let evaluator = match options.kind {
            Kind::Linear => Evaluator::Linear(LinearEvaluator),
            Kind::Cubic => Evaluator::Cubic(SplineEvaluator::new(
                &samples,
                targets.iter().map(|column| ordinates.column(*column)),
                options.boundary(),
            )),
            Kind::SLinear | Kind::Quadratic => return Err(InterpolationError::UnsupportedKind(options.kind)),
        };

        log::debug!(
            "{} interpolator over {} samples and {} of {} column(s)",
            options.kind,
            samples.len(),
            targets.len(),
            ordinates.columns()
        );

        Ok(Interpolator { samples, ordinates, options, targets, evaluator })
    }

    /// Creates interpolator over single column ordinates.
    pub fn from_slices(x: &[f64], y: &[f64], options: InterpolationOptions) -> Result<Self> {
        Self::new(x.to_vec(), y, options)
    }

    /// Creates interpolator over multi column ordinates given as separate columns.
    pub fn from_columns(x: &[f64], columns: &[Vec<f64>], options: InterpolationOptions) -> Result<Self> {
        Self::new(x.to_vec(), Ordinates::from_columns(columns), options)
    }

    /// Interpolates a single point or a batch of points.
    /// # Example
    /// ```
    /// use interp1d::{InterpolationOptions, Interpolator, Value};
    ///
    /// let x = [0.0, 1.0, 2.0];
    /// let columns = vec![vec![0.0, 1.0, 2.0], vec![0.0, 10.0, 20.0]];
    /// let f = Interpolator::from_columns(&x, &columns, InterpolationOptions::linear()).unwrap();
    ///
    /// let result = f.interpolate(0.5).unwrap();
    /// assert_eq!(&[Value::Columns(vec![0.5, 5.0])], result.values());
    /// ```
    pub fn interpolate(&self, query: impl Into<Query>) -> Result<Interpolated> {
        match query.into() {
            Query::Point(q) => Ok(Interpolated::One(self.interpolate_point(q)?)),
            Query::Points(q) => Ok(Interpolated::Many(self.batch_interpolate(&q)?)),
        }
    }

    pub fn interpolate_point(&self, q: f64) -> Result<Value> {
        let interval = self.samples.locate(q);
        self.evaluate_at(interval, q)
    }

    pub fn batch_interpolate(&self, x_vector: &[f64]) -> Result<Vec<Value>> {
        let mut results = Vec::with_capacity(x_vector.len());
        let mut interval = 0;

        for q in x_vector {
            interval = self.samples.hunt(*q, interval);
            results.push(self.evaluate_at(interval, *q)?);
        }
        Ok(results)
    }

    fn evaluate_at(&self, interval: usize, q: f64) -> Result<Value> {
        if self.spans_columns() {
            let values = self
                .targets
                .iter()
                .enumerate()
                .map(|(slot, column)| self.evaluate_column(interval, q, *column, slot))
                .collect::<Result<Vec<f64>>>()?;
            Ok(Value::Columns(values))
        } else {
            Ok(Value::Scalar(self.evaluate_column(interval, q, self.targets[0], 0)?))
        }
    }

    fn evaluate_column(&self, interval: usize, q: f64, column: usize, slot: usize) -> Result<f64> {
        let y = self.ordinates.column(column);
        let value = self.evaluator.evaluate(&self.samples, interval, q, y, slot)?;
        Ok(round_to(value, self.options.precision))
    }

    /// Multi column ordinates without a selected axis give one value per column.
    fn spans_columns(&self) -> bool {
        self.ordinates.is_multi_column() && !matches!(self.options.axis, Axis::Index(_))
    }

    pub fn kind(&self) -> Kind {
        self.options.kind
    }

    pub fn options(&self) -> &InterpolationOptions {
        &self.options
    }

    pub fn samples(&self) -> &SampleIndex {
        &self.samples
    }

    pub fn ordinates(&self) -> &Ordinates {
        &self.ordinates
    }

    /// Number of samples used after truncation.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Ordinate columns taking part in interpolation.
    pub fn columns(&self) -> &[usize] {
        &self.targets
    }

    /// Spline second derivatives at every knot for ordinate `column`.
    /// `None` for linear interpolation or a column which is not interpolated.
    pub fn second_derivatives(&self, column: usize) -> Option<&DVector<f64>> {
        match &self.evaluator {
            Evaluator::Linear(_) => None,
            Evaluator::Cubic(spline) => {
                let slot = self.targets.iter().position(|c| *c == column)?;
                spline.second_derivatives(slot)
            }
        }
    }
}
