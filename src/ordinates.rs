use nalgebra::{DMatrix, DVector, DVectorView};

/// Dependent variable samples, either one sequence or a matrix with one series per column.
#[derive(Debug, Clone, PartialEq)]
pub enum Ordinates {
    SingleColumn(DVector<f64>),
    MultiColumn(DMatrix<f64>),
}

impl Ordinates {
    /// Builds multi column ordinates from column vectors. Columns are truncated to the shortest one.
    pub fn from_columns(columns: &[Vec<f64>]) -> Self {
        let rows = columns.iter().map(|c| c.len()).min().unwrap_or(0);
        Ordinates::MultiColumn(DMatrix::from_fn(rows, columns.len(), |r, c| columns[c][r]))
    }

    /// Number of samples in every column.
    pub fn rows(&self) -> usize {
        match self {
            Ordinates::SingleColumn(y) => y.len(),
            Ordinates::MultiColumn(y) => y.nrows(),
        }
    }

    pub fn columns(&self) -> usize {
        match self {
            Ordinates::SingleColumn(_) => 1,
            Ordinates::MultiColumn(y) => y.ncols(),
        }
    }

    pub fn is_multi_column(&self) -> bool {
        matches!(self, Ordinates::MultiColumn(_))
    }

    /// View of column `index`. Single column ordinates only have column 0.
    pub fn column(&self, index: usize) -> DVectorView<'_, f64> {
        match self {
            Ordinates::SingleColumn(y) => y.column(index),
            Ordinates::MultiColumn(y) => y.column(index),
        }
    }

    /// Keeps first `rows` samples.
    pub(crate) fn truncate(self, rows: usize) -> Self {
        if rows >= self.rows() {
            return self;
        }
        match self {
            Ordinates::SingleColumn(y) => Ordinates::SingleColumn(y.rows(0, rows).into_owned()),
            Ordinates::MultiColumn(y) => Ordinates::MultiColumn(y.rows(0, rows).into_owned()),
        }
    }

    /// Reorders samples so that new row `i` is old row `order[i]`.
    pub(crate) fn permute(&self, order: &[usize]) -> Self {
        match self {
            Ordinates::SingleColumn(y) => Ordinates::SingleColumn(y.select_rows(order)),
            Ordinates::MultiColumn(y) => Ordinates::MultiColumn(y.select_rows(order)),
        }
    }
}

impl From<Vec<f64>> for Ordinates {
    fn from(y: Vec<f64>) -> Self {
        Ordinates::SingleColumn(DVector::from_vec(y))
    }
}

impl From<&[f64]> for Ordinates {
    fn from(y: &[f64]) -> Self {
        Ordinates::SingleColumn(DVector::from_column_slice(y))
    }
}

impl From<DVector<f64>> for Ordinates {
    fn from(y: DVector<f64>) -> Self {
        Ordinates::SingleColumn(y)
    }
}

impl From<DMatrix<f64>> for Ordinates {
    fn from(y: DMatrix<f64>) -> Self {
        Ordinates::MultiColumn(y)
    }
}
