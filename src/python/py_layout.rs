//! Layout bindings for Python.

use std::collections::HashMap;
use std::sync::Arc;

use numpy::{PyArray1, PyArray2, PyArrayMethods};
use pyo3::prelude::*;

use crate::cache::{layout_for, shared};
use crate::core::{IconCount, LayoutError};
use crate::layout::{compute_column_layout, PipLayout};

pub(crate) fn to_py_err(err: LayoutError) -> PyErr {
    PyErr::new::<pyo3::exceptions::PyValueError, _>(err.to_string())
}

/// Python wrapper for a cached PipLayout.
#[pyclass(name = "PipLayout")]
#[derive(Clone, Debug)]
pub struct PyPipLayout(pub Arc<PipLayout>);

#[pymethods]
impl PyPipLayout {
    /// Number of columns (1 or 3).
    #[getter]
    fn column_count(&self) -> usize {
        self.0.column_count()
    }

    /// Pips in the fullest column.
    #[getter]
    fn max_rows(&self) -> u32 {
        self.0.max_rows()
    }

    /// Per-column pip counts, left to right.
    #[getter]
    fn columns(&self) -> Vec<u32> {
        self.0.columns().as_slice().to_vec()
    }

    /// Pip centers as (x, y) tuples, column-major.
    fn positions(&self) -> Vec<(f64, f64)> {
        self.0.iter().map(|p| (p.x, p.y)).collect()
    }

    /// Pip centers as an [N, 2] float64 array.
    fn positions_numpy<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyArray2<f64>>> {
        let n = self.0.positions().len();
        let flat: Vec<f64> = self.0.iter().flat_map(|p| [p.x, p.y]).collect();
        PyArray1::from_vec_bound(py, flat)
            .reshape([n, 2])
            .map_err(|e| PyErr::new::<pyo3::exceptions::PyValueError, _>(format!("{}", e)))
    }

    fn __len__(&self) -> usize {
        self.0.positions().len()
    }

    fn __repr__(&self) -> String {
        format!(
            "PipLayout(columns={:?}, max_rows={})",
            self.0.columns().as_slice(),
            self.0.max_rows()
        )
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

/// Per-column pip counts for `icon_count`.
#[pyfunction]
pub fn column_layout(icon_count: i64) -> PyResult<Vec<u32>> {
    let count = IconCount::try_from(icon_count).map_err(to_py_err)?;
    Ok(compute_column_layout(count).as_slice().to_vec())
}

/// Pip layout for `icon_count`, from the shared cache.
///
/// Raises ValueError for negative counts.
#[pyfunction]
pub fn pip_layout(icon_count: i64) -> PyResult<PyPipLayout> {
    let count = IconCount::try_from(icon_count).map_err(to_py_err)?;
    Ok(PyPipLayout(layout_for(count)))
}

/// Shared cache counters as a dict: hits, misses, builds, uncached.
#[pyfunction]
pub fn cache_stats() -> HashMap<&'static str, u64> {
    shared().stats().counters().into_iter().collect()
}
