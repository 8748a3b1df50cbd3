//! Card bindings for Python.

use pyo3::prelude::*;

use crate::cards::{CardMeta, FaceContent};

use super::py_layout::{to_py_err, PyPipLayout};

/// Python wrapper for CardMeta.
#[pyclass(name = "CardMeta")]
#[derive(Clone, Debug)]
pub struct PyCardMeta(pub CardMeta);

#[pymethods]
impl PyCardMeta {
    /// Parse a two-character code such as "QH" or "7S".
    #[new]
    fn new(code: &str) -> PyResult<Self> {
        code.parse().map(Self).map_err(to_py_err)
    }

    /// Numeric rank (1 = ace).
    #[getter]
    fn rank(&self) -> u8 {
        self.0.rank.raw()
    }

    /// Suit symbol name.
    #[getter]
    fn suit(&self) -> String {
        self.0.suit.name().to_string()
    }

    /// True if the face draws pips rather than a large image.
    fn has_pips(&self) -> bool {
        matches!(self.0.face(), FaceContent::Pips(_))
    }

    /// Pip layout, or None for aces and court cards.
    fn pip_layout(&self) -> Option<PyPipLayout> {
        self.0.pip_layout().map(PyPipLayout)
    }

    fn __repr__(&self) -> String {
        format!("CardMeta({})", self.0)
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }

    fn __hash__(&self) -> u64 {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};
        let mut hasher = DefaultHasher::new();
        self.0.hash(&mut hasher);
        hasher.finish()
    }
}
