//! Python bindings for the card-pips layout engine.
//!
//! # Quick Start
//!
//! ```python
//! import card_pips
//!
//! layout = card_pips.pip_layout(7)
//! layout.columns            # [3, 1, 3]
//! layout.positions_numpy()  # float64 array, shape (7, 2)
//!
//! card = card_pips.CardMeta("QH")
//! card.pip_layout()         # None: court cards use a large image
//! ```

use pyo3::prelude::*;

mod py_cards;
mod py_layout;

pub use py_cards::*;
pub use py_layout::*;

/// card_pips: pip layouts for playing-card faces.
#[pymodule]
fn card_pips(m: &Bound<'_, PyModule>) -> PyResult<()> {
    // Layout
    m.add_class::<PyPipLayout>()?;
    m.add_function(wrap_pyfunction!(column_layout, m)?)?;
    m.add_function(wrap_pyfunction!(pip_layout, m)?)?;
    m.add_function(wrap_pyfunction!(cache_stats, m)?)?;

    // Cards
    m.add_class::<PyCardMeta>()?;

    Ok(())
}
