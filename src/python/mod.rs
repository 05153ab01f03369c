//! Python bindings for the tug-of-war controller.
//!
//! # Quick Start
//!
//! ```python
//! import tarik_tambang as tt
//!
//! game = tt.TugOfWar(seed=42)
//! game.submit_setup(["Tim Biru", "Tim Merah"])
//!
//! print(game.question())          # "Berapa 12 × 7?"
//! game.submit_digit("blue", 8)
//! game.submit_digit("blue", 4)
//! print(game.position())          # -1
//!
//! game.advance(800)               # next problem
//! ```

use pyo3::prelude::*;

mod py_controller;

pub use py_controller::*;

/// tarik_tambang: arithmetic tug-of-war match engine.
#[pymodule]
fn tarik_tambang(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyTugOfWar>()?;
    Ok(())
}
