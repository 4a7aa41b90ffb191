//! Interactive display of a laid-out figure.
//!
//! | Sub-module   | Responsibility |
//! | ------------ | -------------- |
//! | [`viewer`]   | [`TraceViewerApp`]: stacked, axis-linked egui plots |
//! | [`run`]      | [`run_viewer()`]: opens the native window and blocks until it closes |

mod run;
mod viewer;

pub use run::run_viewer;
pub use viewer::TraceViewerApp;
