// Library crate root.
//
// The binary (src/main.rs) only wires up logging and the eframe shell; all
// behavior lives here so the session logic stays unit-testable without a
// window.

pub mod app;
pub mod error;
pub mod im;
pub mod palette;
pub mod session;

#[cfg(test)]
pub mod test_helpers;
