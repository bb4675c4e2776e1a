pub mod core;
#[allow(unused_imports)]
pub use core::{Im, MaskIm, RGBAIm};

pub mod io;
pub mod resample;
pub mod stamp;
