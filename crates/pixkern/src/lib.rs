#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

#[doc(inline)]
pub use pixkern_core as core;

#[doc(inline)]
pub use pixkern_raster as raster;

#[doc(inline)]
pub use pixkern_resample as resample;
