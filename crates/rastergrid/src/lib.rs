#![doc = env!("CARGO_PKG_DESCRIPTION")]

#[doc(inline)]
pub use rastergrid_image as image;

#[doc(inline)]
pub use rastergrid_interp as interp;

#[doc(inline)]
pub use rastergrid_io as io;

/// Command line arguments and commands of the `rastergrid` binary.
pub mod cli;
