//! `seqpair`: sequence-pair representation of 2D rectangle floorplans, together with a
//! deterministic decoder that packs rectangles around fixed obstacle blocks.

/// Decoding a [`SequencePair`](entities::SequencePair) into a concrete [`Floorplan`](entities::Floorplan)
pub mod decode;

/// Entities to model the floorplanning problem and its solutions
pub mod entities;

/// Error taxonomy shared by the decoder and the optimizers built on top of it
pub mod error;

/// Geometric primitives
pub mod geometry;

/// Importing problems into and exporting solutions out of this library
pub mod io;

/// Helper functions which do not belong to any specific module
pub mod util;

#[doc(inline)]
pub use decode::decode;
#[doc(inline)]
pub use error::{DecodeError, PlacementError};
