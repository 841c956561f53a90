//! Coordinate strategies.
//!
//! A strategy picks the actuators a pattern plays on and maps synthesized
//! samples onto them over discrete iterations. The mode matrix is:
//!
//! | Mode | Coordinates | Per iteration |
//! |------|-------------|---------------|
//! | `Static` | one random set | every coordinate, sample `i` |
//! | `DynamicRandom` | last of several random sets | random subset of the motor pool |
//! | `PathLike` | bounded walk, step 1 | one path position, sample `i` |
//! | `StriddenPathLike` | bounded walk, step 2 | one path position, sample `i` |

pub mod assemble;
pub mod coordinates;

pub use assemble::assemble;
pub use coordinates::{coordinates_for_mode, random_coordinates, random_position, random_walk};
