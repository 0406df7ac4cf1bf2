//! Version range engine: parses versions and range constraints, and resolves
//! a constraint against a manifest of available versions using the
//! stable-first selection order. Aliases such as `node` or `lts/boron` are
//! expanded before parsing (see [`alias`]).

pub mod alias;
pub mod range;
pub mod resolve;
pub mod version;

pub use alias::Caution;
pub use range::{Comparator, Range};
pub use resolve::{resolve, Candidate, Candidates};
pub use version::{Identifier, Op, Version};
