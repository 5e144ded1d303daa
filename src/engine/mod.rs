// The matching/censoring core — locate tokens, mask what was found.

pub mod censor;
pub mod scan;

pub use censor::{censor, MASK};
pub use scan::{MatchEngine, MatchRecord};
