// Resume analysis: catalog skill extraction and optimization hints.
// Pure keyword matching, no model calls.

pub mod catalog;
pub mod skills;
pub mod suggestions;
