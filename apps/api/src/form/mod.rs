// Resume form rules: field policy, validation, counters, submit planning.
// Everything here is synchronous and free of I/O; handlers and the draft store call into it.

pub mod counter;
pub mod notice;
pub mod policy;
pub mod shortcuts;
pub mod submit;
pub mod validator;
