// Resume API: form schema, field validation, submit planning, generation, drafts.

pub mod builder;
pub mod handlers;
pub mod models;
