// Application layer: batch flows built on the core assistant.

pub mod analytics;
pub mod samples;
