//! End-to-end rewrite tests.

mod properties;
mod samples;
