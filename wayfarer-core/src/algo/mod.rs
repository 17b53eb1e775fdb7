//! Graph algorithms that run at model build time.

pub mod scc;
