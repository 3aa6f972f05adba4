//! External process execution
//!
//! Everything the scaffolder asks of git or a package manager goes through the
//! [`Toolchain`] trait, so the orchestration can run against a fake.

pub mod subprocess;
pub mod toolchain;

pub use toolchain::{SystemToolchain, Toolchain};
