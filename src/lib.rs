pub mod announce;
pub mod asset;
pub mod github;
pub mod http;
pub mod runtime;
pub mod webhook;

pub use announce::{AnnounceOptions, announce, prepare, run};
