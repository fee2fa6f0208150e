//! Index implementations for fetching package versions

pub mod simple;

pub use simple::SimpleIndexRegistry;
