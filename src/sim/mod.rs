//! Driving a grid through many generations.

pub mod runner;

pub use runner::{NoopObserver, Observer, RunReport, Runner};
