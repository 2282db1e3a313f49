//! Sampling strategies for the RANSAC engine.
//!
//! Only uniform sampling without replacement is provided; every trial draws
//! its own minimal sample independently of the others.

pub mod uniform;

pub use uniform::UniformRandomSampler;
