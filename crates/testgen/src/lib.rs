//! Random schedule generation for exercising the analyses.

pub mod generator;
