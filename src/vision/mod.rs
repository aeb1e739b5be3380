//! Image path - coarse plant diagnosis from pixel statistics

mod classifier;

pub use classifier::{Classification, Diagnosis, ImageClassifier, ImageStats};
