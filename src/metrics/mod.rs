pub mod accuracy;

pub use accuracy::{accuracy, evaluate, Accuracy};
