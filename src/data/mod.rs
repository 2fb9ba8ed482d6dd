pub mod xor;

pub use xor::{xor_examples, TrainingExample};
