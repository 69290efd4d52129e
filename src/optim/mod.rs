pub mod sgd;

pub use sgd::{OutputGradients, Sgd};
