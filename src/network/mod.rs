pub mod network;
pub mod weights;

pub use network::{forward, ForwardPass};
pub use weights::Weights;
