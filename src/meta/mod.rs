pub mod classifier;
pub mod preview;

pub use classifier::classify;
pub use preview::synthesize_preview;
