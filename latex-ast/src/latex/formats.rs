//! Text renderings of a tree

pub mod outline;

pub use outline::to_outline;
