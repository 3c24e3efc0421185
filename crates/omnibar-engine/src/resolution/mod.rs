pub mod accumulator;
pub mod chain;
pub mod engine;
pub mod keywords;
pub mod normalizer;
pub mod resolvers;

pub use accumulator::ActionList;
pub use chain::Chain;
pub use engine::{ResolutionEngine, resolve_annotations};
pub use keywords::SiteTable;
pub use normalizer::{Command, plan};
