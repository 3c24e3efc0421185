pub mod cli;
pub mod config;
pub mod formatter;
pub mod nlu;
pub mod pipeline;
pub mod resolution;
pub mod server;

pub use omnibar_common::annotation;
pub use omnibar_common::entity;
pub use omnibar_common::protocol;
