pub mod annotation;
pub mod entity;
pub mod error;
pub mod protocol;
