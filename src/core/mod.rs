// src/core/mod.rs
//! Dataset, read accessors, response shaping and output encoding

pub mod query;
pub mod render;
pub mod resource;
pub mod shaper;
pub mod store;
pub mod xml;

pub use query::CvQueryService;
pub use render::ResponseFormat;
pub use resource::{Payload, Resource};
pub use store::CvStore;
