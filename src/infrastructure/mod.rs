//! Infrastructure implementations of the domain seams

pub mod dataset;
pub mod logging;
pub mod model;
pub mod services;
