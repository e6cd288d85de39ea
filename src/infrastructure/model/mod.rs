pub mod onnx;

pub use onnx::{OnnxModel, OnnxModelLoader};
