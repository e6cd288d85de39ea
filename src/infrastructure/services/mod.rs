pub mod evaluation_service;

pub use evaluation_service::EvaluationService;
