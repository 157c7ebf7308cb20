pub mod wilder_service;

pub use wilder_service::*;
