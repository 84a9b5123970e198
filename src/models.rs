pub mod error;
pub use error::Error;

pub mod histogram_config;
pub use histogram_config::HistogramConfig;
