//! Model discovery for erdgen.

pub mod adapter;
pub mod naming;
pub mod options;
pub mod postgres;

pub use adapter::ModelSource;
pub use naming::{NamingStyle, classify, model_name};
pub use options::DiscoverOptions;
pub use postgres::{PostgresSource, discover_postgres};

pub use erdgen_core::ModelDescriptor;
