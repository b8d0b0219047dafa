pub mod error;
pub mod filter;
pub mod settings;

pub use error::{FilterError, Result};
pub use filter::{
    compiler::FilterCompiler, grpc::GrpcFilterCompiler, operator::WireOperator,
    rest::RestFilterCompiler,
};
pub use settings::{ClassificationPolicy, CompileSettings, CompileSettingsBuilder};
