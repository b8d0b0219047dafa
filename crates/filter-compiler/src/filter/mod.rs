pub mod compiler;
pub mod grpc;
pub mod operator;
pub mod rest;
