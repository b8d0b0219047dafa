//! Wire-level filter targets for the search service.
//!
//! `grpc` holds the protobuf messages embedded in binary search requests,
//! `rest` the JSON `where` document sent to the HTTP endpoints. Field names,
//! tags and enum codes must match the service schema exactly.

pub mod grpc;
pub mod rest;
