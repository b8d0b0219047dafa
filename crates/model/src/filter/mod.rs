//! In-memory filter predicates shared by every wire encoding.
//!
//! A [`tree::FilterTree`] is built once by the caller and then borrowed by
//! any number of compilers. Nothing in this module knows about a particular
//! wire format; [`classify`] only decides which typed slot a value belongs in.

pub mod classify;
pub mod error;
pub mod operator;
pub mod path;
pub mod tree;
pub mod value;
