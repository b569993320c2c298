//! Types and pure logic shared between the backend service and the WASM frontend.

pub mod projections;
pub mod shared;
