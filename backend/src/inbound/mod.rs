//! Inbound adapters translating external requests into domain requests while
//! keeping framework details at the edge.

pub mod http;
