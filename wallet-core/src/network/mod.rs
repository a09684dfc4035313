// wallet-core/src/network/mod.rs
//
// Network Module - supported Cardano networks and their address parameters

pub mod models;

pub use models::{Network, NetworkProfile};
