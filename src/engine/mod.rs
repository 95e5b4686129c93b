//! Core inference engine: network model, evidence assignments, and the
//! enumeration algorithm.

pub mod enumerate;
pub mod errors;
pub mod evidence;
pub mod network;
