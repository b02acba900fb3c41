//! Library crate for MediConnect.
//!
//! Local helpers around the remote HL7/EDI-to-FHIR conversion service: a
//! message-type sniffer, a shallow FHIR Bundle shape checker, and the HTTP
//! client and session state the demo drives them with.

pub mod check;
pub mod client;
pub mod config;
pub mod error;
pub mod library;
pub mod samples;
pub mod session;
pub mod sniff;

pub use library::*;
