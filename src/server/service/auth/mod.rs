//! Credential primitives: password hashing and signed bearer tokens.

pub mod password;
pub mod token;
