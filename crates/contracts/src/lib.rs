//! Markup contract and settings shared between the dump templates and the
//! browser layer. Platform-free; everything here runs in native unit tests.

pub mod enums;
pub mod shared;
