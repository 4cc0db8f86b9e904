//! Error types and error reporting for the scanner.
//!
//! The scanner itself never fails; malformed input comes back as `ERROR`
//! tokens. This module classifies those tokens and renders them for humans:
//!
//! - Error structures carrying the source line
//! - Specific error variants for each kind of lexical error
//! - Helpful error messages and suggestions

pub mod errors;
