// Public API for the CereVoice Cloud client library

pub mod client;
pub mod config;
pub mod errors;
pub mod structs;

// Re-export commonly used types
pub use client::Client;
pub use config::{ClientConfig, DEFAULT_API_URL};
pub use errors::{CereError, Result};
pub use structs::abbreviation::{Abbreviation, UploadAbbreviationsInput};
pub use structs::credit::Credit;
pub use structs::lexicon::{Lexicon, UploadLexiconInput};
pub use structs::speak::{SpeakExtendedInput, SpeakSimpleInput};
pub use structs::voice::Voice;

/// Crate version, taken from build metadata.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
