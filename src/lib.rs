//! 语音合成前端的文本清洗器
//!
//! ```
//! use tts_cleaners_lib::{basic_cleaners, english_cleaners};
//!
//! assert_eq!(basic_cleaners("  Foo   BAR "), " foo bar ");
//! assert_eq!(english_cleaners("2 wlh."), "two wallahi");
//! ```

mod cleaners;
mod config;
mod error;

pub use cleaners::*;
pub use config::{CleanerConfig, GermanConfig};
pub use error::{CleanerError, Result};
