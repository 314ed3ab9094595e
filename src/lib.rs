//! Strictly XO - console tic-tac-toe variants
//!
//! Concrete boards and the console around the `strictly_grid` search engine.
//!
//! # Architecture
//!
//! - **Variants**: thirteen boards, each with its rules, computer strategy and
//!   human input shape
//! - **Match**: seats two players and alternates turns until a result
//! - **Console**: reads human moves and draws boards over any reader/writer
//! - **Catalog**: names every variant and dispatches into a typed match
//!
//! # Example
//!
//! ```
//! use std::io::Cursor;
//! use strictly_grid::PlayerKind;
//! use strictly_xo::{Console, GameConfig, Outcome, VariantId};
//!
//! let input = Cursor::new(b"0 0\n1 0\n0 1\n1 1\n0 2\n".to_vec());
//! let mut console = Console::new(input, Vec::new());
//! let outcome = VariantId::Classic
//!     .play(&GameConfig::default(), PlayerKind::Human, PlayerKind::Human, &mut console)
//!     .unwrap();
//! assert!(matches!(outcome, Outcome::Winner { .. }));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod catalog;
mod config;
mod console;
mod dictionary;
mod error;
mod orchestrator;
pub mod variants;

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig, MAX_SEARCH_DEPTH};

// Crate-level exports - Errors
pub use error::{GameError, GameErrorKind};

// Crate-level exports - Dictionary
pub use dictionary::Lexicon;

// Crate-level exports - Console and turn coordination
pub use console::Console;
pub use orchestrator::{Match, Outcome};

// Crate-level exports - Variant catalog
pub use catalog::VariantId;
