//! King of the Hill - two players, one hill, no turns
//!
//! Both players move at the same time on a wrapping grid. Whoever stands
//! on the centered hill without interruption for the configured time wins.
//!
//! # Architecture
//!
//! - **Game**: board, hill occupancy and key table (pure data)
//! - **Engine**: shared state, queues and the worker threads of a match
//! - **Terminal**: keyboard and screen primitives (crossterm)
//!
//! # Example
//!
//! ```no_run
//! use king_of_the_hill::{CrosstermKeys, GameConfig, RawModeGuard, TerminalRenderer, run_match};
//!
//! # fn example() -> anyhow::Result<()> {
//! let _raw = RawModeGuard::enable()?;
//! let outcome = run_match(
//!     GameConfig::default(),
//!     CrosstermKeys::default(),
//!     TerminalRenderer::new(std::io::stdout()),
//! )?;
//! println!("{:?}", outcome.winner);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod error;
mod game;
mod terminal;

// Public so the workers can be driven one at a time
pub mod engine;

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig};

// Crate-level exports - Errors
pub use error::{GameError, GameErrorKind};

// Crate-level exports - Game types
pub use game::{
    Board, Cell, Command, Direction, MoveOutcome, PlayerId, Position, QUIT_KEY, ZoneOccupancy,
    ZoneTransition, key_for,
};

// Crate-level exports - Engine
pub use engine::{Arena, GameLifecycle, MatchOutcome, RenderRequest, run_match};

// Crate-level exports - Terminal primitives
pub use terminal::{
    BoardSnapshot, CrosstermKeys, KeySource, RawModeGuard, Renderer, TerminalRenderer,
};
