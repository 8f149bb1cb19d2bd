//! Generates the QWERTY → Dvorak remapping as `match` source text.

pub mod emit;
pub mod error;
pub mod layout;
pub mod trace_init;

pub use emit::{match_block, render_match};
pub use error::EmitError;
pub use layout::{Dvorak, KeyPair, Layout, Qwerty, DVORAK_TABLE};
