//! Unicode Bidirectional Algorithm
//!
//! Paragraph-level implementation of the bidi algorithm without isolates:
//! explicit embeddings and overrides (X1-X10), weak and neutral type
//! resolution (W1-W7, N1-N2), implicit levels (I1-I2) and per-line
//! reordering (L1-L2).

mod class;
mod compact;
mod explicit;
mod level;
mod mirror;
mod paragraph;
mod reorder;
mod run;

pub use class::{BidiClass, classes_from_raw, classify};
pub use explicit::{Embedding, EmbeddingResolver, resolve_explicit};
pub use level::Level;
pub use mirror::{mirror, mirror_glyphs};
pub use paragraph::BidiParagraph;
pub use reorder::{reorder_line, validate_line_breaks};
pub use run::{LevelRun, level_runs};
