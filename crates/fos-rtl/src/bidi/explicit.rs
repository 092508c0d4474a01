//! Explicit embedding levels (rules X1-X8)
//!
//! A single left-to-right pass over the paragraph driven by a bounded
//! stack of (level, override) pairs. Nesting deeper than [`Level::MAX`]
//! is not an error: the affected characters keep the last valid level.

use super::{BidiClass, Level};

/// Number of entries the embedding stack can hold
pub const STACK_CAPACITY: usize = Level::MAX as usize;

/// Level and directional override in effect for a character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Embedding {
    /// Explicit embedding level
    pub level: Level,
    /// Set inside LRO/RLO: the character's type is forced to the level's strong type
    pub overrides: bool,
}

impl Embedding {
    fn base(level: Level) -> Self {
        Self { level, overrides: false }
    }
}

/// Fixed-capacity stack of saved embedding states
#[derive(Debug)]
struct EmbeddingStack {
    entries: [Embedding; STACK_CAPACITY],
    depth: usize,
}

impl EmbeddingStack {
    fn new() -> Self {
        Self {
            entries: [Embedding::default(); STACK_CAPACITY],
            depth: 0,
        }
    }

    fn push(&mut self, embedding: Embedding) {
        // Levels grow by at least one per push and stop at Level::MAX,
        // so the depth never exceeds the capacity.
        debug_assert!(self.depth < STACK_CAPACITY);
        self.entries[self.depth] = embedding;
        self.depth += 1;
    }

    fn pop(&mut self) -> Option<Embedding> {
        if self.depth == 0 {
            return None;
        }
        self.depth -= 1;
        Some(self.entries[self.depth])
    }

    fn clear(&mut self) {
        self.depth = 0;
    }
}

/// Stack machine for one paragraph
#[derive(Debug)]
pub struct EmbeddingResolver {
    paragraph: Level,
    current: Embedding,
    stack: EmbeddingStack,
    /// Initiators that would have produced a level above the maximum
    overflow: u32,
    /// LRE/LRO rejected at level 60 while an RLE/RLO could still reach 61
    overflow_almost: u32,
}

impl EmbeddingResolver {
    /// Create a resolver starting at the paragraph level
    pub fn new(paragraph: Level) -> Self {
        Self {
            paragraph,
            current: Embedding::base(paragraph),
            stack: EmbeddingStack::new(),
            overflow: 0,
            overflow_almost: 0,
        }
    }

    /// Feed one character, returning the state in effect before it is applied
    pub fn step(&mut self, class: BidiClass) -> Embedding {
        let stamped = self.current;

        match class {
            BidiClass::LRE | BidiClass::RLE | BidiClass::LRO | BidiClass::RLO => {
                self.push(class);
            }

            BidiClass::PDF => {
                if self.overflow > 0 {
                    self.overflow -= 1;
                } else if self.overflow_almost > 0 && self.current.level.number() != Level::MAX {
                    self.overflow_almost -= 1;
                } else if let Some(saved) = self.stack.pop() {
                    self.current = saved;
                }
            }

            BidiClass::B => {
                self.stack.clear();
                self.overflow = 0;
                self.overflow_almost = 0;
                self.current = Embedding::base(self.paragraph);
                return self.current;
            }

            _ => {}
        }

        stamped
    }

    fn push(&mut self, class: BidiClass) {
        if self.overflow == 0 {
            let next = match class {
                BidiClass::RLE | BidiClass::RLO => self.current.level.next_rtl(),
                _ => self.current.level.next_ltr(),
            };

            if let Some(level) = next {
                self.stack.push(self.current);
                self.current = Embedding {
                    level,
                    overrides: matches!(class, BidiClass::LRO | BidiClass::RLO),
                };
                return;
            }

            if self.current.level.number() == Level::MAX - 1 {
                tracing::trace!("Embedding {:?} rejected at level 60", class);
                self.overflow_almost += 1;
                return;
            }
        }

        tracing::trace!("Embedding {:?} overflows at level {}", class, self.current.level.number());
        self.overflow += 1;
    }
}

/// X1-X8: Compute the explicit embedding of every character
pub fn resolve_explicit(classes: &[BidiClass], paragraph: Level) -> Vec<Embedding> {
    let mut resolver = EmbeddingResolver::new(paragraph);
    classes.iter().map(|&class| resolver.step(class)).collect()
}
