//! Keyword-routed templated response engine.
//!
//! Given a free-text message and the current [`MetricsSnapshot`], the
//! engine classifies the message into one [`Category`] by substring
//! keyword matching, then picks one of the category's canned templates at
//! random and interpolates the snapshot into it. Classification is
//! deterministic and total; `respond` cannot fail.
//!
//! The keyword sets overlap, so they are tested in a fixed priority order
//! (Sleep, Cardio, Fitness, Stress, Nutrition, then General as the
//! fallback). First match wins.
//!
//! # Example
//!
//! ```rust
//! use phia_core::MetricsSnapshot;
//! use phia_engine::{classify, Category, ResponseEngine};
//!
//! let engine = ResponseEngine::new();
//! let metrics = MetricsSnapshot::default();
//!
//! assert_eq!(classify("how did I sleep?"), Category::Sleep);
//! let reply = engine.respond("how did I sleep?", &metrics);
//! assert!(!reply.is_empty());
//! ```

mod templates;

use std::fmt;

use phia_core::MetricsSnapshot;
use rand::Rng;
use tracing::debug;

pub use templates::POOL_SIZE;

/// Topic bucket a chat message resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Sleep,
    Cardio,
    Fitness,
    Stress,
    Nutrition,
    General,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sleep => write!(f, "sleep"),
            Self::Cardio => write!(f, "cardio"),
            Self::Fitness => write!(f, "fitness"),
            Self::Stress => write!(f, "stress"),
            Self::Nutrition => write!(f, "nutrition"),
            Self::General => write!(f, "general"),
        }
    }
}

const SLEEP_KEYWORDS: &[&str] = &["sleep", "tired", "rest", "bed", "wake"];
const CARDIO_KEYWORDS: &[&str] = &["heart", "cardio", "cardiovascular", "pulse"];
const FITNESS_KEYWORDS: &[&str] = &["exercise", "workout", "fitness", "active", "gym", "run", "walk"];
const STRESS_KEYWORDS: &[&str] = &["stress", "anxiety", "relax", "calm", "mental"];
const NUTRITION_KEYWORDS: &[&str] = &["weight", "diet", "nutrition", "eat", "food", "calories"];

/// Categories in classification priority order, paired with their
/// keyword sets. `General` is the fallback and has no keywords.
const PRIORITY: &[(Category, &[&str])] = &[
    (Category::Sleep, SLEEP_KEYWORDS),
    (Category::Cardio, CARDIO_KEYWORDS),
    (Category::Fitness, FITNESS_KEYWORDS),
    (Category::Stress, STRESS_KEYWORDS),
    (Category::Nutrition, NUTRITION_KEYWORDS),
];

/// Resolves a message to its category. Matching is case-insensitive
/// substring containment, not token-bounded; first match in priority
/// order wins.
pub fn classify(message: &str) -> Category {
    let message = message.to_lowercase();

    PRIORITY
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| message.contains(k)))
        .map(|(category, _)| *category)
        .unwrap_or(Category::General)
}

/// Source of template indices, injectable so tests can pin selection.
pub trait TemplateSelector: Send + Sync {
    /// Returns an index in `0..pool_size`.
    fn pick(&self, pool_size: usize) -> usize;
}

/// Default selector backed by the thread-local rng. Reentrant: each call
/// grabs a fresh handle, so concurrent handlers need no locking.
#[derive(Debug, Default)]
pub struct RandomSelector;

impl TemplateSelector for RandomSelector {
    fn pick(&self, pool_size: usize) -> usize {
        rand::rng().random_range(0..pool_size)
    }
}

/// Stateless responder over the fixed template pools.
pub struct ResponseEngine {
    selector: Box<dyn TemplateSelector>,
}

impl ResponseEngine {
    /// Engine with uniform random template selection.
    pub fn new() -> Self {
        Self::with_selector(Box::new(RandomSelector))
    }

    /// Engine with a caller-supplied selector.
    pub fn with_selector(selector: Box<dyn TemplateSelector>) -> Self {
        Self { selector }
    }

    /// Classifies `message` and renders one of the category's templates
    /// against `metrics`. Total: any input, including keyword-less text,
    /// produces a non-empty response.
    pub fn respond(&self, message: &str, metrics: &MetricsSnapshot) -> String {
        let category = classify(message);
        let index = self.selector.pick(POOL_SIZE).min(POOL_SIZE - 1);
        debug!(%category, index, "classified chat message");
        templates::render(category, index, metrics)
    }
}

impl Default for ResponseEngine {
    fn default() -> Self {
        Self::new()
    }
}
