//! Power scoring: attribute extraction and the power budget model.
//!
//! ## Pipeline
//!
//! `CardRecord` → `AttributeExtractor` → `NormalizedAttributes`
//! → `PowerScorer` → `PowerScore`

pub mod extractor;
pub mod power;

pub use extractor::{AttributeExtractor, NormalizedAttributes};
pub use power::{EffectContribution, PowerScore, PowerScorer};
