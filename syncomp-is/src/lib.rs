//! syncomp-is - InputSense
//!
//! Turns one sensory input (a color, an image's pixel statistics, a piece
//! of text, or four emotion sliders) into a set of musical parameters:
//! key, scale, tempo, dynamics, mood, complexity, and length.
//!
//! Pipeline:
//! 1. `extractors` - raw input → kind-specific features
//! 2. `mapper` - features → [`MusicalParameterSet`]
//! 3. `record` - features + parameters wrapped in a [`SensoryInput`]
//! 4. `session` - current input slot and composition history
//!
//! `pixel_stats` and `library` are the front-end collaborators used by the
//! command line tool (image decoding, persisted compositions); `cli` holds
//! the tool's argument parsing and run flow.

pub mod cli;
pub mod error;
pub mod extractors;
pub mod library;
pub mod mapper;
pub mod params;
pub mod pixel_stats;
pub mod record;
pub mod session;

pub use crate::error::{SenseError, SenseResult};
pub use crate::extractors::{FeatureSet, RawInput};
pub use crate::mapper::map_features;
pub use crate::params::MusicalParameterSet;
pub use crate::record::{Analyzer, SensoryInput};
pub use crate::session::{Session, SessionStatus};
