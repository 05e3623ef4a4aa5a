//! Domain models for the explorer.
//!
//! All of these are owned by collaborators (data layer, narrative engine)
//! and only read by the navigation core.

mod channel;
mod dataset;
mod entity;
mod story;

pub use channel::{Channel, ChannelRegistry};
pub use dataset::Dataset;
pub use entity::{Entity, EntitySet};
pub use story::{BeatLevel, StoryBeat, VisualState};
