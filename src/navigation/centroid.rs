//! Mean position of a channel's entities, memoized per entity-set version.

use std::collections::HashMap;

use bevy::math::Vec3;

use crate::models::{Entity, EntitySet};

/// Arithmetic mean of the given positions, or None for an empty input.
pub fn centroid<'a>(entities: impl IntoIterator<Item = &'a Entity>) -> Option<Vec3> {
    let (sum, count) = entities
        .into_iter()
        .fold((Vec3::ZERO, 0usize), |(sum, count), e| {
            (sum + e.position, count + 1)
        });
    (count > 0).then(|| sum / count as f32)
}

/// Computes channel centroids, caching results until the entity set changes.
#[derive(Debug, Clone, Default)]
pub struct CentroidEngine {
    version: Option<u64>,
    cache: HashMap<String, Option<Vec3>>,
}

impl CentroidEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Centroid of the live entities in `channel`, None if it has none.
    pub fn channel_centroid(&mut self, entities: &EntitySet, channel: &str) -> Option<Vec3> {
        if self.version != Some(entities.version()) {
            self.cache.clear();
            self.version = Some(entities.version());
        }

        if let Some(cached) = self.cache.get(channel) {
            return *cached;
        }

        let value = centroid(entities.in_channel(channel));
        self.cache.insert(channel.to_string(), value);
        value
    }
}
