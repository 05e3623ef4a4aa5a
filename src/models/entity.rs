//! Entity model representing positioned nodes in the scene.

use bevy::math::Vec3;
use serde::{Deserialize, Serialize};

/// A positioned entity (an individual hcp) belonging to a channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    /// Unique identifier.
    pub id: String,
    /// Channel this entity belongs to.
    pub channel: String,
    /// Current position in 3D space.
    pub position: Vec3,
    /// Campaign this entity is enrolled in, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub campaign: Option<String>,
    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Entity {
    /// Creates an entity without campaign or name.
    pub fn new(id: impl Into<String>, channel: impl Into<String>, position: Vec3) -> Self {
        Self {
            id: id.into(),
            channel: channel.into(),
            position,
            campaign: None,
            name: None,
        }
    }

    /// Sets the campaign this entity is enrolled in.
    pub fn with_campaign(mut self, campaign: impl Into<String>) -> Self {
        self.campaign = Some(campaign.into());
        self
    }

    /// Name to show in labels, falling back to the id.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.id)
    }
}

/// The live, mutable entity list with a version counter.
///
/// Every mutation bumps `version`, so derived values (centroids) can be
/// cached against `(version, channel)` and invalidated cheaply.
#[derive(Debug, Clone, Default)]
pub struct EntitySet {
    entities: Vec<Entity>,
    version: u64,
}

impl EntitySet {
    pub fn new(entities: Vec<Entity>) -> Self {
        Self {
            entities,
            version: 0,
        }
    }

    /// Current version; changes on every mutation.
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Entity> {
        self.entities.iter().find(|e| e.id == id)
    }

    /// Entities belonging to `channel`, in list order.
    pub fn in_channel<'a>(&'a self, channel: &'a str) -> impl Iterator<Item = &'a Entity> + 'a {
        self.entities.iter().filter(move |e| e.channel == channel)
    }

    /// Replace the whole entity list (e.g. after a data refresh).
    pub fn replace(&mut self, entities: Vec<Entity>) {
        self.entities = entities;
        self.version += 1;
    }

    /// Move one entity. Returns false if no entity has that id.
    pub fn move_entity(&mut self, id: &str, position: Vec3) -> bool {
        match self.entities.iter_mut().find(|e| e.id == id) {
            Some(entity) => {
                entity.position = position;
                self.version += 1;
                true
            }
            None => false,
        }
    }

    /// Remove every entity of a channel. Returns how many were removed.
    pub fn remove_channel(&mut self, channel: &str) -> usize {
        let before = self.entities.len();
        self.entities.retain(|e| e.channel != channel);
        let removed = before - self.entities.len();
        if removed > 0 {
            self.version += 1;
        }
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> EntitySet {
        EntitySet::new(vec![
            Entity::new("h1", "email", Vec3::new(1.0, 0.0, 0.0)),
            Entity::new("h2", "social", Vec3::ZERO),
            Entity::new("h3", "email", Vec3::new(3.0, 0.0, 0.0)),
        ])
    }

    #[test]
    fn test_in_channel_filters() {
        let set = sample();
        let ids: Vec<&str> = set.in_channel("email").map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["h1", "h3"]);
    }

    #[test]
    fn test_mutations_bump_version() {
        let mut set = sample();
        assert_eq!(set.version(), 0);

        assert!(set.move_entity("h2", Vec3::ONE));
        assert_eq!(set.version(), 1);

        assert!(!set.move_entity("missing", Vec3::ONE));
        assert_eq!(set.version(), 1);

        assert_eq!(set.remove_channel("email"), 2);
        assert_eq!(set.version(), 2);
        assert_eq!(set.remove_channel("email"), 0);
        assert_eq!(set.version(), 2);
    }

    #[test]
    fn test_deserialize_with_optional_fields() {
        let json = r#"{"id":"h1","channel":"email","position":[1.0,2.0,3.0]}"#;
        let entity: Entity = serde_json::from_str(json).unwrap();
        assert_eq!(entity.position, Vec3::new(1.0, 2.0, 3.0));
        assert!(entity.campaign.is_none());
        assert_eq!(entity.display_name(), "h1");
    }
}
