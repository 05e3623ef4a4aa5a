//! Keeps navigation in step with the guided tour.
//!
//! The narrative engine owns the beat pointer; whenever it moves, the
//! synchronizer derives the navigation the new beat asks for and applies it
//! through the same [`Navigator`] transitions a click would use.

use std::collections::HashMap;

use super::state::Navigator;
use super::zoom::ZoomLevel;
use crate::models::{BeatLevel, ChannelRegistry, StoryBeat, VisualState};

/// Built-in campaign display names.
const BUILTIN_CAMPAIGNS: &[(&str, &str)] = &[
    ("C001", "ONC Launch Wave 1"),
    ("C002", "ONC Launch Wave 2"),
    ("C003", "Cardio Awareness"),
    ("C004", "Immunology Education"),
    ("C005", "Rare Disease Outreach"),
];

/// Campaign id → display name. Unknown ids are their own name.
#[derive(Debug, Clone)]
pub struct CampaignDirectory {
    names: HashMap<String, String>,
}

impl Default for CampaignDirectory {
    fn default() -> Self {
        Self {
            names: BUILTIN_CAMPAIGNS
                .iter()
                .map(|(id, name)| (id.to_string(), name.to_string()))
                .collect(),
        }
    }
}

impl CampaignDirectory {
    /// Built-in table extended (and overridden) by `extra`.
    pub fn with_overrides(extra: &HashMap<String, String>) -> Self {
        let mut directory = Self::default();
        directory
            .names
            .extend(extra.iter().map(|(id, name)| (id.clone(), name.clone())));
        directory
    }

    pub fn name<'a>(&'a self, campaign_id: &'a str) -> &'a str {
        self.names
            .get(campaign_id)
            .map(String::as_str)
            .unwrap_or(campaign_id)
    }
}

/// What a sync did to navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOutcome {
    /// The pointer did not move.
    Unchanged,
    /// No beat, a legacy beat without `level`, or a beat missing the ids
    /// its level needs.
    Skipped,
    /// Navigation was already where the beat wants it.
    AlreadyThere,
    /// A transition was issued.
    Navigated(ZoomLevel),
}

/// Derives navigation from the current story beat.
#[derive(Debug, Clone, Default)]
pub struct StorySynchronizer {
    beats: Vec<StoryBeat>,
    current: Option<usize>,
    campaigns: CampaignDirectory,
}

impl StorySynchronizer {
    pub fn new(beats: Vec<StoryBeat>, campaigns: CampaignDirectory) -> Self {
        Self {
            beats,
            current: None,
            campaigns,
        }
    }

    pub fn beats(&self) -> &[StoryBeat] {
        &self.beats
    }

    pub fn campaigns(&self) -> &CampaignDirectory {
        &self.campaigns
    }

    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    pub fn current_beat(&self) -> Option<&StoryBeat> {
        self.current.and_then(|i| self.beats.get(i))
    }

    /// Channel the current beat highlights, passed through unchanged.
    pub fn channel_focus(&self) -> Option<&str> {
        self.current_beat()?.channel_focus.as_deref()
    }

    /// Visual state of the current beat, passed through unchanged.
    pub fn visual_state(&self) -> Option<VisualState> {
        self.current_beat()?.visual_state
    }

    /// React to the narrative engine moving the beat pointer.
    ///
    /// Indices past the end clear the pointer.
    pub fn set_current(
        &mut self,
        index: Option<usize>,
        nav: &mut impl Navigator,
        channels: &ChannelRegistry,
    ) -> SyncOutcome {
        let index = index.filter(|i| *i < self.beats.len());
        if index == self.current {
            return SyncOutcome::Unchanged;
        }
        self.current = index;

        match self.current_beat() {
            Some(beat) => {
                tracing::debug!("story beat {} ({:?})", beat.id, index);
                self.sync_beat(beat, nav, channels)
            }
            None => SyncOutcome::Skipped,
        }
    }

    /// Apply the navigation one beat asks for, unless already there.
    pub fn sync_beat(
        &self,
        beat: &StoryBeat,
        nav: &mut impl Navigator,
        channels: &ChannelRegistry,
    ) -> SyncOutcome {
        let Some(level) = beat.level else {
            return SyncOutcome::Skipped;
        };

        match level {
            BeatLevel::L1 => {
                if nav.context().level == ZoomLevel::Ecosystem {
                    return SyncOutcome::AlreadyThere;
                }
                nav.navigate_to_l1();
                SyncOutcome::Navigated(ZoomLevel::Ecosystem)
            }
            BeatLevel::L2 => {
                let Some(channel) = non_empty(&beat.channel_context) else {
                    tracing::debug!("beat {} wants L2 without channel context", beat.id);
                    return SyncOutcome::Skipped;
                };
                if nav.context().is_at_channel(channel) {
                    return SyncOutcome::AlreadyThere;
                }
                nav.navigate_to_l2(channel, channels.label(channel));
                SyncOutcome::Navigated(ZoomLevel::Campaign)
            }
            BeatLevel::L3 => {
                let (Some(channel), Some(campaign)) = (
                    non_empty(&beat.channel_context),
                    non_empty(&beat.campaign_context),
                ) else {
                    tracing::debug!("beat {} wants L3 without channel/campaign", beat.id);
                    return SyncOutcome::Skipped;
                };
                if nav.context().is_at_campaign(channel, campaign) {
                    return SyncOutcome::AlreadyThere;
                }
                nav.navigate_to_l3(
                    channel,
                    channels.label(channel),
                    campaign,
                    self.campaigns.name(campaign),
                );
                SyncOutcome::Navigated(ZoomLevel::Hcp)
            }
        }
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::state::{NavigationContext, NavigationState};

    /// Navigator that counts transitions on top of a real state.
    #[derive(Default)]
    struct CountingNavigator {
        inner: NavigationState,
        calls: usize,
    }

    impl Navigator for CountingNavigator {
        fn context(&self) -> &NavigationContext {
            self.inner.context()
        }
        fn navigate_to_l1(&mut self) {
            self.calls += 1;
            self.inner.navigate_to_l1();
        }
        fn navigate_to_l2(&mut self, channel_id: &str, channel_label: &str) {
            self.calls += 1;
            self.inner.navigate_to_l2(channel_id, channel_label);
        }
        fn navigate_to_l3(&mut self, a: &str, b: &str, c: &str, d: &str) {
            self.calls += 1;
            self.inner.navigate_to_l3(a, b, c, d);
        }
        fn back(&mut self) {
            self.calls += 1;
            self.inner.back();
        }
    }

    fn beat(
        id: &str,
        level: Option<BeatLevel>,
        channel: Option<&str>,
        campaign: Option<&str>,
    ) -> StoryBeat {
        StoryBeat {
            id: id.to_string(),
            level,
            channel_context: channel.map(str::to_string),
            campaign_context: campaign.map(str::to_string),
            ..StoryBeat::default()
        }
    }

    #[test]
    fn test_unknown_campaign_name_is_id() {
        let directory = CampaignDirectory::default();
        assert_eq!(directory.name("C999"), "C999");
        assert_eq!(directory.name("C001"), "ONC Launch Wave 1");
    }

    #[test]
    fn test_campaign_overrides() {
        let mut extra = HashMap::new();
        extra.insert("C001".to_string(), "Renamed".to_string());
        extra.insert("C042".to_string(), "Custom".to_string());
        let directory = CampaignDirectory::with_overrides(&extra);

        assert_eq!(directory.name("C001"), "Renamed");
        assert_eq!(directory.name("C042"), "Custom");
        assert_eq!(directory.name("C002"), "ONC Launch Wave 2");
    }

    #[test]
    fn test_l3_beat_is_idempotent() {
        let sync = StorySynchronizer::default();
        let channels = ChannelRegistry::default();
        let mut nav = CountingNavigator::default();
        nav.inner.navigate_to_l3("email", "Email", "C001", "ONC Launch Wave 1");

        let b = beat("b", Some(BeatLevel::L3), Some("email"), Some("C001"));
        assert_eq!(
            sync.sync_beat(&b, &mut nav, &channels),
            SyncOutcome::AlreadyThere
        );
        assert_eq!(nav.calls, 0);
    }

    #[test]
    fn test_l2_beat_guard_checks_channel() {
        let sync = StorySynchronizer::default();
        let channels = ChannelRegistry::default();
        let mut nav = CountingNavigator::default();
        nav.inner.navigate_to_l2("email", "Email");

        let same = beat("a", Some(BeatLevel::L2), Some("email"), None);
        assert_eq!(
            sync.sync_beat(&same, &mut nav, &channels),
            SyncOutcome::AlreadyThere
        );

        let other = beat("b", Some(BeatLevel::L2), Some("social"), None);
        assert_eq!(
            sync.sync_beat(&other, &mut nav, &channels),
            SyncOutcome::Navigated(ZoomLevel::Campaign)
        );
        assert_eq!(nav.calls, 1);
        assert!(nav.context().is_at_channel("social"));
    }

    #[test]
    fn test_legacy_and_incomplete_beats_are_skipped() {
        let sync = StorySynchronizer::default();
        let channels = ChannelRegistry::default();
        let mut nav = CountingNavigator::default();

        let legacy = beat("old", None, Some("email"), Some("C001"));
        let missing_campaign = beat("l3", Some(BeatLevel::L3), Some("email"), None);
        let missing_channel = beat("l2", Some(BeatLevel::L2), None, None);

        for b in [legacy, missing_campaign, missing_channel] {
            assert_eq!(
                sync.sync_beat(&b, &mut nav, &channels),
                SyncOutcome::Skipped
            );
        }
        assert_eq!(nav.calls, 0);
    }

    #[test]
    fn test_pointer_changes_drive_navigation() {
        let beats = vec![
            beat("intro", Some(BeatLevel::L1), None, None),
            beat("email", Some(BeatLevel::L2), Some("email"), None),
            beat("wave", Some(BeatLevel::L3), Some("email"), Some("C001")),
        ];
        let mut sync = StorySynchronizer::new(beats, CampaignDirectory::default());
        let channels = ChannelRegistry::default();
        let mut nav = CountingNavigator::default();

        assert_eq!(
            sync.set_current(Some(0), &mut nav, &channels),
            SyncOutcome::AlreadyThere
        );
        assert_eq!(
            sync.set_current(Some(2), &mut nav, &channels),
            SyncOutcome::Navigated(ZoomLevel::Hcp)
        );
        assert_eq!(
            nav.context().campaign_label.as_deref(),
            Some("ONC Launch Wave 1")
        );
        assert_eq!(
            sync.set_current(Some(2), &mut nav, &channels),
            SyncOutcome::Unchanged
        );
        assert_eq!(
            sync.set_current(Some(9), &mut nav, &channels),
            SyncOutcome::Skipped
        );
        assert!(sync.current_beat().is_none());
        assert_eq!(nav.calls, 1);
    }

    #[test]
    fn test_read_through_fields() {
        let mut b = beat("b", None, None, None);
        b.channel_focus = Some("email".to_string());
        b.visual_state = Some(VisualState::Warning);
        let mut sync = StorySynchronizer::new(vec![b], CampaignDirectory::default());
        let mut nav = NavigationState::new();

        sync.set_current(Some(0), &mut nav, &ChannelRegistry::default());
        assert_eq!(sync.channel_focus(), Some("email"));
        assert_eq!(sync.visual_state(), Some(VisualState::Warning));
    }
}
