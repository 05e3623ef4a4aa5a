//! The explorer store: one owned value composing the navigation core.
//!
//! Every trigger (click, key, story beat, zoom button) goes through a named
//! transition here. Consumers read [`ExplorerSnapshot`]s via
//! [`Explorer::get_state`] or register with [`Explorer::on_change`]; the
//! renderer drains camera requests with [`Explorer::take_pending_animation`].

use bevy::math::Vec3;

use super::camera::{CameraAnimationBroker, CameraAnimationRequest, CameraSettings};
use super::focus::{FocusContext, FocusContextResolver, ReorientInput, ReorientTarget};
use super::keyboard::{KeyCommand, KeyContext, KeyEvent, KeyboardController};
use super::state::{NavigationContext, NavigationState, Navigator};
use super::story::{CampaignDirectory, StorySynchronizer, SyncOutcome};
use super::visual::{visual_focus, VisualFocus};
use super::zoom::{ZoomLevel, ZoomLevelController};
use crate::config::Config;
use crate::error::AppError;
use crate::models::{ChannelRegistry, Dataset, Entity, EntitySet, StoryBeat, VisualState};

/// Handle returned by [`Explorer::on_change`].
pub type ListenerId = u64;

type Listener = Box<dyn Fn(&ExplorerSnapshot) + Send + Sync>;

/// Immutable view of the explorer state.
#[derive(Debug, Clone, PartialEq)]
pub struct ExplorerSnapshot {
    pub navigation: NavigationContext,
    pub focus: FocusContext,
    pub zoom_level: ZoomLevel,
    pub story_mode: bool,
    pub beat_index: Option<usize>,
    /// Channel currently highlighted (story focus in story mode, otherwise
    /// the navigated channel).
    pub highlight_channel: Option<String>,
    /// Visual state applied to the highlighted channel (story mode only).
    pub visual_state: Option<VisualState>,
    pub pending_animation: Option<CameraAnimationRequest>,
}

pub struct Explorer {
    navigation: NavigationState,
    focus: FocusContext,
    zoom: ZoomLevelController,
    broker: CameraAnimationBroker,
    resolver: FocusContextResolver,
    story: StorySynchronizer,
    story_mode: bool,
    keyboard: KeyboardController,
    entities: EntitySet,
    channels: ChannelRegistry,
    listeners: Vec<(ListenerId, Listener)>,
    next_listener: ListenerId,
    last_snapshot: Option<ExplorerSnapshot>,
}

impl Explorer {
    pub fn new(
        channels: ChannelRegistry,
        entities: EntitySet,
        story: StorySynchronizer,
        settings: CameraSettings,
    ) -> Self {
        Self {
            navigation: NavigationState::new(),
            focus: FocusContext::Global,
            zoom: ZoomLevelController::default(),
            broker: CameraAnimationBroker::new(settings),
            resolver: FocusContextResolver::new(settings),
            story,
            story_mode: false,
            keyboard: KeyboardController,
            entities,
            channels,
            listeners: Vec::new(),
            next_listener: 0,
            last_snapshot: None,
        }
    }

    /// Build an explorer from a loaded dataset and validated config.
    pub fn from_dataset(dataset: Dataset, config: &Config) -> Result<Self, AppError> {
        let settings = config.camera.settings()?;
        let campaigns = CampaignDirectory::with_overrides(&config.campaigns);
        let (channels, entities, beats) = dataset.into_parts();
        Ok(Self::new(
            channels,
            entities,
            StorySynchronizer::new(beats, campaigns),
            settings,
        ))
    }

    // =========================================================================
    // Read access
    // =========================================================================

    pub fn get_state(&self) -> ExplorerSnapshot {
        ExplorerSnapshot {
            navigation: self.navigation.context().clone(),
            focus: self.focus.clone(),
            zoom_level: self.zoom.level(),
            story_mode: self.story_mode,
            beat_index: self.story.current_index(),
            highlight_channel: self.highlight_channel().map(str::to_string),
            visual_state: self.active_visual_state(),
            pending_animation: self.broker.pending().copied(),
        }
    }

    pub fn navigation(&self) -> &NavigationContext {
        self.navigation.context()
    }

    pub fn focus(&self) -> &FocusContext {
        &self.focus
    }

    pub fn zoom_level(&self) -> ZoomLevel {
        self.zoom.level()
    }

    pub fn story_mode(&self) -> bool {
        self.story_mode
    }

    pub fn entities(&self) -> &EntitySet {
        &self.entities
    }

    pub fn channels(&self) -> &ChannelRegistry {
        &self.channels
    }

    pub fn story(&self) -> &StorySynchronizer {
        &self.story
    }

    pub fn current_beat(&self) -> Option<&StoryBeat> {
        self.story.current_beat()
    }

    pub fn camera_settings(&self) -> &CameraSettings {
        self.broker.settings()
    }

    /// Whether a camera request is waiting to be drained.
    pub fn has_pending_animation(&self) -> bool {
        self.broker.pending().is_some()
    }

    /// Camera requests issued so far, including superseded ones.
    pub fn camera_requests_issued(&self) -> u64 {
        self.broker.issued()
    }

    /// Channel to highlight right now, if any.
    pub fn highlight_channel(&self) -> Option<&str> {
        if self.story_mode {
            return self.story.channel_focus();
        }
        match &self.focus {
            FocusContext::Global => None,
            FocusContext::Channel { target_id, .. } => Some(target_id.as_str()),
            FocusContext::Hcp { .. } => self.navigation.context().channel_id.as_deref(),
        }
    }

    /// Appearance of one entity under the current focus.
    pub fn visual_focus_for(&self, entity: &Entity) -> VisualFocus {
        visual_focus(
            &entity.channel,
            self.highlight_channel(),
            self.active_visual_state(),
        )
    }

    fn active_visual_state(&self) -> Option<VisualState> {
        if self.story_mode {
            self.story.visual_state()
        } else {
            None
        }
    }

    // =========================================================================
    // Change notification
    // =========================================================================

    /// Register a listener called with the new snapshot after each change.
    pub fn on_change(
        &mut self,
        listener: impl Fn(&ExplorerSnapshot) + Send + Sync + 'static,
    ) -> ListenerId {
        let id = self.next_listener;
        self.next_listener += 1;
        self.listeners.push((id, Box::new(listener)));
        self.last_snapshot = Some(self.get_state());
        id
    }

    /// Unregister a listener. Returns false if it was not registered.
    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(lid, _)| *lid != id);
        self.listeners.len() != before
    }

    fn notify(&mut self) {
        if self.listeners.is_empty() {
            return;
        }
        let snapshot = self.get_state();
        if self.last_snapshot.as_ref() == Some(&snapshot) {
            return;
        }
        for (_, listener) in &self.listeners {
            listener(&snapshot);
        }
        self.last_snapshot = Some(snapshot);
    }

    // =========================================================================
    // Camera mailbox
    // =========================================================================

    /// Drain the pending camera request (at most once per request).
    pub fn take_pending_animation(&mut self) -> Option<CameraAnimationRequest> {
        let request = self.broker.take();
        if request.is_some() {
            self.notify();
        }
        request
    }

    // =========================================================================
    // Transitions
    // =========================================================================

    /// Drill into a channel cluster (L2) and frame it.
    pub fn select_channel(&mut self, channel_id: &str) {
        if channel_id.is_empty() {
            tracing::debug!("select channel ignored: empty id");
            return;
        }
        let label = self.channels.label(channel_id).to_string();
        self.navigation.navigate_to_l2(channel_id, &label);
        self.refocus_from_navigation(None);
        self.reorient_inner();
        self.notify();
    }

    /// Drill into a single entity (L3) and frame its cluster.
    ///
    /// Entities without a campaign select their channel instead; unknown
    /// ids are ignored.
    pub fn select_entity(&mut self, entity_id: &str) {
        let Some(entity) = self.entities.get(entity_id).cloned() else {
            tracing::debug!("select entity ignored: unknown id {}", entity_id);
            return;
        };
        let Some(campaign) = entity.campaign.as_deref().filter(|c| !c.is_empty()) else {
            self.select_channel(&entity.channel);
            return;
        };

        let channel_label = self.channels.label(&entity.channel).to_string();
        let campaign_label = self.story.campaigns().name(campaign).to_string();
        self.navigation
            .navigate_to_l3(&entity.channel, &channel_label, campaign, &campaign_label);
        self.refocus_from_navigation(Some(&entity));
        self.reorient_inner();
        self.notify();
    }

    /// Up one level (L3 → L2 → L1) and reframe.
    pub fn back(&mut self) {
        if !self.navigation.context().can_go_back() {
            return;
        }
        self.navigation.back();
        self.refocus_from_navigation(None);
        self.reorient_inner();
        self.notify();
    }

    /// Straight to L1 and the global overview.
    pub fn home(&mut self) {
        self.navigation.navigate_to_l1();
        self.refocus_from_navigation(None);
        self.reorient_inner();
        self.notify();
    }

    /// Re-frame whatever is currently focused.
    pub fn reorient(&mut self) -> ReorientTarget {
        let target = self.reorient_inner();
        self.notify();
        target
    }

    pub fn zoom_in(&mut self) -> ZoomLevel {
        let level = self.zoom.zoom_in(&mut self.broker);
        self.notify();
        level
    }

    pub fn zoom_out(&mut self) -> ZoomLevel {
        let level = self.zoom.zoom_out(&mut self.broker);
        self.notify();
        level
    }

    pub fn set_zoom_level(&mut self, level: ZoomLevel) -> ZoomLevel {
        let level = self.zoom.set_level(level, &mut self.broker);
        self.notify();
        level
    }

    /// Turn the guided tour on or off. Either way the camera is reframed.
    pub fn set_story_mode(&mut self, active: bool) {
        if self.story_mode == active {
            return;
        }
        tracing::debug!("story mode {}", if active { "on" } else { "off" });
        self.story_mode = active;
        if active {
            if let Some(beat) = self.story.current_beat() {
                let outcome = self
                    .story
                    .sync_beat(beat, &mut self.navigation, &self.channels);
                if matches!(outcome, SyncOutcome::Navigated(_)) {
                    self.refocus_from_navigation(None);
                }
            }
        }
        self.reorient_inner();
        self.notify();
    }

    /// The narrative engine moved the beat pointer.
    pub fn set_beat_index(&mut self, index: Option<usize>) -> SyncOutcome {
        let outcome = self
            .story
            .set_current(index, &mut self.navigation, &self.channels);
        if outcome == SyncOutcome::Unchanged {
            return outcome;
        }

        let navigated = matches!(outcome, SyncOutcome::Navigated(_));
        if navigated {
            self.refocus_from_navigation(None);
        }
        let has_camera = self
            .story
            .current_beat()
            .is_some_and(|b| b.camera_target.is_some());
        if navigated || (self.story_mode && has_camera) {
            self.reorient_inner();
        }
        self.notify();
        outcome
    }

    /// Route a key event. Returns the command that ran, if any.
    ///
    /// A back key at L1 changes nothing and does not reframe; the L1 jumps
    /// always reframe the overview.
    pub fn handle_key(&mut self, event: &KeyEvent, ctx: &KeyContext) -> Option<KeyCommand> {
        let before = self.navigation.context().clone();
        let command = self.keyboard.dispatch(event, ctx, &mut self.navigation)?;
        if command != KeyCommand::Back || self.navigation.context() != &before {
            self.refocus_from_navigation(None);
            self.reorient_inner();
            self.notify();
        }
        Some(command)
    }

    /// Replace the live entity set (data refresh).
    pub fn replace_entities(&mut self, entities: Vec<Entity>) {
        self.entities.replace(entities);
        self.notify();
    }

    /// Move one entity. Returns false if the id is unknown.
    pub fn move_entity(&mut self, id: &str, position: Vec3) -> bool {
        let moved = self.entities.move_entity(id, position);
        if moved {
            self.notify();
        }
        moved
    }

    // =========================================================================
    // Internals
    // =========================================================================

    /// Derive focus and zoom from the navigation context after a transition.
    fn refocus_from_navigation(&mut self, entity: Option<&Entity>) {
        let ctx = self.navigation.context().clone();
        self.zoom.align(ctx.level);

        self.focus = match (ctx.level, ctx.channel_id.as_deref()) {
            (ZoomLevel::Ecosystem, _) | (_, None) => FocusContext::Global,
            (ZoomLevel::Campaign, Some(channel)) => FocusContext::Channel {
                target_id: channel.to_string(),
                centroid: self.cluster_centroid(channel, None),
            },
            (ZoomLevel::Hcp, Some(channel)) => {
                let target_id = entity
                    .map(|e| e.id.clone())
                    .or_else(|| ctx.campaign_id.clone())
                    .unwrap_or_else(|| channel.to_string());
                FocusContext::Hcp {
                    target_id,
                    centroid: self.cluster_centroid(channel, entity.map(|e| e.position)),
                }
            }
        };
    }

    /// Live centroid of a channel, else the previous focus centroid for the
    /// same channel, else `fallback`, else the origin.
    fn cluster_centroid(&mut self, channel: &str, fallback: Option<Vec3>) -> Vec3 {
        if let Some(live) = self.resolver.channel_centroid(&self.entities, channel) {
            return live;
        }
        match &self.focus {
            FocusContext::Channel { target_id, centroid } if target_id == channel => *centroid,
            _ => fallback.unwrap_or(Vec3::ZERO),
        }
    }

    fn reorient_inner(&mut self) -> ReorientTarget {
        // Back at L1 outside the tour: drop any residual focus first.
        if !self.story_mode
            && self.navigation.level() == ZoomLevel::Ecosystem
            && !self.focus.is_global()
        {
            self.focus = FocusContext::Global;
        }

        let input = ReorientInput {
            story_mode_active: self.story_mode,
            current_beat: self.story.current_beat(),
            focus: &self.focus,
            zoom_level: self.zoom.level(),
            navigation: self.navigation.context(),
            entities: &self.entities,
        };
        let target = self.resolver.resolve(&input);
        let duration = self.broker.settings().reorient_duration;
        self.broker
            .request_by_target(target.target_position, target.target_look_at, duration);
        tracing::debug!("reorient to {}", target.label);
        target
    }
}
