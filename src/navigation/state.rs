//! The L1/L2/L3 hierarchy state machine.

use serde::Serialize;

use super::zoom::ZoomLevel;

/// Where in the hierarchy the explorer currently is.
///
/// Invariants (upheld by [`NavigationState`]):
/// - `Ecosystem`: no channel, no campaign
/// - `Campaign`: channel set, no campaign
/// - `Hcp`: channel and campaign set
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationContext {
    pub level: ZoomLevel,
    pub channel_id: Option<String>,
    pub channel_label: Option<String>,
    pub campaign_id: Option<String>,
    pub campaign_label: Option<String>,
}

impl NavigationContext {
    /// True when exactly at L2 on `channel_id`.
    pub fn is_at_channel(&self, channel_id: &str) -> bool {
        self.level == ZoomLevel::Campaign && self.channel_id.as_deref() == Some(channel_id)
    }

    /// True when exactly at L3 on the `(channel_id, campaign_id)` pair.
    pub fn is_at_campaign(&self, channel_id: &str, campaign_id: &str) -> bool {
        self.level == ZoomLevel::Hcp
            && self.channel_id.as_deref() == Some(channel_id)
            && self.campaign_id.as_deref() == Some(campaign_id)
    }

    /// Whether a back button should be enabled.
    pub fn can_go_back(&self) -> bool {
        self.level != ZoomLevel::Ecosystem
    }

    /// Display trail from the root down to the current level.
    pub fn breadcrumbs(&self) -> Vec<String> {
        let mut trail = vec!["Ecosystem".to_string()];
        if let Some(channel) = self.channel_label.as_ref().or(self.channel_id.as_ref()) {
            trail.push(channel.clone());
        }
        if let Some(campaign) = self.campaign_label.as_ref().or(self.campaign_id.as_ref()) {
            trail.push(campaign.clone());
        }
        trail
    }
}

/// Hierarchy transitions, as seen by triggers (keyboard, story, clicks).
pub trait Navigator {
    fn context(&self) -> &NavigationContext;
    fn navigate_to_l1(&mut self);
    fn navigate_to_l2(&mut self, channel_id: &str, channel_label: &str);
    fn navigate_to_l3(
        &mut self,
        channel_id: &str,
        channel_label: &str,
        campaign_id: &str,
        campaign_label: &str,
    );
    fn back(&mut self);
}

/// Owns the [`NavigationContext`] and mutates it only through transitions.
///
/// All transitions are total: a missing required id leaves the state
/// untouched instead of failing.
#[derive(Debug, Clone, Default)]
pub struct NavigationState {
    context: NavigationContext,
}

impl NavigationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn level(&self) -> ZoomLevel {
        self.context.level
    }
}

impl Navigator for NavigationState {
    fn context(&self) -> &NavigationContext {
        &self.context
    }

    fn navigate_to_l1(&mut self) {
        tracing::debug!("navigate to L1 from {:?}", self.context.level);
        self.context = NavigationContext::default();
    }

    fn navigate_to_l2(&mut self, channel_id: &str, channel_label: &str) {
        if channel_id.is_empty() {
            tracing::debug!("navigate to L2 ignored: empty channel id");
            return;
        }
        tracing::debug!("navigate to L2: channel={}", channel_id);
        self.context = NavigationContext {
            level: ZoomLevel::Campaign,
            channel_id: Some(channel_id.to_string()),
            channel_label: Some(channel_label.to_string()),
            campaign_id: None,
            campaign_label: None,
        };
    }

    fn navigate_to_l3(
        &mut self,
        channel_id: &str,
        channel_label: &str,
        campaign_id: &str,
        campaign_label: &str,
    ) {
        if channel_id.is_empty() || campaign_id.is_empty() {
            tracing::debug!(
                "navigate to L3 ignored: channel={:?} campaign={:?}",
                channel_id,
                campaign_id
            );
            return;
        }
        tracing::debug!(
            "navigate to L3: channel={} campaign={}",
            channel_id,
            campaign_id
        );
        self.context = NavigationContext {
            level: ZoomLevel::Hcp,
            channel_id: Some(channel_id.to_string()),
            channel_label: Some(channel_label.to_string()),
            campaign_id: Some(campaign_id.to_string()),
            campaign_label: Some(campaign_label.to_string()),
        };
    }

    fn back(&mut self) {
        match self.context.level {
            ZoomLevel::Hcp => {
                tracing::debug!("back: L3 -> L2");
                self.context.level = ZoomLevel::Campaign;
                self.context.campaign_id = None;
                self.context.campaign_label = None;
            }
            ZoomLevel::Campaign => {
                tracing::debug!("back: L2 -> L1");
                self.context = NavigationContext::default();
            }
            ZoomLevel::Ecosystem => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at_l3() -> NavigationState {
        let mut nav = NavigationState::new();
        nav.navigate_to_l3("email", "Email", "C001", "ONC Launch Wave 1");
        nav
    }

    #[test]
    fn test_navigate_to_l1_from_anywhere() {
        let mut nav = at_l3();
        nav.navigate_to_l1();
        assert_eq!(nav.context(), &NavigationContext::default());

        nav.navigate_to_l2("social", "Social");
        nav.navigate_to_l1();
        assert_eq!(nav.level(), ZoomLevel::Ecosystem);
        assert!(nav.context().channel_id.is_none());
        assert!(nav.context().campaign_id.is_none());
    }

    #[test]
    fn test_l3_back_keeps_channel() {
        let mut nav = at_l3();
        nav.back();

        let ctx = nav.context();
        assert_eq!(ctx.level, ZoomLevel::Campaign);
        assert_eq!(ctx.channel_id.as_deref(), Some("email"));
        assert_eq!(ctx.channel_label.as_deref(), Some("Email"));
        assert!(ctx.campaign_id.is_none());
        assert!(ctx.campaign_label.is_none());
    }

    #[test]
    fn test_back_chain_ends_at_l1() {
        let mut nav = at_l3();
        nav.back();
        nav.back();
        assert_eq!(nav.context(), &NavigationContext::default());
        nav.back();
        assert_eq!(nav.context(), &NavigationContext::default());
    }

    #[test]
    fn test_l2_clears_campaign() {
        let mut nav = at_l3();
        nav.navigate_to_l2("social", "Social");
        assert!(nav.context().is_at_channel("social"));
        assert!(nav.context().campaign_id.is_none());
    }

    #[test]
    fn test_invalid_targets_are_noops() {
        let mut nav = at_l3();
        let before = nav.context().clone();

        nav.navigate_to_l2("", "Nothing");
        assert_eq!(nav.context(), &before);

        nav.navigate_to_l3("email", "Email", "", "");
        assert_eq!(nav.context(), &before);

        nav.navigate_to_l3("", "", "C002", "Wave 2");
        assert_eq!(nav.context(), &before);
    }

    #[test]
    fn test_breadcrumbs() {
        let mut nav = at_l3();
        assert_eq!(
            nav.context().breadcrumbs(),
            vec!["Ecosystem", "Email", "ONC Launch Wave 1"]
        );
        assert!(nav.context().can_go_back());

        nav.navigate_to_l1();
        assert_eq!(nav.context().breadcrumbs(), vec!["Ecosystem"]);
        assert!(!nav.context().can_go_back());
    }
}
