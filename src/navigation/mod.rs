//! Navigation and camera-orchestration core.
//!
//! Reconciles clicks, keyboard shortcuts, the guided tour and zoom stepping
//! into one notion of where the camera is and where it should go next.
//!
//! ## Module Structure
//!
//! - `zoom` - Zoom levels, distance table, stepping controller
//! - `state` - L1/L2/L3 hierarchy state machine
//! - `centroid` - Channel centroids with per-version memoization
//! - `focus` - Focus context and reorientation target resolution
//! - `camera` - Single-slot camera animation mailbox
//! - `story` - Story beat → navigation synchronization
//! - `keyboard` - Key event → command mapping
//! - `visual` - Pure per-entity visual focus derivation
//! - `explorer` - The store composing all of the above

mod camera;
mod centroid;
mod explorer;
mod focus;
mod keyboard;
mod state;
mod story;
mod visual;
mod zoom;

pub use camera::{CameraAnimationBroker, CameraAnimationRequest, CameraSettings};
pub use centroid::{centroid, CentroidEngine};
pub use explorer::{Explorer, ExplorerSnapshot, ListenerId};
pub use focus::{FocusContext, FocusContextResolver, ReorientInput, ReorientTarget};
pub use keyboard::{Key, KeyCommand, KeyContext, KeyEvent, KeyboardController, Modifiers};
pub use state::{NavigationContext, NavigationState, Navigator};
pub use story::{CampaignDirectory, StorySynchronizer, SyncOutcome};
pub use visual::{visual_focus, VisualFocus, DIMMED_OPACITY};
pub use zoom::{DistanceTable, ZoomLevel, ZoomLevelController};
