//! Application state (Model in TEA pattern)

use codecracker_core::{build_slices, Platform, ProfileStats, Query, Result};

use crate::config::Settings;
use crate::stats_view::{stats_view, StatsView};

/// Application lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Identifies one submission; later submissions get larger ids
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(u64);

impl RequestId {
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Form
// ─────────────────────────────────────────────────────────────────────────────

/// Focusable areas of the screen, in Tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Platform,
    Username,
    Submit,
    /// Chart legend (only focusable while a chart is shown)
    Chart,
}

/// Form input state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    pub platform: Option<Platform>,
    pub username: String,
    pub focus: FormField,
}

impl FormState {
    /// Both fields are filled in
    pub fn is_complete(&self) -> bool {
        self.platform.is_some() && !self.username.is_empty()
    }

    /// Build the query the form currently describes
    pub fn query(&self) -> Result<Query> {
        Query::new(self.platform, self.username.clone())
    }

    /// Label of the username field: "Enter leetcode Username"
    pub fn username_label(&self) -> String {
        let platform = self.platform.map(|p| p.as_str()).unwrap_or("platform");
        format!("Enter {} Username", platform)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Profile view snapshot
// ─────────────────────────────────────────────────────────────────────────────

/// The fetch-related slots of the screen: stats, loading flag, error text.
///
/// Treated as an immutable snapshot; each event produces the next one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileView {
    pub stats: Option<ProfileStats>,
    pub loading: bool,
    pub error: Option<String>,
}

impl ProfileView {
    /// A submission started: loading, previous results cleared
    pub fn submit_started(&self) -> Self {
        Self {
            stats: None,
            loading: true,
            error: None,
        }
    }

    /// A request succeeded: stats stored, loading cleared.
    ///
    /// The error slot is left as is; only a new submission clears it.
    pub fn succeeded(&self, stats: ProfileStats) -> Self {
        Self {
            stats: Some(stats),
            loading: false,
            error: self.error.clone(),
        }
    }

    /// A request failed: error stored, loading cleared.
    ///
    /// The stats slot is left as is; only a new submission clears it.
    pub fn failed(&self, message: impl Into<String>) -> Self {
        Self {
            stats: self.stats.clone(),
            loading: false,
            error: Some(message.into()),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// AppState
// ─────────────────────────────────────────────────────────────────────────────

/// Complete application state (the Model in TEA)
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub phase: AppPhase,
    pub settings: Settings,
    pub form: FormState,
    pub profile: ProfileView,

    /// Highlighted legend entry, if any
    pub selected_slice: Option<usize>,

    /// Loading spinner frame counter
    pub spinner_frame: usize,

    /// Most recent submission; responses to older ones may be discarded
    pub latest_request: Option<RequestId>,

    /// Submissions whose response has not arrived yet
    pub pending_requests: usize,

    next_request_id: u64,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: Settings) -> Self {
        let form = FormState {
            platform: settings.behavior.default_platform,
            ..Default::default()
        };
        Self {
            settings,
            form,
            ..Default::default()
        }
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    /// The submit control is enabled: both fields filled and nothing pending
    pub fn can_submit(&self) -> bool {
        self.form.is_complete() && !self.profile.loading
    }

    /// Allocate the id for a new submission and mark it as the latest
    pub fn begin_request(&mut self) -> RequestId {
        self.next_request_id += 1;
        let id = RequestId(self.next_request_id);
        self.latest_request = Some(id);
        self.pending_requests += 1;
        id
    }

    /// Whether a response to `id` should still be applied
    pub fn is_current_request(&self, id: RequestId) -> bool {
        !self.settings.behavior.discard_stale_responses || self.latest_request == Some(id)
    }

    /// What the stats area should show right now
    pub fn stats_view(&self) -> StatsView {
        stats_view(
            self.profile.stats.as_ref(),
            self.profile.loading,
            self.profile.error.as_deref(),
            self.form.platform,
        )
    }

    /// Number of slices in the current chart (0 when no chart is shown)
    pub fn slice_count(&self) -> usize {
        if self.profile.loading || self.profile.error.as_deref().is_some_and(|e| !e.is_empty()) {
            return 0;
        }
        self.profile
            .stats
            .as_ref()
            .map(|stats| build_slices(&stats.language_stats).len())
            .unwrap_or(0)
    }

    /// Submit button caption
    pub fn submit_label(&self) -> &'static str {
        if self.profile.loading {
            "Fetching Profile..."
        } else {
            "Fetch Profile"
        }
    }
}
