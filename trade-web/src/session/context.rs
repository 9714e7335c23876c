//! Tab-lifetime user context, populated exclusively by the session gate.

use leptos::prelude::*;
use shared::{Ask, Bid, DashboardData, SystemConfig, User};

/// The fully hydrated profile every protected page reads: the raw user
/// record joined with the dashboard extras and the config-derived fields.
/// Assembled in one shot per gate pass; never patched field-by-field.
#[derive(Debug, Clone, PartialEq)]
pub struct UserProfile {
    pub account: User,
    pub recent_bids: Vec<Bid>,
    pub recent_asks: Vec<Ask>,
    pub running_invest: shared::Amount,
    pub site_bot: String,
    pub telegram_channel: String,
    pub telegram_group: String,
    pub opening_time: String,
    pub closing_time: String,
}

impl UserProfile {
    /// Merge the dashboard payload with the config-derived fields.
    pub fn assemble(dashboard: DashboardData, config: &SystemConfig) -> Self {
        UserProfile {
            account: dashboard.user,
            recent_bids: dashboard.recent_bids,
            recent_asks: dashboard.recent_asks,
            running_invest: dashboard.running_invest,
            site_bot: dashboard.site_bot,
            telegram_channel: config.telegram_channel.clone(),
            telegram_group: config.telegram_group.clone(),
            opening_time: config.opening_time.clone(),
            closing_time: config.closing_time.clone(),
        }
    }
}

/// Global session context. `user` is `None` until a gate pass completes;
/// pages treat it as read-only and request re-hydration via [`refresh`]
/// instead of mutating it.
///
/// [`refresh`]: SessionContext::refresh
#[derive(Clone, Copy)]
pub struct SessionContext {
    pub user: RwSignal<Option<UserProfile>>,
    version: RwSignal<u64>,
}

impl SessionContext {
    pub fn new() -> Self {
        SessionContext {
            user: RwSignal::new(None),
            version: RwSignal::new(0),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.with(|user| user.is_some())
    }

    /// Total replacement of the profile. Only the session gate calls this.
    pub fn set_user(&self, profile: UserProfile) {
        self.user.set(Some(profile));
    }

    /// Drop the profile, e.g. on logout.
    pub fn clear(&self) {
        self.user.set(None);
    }

    /// Ask any mounted gate to re-validate and re-hydrate. Pages call this
    /// after mutating actions instead of forcing a full page reload.
    pub fn refresh(&self) {
        self.version.update(|v| *v += 1);
    }

    /// The re-validation counter the gate subscribes to.
    pub(crate) fn version(&self) -> RwSignal<u64> {
        self.version
    }
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn provide_session_context() -> SessionContext {
    let context = SessionContext::new();
    provide_context(context);
    context
}

pub fn use_session() -> SessionContext {
    expect_context::<SessionContext>()
}
