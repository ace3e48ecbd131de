//! The route guard: which screen renders, given the session state.
//!
//! A pure decision function — it never errors and never does I/O. It
//! only branches on the session's resolved phase, which is why every
//! screen must wait for hydration (the `ShowLoading` arm) instead of
//! guessing.

use slotbook_session::AuthPhase;

// ---------------------------------------------------------------------------
// Screen
// ---------------------------------------------------------------------------

/// The screens the application routes between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Dashboard,
    Calendar,
    MyBookings,
    /// Room list + booking-operations audit log. Auth-gated like every
    /// protected screen; the administrator predicate gates its CONTENT,
    /// not the route — a non-admin sees an inline "no permission"
    /// message, not a redirect.
    Admin,
    Login,
    Register,
    /// Any path we don't recognize.
    Unknown,
}

impl Screen {
    /// Maps a location path to a screen.
    pub fn from_path(path: &str) -> Self {
        match path.trim_end_matches('/') {
            "" => Self::Dashboard,
            "/calendar" => Self::Calendar,
            "/bookings" => Self::MyBookings,
            "/admin" => Self::Admin,
            "/login" => Self::Login,
            "/register" => Self::Register,
            _ => Self::Unknown,
        }
    }

    /// Screens that require an authenticated identity.
    pub fn requires_auth(&self) -> bool {
        matches!(
            self,
            Self::Dashboard | Self::Calendar | Self::MyBookings | Self::Admin
        )
    }

    /// Screens that only make sense while logged OUT.
    pub fn anonymous_only(&self) -> bool {
        matches!(self, Self::Login | Self::Register)
    }
}

// ---------------------------------------------------------------------------
// RouteDecision
// ---------------------------------------------------------------------------

/// What the shell should do with a requested screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    /// Hydration hasn't finished — render a placeholder, redirect
    /// nothing. Redirecting here would bounce a returning user to the
    /// login screen for the split second before their credential
    /// resolves.
    ShowLoading,
    /// Render the requested screen.
    Allow,
    /// Protected screen, no identity — go to the login screen.
    RedirectToLogin,
    /// Anonymous-only screen while authenticated, or an unknown path —
    /// go home.
    RedirectToHome,
}

/// Decides what to do with `screen` given the session `phase`.
pub fn decide(phase: AuthPhase, screen: Screen) -> RouteDecision {
    if phase.is_loading() {
        return RouteDecision::ShowLoading;
    }
    match screen {
        Screen::Unknown => RouteDecision::RedirectToHome,
        screen if screen.requires_auth() && !phase.is_authenticated() => {
            RouteDecision::RedirectToLogin
        }
        screen if screen.anonymous_only() && phase.is_authenticated() => {
            RouteDecision::RedirectToHome
        }
        _ => RouteDecision::Allow,
    }
}

// =========================================================================
// Tests
// =========================================================================
