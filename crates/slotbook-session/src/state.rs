//! The auth lifecycle state machine.

use std::fmt;

/// Where the session is in its lifecycle.
///
/// This is a state machine with four states:
///
/// ```text
///   Uninitialized ──(hydrate starts)──→ Hydrating ──┬──→ Authenticated
///                                                   └──→ Anonymous
///   Authenticated ──(logout / credential invalidated)──→ Anonymous
///   Anonymous ──(login)──→ Authenticated
/// ```
///
/// - **Uninitialized**: The process just started; nothing is known yet.
/// - **Hydrating**: A persisted credential may exist and is being
///   resolved into an identity. Screens must suspend auth-dependent
///   rendering until this ends.
/// - **Authenticated**: A verified identity is loaded.
/// - **Anonymous**: Definitely not logged in — no credential exists.
///
/// There are no other transitions. In particular, hydration never runs
/// twice, and nothing ever moves backwards into `Uninitialized`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthPhase {
    Uninitialized,
    Hydrating,
    Authenticated,
    Anonymous,
}

impl AuthPhase {
    /// Returns `true` once hydration has terminated, one way or the
    /// other. Route decisions may only be made when this is `true`.
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Authenticated | Self::Anonymous)
    }

    /// Returns `true` while auth-dependent rendering must suspend.
    pub fn is_loading(&self) -> bool {
        !self.is_ready()
    }

    /// Returns `true` if a verified identity is loaded.
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated)
    }

    /// Returns `true` if transitioning to `target` is valid.
    ///
    /// This encodes the diagram above exhaustively, so the transition
    /// table is testable on its own.
    pub fn may_become(self, target: Self) -> bool {
        matches!(
            (self, target),
            (Self::Uninitialized, Self::Hydrating)
                | (Self::Hydrating, Self::Authenticated)
                | (Self::Hydrating, Self::Anonymous)
                | (Self::Authenticated, Self::Anonymous)
                | (Self::Anonymous, Self::Authenticated)
        )
    }
}

impl fmt::Display for AuthPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Uninitialized => write!(f, "Uninitialized"),
            Self::Hydrating => write!(f, "Hydrating"),
            Self::Authenticated => write!(f, "Authenticated"),
            Self::Anonymous => write!(f, "Anonymous"),
        }
    }
}
