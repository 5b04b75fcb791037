//! Route guards.
//!
//! A guard looks at who is asking and answers with one of three decisions.
//! While the admin session is still loading every guard stays [`GuardDecision::Pending`]
//! so no redirect is emitted on incomplete information.

use crate::identity::{Session, SessionState};

pub const LOGIN_ROUTE: &str = "/login";
pub const UNAUTHORIZED_ROUTE: &str = "/unauthorized";

/// Everything a guard may look at.
#[derive(Debug, Clone, Copy, Default)]
pub struct GuardContext<'a> {
    pub session: Option<&'a Session>,
    pub loading: bool,
    pub client_token: Option<&'a str>,
    pub url_token: Option<&'a str>,
}

impl<'a> GuardContext<'a> {
    #[must_use]
    pub fn from_session(state: &'a SessionState) -> Self {
        Self {
            session: state.session.as_ref(),
            loading: state.loading,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_tokens(self, client_token: Option<&'a str>, url_token: Option<&'a str>) -> Self {
        Self {
            client_token,
            url_token,
            ..self
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    /// Not decidable yet; render a neutral placeholder.
    Pending,
    Admit,
    Redirect(&'static str),
}

pub trait Guard: Send + Sync {
    fn decide(&self, ctx: &GuardContext<'_>) -> GuardDecision;
}

/// Admits signed-in admins only.
#[derive(Debug, Clone, Copy, Default)]
pub struct AdminGuard;

impl Guard for AdminGuard {
    fn decide(&self, ctx: &GuardContext<'_>) -> GuardDecision {
        if ctx.loading {
            GuardDecision::Pending
        } else if ctx.session.is_some() {
            GuardDecision::Admit
        } else {
            GuardDecision::Redirect(LOGIN_ROUTE)
        }
    }
}

/// Admits admins and anyone presenting a client token.
///
/// The token is not verified here; the tenant resolver does that.
#[derive(Debug, Clone, Copy, Default)]
pub struct TenantGuard;

impl Guard for TenantGuard {
    fn decide(&self, ctx: &GuardContext<'_>) -> GuardDecision {
        let has_token = |token: Option<&str>| token.is_some_and(|token| !token.trim().is_empty());

        if ctx.loading {
            GuardDecision::Pending
        } else if ctx.session.is_some() || has_token(ctx.client_token) || has_token(ctx.url_token) {
            GuardDecision::Admit
        } else {
            GuardDecision::Redirect(UNAUTHORIZED_ROUTE)
        }
    }
}

/// Run guards in order; the first decision that is not [`GuardDecision::Admit`] wins.
#[must_use]
pub fn evaluate(guards: &[&dyn Guard], ctx: &GuardContext<'_>) -> GuardDecision {
    guards
        .iter()
        .map(|guard| guard.decide(ctx))
        .find(|decision| *decision != GuardDecision::Admit)
        .unwrap_or(GuardDecision::Admit)
}
