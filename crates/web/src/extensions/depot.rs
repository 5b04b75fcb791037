//! Depot helper extensions.

use std::any::Any;

use salvo::prelude::{Depot, StatusError};
use vitrina_app::identity::SessionState;

use crate::{tenant::TenantPage, visitor::Visitor};

/// Typed access to what the middleware stack leaves in the depot.
pub(crate) trait DepotExt {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError>;

    fn visitor_or_500(&self) -> Result<&Visitor, StatusError>;

    fn visitor_mut_or_500(&mut self) -> Result<&mut Visitor, StatusError>;

    /// Session loaded by the session hoop; anonymous when none ran.
    fn session_state(&self) -> SessionState;

    fn is_admin(&self) -> bool;

    /// Tenant admitted on this request, if the route has one.
    fn tenant_page(&self) -> Option<&TenantPage>;
}

impl DepotExt for Depot {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError> {
        self.obtain::<T>()
            .map_err(|_ignored| StatusError::internal_server_error())
    }

    fn visitor_or_500(&self) -> Result<&Visitor, StatusError> {
        self.obtain_or_500::<Visitor>()
    }

    fn visitor_mut_or_500(&mut self) -> Result<&mut Visitor, StatusError> {
        self.obtain_mut::<Visitor>()
            .map_err(|_ignored| StatusError::internal_server_error())
    }

    fn session_state(&self) -> SessionState {
        self.obtain::<SessionState>()
            .map_or_else(|_ignored| SessionState::anonymous(), SessionState::clone)
    }

    fn is_admin(&self) -> bool {
        self.obtain::<SessionState>()
            .is_ok_and(SessionState::is_admin)
    }

    fn tenant_page(&self) -> Option<&TenantPage> {
        self.obtain::<TenantPage>().ok()
    }
}
