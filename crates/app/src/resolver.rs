//! Tenant resolution: turn a slug plus a token into the visitor's brand.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::{
    domain::clients::{ClientsService, ClientsServiceError, records::ClientUuid},
    visitor::{Storage, VisitorContext},
};

/// What the visitor asked for.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResolveRequest<'a> {
    /// Tenant slug from the path, if the route has one.
    pub slug: Option<&'a str>,

    /// `token` query parameter, if present.
    pub query_token: Option<&'a str>,

    /// Whether the visitor holds an admin session.
    pub admin: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Brand populated; `strip_token` asks for the query token to be removed from the URL.
    Resolved { title: String, strip_token: bool },

    /// No slug in the path but one is stored; go there instead.
    RedirectToStored { slug: String },

    /// No tenant context at all; render the operator's own brand.
    NoTenant,

    Unauthorized,
}

#[derive(Clone)]
pub struct TenantResolver {
    clients: Arc<dyn ClientsService>,
}

impl std::fmt::Debug for TenantResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TenantResolver").finish_non_exhaustive()
    }
}

impl TenantResolver {
    #[must_use]
    pub fn new(clients: Arc<dyn ClientsService>) -> Self {
        Self { clients }
    }

    /// Resolve `request` against the backend, updating `visitor` as a side effect.
    ///
    /// On success the brand and the access token are written together after the
    /// lookup settles. On failure the brand is left alone and a stored token that
    /// was just rejected is cleared.
    pub async fn resolve<S: Storage>(
        &self,
        request: ResolveRequest<'_>,
        visitor: &mut VisitorContext<S>,
    ) -> Resolution {
        let Some(slug) = request.slug.filter(|slug| !slug.is_empty()) else {
            return visitor
                .access
                .slug()
                .map_or(Resolution::NoTenant, |slug| Resolution::RedirectToStored { slug });
        };

        let query_token = request
            .query_token
            .map(str::trim)
            .filter(|token| !token.is_empty());

        let Some(token) = query_token
            .map(str::to_string)
            .or_else(|| visitor.access.token())
        else {
            if request.admin {
                return self.preview(slug, visitor).await;
            }

            debug!(slug, "no client token presented");

            return Resolution::Unauthorized;
        };

        let lookup = match ClientUuid::parse(&token) {
            Some(client) => self.clients.find_client(slug.to_string(), client).await,
            None => Err(ClientsServiceError::NotFound),
        };

        match lookup {
            Ok(client) => {
                visitor.brand.replace_from_client(&client);
                visitor.access.store(&token, &client.slug);

                Resolution::Resolved {
                    title: client.name,
                    strip_token: query_token.is_some(),
                }
            }
            Err(error) => {
                if !matches!(error, ClientsServiceError::NotFound) {
                    warn!(slug, "client lookup failed: {error}");
                }

                if visitor.access.token().as_deref() == Some(token.as_str()) {
                    visitor.access.clear();
                }

                if request.admin {
                    return self.preview(slug, visitor).await;
                }

                Resolution::Unauthorized
            }
        }
    }

    /// Admins may open any client page by slug; nothing is written to the access store.
    async fn preview<S: Storage>(&self, slug: &str, visitor: &mut VisitorContext<S>) -> Resolution {
        match self.clients.get_client(slug.to_string()).await {
            Ok(client) => {
                visitor.brand.replace_from_client(&client);

                Resolution::Resolved {
                    title: client.name,
                    strip_token: false,
                }
            }
            Err(ClientsServiceError::NotFound) => Resolution::Unauthorized,
            Err(error) => {
                warn!(slug, "admin preview lookup failed: {error}");

                Resolution::Unauthorized
            }
        }
    }
}
