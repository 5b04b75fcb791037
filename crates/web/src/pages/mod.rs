//! Page payloads.
//!
//! Every page answers with the same envelope: the title, the visitor's brand,
//! the interface strings for the brand's language, the base path for links and
//! the page's own content.

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use vitrina_app::{
    projects::Project,
    translations::{self, Translations},
    visitor::{BrandState, LogoSource},
};

use crate::{admin::views::ClientView, extensions::*, tenant::TenantPage};

pub(crate) mod admin;
pub(crate) mod public;

/// Brand as rendered, including the derived logo presentation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct BrandView {
    pub name: String,
    pub full_name: String,
    pub logo_url: String,
    pub email: String,
    pub invert_logo: bool,
    pub language: String,
    pub logo_scale: i32,

    /// `remote`, `inlineSvg` or `wordmark`.
    pub logo_kind: String,

    /// CSS transform applied to the logo.
    pub logo_transform: String,
}

impl From<&BrandState> for BrandView {
    fn from(brand: &BrandState) -> Self {
        let logo_kind = match brand.logo_source() {
            LogoSource::Remote(_) => "remote",
            LogoSource::InlineSvg(_) => "inlineSvg",
            LogoSource::Wordmark => "wordmark",
        };

        Self {
            name: brand.name.clone(),
            full_name: brand.full_name.clone(),
            logo_url: brand.logo_url.clone(),
            email: brand.email.clone(),
            invert_logo: brand.invert_logo,
            language: brand.language.code().to_string(),
            logo_scale: brand.logo_scale,
            logo_kind: logo_kind.to_string(),
            logo_transform: brand.logo_transform(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(tag = "page", content = "content", rename_all = "camelCase")]
pub(crate) enum PageContent {
    Home {
        projects: &'static [Project],
    },
    Projects {
        projects: &'static [Project],
    },
    Project {
        project: &'static Project,
    },
    Contact {
        address: &'static str,
        email: String,
    },
    Login,
    Unauthorized,
    NotFound,
    Generator {
        /// Client being edited; `None` when creating.
        edit: Option<ClientView>,
    },
    Admin {
        clients: Vec<ClientView>,
    },
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PageResponse {
    pub title: String,
    pub base_path: String,
    pub brand: BrandView,
    pub strings: &'static Translations,
    #[serde(flatten)]
    pub content: PageContent,
}

/// Assemble a page for the current visitor.
///
/// Tenant pages take their title from the resolved client; everything else
/// uses the brand name.
pub(crate) fn render(depot: &Depot, content: PageContent) -> Result<Json<PageResponse>, StatusError> {
    let brand = depot.visitor_or_500()?.brand.get();
    let tenant = depot.tenant_page();

    Ok(Json(PageResponse {
        title: tenant.map_or_else(|| brand.name.clone(), |page| page.title.clone()),
        base_path: tenant.map(TenantPage::base_path).unwrap_or_default(),
        brand: BrandView::from(brand),
        strings: translations::lookup(brand.language),
        content,
    }))
}

/// Not-found page with a `404` status.
#[handler]
pub(crate) async fn not_found(depot: &mut Depot, res: &mut Response) {
    res.status_code(StatusCode::NOT_FOUND);

    match render(depot, PageContent::NotFound) {
        Ok(page) => res.render(page),
        Err(error) => res.render(error),
    }
}
