//! Brand Preview Handler

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use vitrina_app::{translations::Language, visitor::BrandPatch};

use crate::{extensions::*, pages::BrandView};

/// Brand fields to try out; omitted fields keep their current value.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PreviewRequest {
    pub name: Option<String>,
    pub logo_url: Option<String>,
    pub email: Option<String>,
    pub invert_logo: Option<bool>,
    pub language: Option<String>,
    pub logo_scale: Option<i32>,
}

impl TryFrom<PreviewRequest> for BrandPatch {
    type Error = StatusError;

    fn try_from(request: PreviewRequest) -> Result<Self, Self::Error> {
        let language = request
            .language
            .map(|code| {
                Language::parse(&code)
                    .ok_or_else(|| StatusError::bad_request().brief("Language must be en or es"))
            })
            .transpose()?;

        Ok(Self {
            name: request.name,
            logo_url: request.logo_url,
            email: request.email,
            invert_logo: request.invert_logo,
            language,
            logo_scale: request.logo_scale,
        })
    }
}

/// Apply a brand patch to the admin's own brand
///
/// Lets the generator show the client's look before saving.
#[endpoint(
    tags("clients"),
    summary = "Preview Brand",
    responses(
        (status_code = StatusCode::OK, description = "Brand updated"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<PreviewRequest>,
    depot: &mut Depot,
) -> Result<Json<BrandView>, StatusError> {
    let patch = BrandPatch::try_from(json.into_inner())?;

    let visitor = depot.visitor_mut_or_500()?;

    visitor.brand.set(patch);

    Ok(Json(BrandView::from(visitor.brand.get())))
}

#[cfg(test)]
mod tests {
    use salvo::{
        http::header::COOKIE,
        test::{ResponseExt, TestClient},
    };
    use serde_json::{Value, json};
    use testresult::TestResult;
    use vitrina_app::visitor::{BrandDefaults, keys};

    use crate::test_helpers::{
        Mocks, admin_cookie, admin_identity, cookie_header, decoded_cookie, encoded_cookie,
    };

    use super::*;

    fn make_service() -> Service {
        Mocks {
            identity: admin_identity(),
            ..Mocks::default()
        }
        .into_site()
    }

    #[tokio::test]
    async fn test_preview_persists_only_given_fields() -> TestResult {
        let mut res = TestClient::patch("http://example.com/generator/preview")
            .add_header(
                COOKIE,
                format!("{}; {}", admin_cookie(), encoded_cookie(keys::BRAND_NAME, "Studio")),
                true,
            )
            .json(&json!({ "language": "en", "logoScale": 150 }))
            .send(&make_service())
            .await;

        let language = decoded_cookie(&res, keys::BRAND_LANG);
        let scale = decoded_cookie(&res, keys::BRAND_LOGO_SCALE);
        let name = decoded_cookie(&res, keys::BRAND_NAME);

        let brand: BrandView = res.take_json().await?;

        assert_eq!(brand.name, "Studio");
        assert_eq!(brand.language, "en");
        assert_eq!(brand.logo_transform, "scale(1.5)");
        assert_eq!(language.as_deref(), Some("en"));
        assert_eq!(scale.as_deref(), Some("150"));
        assert!(name.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn test_preview_rejects_unknown_language() -> TestResult {
        let res = TestClient::patch("http://example.com/generator/preview")
            .add_header(COOKIE, admin_cookie(), true)
            .json(&json!({ "language": "de" }))
            .send(&make_service())
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_cleared_fields_survive_next_page_over_operator_brand() -> TestResult {
        let service = Mocks {
            identity: admin_identity(),
            brand: BrandDefaults {
                logo_url: Some("https://operator.example/logo.svg".to_string()),
                invert_logo: true,
                ..BrandDefaults::default()
            },
            ..Mocks::default()
        }
        .into_site();

        let previewed = TestClient::patch("http://example.com/generator/preview")
            .add_header(COOKIE, admin_cookie(), true)
            .json(&json!({ "logoUrl": "", "invertLogo": false }))
            .send(&service)
            .await;

        assert_eq!(decoded_cookie(&previewed, keys::BRAND_LOGO).as_deref(), Some(""));
        assert_eq!(
            decoded_cookie(&previewed, keys::BRAND_INVERT_LOGO).as_deref(),
            Some("false")
        );

        let mut page = TestClient::get("http://example.com/generator")
            .add_header(
                COOKIE,
                format!("{}; {}", admin_cookie(), cookie_header(&previewed)),
                true,
            )
            .send(&service)
            .await;

        let body: Value = page.take_json().await?;

        assert_eq!(body["brand"]["logoUrl"], "");
        assert_eq!(body["brand"]["invertLogo"], false);
        assert_eq!(body["brand"]["logoKind"], "wordmark");

        Ok(())
    }
}
