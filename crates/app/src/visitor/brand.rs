//! Brand state store.

use serde::{Deserialize, Serialize};

use crate::{
    domain::clients::records::ClientRecord,
    translations::Language,
    visitor::storage::{Storage, keys},
};

/// Name shown when neither storage nor configuration provides one.
pub const FALLBACK_BRAND_NAME: &str = "Panel de Control";

pub const DEFAULT_LOGO_SCALE: i32 = 100;

/// Operator-configured brand, used below stored values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BrandDefaults {
    pub name: Option<String>,
    pub logo_url: Option<String>,
    pub email: Option<String>,
    pub invert_logo: bool,
    pub language: Option<Language>,
    pub logo_scale: Option<i32>,
}

/// Display identity applied to every rendered page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandState {
    pub name: String,
    pub full_name: String,
    pub logo_url: String,
    pub email: String,
    pub invert_logo: bool,
    pub language: Language,
    pub logo_scale: i32,
}

/// Partial brand update; `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandPatch {
    pub name: Option<String>,
    pub logo_url: Option<String>,
    pub email: Option<String>,
    pub invert_logo: Option<bool>,
    pub language: Option<Language>,
    pub logo_scale: Option<i32>,
}

impl From<&ClientRecord> for BrandPatch {
    fn from(client: &ClientRecord) -> Self {
        Self {
            name: Some(client.name.clone()),
            logo_url: Some(client.logo.clone()),
            email: Some(client.email.clone()),
            invert_logo: Some(client.invert_logo),
            language: Some(client.language),
            logo_scale: Some(client.logo_scale),
        }
    }
}

/// How the logo should be drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogoSource<'a> {
    /// An image fetched from a URL.
    Remote(&'a str),

    /// SVG markup or an SVG data URI embedded directly.
    InlineSvg(&'a str),

    /// No logo; render the studio wordmark.
    Wordmark,
}

impl BrandState {
    fn fallback() -> Self {
        Self {
            name: FALLBACK_BRAND_NAME.to_string(),
            full_name: FALLBACK_BRAND_NAME.to_string(),
            logo_url: String::new(),
            email: String::new(),
            invert_logo: false,
            language: Language::default(),
            logo_scale: DEFAULT_LOGO_SCALE,
        }
    }

    #[must_use]
    pub fn logo_source(&self) -> LogoSource<'_> {
        let logo = self.logo_url.trim();

        if logo.is_empty() {
            LogoSource::Wordmark
        } else if logo.starts_with("<svg") || logo.starts_with("data:image/svg+xml") {
            LogoSource::InlineSvg(logo)
        } else {
            LogoSource::Remote(logo)
        }
    }

    /// CSS transform for the logo. Non-positive scales render at natural size.
    #[must_use]
    pub fn logo_transform(&self) -> String {
        if self.logo_scale <= 0 {
            return "scale(1)".to_string();
        }

        format!("scale({})", f64::from(self.logo_scale) / 100.0)
    }
}

/// Brand state mirrored into a [`Storage`] namespace.
#[derive(Debug)]
pub struct BrandStore<S> {
    storage: S,
    state: BrandState,
}

impl<S: Storage> BrandStore<S> {
    /// Build the brand from `storage`, then `defaults`, then the hardcoded fallback.
    ///
    /// A key present in storage wins even when empty; empty operator defaults
    /// count as unset.
    pub fn load(storage: S, defaults: &BrandDefaults) -> Self {
        let fallback = BrandState::fallback();

        let configured = |value: &Option<String>| value.clone().filter(|value| !value.is_empty());

        let name = storage
            .get(keys::BRAND_NAME)
            .or_else(|| configured(&defaults.name))
            .unwrap_or(fallback.name);

        let state = BrandState {
            full_name: name.clone(),
            name,
            logo_url: storage
                .get(keys::BRAND_LOGO)
                .or_else(|| configured(&defaults.logo_url))
                .unwrap_or(fallback.logo_url),
            email: storage
                .get(keys::BRAND_EMAIL)
                .or_else(|| configured(&defaults.email))
                .unwrap_or(fallback.email),
            invert_logo: storage
                .get(keys::BRAND_INVERT_LOGO)
                .map_or(defaults.invert_logo, |value| value == "true"),
            language: storage
                .get(keys::BRAND_LANG)
                .as_deref()
                .and_then(Language::parse)
                .or(defaults.language)
                .unwrap_or(fallback.language),
            logo_scale: storage
                .get(keys::BRAND_LOGO_SCALE)
                .and_then(|value| value.trim().parse().ok())
                .or(defaults.logo_scale)
                .unwrap_or(fallback.logo_scale),
        };

        Self { storage, state }
    }

    #[must_use]
    pub fn get(&self) -> &BrandState {
        &self.state
    }

    /// Merge `patch` into the state and persist exactly the fields it carries.
    pub fn set(&mut self, patch: BrandPatch) {
        if let Some(name) = patch.name {
            self.storage.set(keys::BRAND_NAME, &name);
            self.state.full_name.clone_from(&name);
            self.state.name = name;
        }

        if let Some(logo_url) = patch.logo_url {
            self.storage.set(keys::BRAND_LOGO, &logo_url);
            self.state.logo_url = logo_url;
        }

        if let Some(email) = patch.email {
            self.storage.set(keys::BRAND_EMAIL, &email);
            self.state.email = email;
        }

        if let Some(invert_logo) = patch.invert_logo {
            self.storage
                .set(keys::BRAND_INVERT_LOGO, if invert_logo { "true" } else { "false" });
            self.state.invert_logo = invert_logo;
        }

        if let Some(language) = patch.language {
            self.storage.set(keys::BRAND_LANG, language.code());
            self.state.language = language;
        }

        if let Some(logo_scale) = patch.logo_scale {
            self.storage
                .set(keys::BRAND_LOGO_SCALE, &logo_scale.to_string());
            self.state.logo_scale = logo_scale;
        }
    }

    /// Overwrite every brand field from a client record.
    pub fn replace_from_client(&mut self, client: &ClientRecord) {
        self.set(BrandPatch::from(client));
    }
}

#[cfg(test)]
mod tests {
    use crate::{test::fixtures::client_record, visitor::storage::MemoryStorage};

    use super::*;

    fn load(storage: &MemoryStorage) -> BrandStore<MemoryStorage> {
        BrandStore::load(storage.clone(), &BrandDefaults::default())
    }

    #[test]
    fn empty_storage_and_defaults_yield_fallback_brand() {
        let brand = load(&MemoryStorage::new());

        assert_eq!(brand.get(), &BrandState::fallback());
        assert_eq!(brand.get().name, "Panel de Control");
        assert_eq!(brand.get().language, Language::Es);
        assert_eq!(brand.get().logo_scale, 100);
    }

    #[test]
    fn storage_wins_over_defaults_and_defaults_over_fallback() {
        let storage = MemoryStorage::seeded([(keys::BRAND_NAME, "Stored"), (keys::BRAND_EMAIL, "")]);

        let defaults = BrandDefaults {
            name: Some("Configured".to_string()),
            email: Some("hola@studio.mx".to_string()),
            logo_scale: Some(140),
            ..BrandDefaults::default()
        };

        let brand = BrandStore::load(storage, &defaults);

        assert_eq!(brand.get().name, "Stored");
        assert_eq!(brand.get().full_name, "Stored");
        assert_eq!(brand.get().email, "");
        assert_eq!(brand.get().logo_scale, 140);
    }

    #[test]
    fn stored_values_survive_reload_over_operator_defaults() {
        let storage = MemoryStorage::new();

        let defaults = BrandDefaults {
            logo_url: Some("https://operator.example/logo.svg".to_string()),
            email: Some("hola@studio.mx".to_string()),
            invert_logo: true,
            ..BrandDefaults::default()
        };

        let mut brand = BrandStore::load(storage.clone(), &defaults);

        assert!(brand.get().invert_logo);
        assert_eq!(brand.get().logo_url, "https://operator.example/logo.svg");

        brand.set(BrandPatch {
            invert_logo: Some(false),
            logo_url: Some(String::new()),
            email: Some(String::new()),
            ..BrandPatch::default()
        });

        let reloaded = BrandStore::load(storage, &defaults);

        assert!(!reloaded.get().invert_logo);
        assert_eq!(reloaded.get().logo_url, "");
        assert_eq!(reloaded.get().email, "");
        assert_eq!(reloaded.get(), brand.get());
    }

    #[test]
    fn unrecognised_invert_flag_reads_as_false() {
        let storage = MemoryStorage::seeded([(keys::BRAND_INVERT_LOGO, "yes")]);

        let defaults = BrandDefaults {
            invert_logo: true,
            ..BrandDefaults::default()
        };

        assert!(!BrandStore::load(storage, &defaults).get().invert_logo);
    }

    #[test]
    fn invalid_stored_scale_and_language_fall_back() {
        let storage =
            MemoryStorage::seeded([(keys::BRAND_LOGO_SCALE, "huge"), (keys::BRAND_LANG, "fr")]);

        let brand = load(&storage);

        assert_eq!(brand.get().logo_scale, DEFAULT_LOGO_SCALE);
        assert_eq!(brand.get().language, Language::Es);
    }

    #[test]
    fn set_language_survives_reload_and_leaves_other_fields() {
        let storage = MemoryStorage::seeded([(keys::BRAND_NAME, "Acme")]);
        let mut brand = load(&storage);

        brand.set(BrandPatch {
            language: Some(Language::En),
            ..BrandPatch::default()
        });

        let reloaded = load(&storage);

        assert_eq!(reloaded.get().language, Language::En);
        assert_eq!(reloaded.get().name, "Acme");
        assert_eq!(reloaded.get(), brand.get());
        assert!(storage.get(keys::BRAND_EMAIL).is_none());
    }

    #[test]
    fn set_persists_booleans_as_literal_strings() {
        let storage = MemoryStorage::new();
        let mut brand = load(&storage);

        brand.set(BrandPatch {
            invert_logo: Some(true),
            ..BrandPatch::default()
        });

        assert_eq!(storage.get(keys::BRAND_INVERT_LOGO).as_deref(), Some("true"));

        brand.set(BrandPatch {
            invert_logo: Some(false),
            ..BrandPatch::default()
        });

        assert_eq!(storage.get(keys::BRAND_INVERT_LOGO).as_deref(), Some("false"));
    }

    #[test]
    fn replace_from_client_overwrites_everything() {
        let storage = MemoryStorage::seeded([(keys::BRAND_LOGO, "https://old.example/logo.png")]);
        let mut brand = load(&storage);
        let client = client_record("acme", "Acme");

        brand.replace_from_client(&client);

        assert_eq!(brand.get().name, "Acme");
        assert_eq!(brand.get().full_name, "Acme");
        assert_eq!(brand.get().logo_url, client.logo);
        assert_eq!(brand.get().email, client.email);
        assert_eq!(brand.get().language, client.language);
        assert_eq!(brand.get().logo_scale, client.logo_scale);
        assert_eq!(load(&storage).get(), brand.get());
    }

    #[test]
    fn scale_is_not_validated() {
        let mut brand = load(&MemoryStorage::new());

        brand.set(BrandPatch {
            logo_scale: Some(999),
            ..BrandPatch::default()
        });

        assert_eq!(brand.get().logo_scale, 999);
        assert_eq!(brand.get().logo_transform(), "scale(9.99)");
    }

    #[test]
    fn logo_transform_is_defensive() {
        let mut state = BrandState::fallback();

        assert_eq!(state.logo_transform(), "scale(1)");

        state.logo_scale = 150;
        assert_eq!(state.logo_transform(), "scale(1.5)");

        state.logo_scale = -20;
        assert_eq!(state.logo_transform(), "scale(1)");
    }

    #[test]
    fn logo_source_classifies_logo() {
        let mut state = BrandState::fallback();

        assert_eq!(state.logo_source(), LogoSource::Wordmark);

        state.logo_url = "<svg viewBox=\"0 0 10 10\"></svg>".to_string();
        assert!(matches!(state.logo_source(), LogoSource::InlineSvg(_)));

        state.logo_url = "data:image/svg+xml;base64,PHN2Zz4=".to_string();
        assert!(matches!(state.logo_source(), LogoSource::InlineSvg(_)));

        state.logo_url = "https://cdn.example/logo.png".to_string();
        assert_eq!(state.logo_source(), LogoSource::Remote("https://cdn.example/logo.png"));
    }
}
