//! Slug normalisation.
//!
//! Three rules, applied at different moments of editing a client link:
//! [`slugify`] derives a slug from a display name, [`sanitize_slug`] filters
//! each keystroke, and [`finalize_slug`] tidies the result before saving.

/// Path segments taken by site routes; a client may not claim them.
pub const RESERVED_SLUGS: [&str; 10] = [
    "admin",
    "api-doc",
    "contact",
    "docs",
    "generator",
    "healthcheck",
    "login",
    "logout",
    "projects",
    "unauthorized",
];

/// Lowercase `name` and turn every run of non-alphanumerics into one `-`.
///
/// `"Acme Architects!"` becomes `"acme-architects-"`.
#[must_use]
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut in_gap = false;

    for ch in name.chars().flat_map(char::to_lowercase) {
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            slug.push(ch);
            in_gap = false;
        } else if !in_gap {
            slug.push('-');
            in_gap = true;
        }
    }

    slug
}

/// Lowercase `input` and drop everything outside `[a-z0-9-]`. Idempotent.
#[must_use]
pub fn sanitize_slug(input: &str) -> String {
    input
        .chars()
        .flat_map(char::to_lowercase)
        .filter(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit() || *ch == '-')
        .collect()
}

/// Sanitize, collapse repeated hyphens and trim them from both ends.
#[must_use]
pub fn finalize_slug(input: &str) -> String {
    let sanitized = sanitize_slug(input);

    sanitized
        .split('-')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

#[must_use]
pub fn is_reserved(slug: &str) -> bool {
    RESERVED_SLUGS.contains(&slug)
}

/// Whether `slug` is already in its saved form.
#[must_use]
pub fn is_valid(slug: &str) -> bool {
    !slug.is_empty() && finalize_slug(slug) == slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugify_keeps_trailing_separator() {
        assert_eq!(slugify("Acme Architects!"), "acme-architects-");
    }

    #[test]
    fn slugify_collapses_runs_and_drops_accents() {
        assert_eq!(slugify("Café   & Co."), "caf-co-");
        assert_eq!(slugify("Studio 54"), "studio-54");
    }

    #[test]
    fn sanitize_is_idempotent_and_preserves_slugify_output() {
        for input in ["Acme Architects!", "ÁRBOL--Norte", " a_b c ", "---", ""] {
            let once = sanitize_slug(input);

            assert_eq!(sanitize_slug(&once), once, "sanitize twice: {input:?}");
            assert_eq!(sanitize_slug(&slugify(input)), slugify(input));
        }
    }

    #[test]
    fn sanitize_drops_invalid_characters() {
        assert_eq!(sanitize_slug("Acme Architects!"), "acmearchitects");
        assert_eq!(sanitize_slug("my-Slug_2"), "my-slug2");
    }

    #[test]
    fn finalize_trims_and_collapses_hyphens() {
        assert_eq!(finalize_slug("acme-architects-"), "acme-architects");
        assert_eq!(finalize_slug("--a---b--"), "a-b");
        assert_eq!(finalize_slug("!!!"), "");
        assert_eq!(finalize_slug(&finalize_slug("-x-")), "x");
    }

    #[test]
    fn reserved_and_valid() {
        assert!(is_reserved("admin"));
        assert!(!is_reserved("acme"));
        assert!(is_valid("acme-2"));
        assert!(!is_valid("acme-"));
        assert!(!is_valid(""));
        assert!(!is_valid("Acme"));
    }
}
