//! Route names for request spans.
//!
//! Paths are grouped so tenant slugs and ids do not explode the set of span
//! names: `/acme/projects/2` becomes `/{slug}/projects/{id}`.

const STATIC_SEGMENTS: [&str; 13] = [
    "admin",
    "api-doc",
    "clients",
    "contact",
    "docs",
    "generator",
    "healthcheck",
    "login",
    "logo",
    "logout",
    "preview",
    "projects",
    "unauthorized",
];

pub(super) fn route_name(path: &str) -> String {
    let segments: Vec<&str> = path
        .trim_matches('/')
        .split('/')
        .filter(|segment| !segment.is_empty())
        .collect();

    if segments.is_empty() {
        return "/".to_owned();
    }

    let mut route = String::new();
    let mut previous: Option<&str> = None;

    for &segment in &segments {
        route.push('/');

        let name = match previous {
            _ if STATIC_SEGMENTS.contains(&segment) => segment,
            None | Some("clients") => "{slug}",
            Some("projects") => "{id}",
            Some(_) => segment,
        };

        route.push_str(name);
        previous = Some(segment);
    }

    route
}
