//! Current route path lookup

use dioxus::prelude::*;

/// Path portion of a route string, without query or fragment.
pub fn path_of(route: &str) -> &str {
    let end = route.find(['?', '#']).unwrap_or(route.len());
    match &route[..end] {
        "" => "/",
        path => path,
    }
}

/// Path of the active route. Must be called under a `Router`.
pub fn current_path() -> String {
    path_of(&router().full_route_string()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_path_unchanged() {
        assert_eq!(path_of("/album/42"), "/album/42");
    }

    #[test]
    fn strips_query_and_fragment() {
        assert_eq!(path_of("/search?q=abc"), "/search");
        assert_eq!(path_of("/docs#install"), "/docs");
        assert_eq!(path_of("/docs#a?b"), "/docs");
    }

    #[test]
    fn empty_path_is_root() {
        assert_eq!(path_of(""), "/");
        assert_eq!(path_of("?q=1"), "/");
    }
}
