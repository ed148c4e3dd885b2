//! Named views reachable by path.

/// A navigation target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// Chooser page (`/`).
    Landing,
    /// The simulated terminal (`/terminal`). `initial` overrides the command
    /// auto-run after boot.
    Terminal { initial: Option<String> },
    /// Recruiter profile page (`/recruiter`).
    Recruiter,
    /// Plain-language summary page (`/non-tech`).
    NonTech,
    /// Fallback for any other path.
    NotFound(String),
}

impl Route {
    /// Parse a path with an optional query string.
    ///
    /// Only `/terminal?mode=recruiter` carries meaning in the query; it makes
    /// the terminal open on the recruiter view. Other parameters are ignored.
    pub fn parse(input: &str) -> Self {
        let input = input.trim();
        let (path, query) = match input.split_once('?') {
            Some((p, q)) => (p, Some(q)),
            None => (input, None),
        };
        let path = path.trim_end_matches('/');
        match path {
            "" => Self::Landing,
            "/terminal" => {
                let initial = query
                    .and_then(|q| query_param(q, "mode"))
                    .filter(|mode| *mode == "recruiter")
                    .map(|_| "recruiter".to_string());
                Self::Terminal { initial }
            },
            "/recruiter" => Self::Recruiter,
            "/non-tech" => Self::NonTech,
            other => Self::NotFound(other.to_string()),
        }
    }

    /// Canonical path for this route.
    pub fn path(&self) -> String {
        match self {
            Self::Landing => "/".to_string(),
            Self::Terminal { initial: None } => "/terminal".to_string(),
            Self::Terminal { initial: Some(_) } => "/terminal?mode=recruiter".to_string(),
            Self::Recruiter => "/recruiter".to_string(),
            Self::NonTech => "/non-tech".to_string(),
            Self::NotFound(p) => p.clone(),
        }
    }

    /// Plain terminal route with no initial-command override.
    pub fn terminal() -> Self {
        Self::Terminal { initial: None }
    }
}

fn query_param<'a>(query: &'a str, name: &str) -> Option<&'a str> {
    query.split('&').find_map(|pair| {
        let (k, v) = pair.split_once('=').unwrap_or((pair, ""));
        (k == name).then_some(v)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_known_paths() {
        assert_eq!(Route::parse("/"), Route::Landing);
        assert_eq!(Route::parse(""), Route::Landing);
        assert_eq!(Route::parse("/terminal"), Route::terminal());
        assert_eq!(Route::parse("/recruiter"), Route::Recruiter);
        assert_eq!(Route::parse("/non-tech/"), Route::NonTech);
    }

    #[test]
    fn terminal_recruiter_mode() {
        assert_eq!(
            Route::parse("/terminal?mode=recruiter"),
            Route::Terminal {
                initial: Some("recruiter".to_string())
            }
        );
    }

    #[test]
    fn terminal_other_mode_ignored() {
        assert_eq!(Route::parse("/terminal?mode=ghost&x=1"), Route::terminal());
    }

    #[test]
    fn unknown_path_is_not_found() {
        assert_eq!(
            Route::parse("/blog"),
            Route::NotFound("/blog".to_string())
        );
    }

    #[test]
    fn path_round_trip() {
        for path in ["/", "/terminal", "/terminal?mode=recruiter", "/recruiter", "/non-tech"] {
            assert_eq!(Route::parse(path).path(), path);
        }
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn canonical_path_reparses_to_same_route(
                input in "(/[a-z-]{0,10}){0,3}/?(\\?[a-z=&]{0,16})?",
            ) {
                let route = Route::parse(&input);
                prop_assert_eq!(Route::parse(&route.path()), route);
            }
        }
    }
}
