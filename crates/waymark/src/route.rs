//! Route data model and pattern parsing
//!
//! Routes are supplied by the host framework's route resolution and are
//! read-only to this crate. `ResolvedRoute::from_pattern` parses the
//! bracket syntax (`/products/[id]`, `/blog/[...slug]`) into the same
//! segment/part shape, which is handy for tests and demos.

/// How a route was registered with the host framework.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteOrigin {
    /// First-party route defined by the project itself
    Project,
    /// Route injected by the framework (server islands, error pages, ...)
    Internal,
    /// Route contributed by a third-party integration
    External,
}

/// What kind of response a route produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteType {
    /// Renders a page
    Page,
    /// API endpoint
    Endpoint,
    /// Redirect to another route
    Redirect,
    /// Fallback route (i18n and friends)
    Fallback,
}

/// Smallest unit of a path segment: literal text or a named placeholder.
///
/// For a placeholder, `content` is the parameter name without the `...`
/// spread marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePart {
    pub content: String,
    pub dynamic: bool,
    pub spread: bool,
}

impl RoutePart {
    /// Static literal text.
    pub fn literal(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            dynamic: false,
            spread: false,
        }
    }

    /// Single-value placeholder: `[id]`.
    pub fn param(name: impl Into<String>) -> Self {
        let content = name.into();
        debug_assert!(!content.is_empty(), "placeholder with empty content");
        Self {
            content,
            dynamic: true,
            spread: false,
        }
    }

    /// Multi-value catch-all placeholder: `[...slug]`.
    pub fn catch_all(name: impl Into<String>) -> Self {
        let content = name.into();
        debug_assert!(!content.is_empty(), "placeholder with empty content");
        Self {
            content,
            dynamic: true,
            spread: true,
        }
    }
}

/// A route as resolved by the host framework.
///
/// `segments` is the ordered list of slash-delimited path components, each
/// an ordered, non-empty list of parts. A segment with more than one part
/// is a composite component like `[startDate]-to-[endDate]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRoute {
    /// Display pattern, e.g. `/products/[id]`
    pub pattern: String,
    pub segments: Vec<Vec<RoutePart>>,
    pub route_type: RouteType,
    pub origin: RouteOrigin,
}

impl ResolvedRoute {
    /// Parses a bracket-syntax pattern into a project page route.
    ///
    /// # Examples
    ///
    /// ```
    /// use waymark::ResolvedRoute;
    ///
    /// let route = ResolvedRoute::from_pattern("/products/[id]");
    /// assert_eq!(route.segments.len(), 2);
    /// assert!(route.segments[1][0].dynamic);
    ///
    /// // Composite segments keep their parts in textual order
    /// let route = ResolvedRoute::from_pattern("/reports/[startDate]-to-[endDate]");
    /// assert_eq!(route.segments[1].len(), 3);
    ///
    /// // Root has no segments
    /// let route = ResolvedRoute::from_pattern("/");
    /// assert!(route.segments.is_empty());
    /// ```
    pub fn from_pattern(pattern: &str) -> Self {
        let segments = pattern
            .split('/')
            .filter(|component| !component.is_empty())
            .map(parse_segment)
            .collect();

        Self {
            pattern: pattern.to_string(),
            segments,
            route_type: RouteType::Page,
            origin: RouteOrigin::Project,
        }
    }

    /// Returns the same route with a different type.
    pub fn with_type(mut self, route_type: RouteType) -> Self {
        self.route_type = route_type;
        self
    }

    /// Returns the same route with a different origin.
    pub fn with_origin(mut self, origin: RouteOrigin) -> Self {
        self.origin = origin;
        self
    }
}

/// Splits one path component into literal and placeholder parts.
///
/// `[name]` becomes a placeholder part, `[...name]` a spread placeholder,
/// anything between brackets stays literal text. An unclosed bracket is
/// treated as literal text rather than an error.
fn parse_segment(component: &str) -> Vec<RoutePart> {
    let mut parts = Vec::new();
    let mut rest = component;

    while !rest.is_empty() {
        match rest.find('[') {
            Some(0) => match rest.find(']') {
                Some(close) => {
                    let inner = &rest[1..close];
                    match inner.strip_prefix("...") {
                        Some(name) => parts.push(RoutePart::catch_all(name)),
                        None => parts.push(RoutePart::param(inner)),
                    }
                    rest = &rest[close + 1..];
                }
                None => {
                    parts.push(RoutePart::literal(rest));
                    break;
                }
            },
            Some(open) => {
                parts.push(RoutePart::literal(&rest[..open]));
                rest = &rest[open..];
            }
            None => {
                parts.push(RoutePart::literal(rest));
                break;
            }
        }
    }

    parts
}
