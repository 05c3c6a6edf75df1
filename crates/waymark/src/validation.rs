//! Route acceptance policy
//!
//! A single permissive predicate decides which routes get helpers. Earlier
//! drafts of this policy also rejected spread parameters, multi-part
//! segments, and any sequential placeholders; those shapes are all
//! supported now, so the only structural rejection left is sequential
//! *duplicate* placeholders. Swapping the policy means touching this
//! module only, never the builders.

use tracing::warn;

use crate::route::{ResolvedRoute, RouteOrigin, RoutePart, RouteType};

/// Decides whether helper generation supports a route.
///
/// Pure in its boolean result; rejections are logged at `warn` level.
/// Rejected routes are silently dropped by the aggregator rather than
/// raised as errors, so one odd route never aborts generation for the
/// whole table.
///
/// # Rules
///
/// A route is rejected iff any of:
///
/// 1. It is not a first-party page route (`type != Page` or
///    `origin != Project`).
/// 2. Its flattened part sequence contains a placeholder immediately
///    preceded by another placeholder with identical content.
///
/// Root, root-with-placeholder, composite multi-part segments, spread
/// parameters, and sequential *distinct* placeholders (`/docs/[lang]/[version]`)
/// are all accepted.
pub fn is_supported_route(route: &ResolvedRoute) -> bool {
    if route.route_type != RouteType::Page || route.origin != RouteOrigin::Project {
        return false;
    }

    let parts: Vec<&RoutePart> = route.segments.iter().flatten().collect();

    for pair in parts.windows(2) {
        let (prev, part) = (pair[0], pair[1]);

        if prev.dynamic && part.dynamic && prev.content == part.content {
            warn!(
                pattern = %route.pattern,
                "sequential duplicate params are not supported"
            );
            return false;
        }
    }

    true
}
