//! Helper name, parameter, and path-template builders
//!
//! The three builders walk the same segment sequence and must agree on
//! parameter order: derive the parameter list once with [`helper_params`]
//! and hand it to [`build_helper_path`] rather than re-deriving it.
//!
//! Each builder is total over routes accepted by
//! [`crate::validation::is_supported_route`] and deterministic.

use heck::{ToLowerCamelCase, ToPascalCase};
use inflector::Inflector;

use crate::route::{ResolvedRoute, RoutePart};
use crate::segment::{
    is_dynamic_segment, is_multi_part_segment, is_static_segment, normalize_segment,
    NamespaceRule, SingularNamespaceRule,
};

/// One parameter of a helper function, in path order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelperParam {
    pub name: String,
    /// Multi-value parameter produced by a `[...spread]` placeholder,
    /// joined with `/` when the path is rendered.
    pub spread: bool,
}

/// Builds the helper function name for a route.
///
/// # Examples
///
/// ```
/// use waymark::{build_helper_name, ResolvedRoute};
///
/// assert_eq!(build_helper_name(&ResolvedRoute::from_pattern("/")), "rootPath");
/// assert_eq!(build_helper_name(&ResolvedRoute::from_pattern("/[slug]")), "rootSlugPath");
/// assert_eq!(build_helper_name(&ResolvedRoute::from_pattern("/products")), "productsPath");
/// assert_eq!(build_helper_name(&ResolvedRoute::from_pattern("/products/[id]")), "productPath");
/// ```
pub fn build_helper_name(route: &ResolvedRoute) -> String {
    build_helper_name_with(route, &SingularNamespaceRule)
}

/// [`build_helper_name`] with a caller-supplied namespace rule.
///
/// Walks segments left to right, accumulating one normalized fragment per
/// static segment:
///
/// - A static segment directly before a dynamic one is singularized: it
///   names the single resource the placeholder identifies (`"products"`
///   before `[id]` becomes `"product"`).
/// - A namespace segment directly before a dynamic one instead folds the
///   placeholder's name in (`"role"` before `[slug]` becomes
///   `"role_slug"`), keeping sibling routes like `/role/members` and
///   `/role/[slug]/members` apart.
/// - Dynamic segments contribute no fragment of their own.
///
/// The accumulated fragments are joined with a trailing `_path` and
/// camel-folded.
pub fn build_helper_name_with(route: &ResolvedRoute, namespaces: &dyn NamespaceRule) -> String {
    let segments = &route.segments;

    if segments.is_empty() {
        return "rootPath".to_string();
    }

    if segments.len() == 1 && is_dynamic_segment(&segments[0]) {
        return format!("root_{}_path", normalize_segment(&segments[0], true))
            .to_lower_camel_case();
    }

    let mut fragments: Vec<String> = Vec::new();

    for (index, segment) in segments.iter().enumerate() {
        if is_dynamic_segment(segment) {
            continue;
        }

        let mut fragment = normalize_segment(segment, true);
        if fragment.is_empty() {
            continue;
        }

        let next_dynamic = segments
            .get(index + 1)
            .filter(|seg| is_dynamic_segment(seg));

        if let Some(next) = next_dynamic {
            if namespaces.is_namespace(segment) {
                fragment = format!("{}_{}", fragment, normalize_segment(next, true));
            } else {
                fragment = fragment.to_singular();
            }
        }

        fragments.push(fragment);
    }

    fragments.push("path".to_string());
    fragments.join("_").to_lower_camel_case()
}

/// Derives the ordered parameter list for a route.
///
/// Empty if no segment is dynamic. Parameters appear in left-to-right
/// segment order, one per placeholder part.
///
/// # Examples
///
/// ```
/// use waymark::{helper_params, ResolvedRoute};
///
/// let route = ResolvedRoute::from_pattern("/products/[id]");
/// let params = helper_params(&route);
/// assert_eq!(params.len(), 1);
/// assert_eq!(params[0].name, "productId");
/// assert!(!params[0].spread);
/// ```
pub fn helper_params(route: &ResolvedRoute) -> Vec<HelperParam> {
    helper_params_with(route, &SingularNamespaceRule)
}

/// [`helper_params`] with a caller-supplied namespace rule.
pub fn helper_params_with(
    route: &ResolvedRoute,
    namespaces: &dyn NamespaceRule,
) -> Vec<HelperParam> {
    let segments = &route.segments;
    let mut params = Vec::new();

    for (index, segment) in segments.iter().enumerate() {
        if !is_dynamic_segment(segment) {
            continue;
        }

        let preceding = segments[..index]
            .iter()
            .rev()
            .find(|seg| is_static_segment(seg));
        let following = segments.get(index + 1);

        for part in segment.iter().filter(|part| part.dynamic) {
            params.push(HelperParam {
                name: param_name(part, segment, preceding.map(Vec::as_slice), following.map(Vec::as_slice), namespaces),
                spread: part.spread,
            });
        }
    }

    params
}

/// Names a single placeholder parameter.
///
/// The base name is the camel-cased placeholder content. It is prefixed
/// with the singularized preceding resource name (`"users"` + `[id]` →
/// `userId`) only when all of these hold:
///
/// - a preceding static segment exists and is not a namespace,
/// - the following segment, if any, is static,
/// - the placeholder's segment has exactly one part,
/// - the placeholder's content does not already contain the singularized
///   resource name (case-insensitive), so `/products/[productId]` stays
///   `productId` rather than `productProductId`.
fn param_name(
    part: &RoutePart,
    segment: &[RoutePart],
    preceding: Option<&[RoutePart]>,
    following: Option<&[RoutePart]>,
    namespaces: &dyn NamespaceRule,
) -> String {
    let content = part.content.trim_start_matches("...");
    let base = content.to_lower_camel_case();

    let Some(preceding) = preceding else {
        return base;
    };

    if namespaces.is_namespace(preceding) {
        return base;
    }

    if following.is_some_and(is_dynamic_segment) {
        return base;
    }

    if is_multi_part_segment(segment) {
        return base;
    }

    let resource = normalize_segment(preceding, true).to_singular();
    if resource.is_empty() || content.to_lowercase().contains(&resource.to_lowercase()) {
        return base;
    }

    format!("{}{}", resource, ToPascalCase::to_pascal_case(content))
}

/// Renders the parametrized path template for a route.
///
/// `params` must be the list derived by [`helper_params`] (or the `_with`
/// variant) for the same route; placeholders are matched to parameters by
/// position in the flattened placeholder sequence. Literal parts render as
/// their content, placeholders as `${param}` interpolation markers, and
/// segments are joined with `/` under a leading `/`.
///
/// A spread parameter's marker stands for its values joined with `/`,
/// which is the emission layer's concern.
///
/// # Examples
///
/// ```
/// use waymark::{build_helper_path, helper_params, ResolvedRoute};
///
/// let route = ResolvedRoute::from_pattern("/products/[id]/reviews");
/// let params = helper_params(&route);
/// assert_eq!(build_helper_path(&route, &params), "/products/${productId}/reviews");
///
/// let root = ResolvedRoute::from_pattern("/");
/// assert_eq!(build_helper_path(&root, &helper_params(&root)), "/");
/// ```
pub fn build_helper_path(route: &ResolvedRoute, params: &[HelperParam]) -> String {
    let mut rendered: Vec<String> = Vec::new();
    let mut placeholder_index = 0;

    for segment in &route.segments {
        let mut component = String::new();

        for part in segment {
            if part.dynamic {
                if let Some(param) = params.get(placeholder_index) {
                    component.push_str("${");
                    component.push_str(&param.name);
                    component.push('}');
                }
                placeholder_index += 1;
            } else {
                component.push_str(&part.content);
            }
        }

        rendered.push(component);
    }

    format!("/{}", rendered.join("/"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params_of(pattern: &str) -> Vec<String> {
        helper_params(&ResolvedRoute::from_pattern(pattern))
            .into_iter()
            .map(|param| param.name)
            .collect()
    }

    #[test]
    fn namespace_folds_placeholder_into_name() {
        let route = ResolvedRoute::from_pattern("/role/[slug]/members");
        assert_eq!(build_helper_name(&route), "roleSlugMembersPath");
        assert_eq!(params_of("/role/[slug]/members"), ["slug"]);
    }

    #[test]
    fn resource_before_placeholder_is_singularized() {
        let route = ResolvedRoute::from_pattern("/products/[id]");
        assert_eq!(build_helper_name(&route), "productPath");
    }

    #[test]
    fn placeholder_containing_resource_name_keeps_base() {
        assert_eq!(params_of("/projects/[projectId]"), ["projectId"]);
        assert_eq!(params_of("/projects/[id]"), ["projectId"]);
    }

    #[test]
    fn multi_part_segment_params_keep_base_names() {
        assert_eq!(
            params_of("/reports/[startDate]-to-[endDate]"),
            ["startDate", "endDate"]
        );
    }

    #[test]
    fn sequential_distinct_placeholders() {
        // [lang] is followed by a dynamic segment, so it keeps its base
        // name; [version]'s nearest preceding static segment is "docs"
        assert_eq!(params_of("/docs/[lang]/[version]"), ["lang", "docVersion"]);
    }

    #[test]
    fn spread_param_is_flagged() {
        let route = ResolvedRoute::from_pattern("/blog/[...slug]");
        let params = helper_params(&route);
        assert_eq!(params.len(), 1);
        assert_eq!(params[0].name, "slug");
        assert!(params[0].spread);
        assert_eq!(build_helper_path(&route, &params), "/blog/${slug}");
    }

    #[test]
    fn template_interpolates_in_param_order() {
        let route =
            ResolvedRoute::from_pattern("/dashboard/teams/[teamId]/members/[memberId]/permissions");
        let params = helper_params(&route);
        assert_eq!(
            build_helper_path(&route, &params),
            "/dashboard/teams/${teamId}/members/${memberId}/permissions"
        );
    }

    #[test]
    fn marker_count_matches_placeholder_count() {
        for pattern in [
            "/",
            "/[slug]",
            "/products/[id]",
            "/reports/[startDate]-to-[endDate]",
            "/docs/[lang]/[version]",
            "/blog/[...slug]",
        ] {
            let route = ResolvedRoute::from_pattern(pattern);
            let params = helper_params(&route);
            let placeholders = route
                .segments
                .iter()
                .flatten()
                .filter(|part| part.dynamic)
                .count();
            let template = build_helper_path(&route, &params);

            assert_eq!(params.len(), placeholders, "params for {pattern}");
            assert_eq!(
                template.matches("${").count(),
                placeholders,
                "markers for {pattern}"
            );
        }
    }
}
