//! Segment classification and identifier normalization
//!
//! All functions here are **pure**: same input → same output, no side
//! effects. Classification is computed on demand, never stored on the
//! segment itself.

use heck::ToLowerCamelCase;
use inflector::Inflector;

use crate::route::RoutePart;

/// True iff no part of the segment is a placeholder.
pub fn is_static_segment(segment: &[RoutePart]) -> bool {
    segment.iter().all(|part| !part.dynamic)
}

/// True iff at least one part of the segment is a placeholder.
pub fn is_dynamic_segment(segment: &[RoutePart]) -> bool {
    segment.iter().any(|part| part.dynamic)
}

/// True iff the segment is a composite of more than one part.
pub fn is_multi_part_segment(segment: &[RoutePart]) -> bool {
    segment.len() > 1
}

/// Decides whether a static segment acts as a naming qualifier rather than
/// a pluralized resource collection.
///
/// Namespace-ness steers both helper naming and parameter prefixing, and
/// conventions differ between projects, so the rule is pluggable. The
/// default is [`SingularNamespaceRule`].
pub trait NamespaceRule {
    fn is_namespace(&self, segment: &[RoutePart]) -> bool;
}

/// The default namespace heuristic: a static, single-part segment whose
/// text is already in singular grammatical form.
///
/// `"role"` is a namespace; `"roles"` is not (it singularizes to `"role"`).
///
/// # Examples
///
/// ```
/// use waymark::{NamespaceRule, RoutePart, SingularNamespaceRule};
///
/// let rule = SingularNamespaceRule;
/// assert!(rule.is_namespace(&[RoutePart::literal("role")]));
/// assert!(!rule.is_namespace(&[RoutePart::literal("products")]));
/// assert!(!rule.is_namespace(&[RoutePart::param("slug")]));
/// ```
pub struct SingularNamespaceRule;

impl NamespaceRule for SingularNamespaceRule {
    fn is_namespace(&self, segment: &[RoutePart]) -> bool {
        match segment {
            [part] if !part.dynamic => part.content.to_singular() == part.content,
            _ => false,
        }
    }
}

/// Converts a segment into an identifier-safe, case-normalized fragment.
///
/// Every identifier fragment in this crate passes through here: spread
/// markers are stripped, parts with any non-alphabetic character contribute
/// nothing, survivors are underscore-joined and camel-folded. Exotic
/// literal content (dates, slugs with hyphens, file extensions) therefore
/// can never leak punctuation into a generated identifier.
///
/// # Examples
///
/// ```
/// use waymark::{normalize_segment, RoutePart};
///
/// let segment = vec![RoutePart::literal("posts")];
/// assert_eq!(normalize_segment(&segment, true), "posts");
/// assert_eq!(normalize_segment(&segment, false), "Posts");
///
/// // Non-alphabetic parts contribute nothing
/// let segment = vec![
///     RoutePart::param("startDate"),
///     RoutePart::literal("-to-"),
///     RoutePart::param("endDate"),
/// ];
/// assert_eq!(normalize_segment(&segment, true), "startDateEndDate");
///
/// let segment = vec![RoutePart::literal("users.json")];
/// assert_eq!(normalize_segment(&segment, true), "");
/// ```
pub fn normalize_segment(segment: &[RoutePart], lower_first: bool) -> String {
    let joined = segment
        .iter()
        .map(|part| part.content.trim_start_matches("..."))
        .filter(|content| !content.is_empty() && content.chars().all(|c| c.is_ascii_alphabetic()))
        .collect::<Vec<_>>()
        .join("_");

    if lower_first {
        joined.to_lower_camel_case()
    } else {
        joined.to_pascal_case()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seg(parts: &[RoutePart]) -> Vec<RoutePart> {
        parts.to_vec()
    }

    #[test]
    fn classifies_static_and_dynamic() {
        let stat = seg(&[RoutePart::literal("about")]);
        let dyn_seg = seg(&[RoutePart::param("id")]);
        let mixed = seg(&[RoutePart::literal("v"), RoutePart::param("version")]);

        assert!(is_static_segment(&stat));
        assert!(!is_dynamic_segment(&stat));
        assert!(is_dynamic_segment(&dyn_seg));
        assert!(!is_static_segment(&dyn_seg));
        assert!(is_dynamic_segment(&mixed));
        assert!(is_multi_part_segment(&mixed));
        assert!(!is_multi_part_segment(&stat));
    }

    #[test]
    fn singular_static_single_part_is_namespace() {
        let rule = SingularNamespaceRule;
        assert!(rule.is_namespace(&seg(&[RoutePart::literal("dashboard")])));
        assert!(rule.is_namespace(&seg(&[RoutePart::literal("audit")])));
        assert!(!rule.is_namespace(&seg(&[RoutePart::literal("sections")])));
        assert!(!rule.is_namespace(&seg(&[
            RoutePart::literal("v"),
            RoutePart::literal("one"),
        ])));
        assert!(!rule.is_namespace(&seg(&[RoutePart::param("role")])));
    }

    #[test]
    fn normalize_strips_spread_marker() {
        let part = RoutePart::catch_all("slug");
        assert_eq!(normalize_segment(&[part], true), "slug");
    }

    #[test]
    fn normalize_folds_multi_part_segments() {
        let segment = seg(&[
            RoutePart::param("startDate"),
            RoutePart::literal("-to-"),
            RoutePart::param("endDate"),
        ]);
        assert_eq!(normalize_segment(&segment, false), "StartDateEndDate");
    }

    #[test]
    fn normalize_drops_non_alphabetic_content() {
        let segment = seg(&[RoutePart::literal("2024-01-01")]);
        assert_eq!(normalize_segment(&segment, true), "");
    }
}
