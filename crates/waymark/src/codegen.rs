//! Source emission for generated path helpers
//!
//! The derivation core speaks camelCase (`productPath`, `productId`);
//! emitted Rust converts to snake_case at this boundary so the generated
//! functions read like hand-written code. Alongside the source file, a
//! JSON manifest describes every helper for static consumers (editor
//! tooling, docs generators).

use heck::ToSnakeCase;
use serde::Serialize;

use crate::store::{HelperTemplateContext, TemplateContextStore};

/// Emits one Rust function per stored context, in emission order.
///
/// Parameter-less helpers return a string literal; parameterized helpers
/// render through `format!` with captured identifiers. Spread parameters
/// take `&[&str]` and are joined with `/` before formatting. When
/// `trailing_slash` is set, every emitted path ends with `/`.
///
/// # Examples
///
/// ```
/// use waymark::{aggregate_routes, generate_path_helpers, ResolvedRoute};
///
/// let routes = vec![ResolvedRoute::from_pattern("/products/[id]")];
/// let code = generate_path_helpers(&aggregate_routes(&routes), false);
///
/// assert!(code.contains("pub fn product_path(product_id: &str) -> String {"));
/// assert!(code.contains("format!(\"/products/{product_id}\")"));
/// ```
pub fn generate_path_helpers(store: &TemplateContextStore, trailing_slash: bool) -> String {
    let mut lines: Vec<String> = vec![
        "// This file is auto-generated by waymark".to_string(),
        "// Do not edit manually".to_string(),
        String::new(),
    ];

    for context in store.iter() {
        lines.push(helper_function(context, trailing_slash));
    }

    lines.join("\n")
}

fn helper_function(context: &HelperTemplateContext, trailing_slash: bool) -> String {
    let name = context.name.to_snake_case();
    let path = rendered_path(context, trailing_slash);

    if context.params.is_empty() {
        return format!("pub fn {name}() -> String {{\n    \"{path}\".to_string()\n}}\n");
    }

    let args = context
        .params
        .iter()
        .map(|param| {
            let ident = param.name.to_snake_case();
            if param.spread {
                format!("{ident}: &[&str]")
            } else {
                format!("{ident}: &str")
            }
        })
        .collect::<Vec<_>>()
        .join(", ");

    let mut body = String::new();
    for param in context.params.iter().filter(|param| param.spread) {
        let ident = param.name.to_snake_case();
        body.push_str(&format!("    let {ident} = {ident}.join(\"/\");\n"));
    }
    body.push_str(&format!("    format!(\"{path}\")\n"));

    format!("pub fn {name}({args}) -> String {{\n{body}}}\n")
}

/// Rewrites `${param}` interpolation markers into `{snake_case}` captures
/// for `format!`.
fn rendered_path(context: &HelperTemplateContext, trailing_slash: bool) -> String {
    let mut path = context.path_template.clone();

    for param in &context.params {
        let marker = format!("${{{}}}", param.name);
        let capture = format!("{{{}}}", param.name.to_snake_case());
        path = path.replace(&marker, &capture);
    }

    if trailing_slash {
        path.push('/');
    }

    path
}

#[derive(Serialize)]
struct HelperDecl<'a> {
    name: &'a str,
    params: Vec<ParamDecl<'a>>,
    path_template: &'a str,
}

#[derive(Serialize)]
struct ParamDecl<'a> {
    name: &'a str,
    kind: &'static str,
}

/// Emits a JSON manifest with one entry per helper: name, parameter names
/// and kinds (`"string"` or `"string[]"`), and the path template.
pub fn generate_helper_manifest(store: &TemplateContextStore) -> serde_json::Result<String> {
    let decls: Vec<HelperDecl> = store
        .iter()
        .map(|context| HelperDecl {
            name: &context.name,
            params: context
                .params
                .iter()
                .map(|param| ParamDecl {
                    name: &param.name,
                    kind: if param.spread { "string[]" } else { "string" },
                })
                .collect(),
            path_template: &context.path_template,
        })
        .collect();

    let mut json = serde_json::to_string_pretty(&decls)?;
    json.push('\n');
    Ok(json)
}
