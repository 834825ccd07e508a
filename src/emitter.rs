use crate::inferred_type::{Field, InferredType, Struct};
use crate::naming::{format_leading_digits, is_exported, sanitize, NameRegistry};
use crate::options::Options;
use std::fmt::Write;

/// Root type name used when the caller's name has no exported form.
pub const DEFAULT_ROOT_NAME: &str = "AutoGenerated";

/// Identifier for a key that yields no exported name.
const UNNAMED_FIELD: &str = "Field";

/// Suffix for a struct found directly inside a top-level array.
const ROOT_ELEMENT_SUFFIX: &str = "Item";

/// Cleans up a caller-supplied root type name, keeping its casing apart from
/// the first letter, which is upper-cased so the type is exported. This also
/// keeps Go keywords and predeclared names like `type` or `string` out.
pub fn root_name(requested: &str) -> String {
    let sanitized = sanitize(requested);
    let token = format_leading_digits(sanitized.trim_start_matches('_'));

    let mut chars = token.chars();
    let name: String = match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    };

    if is_exported(&name) {
        name
    } else {
        DEFAULT_ROOT_NAME.to_owned()
    }
}

/// Assigns a final name to every struct in the tree.
///
/// Names are handed out pre-order: a struct is named before any struct nested
/// inside it, so inner names see every outer name as taken. Field identifiers
/// are also made unique within each struct.
pub fn assign_names(root: &mut InferredType, root_name: &str, registry: &mut NameRegistry) {
    if matches!(root, InferredType::Struct(_)) {
        name_type(root, root_name, "", registry);
    } else {
        let alias = registry.unique_name(root_name, "");
        let candidate = format!("{}{}", alias, ROOT_ELEMENT_SUFFIX);
        name_type(root, &candidate, &alias, registry);
    }
}

fn name_type(ty: &mut InferredType, candidate: &str, enclosing: &str, registry: &mut NameRegistry) {
    match ty {
        InferredType::Scalar(_) => {}
        InferredType::Slice(element) => name_type(element, candidate, enclosing, registry),
        InferredType::Struct(s) => {
            s.name = registry.unique_name(candidate, enclosing);

            let mut idents = NameRegistry::new();
            for field in &mut s.fields {
                let base = if is_exported(&field.ident) {
                    field.ident.as_str()
                } else {
                    UNNAMED_FIELD
                };
                field.ident = idents.unique_name(base, "");
            }

            for field in &mut s.fields {
                name_type(&mut field.ty, &field.ident, &s.name, registry);
            }
        }
    }
}

/// Renders a named tree as Go source.
///
/// One block is written per struct, in the same pre-order the names were
/// assigned in, so the root comes first. A root that is not a struct is
/// written as a type alias ahead of the struct blocks.
pub fn render(root: &InferredType, root_name: &str, options: &Options) -> String {
    let mut blocks = Vec::new();

    if !matches!(root, InferredType::Struct(_)) {
        blocks.push(format!("type {} {}\n", root_name, type_ref(root)));
    }

    let mut structs = Vec::new();
    collect_structs(root, &mut structs);
    blocks.extend(structs.into_iter().map(|s| render_struct(s, options)));

    blocks.join("\n")
}

fn collect_structs<'a>(ty: &'a InferredType, out: &mut Vec<&'a Struct>) {
    match ty {
        InferredType::Scalar(_) => {}
        InferredType::Slice(element) => collect_structs(element, out),
        InferredType::Struct(s) => {
            out.push(s);
            for field in &s.fields {
                collect_structs(&field.ty, out);
            }
        }
    }
}

fn render_struct(s: &Struct, options: &Options) -> String {
    let mut out = format!("type {} struct {{\n", s.name);
    for field in &s.fields {
        // Writing to a String cannot fail.
        let _ = writeln!(
            out,
            "\t{} {} `{}`",
            field.ident,
            type_ref(&field.ty),
            tag(field, options)
        );
    }
    out.push_str("}\n");
    out
}

fn type_ref(ty: &InferredType) -> String {
    match ty {
        InferredType::Scalar(scalar) => scalar.keyword().to_owned(),
        InferredType::Slice(element) => format!("[]{}", type_ref(element)),
        InferredType::Struct(s) => s.name.clone(),
    }
}

fn tag(field: &Field, options: &Options) -> String {
    let mut json = field.key.clone();
    if field.optional || options.all_omitempty() {
        json.push_str(",omitempty");
    }

    let mut out = format!("json:{}", quote(&json));
    if options.examples() {
        if let Some(example) = &field.example {
            out.push_str(" example:");
            out.push_str(&quote(example));
        }
    }
    out
}

/// Quotes a struct tag value. The result never contains a backtick, so it can
/// sit inside a raw-string tag.
fn quote(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '`' => out.push_str("\\x60"),
            c if c.is_control() => {
                let _ = write!(out, "\\u{:04x}", u32::from(c));
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}
