//! Config derive macro - generates FIELDS and template().

use proc_macro2::TokenStream;
use quote::quote;
use syn::{Attribute, Data, DeriveInput, Fields, Lit, Meta, Type};

/// Parsed field information.
#[derive(Debug)]
pub struct FieldInfo {
    pub name: syn::Ident,
    pub doc: Option<String>,
    pub inline_doc: bool, // show doc as inline comment if single line
    pub default: Option<String>,
    pub skip: bool,
    pub ty: String,
}

/// Generate Config implementation (FIELDS + template).
pub fn derive(input: &DeriveInput) -> TokenStream {
    let name = &input.ident;
    let fields_struct_name = syn::Ident::new(&format!("{}Fields", name), name.span());

    let section = get_section(&input.attrs).unwrap_or_else(|| infer_section(&name.to_string()));
    let is_array = has_attr(&input.attrs, "array");
    let section_doc = extract_doc_comment(&input.attrs).unwrap_or_default();

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return quote! { compile_error!("Config only works on structs with named fields"); };
            }
        },
        _ => return quote! { compile_error!("Config only works on structs"); },
    };

    let field_infos: Vec<FieldInfo> = fields
        .iter()
        .filter_map(|field| {
            let ident = field.ident.as_ref()?;
            let attrs = &field.attrs;
            Some(FieldInfo {
                name: ident.clone(),
                doc: extract_doc_comment(attrs),
                inline_doc: has_attr(attrs, "inline_doc"),
                default: get_string_attr(attrs, "default"),
                skip: has_attr(attrs, "skip"),
                ty: type_to_string(&field.ty),
            })
        })
        .collect();

    let visible: Vec<_> = field_infos.iter().filter(|f| !f.skip).collect();

    let field_defs = visible.iter().map(|f| {
        let name = &f.name;
        quote! { pub #name: crate::config::FieldPath, }
    });

    let field_inits = visible.iter().map(|f| {
        let name = &f.name;
        let full_path = if section.is_empty() {
            f.name.to_string()
        } else {
            format!("{}.{}", section, f.name)
        };
        quote! { #name: crate::config::FieldPath::new(#full_path), }
    });

    let template_str = generate_template(&visible);

    quote! {
        /// Generated field path accessors.
        #[allow(non_camel_case_types)]
        #[derive(Debug, Clone, Copy)]
        pub struct #fields_struct_name {
            #(#field_defs)*
        }

        impl #name {
            /// Field paths for diagnostic messages.
            pub const FIELDS: #fields_struct_name = #fields_struct_name {
                #(#field_inits)*
            };

            /// Section name for TOML output.
            pub const TEMPLATE_SECTION: &'static str = #section;

            /// Whether the section is an array of tables.
            pub const TEMPLATE_ARRAY: bool = #is_array;

            /// Section documentation.
            pub const TEMPLATE_DOC: &'static str = #section_doc;

            /// TOML template for this config section.
            pub fn template() -> &'static str {
                #template_str
            }

            /// TOML template with section header.
            pub fn template_with_header() -> String {
                let mut out = String::new();
                for line in Self::TEMPLATE_DOC.lines() {
                    out.push_str("# ");
                    out.push_str(line.trim());
                    out.push('\n');
                }
                let section = Self::TEMPLATE_SECTION;
                if !section.is_empty() {
                    let (open, close) = if Self::TEMPLATE_ARRAY { ("[[", "]]") } else { ("[", "]") };
                    out.push_str(open);
                    out.push_str(section);
                    out.push_str(close);
                    out.push('\n');
                }
                out.push_str(Self::template());
                out.push('\n');
                out
            }
        }
    }
}

/// Generate template string for fields.
fn generate_template(fields: &[&FieldInfo]) -> String {
    fields
        .iter()
        .map(|f| generate_field_template(f))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Generate TOML template for a single field.
fn generate_field_template(info: &FieldInfo) -> String {
    let mut lines = Vec::new();

    let single_line_doc = info.doc.as_deref().filter(|d| !d.contains('\n'));
    let inline = if info.inline_doc { single_line_doc } else { None };

    if inline.is_none() {
        if let Some(ref doc) = info.doc {
            for line in doc.lines() {
                lines.push(format!("# {}", line.trim()));
            }
        }
    }

    let value = match &info.default {
        Some(v) => format_default_for_type(v, &info.ty),
        None => infer_default(&info.ty),
    };

    let field_line = format!("{} = {}", info.name, value);
    match inline {
        Some(doc) => lines.push(format!("{}  # {}", field_line, doc.trim())),
        None => lines.push(field_line),
    }

    lines.join("\n")
}

// ============================================================================
// Attribute parsing helpers
// ============================================================================

fn get_section(attrs: &[Attribute]) -> Option<String> {
    get_string_attr(attrs, "section")
}

fn get_string_attr(attrs: &[Attribute], key: &str) -> Option<String> {
    for attr in attrs {
        if !attr.path().is_ident("config") {
            continue;
        }
        let mut value = None;
        let _ = attr.parse_nested_meta(|meta| {
            if meta.path.is_ident(key) {
                let lit: syn::LitStr = meta.value()?.parse()?;
                value = Some(lit.value());
            } else if meta.input.peek(syn::Token![=]) {
                let _ = meta.value();
                let _: Option<syn::Lit> = meta.input.parse().ok();
            }
            Ok(())
        });
        if value.is_some() {
            return value;
        }
    }
    None
}

fn has_attr(attrs: &[Attribute], key: &str) -> bool {
    for attr in attrs {
        if !attr.path().is_ident("config") {
            continue;
        }
        let mut found = false;
        let _ = attr.parse_nested_meta(|meta| {
            if meta.path.is_ident(key) {
                found = true;
            }
            // Skip value if present (e.g., `default = "en"`)
            if meta.input.peek(syn::Token![=]) {
                let _ = meta.value();
                let _: Option<syn::Lit> = meta.input.parse().ok();
            }
            Ok(())
        });
        if found {
            return true;
        }
    }
    false
}

fn extract_doc_comment(attrs: &[Attribute]) -> Option<String> {
    let docs: Vec<String> = attrs
        .iter()
        .filter_map(|attr| {
            if !attr.path().is_ident("doc") {
                return None;
            }
            if let Meta::NameValue(nv) = &attr.meta
                && let syn::Expr::Lit(expr_lit) = &nv.value
                && let Lit::Str(s) = &expr_lit.lit
            {
                return Some(s.value());
            }
            None
        })
        .collect();

    if docs.is_empty() {
        None
    } else {
        Some(docs.join("\n").trim().to_string())
    }
}

// ============================================================================
// Type helpers
// ============================================================================

fn type_to_string(ty: &Type) -> String {
    quote!(#ty).to_string().replace(' ', "")
}

fn infer_section(name: &str) -> String {
    let name = name
        .strip_suffix("Config")
        .or_else(|| name.strip_suffix("Settings"))
        .unwrap_or(name);
    to_snake_case(name)
}

fn to_snake_case(s: &str) -> String {
    let mut result = String::new();
    for (i, c) in s.chars().enumerate() {
        if c.is_uppercase() {
            if i > 0 {
                result.push('_');
            }
            result.push(c.to_ascii_lowercase());
        } else {
            result.push(c);
        }
    }
    result
}

const SCALARS: &[&str] = &[
    "bool", "u8", "u16", "u32", "u64", "usize", "i8", "i16", "i32", "i64", "isize", "f32", "f64",
];

/// Format default value based on field type.
/// String and enum types get quoted, scalars and arrays are used as-is.
fn format_default_for_type(value: &str, ty: &str) -> String {
    if ty.starts_with("Vec<") || SCALARS.contains(&ty) {
        value.to_string()
    } else {
        format!("\"{}\"", value)
    }
}

fn infer_default(ty: &str) -> String {
    match ty {
        "bool" => "false".to_string(),
        "f32" | "f64" => "0.0".to_string(),
        _ if SCALARS.contains(&ty) => "0".to_string(),
        _ if ty.starts_with("Vec<") => "[]".to_string(),
        _ => "\"\"".to_string(),
    }
}
