use std::collections::HashSet;

use serde_json::{Map, Value};

use crate::error::CompileError;

const JSON_VALUE: &str = "serde_json::Value";

/// Translates one schema document into Rust type declarations. The pipeline
/// only depends on this seam, so tests can substitute a failing or recording
/// implementation.
pub trait SchemaCompiler {
    fn compile(&self, schema: &Value, type_name: &str) -> Result<String, CompileError>;
}

/// Production compiler. Objects become structs, string enumerations become
/// enums with serde renames, nullable and omissible properties become
/// `Option`, inline object properties are hoisted into named auxiliary types,
/// and deliberately schema-less payloads fall back to `serde_json::Value`.
///
/// Output is a pure function of `(schema, type_name)`: no timestamps, and
/// properties render in serde_json's sorted key order, so re-running the
/// generator over unchanged schemas reproduces byte-identical artifacts.
#[derive(Debug, Default, Clone, Copy)]
pub struct RustTypeCompiler;

impl RustTypeCompiler {
    pub fn new() -> Self {
        Self
    }
}

impl SchemaCompiler for RustTypeCompiler {
    fn compile(&self, schema: &Value, type_name: &str) -> Result<String, CompileError> {
        let root = schema
            .as_object()
            .ok_or_else(|| CompileError::NonObjectRoot {
                found: json_kind(schema).to_string(),
            })?;

        let mut emitter = Emitter::new(root);
        let rendered = emitter.type_for(schema, type_name)?;
        if rendered != type_name {
            // The root compiled to a plain type expression (scalar, array,
            // map) instead of a named declaration.
            return Err(CompileError::NonObjectRoot {
                found: describe_root(root),
            });
        }

        Ok(emitter.render(type_name))
    }
}

struct Emitter<'a> {
    root: &'a Map<String, Value>,
    decls: Vec<(String, String)>,
    seen: HashSet<String>,
    uses_map: bool,
}

impl<'a> Emitter<'a> {
    fn new(root: &'a Map<String, Value>) -> Self {
        Self {
            root,
            decls: Vec::new(),
            seen: HashSet::new(),
            uses_map: false,
        }
    }

    /// Rust type expression for a schema node, emitting auxiliary
    /// declarations as a side effect. `hint` names any declaration hoisted
    /// out of this node.
    fn type_for(&mut self, node: &Value, hint: &str) -> Result<String, CompileError> {
        let obj = match node {
            Value::Bool(true) => return Ok(JSON_VALUE.to_string()),
            Value::Bool(false) => {
                return Err(CompileError::Unsupported(
                    "`false` schema matches no values".to_string(),
                ))
            }
            Value::Object(obj) => obj,
            other => {
                return Err(CompileError::Unsupported(format!(
                    "expected a schema object, got {}",
                    json_kind(other)
                )))
            }
        };

        if let Some(reference) = obj.get("$ref").and_then(Value::as_str) {
            return self.compile_ref(reference);
        }

        if let Some(subschemas) = obj.get("allOf").and_then(Value::as_array) {
            return match subschemas.as_slice() {
                [single] => self.type_for(single, hint),
                _ => Err(CompileError::Unsupported(
                    "allOf with more than one subschema".to_string(),
                )),
            };
        }

        for combiner in ["anyOf", "oneOf"] {
            if let Some(variants) = obj.get(combiner).and_then(Value::as_array) {
                return self.compile_union(variants, hint);
            }
        }

        if let Some(values) = obj.get("enum") {
            return self.emit_enum(hint, values);
        }

        match obj.get("type") {
            Some(Value::String(ty)) => self.compile_typed(ty, obj, hint),
            Some(Value::Array(types)) => self.compile_type_list(types, obj, hint),
            Some(other) => Err(CompileError::Unsupported(format!(
                "\"type\" must be a string or list, got {}",
                json_kind(other)
            ))),
            None => {
                if obj.get("properties").is_some() {
                    self.compile_object(obj, hint)
                } else {
                    Ok(JSON_VALUE.to_string())
                }
            }
        }
    }

    fn compile_typed(
        &mut self,
        ty: &str,
        obj: &Map<String, Value>,
        hint: &str,
    ) -> Result<String, CompileError> {
        match ty {
            "string" => Ok("String".to_string()),
            "integer" => Ok("i64".to_string()),
            "number" => Ok("f64".to_string()),
            "boolean" => Ok("bool".to_string()),
            "array" => match obj.get("items") {
                Some(items) => {
                    let item = self.type_for(items, &format!("{hint}Item"))?;
                    Ok(format!("Vec<{item}>"))
                }
                None => Err(CompileError::Unsupported(
                    "array schema without items".to_string(),
                )),
            },
            "object" => self.compile_object(obj, hint),
            "null" => Err(CompileError::Unsupported(
                "standalone null type".to_string(),
            )),
            other => Err(CompileError::Unsupported(format!(
                "unknown type \"{other}\""
            ))),
        }
    }

    /// `"type": ["string", "null"]` style unions. A single concrete type plus
    /// `null` maps to `Option`; anything broader is rejected.
    fn compile_type_list(
        &mut self,
        types: &[Value],
        obj: &Map<String, Value>,
        hint: &str,
    ) -> Result<String, CompileError> {
        let mut names = Vec::with_capacity(types.len());
        for entry in types {
            match entry.as_str() {
                Some(name) => names.push(name),
                None => {
                    return Err(CompileError::Unsupported(
                        "non-string entry in type list".to_string(),
                    ))
                }
            }
        }

        let nullable = names.contains(&"null");
        let concrete: Vec<&str> = names.into_iter().filter(|name| *name != "null").collect();
        match concrete.as_slice() {
            [] => Err(CompileError::Unsupported(
                "type list with no concrete type".to_string(),
            )),
            [single] => {
                let inner = self.compile_typed(single, obj, hint)?;
                Ok(wrap_option(inner, nullable))
            }
            _ => Err(CompileError::Unsupported(
                "type list with multiple concrete types".to_string(),
            )),
        }
    }

    fn compile_union(&mut self, variants: &[Value], hint: &str) -> Result<String, CompileError> {
        let mut nullable = false;
        let mut concrete = Vec::with_capacity(variants.len());
        for variant in variants {
            if is_null_schema(variant) {
                nullable = true;
            } else {
                concrete.push(variant);
            }
        }

        let inner = match concrete.as_slice() {
            [] => JSON_VALUE.to_string(),
            [single] => self.type_for(single, hint)?,
            _ => self.emit_untagged_enum(hint, &concrete)?,
        };
        Ok(wrap_option(inner, nullable))
    }

    fn compile_object(
        &mut self,
        obj: &Map<String, Value>,
        hint: &str,
    ) -> Result<String, CompileError> {
        if obj.get("properties").and_then(Value::as_object).is_some() {
            return self.emit_struct(hint, obj);
        }

        // Map-shaped objects carry a schema under additionalProperties;
        // everything else is an opaque payload tier.
        if let Some(additional) = obj.get("additionalProperties") {
            if additional.is_object() {
                let value = self.type_for(additional, &format!("{hint}Value"))?;
                self.uses_map = true;
                return Ok(format!("HashMap<String, {value}>"));
            }
        }

        Ok(JSON_VALUE.to_string())
    }

    fn compile_ref(&mut self, reference: &str) -> Result<String, CompileError> {
        let key = reference
            .strip_prefix("#/definitions/")
            .or_else(|| reference.strip_prefix("#/$defs/"))
            .ok_or_else(|| CompileError::UnresolvedRef(reference.to_string()))?;

        let target = self
            .root
            .get("definitions")
            .or_else(|| self.root.get("$defs"))
            .and_then(Value::as_object)
            .and_then(|defs| defs.get(key))
            .ok_or_else(|| CompileError::UnresolvedRef(reference.to_string()))?;

        let name = type_ident(key);
        if self.seen.contains(&name) {
            return Ok(name);
        }

        self.type_for(target, &name)
    }

    fn emit_struct(&mut self, name: &str, obj: &Map<String, Value>) -> Result<String, CompileError> {
        self.reserve(name)?;

        let properties = obj
            .get("properties")
            .and_then(Value::as_object)
            .cloned()
            .unwrap_or_default();
        let required: HashSet<&str> = obj
            .get("required")
            .and_then(Value::as_array)
            .map(|names| names.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default();

        let mut body = String::new();
        for (property, schema) in &properties {
            let child_hint = format!("{name}{}", type_ident(property));
            let ty = self.type_for(schema, &child_hint)?;
            let is_required = required.contains(property.as_str());

            let (field, renamed) = field_ident(property);
            if renamed {
                body.push_str(&format!("    #[serde(rename = \"{property}\")]\n"));
            }

            if is_required {
                body.push_str(&format!("    pub {field}: {ty},\n"));
            } else {
                // Omissible on the wire: default on read, skipped when None
                // on write.
                body.push_str(
                    "    #[serde(default, skip_serializing_if = \"Option::is_none\")]\n",
                );
                body.push_str(&format!("    pub {field}: {},\n", wrap_option(ty, true)));
            }
        }

        let source = format!(
            "#[derive(Debug, Clone, Serialize, Deserialize)]\npub struct {name} {{\n{body}}}\n"
        );
        self.finish(name, source);
        Ok(name.to_string())
    }

    fn emit_enum(&mut self, name: &str, values: &Value) -> Result<String, CompileError> {
        let values = values.as_array().ok_or_else(|| {
            CompileError::Unsupported("enum values must be a list".to_string())
        })?;
        if values.is_empty() {
            return Err(CompileError::Unsupported("empty enum".to_string()));
        }

        self.reserve(name)?;

        let mut body = String::new();
        let mut used = HashSet::new();
        for value in values {
            let literal = value.as_str().ok_or_else(|| {
                CompileError::Unsupported(format!(
                    "non-string enum value {value} (only string enumerations are supported)"
                ))
            })?;
            let variant = variant_ident(literal);
            if !used.insert(variant.clone()) {
                return Err(CompileError::Unsupported(format!(
                    "enum values collide on variant name `{variant}`"
                )));
            }
            body.push_str(&format!("    #[serde(rename = \"{literal}\")]\n"));
            body.push_str(&format!("    {variant},\n"));
        }

        let source = format!(
            "#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]\npub enum {name} {{\n{body}}}\n"
        );
        self.finish(name, source);
        Ok(name.to_string())
    }

    /// Unions of distinct object shapes (`anyOf` over `$ref`s) become untagged
    /// enums; serde tries each variant in declaration order.
    fn emit_untagged_enum(
        &mut self,
        name: &str,
        variants: &[&Value],
    ) -> Result<String, CompileError> {
        self.reserve(name)?;

        let mut body = String::new();
        let mut used = HashSet::new();
        for (index, variant) in variants.iter().enumerate() {
            let ty = self.type_for(variant, &format!("{name}Variant{index}"))?;
            if !ty.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
                return Err(CompileError::Unsupported(format!(
                    "union variant of shape `{ty}` cannot be named"
                )));
            }
            if !used.insert(ty.clone()) {
                return Err(CompileError::Unsupported(format!(
                    "union repeats variant `{ty}`"
                )));
            }
            body.push_str(&format!("    {ty}({ty}),\n"));
        }

        let source = format!(
            "#[derive(Debug, Clone, Serialize, Deserialize)]\n#[serde(untagged)]\npub enum {name} {{\n{body}}}\n"
        );
        self.finish(name, source);
        Ok(name.to_string())
    }

    fn reserve(&mut self, name: &str) -> Result<(), CompileError> {
        if !self.seen.insert(name.to_string()) {
            return Err(CompileError::Unsupported(format!(
                "two declarations derive the type name `{name}`"
            )));
        }
        Ok(())
    }

    fn finish(&mut self, name: &str, source: String) {
        self.decls.push((name.to_string(), source));
    }

    fn render(&self, root_name: &str) -> String {
        let mut out = String::from("// @generated automatically by typegen. Do not edit by hand.\n\n");
        out.push_str("use serde::{Deserialize, Serialize};\n");
        if self.uses_map {
            out.push_str("use std::collections::HashMap;\n");
        }

        // Root declaration first, auxiliaries in discovery order.
        if let Some((_, source)) = self.decls.iter().find(|(name, _)| name == root_name) {
            out.push('\n');
            out.push_str(source);
        }
        for (_, source) in self.decls.iter().filter(|(name, _)| name != root_name) {
            out.push('\n');
            out.push_str(source);
        }
        out
    }
}

fn wrap_option(inner: String, nullable: bool) -> String {
    if nullable && !inner.starts_with("Option<") {
        format!("Option<{inner}>")
    } else {
        inner
    }
}

fn is_null_schema(node: &Value) -> bool {
    node.as_object()
        .and_then(|obj| obj.get("type"))
        .and_then(Value::as_str)
        .is_some_and(|ty| ty == "null")
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn describe_root(root: &Map<String, Value>) -> String {
    match root.get("type") {
        Some(Value::String(ty)) => ty.clone(),
        _ => "non-object schema".to_string(),
    }
}

/// PascalCase identifier from a schema key or property name.
fn type_ident(raw: &str) -> String {
    let mut out = String::new();
    let mut boundary = true;
    for c in raw.chars() {
        if c.is_ascii_alphanumeric() {
            if boundary {
                out.extend(c.to_uppercase());
            } else {
                out.push(c);
            }
            boundary = false;
        } else {
            boundary = true;
        }
    }
    if out.is_empty() {
        out.push('T');
    }
    if out.starts_with(|c: char| c.is_ascii_digit()) {
        out.insert(0, 'N');
    }
    out
}

/// Enum variant identifier from a string literal. Punctuation that carries
/// meaning in the production schemas (phone country codes) is spelled out.
fn variant_ident(literal: &str) -> String {
    let mut cleaned = String::new();
    for c in literal.chars() {
        match c {
            '+' => cleaned.push_str(" plus "),
            c if c.is_ascii_alphanumeric() => cleaned.push(c),
            _ => cleaned.push(' '),
        }
    }
    type_ident(&cleaned)
}

/// Rust field identifier for a JSON property, plus whether a serde rename is
/// needed. Raw identifiers cover most keywords; serde strips the `r#` prefix
/// when deriving the wire name.
fn field_ident(property: &str) -> (String, bool) {
    let mut sanitized = String::new();
    for c in property.chars() {
        if c.is_ascii_alphanumeric() || c == '_' {
            sanitized.push(c);
        } else {
            sanitized.push('_');
        }
    }
    if sanitized.is_empty() || sanitized.chars().all(|c| c == '_') {
        return (format!("field{}", sanitized.len()), true);
    }
    if sanitized.starts_with(|c: char| c.is_ascii_digit()) {
        sanitized.insert(0, '_');
    }

    let renamed = sanitized != property;
    match sanitized.as_str() {
        // Cannot be raw identifiers.
        "self" | "Self" | "super" | "crate" => (format!("{sanitized}_"), true),
        keyword if RUST_KEYWORDS.contains(&keyword) => (format!("r#{keyword}"), renamed),
        _ => (sanitized, renamed),
    }
}

const RUST_KEYWORDS: &[&str] = &[
    "as", "async", "await", "break", "const", "continue", "dyn", "else", "enum", "extern",
    "false", "fn", "for", "if", "impl", "in", "let", "loop", "match", "mod", "move", "mut",
    "pub", "ref", "return", "static", "struct", "trait", "true", "try", "type", "unsafe",
    "use", "where", "while",
];
