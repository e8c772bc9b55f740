//! Swift emitter: RealmSwift `Object` subclasses with ObjectMapper `Mappable` conformance,
//! plus `String`-backed Swift enums for GraphQL enums.
use chrono::NaiveDate;

use crate::error::EmitError;
use crate::ir::{Category, GeneratedClass, PropertyPlan};
use crate::naming::lower_camel_case;
use crate::resolve::resolve_field;
use crate::schema::{EnumValue, TypeDescriptor, TypeKind};

/// Extension of generated files.
pub const FILE_EXTENSION: &str = "swift";

const GENERATOR_NAME: &str = "gql2realm";

const INDENT: &str = "    ";

const SWIFT_KEYWORDS: &[&str] = &[
    "associatedtype", "as", "break", "case", "catch", "class", "continue", "default", "defer",
    "deinit", "do", "else", "enum", "extension", "fallthrough", "false", "fileprivate", "for",
    "func", "guard", "if", "import", "in", "init", "inout", "internal", "is", "let", "nil",
    "open", "operator", "private", "protocol", "public", "repeat", "rethrows", "return",
    "self", "static", "struct", "subscript", "super", "switch", "throw", "throws", "true",
    "try", "typealias", "var", "where", "while",
];

/// Accumulates the text of one generated file.
pub struct Codegen {
    out: String,
    date: NaiveDate,
}

impl Codegen {
    pub fn new(date: NaiveDate) -> Self {
        Self { out: String::new(), date }
    }

    pub fn into_string(self) -> String {
        self.out
    }

    /// Emit one filtered type. Enums become Swift enums; everything else a class.
    ///
    /// Every field is resolved before any text is written, so a malformed
    /// reference leaves the buffer untouched.
    pub fn emit(&mut self, ty: &TypeDescriptor) -> Result<(), EmitError> {
        if ty.kind == TypeKind::Enum {
            self.emit_header(&ty.name);
            self.emit_enum(ty);
            return Ok(());
        }
        let plans = ty
            .fields()
            .iter()
            .map(|field| {
                resolve_field(field).map_err(|source| EmitError::MalformedTypeRef {
                    type_name: ty.name.clone(),
                    field: field.name.clone(),
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        self.emit_header(&ty.name);
        self.emit_class(ty, &plans);
        Ok(())
    }

    fn emit_header(&mut self, type_name: &str) {
        self.out.push_str("//\n");
        self.out.push_str(&format!("//  {}.{}\n", type_name, FILE_EXTENSION));
        self.out.push_str("//\n");
        self.out.push_str(&format!(
            "//  Generated by {} on {}.\n",
            GENERATOR_NAME,
            format_date(self.date)
        ));
        self.out.push_str("//\n\n");
        self.out.push_str("import Foundation\n");
        self.out.push_str("import RealmSwift\n");
        self.out.push_str("import ObjectMapper\n\n");
    }

    fn emit_class(&mut self, ty: &TypeDescriptor, plans: &[PropertyPlan]) {
        if let Some(description) = non_empty(ty.description.as_deref()) {
            self.emit_doc("", Some(description));
        }
        self.out.push_str(&format!("class {}: Object, Mappable {{\n", ty.name));

        for plan in plans {
            self.out.push('\n');
            self.emit_doc(INDENT, plan.description.as_deref());
            self.out.push_str(INDENT);
            self.out.push_str(&property_declaration(plan));
            self.out.push('\n');
        }

        // mapping block
        self.out.push('\n');
        self.out.push_str(&format!("{INDENT}func mapping(map: Map) {{\n"));
        for plan in plans {
            self.out.push_str(&format!(
                "{INDENT}{INDENT}{} <- map[\"{}\"]\n",
                swift_identifier(&plan.name),
                plan.name
            ));
        }
        self.out.push_str(&format!("{INDENT}}}\n"));

        // initializer stub
        self.out.push('\n');
        self.out.push_str(&format!("{INDENT}required convenience init?(map: Map) {{\n"));
        self.out.push_str(&format!("{INDENT}{INDENT}self.init()\n"));
        self.out.push_str(&format!("{INDENT}}}\n"));

        self.out.push_str("}\n");
    }

    fn emit_enum(&mut self, ty: &TypeDescriptor) {
        if let Some(description) = non_empty(ty.description.as_deref()) {
            self.emit_doc("", Some(description));
        }
        self.out.push_str(&format!("enum {}: String {{\n", ty.name));
        for EnumValue { name, description } in ty.enum_values() {
            self.emit_doc(INDENT, description.as_deref());
            self.out.push_str(&format!(
                "{INDENT}case {} = \"{}\"\n",
                swift_identifier(name),
                name
            ));
        }
        self.out.push_str("}\n");
    }

    /// One `///` line per description line; absent or empty gives a bare `///`.
    fn emit_doc(&mut self, indent: &str, description: Option<&str>) {
        let text = description.unwrap_or_default();
        if text.is_empty() {
            self.out.push_str(&format!("{indent}///\n"));
            return;
        }
        for line in text.lines() {
            let line = format!("{indent}/// {line}");
            self.out.push_str(line.trim_end());
            self.out.push('\n');
        }
    }
}

/// Render one type into a [`GeneratedClass`].
pub fn emit_type(ty: &TypeDescriptor, date: NaiveDate) -> Result<GeneratedClass, EmitError> {
    let mut cg = Codegen::new(date);
    cg.emit(ty)?;
    Ok(GeneratedClass {
        type_name: ty.name.clone(),
        source_text: cg.into_string(),
    })
}

/// `YYYY/M/D`, no zero padding.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y/%-m/%-d").to_string()
}

fn property_declaration(plan: &PropertyPlan) -> String {
    let ident = swift_identifier(&plan.name);
    let ty = &plan.target_type_name;
    match (plan.category, plan.optional) {
        (Category::Bool, false) => format!("@objc dynamic var {ident}: {ty} = false"),
        (Category::Int, false) => format!("@objc dynamic var {ident}: {ty} = 0"),
        (Category::Float, false) => format!("@objc dynamic var {ident}: {ty} = 0.0"),
        (Category::String, false) => format!("@objc dynamic var {ident}: {ty} = \"\""),
        (Category::Bool | Category::Int | Category::Float, true) => {
            format!("let {ident} = RealmOptional<{ty}>()")
        }
        (Category::String, true) => format!("@objc dynamic var {ident}: {ty}? = nil"),
        (Category::ObjectRef | Category::FallbackOptionalObject, _) => {
            format!("@objc dynamic var {ident}: {ty}?")
        }
        (Category::List, _) => format!("let {ident} = List<{ty}>()"),
    }
}

fn swift_identifier(wire_name: &str) -> String {
    let ident = lower_camel_case(wire_name);
    if ident.is_empty() {
        return format!("`{wire_name}`");
    }
    if SWIFT_KEYWORDS.contains(&ident.as_str()) {
        format!("`{ident}`")
    } else {
        ident
    }
}

fn non_empty(text: Option<&str>) -> Option<&str> {
    text.filter(|t| !t.trim().is_empty())
}
