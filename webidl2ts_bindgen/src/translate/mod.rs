/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

//! # Translate an IDL syntax tree into TypeScript declarations.
//!
//! Each root definition produces one declaration, in input order. The only
//! exception is an interface exposed on `Window`, which is followed by an ambient
//! `declare var` so the global object can be used as a value:
//!
//! ```
//! # use webidl2ts_bindgen::{Options, translate::translate, interface::parse_webidl};
//! # use webidl2ts_bindgen::bindings::typescript::print_declarations;
//! let definitions = parse_webidl(r#"
//!     [Exposed=Window]
//!     interface Screen {
//!         readonly attribute long width;
//!     };
//! "#)?;
//! let translation = translate(&definitions, &Options::default());
//! assert_eq!(
//!     print_declarations(&translation.declarations),
//!     "interface Screen {\n    readonly width: number;\n}\ndeclare var Screen: Screen;\n",
//! );
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! Constructs that have no TypeScript rendering are skipped and reported as
//! [`Diagnostic`]s instead of failing the whole translation.

use std::fmt;

use serde::Serialize;
use webidl2ts_meta::{
    Argument, Attribute, Callback, Definition, Enum, Includes, Interface, Member, Operation,
    Type, Typedef,
};

use crate::bindings::typescript::*;
use crate::Options;

pub mod type_map;

pub use type_map::resolve_base_type;

/// The outcome of translating a list of definitions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Translation {
    pub declarations: Vec<Declaration>,
    pub diagnostics: Vec<Diagnostic>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticKind {
    UnsupportedDefinition,
    UnsupportedMember,
    UnsupportedType,
}

/// A construct that was skipped during translation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub message: String,
    /// The offending node, as pretty-printed JSON.
    pub node: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\n{}\nPlease file an issue and provide the used idl file.",
            self.message, self.node
        )
    }
}

/// Translate definitions into declarations.
///
/// Only `options.emscripten` affects the result: it switches attributes to
/// `get_`/`set_` accessor methods.
pub fn translate(definitions: &[Definition], options: &Options) -> Translation {
    let mut translator = Translator::new(options);
    for definition in definitions {
        translator.definition(definition);
    }
    Translation {
        declarations: translator.declarations,
        diagnostics: translator.diagnostics,
    }
}

struct Translator<'a> {
    options: &'a Options,
    declarations: Vec<Declaration>,
    diagnostics: Vec<Diagnostic>,
}

impl<'a> Translator<'a> {
    fn new(options: &'a Options) -> Self {
        Self {
            options,
            declarations: Vec::new(),
            diagnostics: Vec::new(),
        }
    }

    fn warn(&mut self, kind: DiagnosticKind, message: impl Into<String>, node: &impl Serialize) {
        let node = serde_json::to_string_pretty(node)
            .unwrap_or_else(|e| format!("<node could not be serialized: {e}>"));
        self.diagnostics.push(Diagnostic {
            kind,
            message: message.into(),
            node,
        });
    }

    fn definition(&mut self, definition: &Definition) {
        match definition {
            Definition::Interface(iface)
            | Definition::InterfaceMixin(iface)
            | Definition::Dictionary(iface) => self.interface(iface),
            Definition::Includes(includes) => self.includes(includes),
            Definition::Enum(e) => self.enum_(e),
            Definition::Callback(callback) => self.callback(callback),
            Definition::Typedef(typedef) => self.typedef(typedef),
            Definition::Unsupported(_) => self.warn(
                DiagnosticKind::UnsupportedDefinition,
                "Unsupported IDL type",
                definition,
            ),
        }
    }

    fn interface(&mut self, iface: &Interface) {
        let mut decl = InterfaceDeclaration::new(&iface.name);
        if let Some(parent) = &iface.inheritance {
            decl.heritage.push(TypeReference::new(parent));
        }
        for member in &iface.members {
            self.member(&iface.name, member, &mut decl);
        }
        self.declarations.push(Declaration::Interface(decl));

        let on_window = iface
            .ext_attrs_named("Exposed")
            .any(|attr| attr.rhs.as_ref().and_then(|rhs| rhs.as_single()) == Some("Window"));
        if on_window {
            self.declarations.push(Declaration::Variable(VariableDeclaration {
                name: iface.name.clone(),
                type_: TsType::reference(&iface.name),
                declare: true,
            }));
        }
    }

    fn member(&mut self, owner: &str, member: &Member, decl: &mut InterfaceDeclaration) {
        match member {
            Member::Attribute(attr) => self.attribute(attr, &mut decl.members),
            Member::Operation(op) => {
                if let Some(signature) = self.operation(owner, op, member) {
                    decl.members.push(signature);
                }
            }
            Member::Constructor(ctor) => {
                let parameters = self.parameters(&ctor.arguments);
                decl.members
                    .push(Signature::Construct(ConstructSignature { parameters }));
            }
            Member::Field(field) => {
                let type_ = self.convert_type(&field.idl_type);
                decl.members.push(Signature::Property(PropertySignature {
                    name: field.name.clone(),
                    readonly: false,
                    optional: !field.required,
                    type_,
                }));
            }
            Member::Const(c) => {
                let type_ = self.convert_type(&c.idl_type);
                decl.members.push(Signature::Property(PropertySignature {
                    name: c.name.clone(),
                    readonly: true,
                    optional: false,
                    type_,
                }));
            }
            Member::Iterable(iterable) => {
                let arguments = iterable
                    .idl_types
                    .iter()
                    .map(|t| self.convert_type(t))
                    .collect();
                decl.heritage
                    .push(TypeReference::with_arguments("Iterable", arguments));
            }
            Member::Unsupported(_) => {
                self.warn(DiagnosticKind::UnsupportedMember, "Unsupported IDL member", member)
            }
        }
    }

    fn attribute(&mut self, attr: &Attribute, members: &mut Vec<Signature>) {
        let type_ = self.convert_type(&attr.idl_type);
        if self.options.emscripten {
            // Readonly attributes get a setter too; Emscripten's glue generates one
            // for every attribute.
            members.push(Signature::Method(MethodSignature {
                name: format!("get_{}", attr.name),
                parameters: vec![],
                return_type: type_.clone(),
            }));
            members.push(Signature::Method(MethodSignature {
                name: format!("set_{}", attr.name),
                parameters: vec![Parameter {
                    name: "value".to_owned(),
                    optional: false,
                    type_,
                }],
                return_type: TsType::Keyword(Keyword::Void),
            }));
        } else {
            members.push(Signature::Property(PropertySignature {
                name: attr.name.clone(),
                readonly: attr.readonly,
                optional: false,
                type_,
            }));
        }
    }

    fn operation(&mut self, owner: &str, op: &Operation, member: &Member) -> Option<Signature> {
        let name = match &op.name {
            Some(name) => name,
            None => {
                self.warn(
                    DiagnosticKind::UnsupportedMember,
                    "Unsupported IDL member: operation without a name",
                    member,
                );
                return None;
            }
        };
        let parameters = self.parameters(&op.arguments);
        // Emscripten's IDL binder spells constructors as an operation named after
        // the interface.
        if name == owner {
            return Some(Signature::Construct(ConstructSignature { parameters }));
        }
        let return_type = self.convert_type(&op.return_type);
        Some(Signature::Method(MethodSignature {
            name: name.clone(),
            parameters,
            return_type,
        }))
    }

    fn parameters(&mut self, arguments: &[Argument]) -> Vec<Parameter> {
        arguments
            .iter()
            .map(|arg| Parameter {
                name: arg.name.clone(),
                optional: arg.optional,
                type_: self.convert_type(&arg.idl_type),
            })
            .collect()
    }

    fn includes(&mut self, includes: &Includes) {
        self.declarations
            .push(Declaration::Interface(InterfaceDeclaration {
                name: includes.target.clone(),
                heritage: vec![TypeReference::new(&includes.includes)],
                members: vec![],
            }));
    }

    fn enum_(&mut self, e: &Enum) {
        let type_ = TsType::Union(
            e.values
                .iter()
                .map(|v| TsType::StringLiteral(v.clone()))
                .collect(),
        );
        self.declarations
            .push(Declaration::TypeAlias(TypeAliasDeclaration {
                name: e.name.clone(),
                type_,
            }));
    }

    fn callback(&mut self, callback: &Callback) {
        let parameters = self.parameters(&callback.arguments);
        let return_type = Box::new(self.convert_type(&callback.return_type));
        self.declarations
            .push(Declaration::TypeAlias(TypeAliasDeclaration {
                name: callback.name.clone(),
                type_: TsType::Function(FunctionType {
                    parameters,
                    return_type,
                }),
            }));
    }

    fn typedef(&mut self, typedef: &Typedef) {
        let type_ = self.convert_type(&typedef.idl_type);
        self.declarations
            .push(Declaration::TypeAlias(TypeAliasDeclaration {
                name: typedef.name.clone(),
                type_,
            }));
    }

    fn convert_type(&mut self, idl_type: &Type) -> TsType {
        match idl_type {
            Type::Named { name } => {
                let resolved = resolve_base_type(name);
                match Keyword::from_name(resolved) {
                    Some(keyword) => TsType::Keyword(keyword),
                    None => TsType::reference(resolved),
                }
            }
            Type::Generic { name, arguments } => {
                let arguments = arguments.iter().map(|t| self.convert_type(t)).collect();
                TsType::Reference(TypeReference::with_arguments(
                    resolve_base_type(name),
                    arguments,
                ))
            }
            Type::Union { members } => {
                TsType::Union(members.iter().map(|t| self.convert_type(t)).collect())
            }
            Type::Unrecognized { .. } => {
                self.warn(DiagnosticKind::UnsupportedType, "Unsupported IDL type", idl_type);
                TsType::Keyword(Keyword::Unknown)
            }
        }
    }
}
