/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

//! # TypeScript declaration syntax tree.
//!
//! Only the handful of constructs a `.d.ts` file generated from IDL can contain are
//! modelled here. Printing lives in the sibling `printer` module as `Display` impls.

/// A top-level statement in the generated declaration file.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Declaration {
    Interface(InterfaceDeclaration),
    TypeAlias(TypeAliasDeclaration),
    Variable(VariableDeclaration),
}

impl Declaration {
    pub fn name(&self) -> &str {
        match self {
            Declaration::Interface(d) => &d.name,
            Declaration::TypeAlias(d) => &d.name,
            Declaration::Variable(d) => &d.name,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct InterfaceDeclaration {
    pub name: String,
    /// The `extends` clause, in order.
    pub heritage: Vec<TypeReference>,
    pub members: Vec<Signature>,
}

impl InterfaceDeclaration {
    pub fn new(name: impl Into<String>) -> Self {
        InterfaceDeclaration {
            name: name.into(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeAliasDeclaration {
    pub name: String,
    pub type_: TsType,
}

/// `declare var Name: Type;`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VariableDeclaration {
    pub name: String,
    pub type_: TsType,
    pub declare: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Signature {
    Property(PropertySignature),
    Method(MethodSignature),
    Construct(ConstructSignature),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PropertySignature {
    pub name: String,
    pub readonly: bool,
    pub optional: bool,
    pub type_: TsType,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MethodSignature {
    pub name: String,
    pub parameters: Vec<Parameter>,
    pub return_type: TsType,
}

/// `new (parameters);`
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ConstructSignature {
    pub parameters: Vec<Parameter>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Parameter {
    pub name: String,
    pub optional: bool,
    pub type_: TsType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    Number,
    String,
    Void,
    Unknown,
}

impl Keyword {
    /// The keyword spelled by a resolved type name, if it is one.
    pub fn from_name(name: &str) -> Option<Keyword> {
        match name {
            "number" => Some(Keyword::Number),
            "string" => Some(Keyword::String),
            "void" => Some(Keyword::Void),
            "unknown" => Some(Keyword::Unknown),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Keyword::Number => "number",
            Keyword::String => "string",
            Keyword::Void => "void",
            Keyword::Unknown => "unknown",
        }
    }
}

/// A named type with optional type arguments, e.g. `Array<number>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeReference {
    pub name: String,
    pub arguments: Vec<TsType>,
}

impl TypeReference {
    pub fn new(name: impl Into<String>) -> Self {
        TypeReference {
            name: name.into(),
            arguments: Vec::new(),
        }
    }

    pub fn with_arguments(name: impl Into<String>, arguments: Vec<TsType>) -> Self {
        TypeReference {
            name: name.into(),
            arguments,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TsType {
    Keyword(Keyword),
    Reference(TypeReference),
    Union(Vec<TsType>),
    StringLiteral(String),
    Function(FunctionType),
}

impl TsType {
    pub fn reference(name: impl Into<String>) -> TsType {
        TsType::Reference(TypeReference::new(name))
    }
}

/// `(parameters) => return_type`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FunctionType {
    pub parameters: Vec<Parameter>,
    pub return_type: Box<TsType>,
}
