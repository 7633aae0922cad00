/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

//! # IDL syntax tree for webidl2ts.
//!
//! These types are the hand-off point between the WebIDL front-end (which parses IDL
//! text and lowers it into this tree) and the translator (which turns the tree into
//! TypeScript declarations). They are plain owned data with serde support, so a tree
//! can also be written out as JSON, inspected, edited and fed back in.
//!
//! Every node is tagged with a `kind` field when serialized:
//!
//! ```
//! use webidl2ts_meta::{Definition, Enum};
//!
//! let defn = Definition::Enum(Enum {
//!     name: "Mode".to_owned(),
//!     values: vec!["fast".to_owned(), "slow".to_owned()],
//! });
//! let json = serde_json::to_string(&defn).unwrap();
//! assert_eq!(json, r#"{"kind":"enum","name":"Mode","values":["fast","slow"]}"#);
//! ```

use serde::{Deserialize, Serialize};

/// A top-level IDL construct.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Definition {
    Interface(Interface),
    InterfaceMixin(Interface),
    Dictionary(Interface),
    Includes(Includes),
    Enum(Enum),
    Callback(Callback),
    Typedef(Typedef),
    /// Something the parser understood but that has no TypeScript counterpart here,
    /// such as a `namespace` or a `callback interface`.
    Unsupported(Unsupported),
}

impl Definition {
    /// The name this definition declares, if it has one.
    pub fn name(&self) -> Option<&str> {
        match self {
            Definition::Interface(i) | Definition::InterfaceMixin(i) | Definition::Dictionary(i) => {
                Some(&i.name)
            }
            Definition::Includes(i) => Some(&i.target),
            Definition::Enum(e) => Some(&e.name),
            Definition::Callback(c) => Some(&c.name),
            Definition::Typedef(t) => Some(&t.name),
            Definition::Unsupported(u) => u.name.as_deref(),
        }
    }
}

/// The shared shape of `interface`, `interface mixin` and `dictionary` definitions.
///
/// Mixins never carry an `inheritance`; dictionaries only ever contain
/// [`Member::Field`] members.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct Interface {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inheritance: Option<String>,
    #[serde(default)]
    pub members: Vec<Member>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ext_attrs: Vec<ExtendedAttribute>,
}

impl Interface {
    pub fn new(name: impl Into<String>) -> Self {
        Interface {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Every extended attribute with the given name, in declaration order.
    pub fn ext_attrs_named<'a>(
        &'a self,
        name: &'a str,
    ) -> impl Iterator<Item = &'a ExtendedAttribute> + 'a {
        self.ext_attrs.iter().filter(move |attr| attr.name == name)
    }
}

/// `Target includes Mixin;`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct Includes {
    pub target: String,
    pub includes: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct Enum {
    pub name: String,
    pub values: Vec<String>,
}

/// `callback Name = ReturnType (arguments);`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct Callback {
    pub name: String,
    #[serde(default)]
    pub arguments: Vec<Argument>,
    pub return_type: Type,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct Typedef {
    pub name: String,
    pub idl_type: Type,
}

/// A construct that was parsed but is not translated.
///
/// `kind` names the construct the way IDL spells it (`"namespace"`, `"maplike"`, ...),
/// and `source` holds a rendering of the parser node for the benefit of whoever has to
/// read the resulting diagnostic.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct Unsupported {
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub source: String,
}

/// A member of an interface, mixin or dictionary.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Member {
    Attribute(Attribute),
    Operation(Operation),
    Constructor(Constructor),
    Field(Field),
    Const(Const),
    Iterable(Iterable),
    Unsupported(Unsupported),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct Attribute {
    pub name: String,
    pub idl_type: Type,
    #[serde(default)]
    pub readonly: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct Operation {
    /// Special operations (`getter`, `setter`, ...) may leave out the identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub arguments: Vec<Argument>,
    pub return_type: Type,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct Constructor {
    #[serde(default)]
    pub arguments: Vec<Argument>,
}

/// A dictionary member.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct Field {
    pub name: String,
    pub idl_type: Type,
    #[serde(default)]
    pub required: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct Const {
    pub name: String,
    pub idl_type: Type,
}

/// `iterable<V>;` or `iterable<K, V>;`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct Iterable {
    pub idl_types: Vec<Type>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct Argument {
    pub name: String,
    pub idl_type: Type,
    #[serde(default)]
    pub optional: bool,
}

impl Argument {
    pub fn new(name: impl Into<String>, idl_type: Type) -> Self {
        Argument {
            name: name.into(),
            idl_type,
            optional: false,
        }
    }

    pub fn optional(name: impl Into<String>, idl_type: Type) -> Self {
        Argument {
            optional: true,
            ..Argument::new(name, idl_type)
        }
    }
}

/// An extended attribute such as `[Exposed=Window]` or `[scriptable]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct ExtendedAttribute {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rhs: Option<ExtendedAttributeValue>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "kebab-case")]
pub enum ExtendedAttributeValue {
    Identifier(String),
    String(String),
    IdentifierList(Vec<String>),
}

impl ExtendedAttributeValue {
    /// The single name on the right-hand side, whether written as an identifier or
    /// as a string literal. Lists have no single name.
    pub fn as_single(&self) -> Option<&str> {
        match self {
            ExtendedAttributeValue::Identifier(s) | ExtendedAttributeValue::String(s) => Some(s),
            ExtendedAttributeValue::IdentifierList(_) => None,
        }
    }
}

/// A type expression.
///
/// Names are kept exactly as IDL spells them, so `unsigned long long` is a single
/// `Named` type and `sequence<DOMString>` is a `Generic` called `sequence`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Type {
    Named {
        name: String,
    },
    Generic {
        name: String,
        arguments: Vec<Type>,
    },
    Union {
        members: Vec<Type>,
    },
    /// A parser type node the front-end could not classify.
    Unrecognized {
        source: String,
    },
}

impl Type {
    pub fn named(name: impl Into<String>) -> Type {
        Type::Named { name: name.into() }
    }

    pub fn generic(name: impl Into<String>, arguments: Vec<Type>) -> Type {
        Type::Generic {
            name: name.into(),
            arguments,
        }
    }

    pub fn union(members: Vec<Type>) -> Type {
        Type::Union { members }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_definition_names() {
        let iface = Definition::Interface(Interface::new("Window"));
        assert_eq!(iface.name(), Some("Window"));

        let includes = Definition::Includes(Includes {
            target: "Window".to_owned(),
            includes: "GlobalEventHandlers".to_owned(),
        });
        assert_eq!(includes.name(), Some("Window"));

        let unsupported = Definition::Unsupported(Unsupported {
            kind: "namespace".to_owned(),
            name: None,
            source: String::new(),
        });
        assert_eq!(unsupported.name(), None);
    }

    #[test]
    fn test_interface_json_shape() {
        let mut iface = Interface::new("Counter");
        iface.inheritance = Some("EventTarget".to_owned());
        iface.members.push(Member::Attribute(Attribute {
            name: "value".to_owned(),
            idl_type: Type::named("long"),
            readonly: true,
        }));
        let json = serde_json::to_value(&Definition::Interface(iface.clone())).unwrap();
        assert_eq!(json["kind"], "interface");
        assert_eq!(json["inheritance"], "EventTarget");
        assert_eq!(json["members"][0]["kind"], "attribute");
        assert_eq!(json["members"][0]["idl_type"]["name"], "long");
        assert!(json.get("ext_attrs").is_none());

        let back: Definition = serde_json::from_value(json).unwrap();
        assert_eq!(back, Definition::Interface(iface));
    }

    #[test]
    fn test_unknown_tag_is_rejected() {
        let json = r#"[{"kind": "namespace", "name": "console", "members": []}]"#;
        let err = serde_json::from_str::<Vec<Definition>>(json).unwrap_err();
        assert!(err.to_string().contains("namespace"));
    }

    #[test]
    fn test_defaults_when_deserializing() {
        let json = r#"{"kind": "dictionary", "name": "Options", "members": [
            {"kind": "field", "name": "depth", "idl_type": {"kind": "named", "name": "long"}}
        ]}"#;
        let defn: Definition = serde_json::from_str(json).unwrap();
        match defn {
            Definition::Dictionary(d) => {
                assert_eq!(d.inheritance, None);
                assert!(d.ext_attrs.is_empty());
                assert!(matches!(&d.members[0], Member::Field(f) if !f.required));
            }
            _ => panic!("expected a dictionary"),
        }
    }

    #[test]
    fn test_ext_attr_values() {
        let exposed = ExtendedAttributeValue::Identifier("Window".to_owned());
        assert_eq!(exposed.as_single(), Some("Window"));
        let quoted = ExtendedAttributeValue::String("Window".to_owned());
        assert_eq!(quoted.as_single(), Some("Window"));
        let list = ExtendedAttributeValue::IdentifierList(vec!["Window".to_owned()]);
        assert_eq!(list.as_single(), None);
    }
}
