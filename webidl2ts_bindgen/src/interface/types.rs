/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

//! # Lowering of WebIDL type expressions.
//!
//! weedle has one node per built-in type keyword; we collapse them all into
//! [`Type::Named`] using the type's WebIDL spelling, which is what the type table keys
//! on. Nullable markers are dropped since TypeScript declarations generated from IDL
//! don't model them. Extended attributes on types (`[Clamp] long`) are ignored.

use weedle::types::{
    ConstType, FloatingPointType, IntegerType, NonAnyType, RecordKeyType, ReturnType,
    SingleType, UnionMemberType,
};
use webidl2ts_meta::Type;

use super::AstConverter;

impl AstConverter<Type> for weedle::types::Type<'_> {
    fn convert(&self) -> Type {
        match self {
            weedle::types::Type::Single(t) => t.convert(),
            weedle::types::Type::Union(t) => t.type_.convert(),
        }
    }
}

impl AstConverter<Type> for weedle::types::AttributedType<'_> {
    fn convert(&self) -> Type {
        self.type_.convert()
    }
}

impl AstConverter<Type> for SingleType<'_> {
    fn convert(&self) -> Type {
        match self {
            SingleType::Any(_) => Type::named("any"),
            SingleType::NonAny(t) => t.convert(),
        }
    }
}

impl AstConverter<Type> for weedle::types::UnionType<'_> {
    fn convert(&self) -> Type {
        Type::union(self.body.list.iter().map(|t| t.convert()).collect())
    }
}

impl AstConverter<Type> for UnionMemberType<'_> {
    fn convert(&self) -> Type {
        match self {
            UnionMemberType::Single(t) => t.type_.convert(),
            UnionMemberType::Union(t) => t.type_.convert(),
        }
    }
}

impl AstConverter<Type> for NonAnyType<'_> {
    fn convert(&self) -> Type {
        match self {
            NonAnyType::Promise(t) => Type::generic("Promise", vec![t.generics.body.convert()]),
            NonAnyType::Integer(t) => t.type_.convert(),
            NonAnyType::FloatingPoint(t) => t.type_.convert(),
            NonAnyType::Boolean(_) => Type::named("boolean"),
            NonAnyType::Byte(_) => Type::named("byte"),
            NonAnyType::Octet(_) => Type::named("octet"),
            NonAnyType::ByteString(_) => Type::named("ByteString"),
            NonAnyType::DOMString(_) => Type::named("DOMString"),
            NonAnyType::USVString(_) => Type::named("USVString"),
            NonAnyType::Object(_) => Type::named("object"),
            NonAnyType::ArrayBuffer(_) => Type::named("ArrayBuffer"),
            NonAnyType::DataView(_) => Type::named("DataView"),
            NonAnyType::Int8Array(_) => Type::named("Int8Array"),
            NonAnyType::Int16Array(_) => Type::named("Int16Array"),
            NonAnyType::Int32Array(_) => Type::named("Int32Array"),
            NonAnyType::Uint8Array(_) => Type::named("Uint8Array"),
            NonAnyType::Uint16Array(_) => Type::named("Uint16Array"),
            NonAnyType::Uint32Array(_) => Type::named("Uint32Array"),
            NonAnyType::Uint8ClampedArray(_) => Type::named("Uint8ClampedArray"),
            NonAnyType::Float32Array(_) => Type::named("Float32Array"),
            NonAnyType::Float64Array(_) => Type::named("Float64Array"),
            NonAnyType::ArrayBufferView(_) => Type::named("ArrayBufferView"),
            NonAnyType::Sequence(t) => {
                Type::generic("sequence", vec![t.type_.generics.body.convert()])
            }
            NonAnyType::FrozenArrayType(t) => {
                Type::generic("FrozenArray", vec![t.type_.generics.body.convert()])
            }
            NonAnyType::RecordType(t) => {
                let (key, _, value) = &t.type_.generics.body;
                Type::generic("record", vec![key.convert(), value.convert()])
            }
            NonAnyType::BufferSource(_) => Type::named("BufferSource"),
            NonAnyType::Symbol(_) => Type::named("symbol"),
            NonAnyType::Error(_) => Type::named("Error"),
            NonAnyType::Identifier(t) => Type::named(t.type_.0),
        }
    }
}

impl AstConverter<Type> for RecordKeyType<'_> {
    fn convert(&self) -> Type {
        match self {
            RecordKeyType::Byte(_) => Type::named("ByteString"),
            RecordKeyType::DOM(_) => Type::named("DOMString"),
            RecordKeyType::USV(_) => Type::named("USVString"),
            RecordKeyType::NonAny(t) => t.convert(),
        }
    }
}

impl AstConverter<Type> for IntegerType {
    fn convert(&self) -> Type {
        let (unsigned, name) = match self {
            IntegerType::LongLong(t) => (t.unsigned.is_some(), "long long"),
            IntegerType::Long(t) => (t.unsigned.is_some(), "long"),
            IntegerType::Short(t) => (t.unsigned.is_some(), "short"),
        };
        if unsigned {
            Type::named(format!("unsigned {name}"))
        } else {
            Type::named(name)
        }
    }
}

impl AstConverter<Type> for FloatingPointType {
    fn convert(&self) -> Type {
        let (unrestricted, name) = match self {
            FloatingPointType::Float(t) => (t.unrestricted.is_some(), "float"),
            FloatingPointType::Double(t) => (t.unrestricted.is_some(), "double"),
        };
        if unrestricted {
            Type::named(format!("unrestricted {name}"))
        } else {
            Type::named(name)
        }
    }
}

impl AstConverter<Type> for ConstType<'_> {
    fn convert(&self) -> Type {
        match self {
            ConstType::Integer(t) => t.type_.convert(),
            ConstType::FloatingPoint(t) => t.type_.convert(),
            ConstType::Boolean(_) => Type::named("boolean"),
            ConstType::Byte(_) => Type::named("byte"),
            ConstType::Octet(_) => Type::named("octet"),
            ConstType::Identifier(t) => Type::named(t.type_.0),
        }
    }
}

/// `void` and `undefined` both lower to `void`.
impl AstConverter<Type> for ReturnType<'_> {
    fn convert(&self) -> Type {
        match self {
            ReturnType::Type(t) => t.convert(),
            _ => Type::named("void"),
        }
    }
}

#[cfg(test)]
mod test {
    use super::super::parse_webidl;
    use webidl2ts_meta::{Definition, Typedef};

    use super::*;

    fn parse_type(idl_type: &str) -> Type {
        let defns = parse_webidl(&format!("typedef {idl_type} T;")).unwrap();
        match &defns[0] {
            Definition::Typedef(Typedef { idl_type, .. }) => idl_type.clone(),
            other => panic!("expected a typedef, got {other:?}"),
        }
    }

    #[test]
    fn test_builtin_spellings() {
        for spelling in [
            "any",
            "boolean",
            "byte",
            "octet",
            "short",
            "unsigned short",
            "long",
            "unsigned long",
            "long long",
            "unsigned long long",
            "float",
            "unrestricted float",
            "double",
            "unrestricted double",
            "DOMString",
            "ByteString",
            "USVString",
            "object",
            "ArrayBuffer",
            "Float32Array",
            "Uint8ClampedArray",
            "BufferSource",
            "symbol",
            "Error",
        ] {
            assert_eq!(parse_type(spelling), Type::named(spelling));
        }
    }

    #[test]
    fn test_buffer_source_symbol_and_error_are_named_types() {
        let defns = parse_webidl(
            r#"
            interface Decoder {
                void decode(BufferSource input);
                attribute symbol tag;
                attribute Error? cause;
            };
        "#,
        )
        .unwrap();
        let members = match &defns[0] {
            Definition::Interface(i) => &i.members,
            other => panic!("expected an interface, got {other:?}"),
        };
        let types: Vec<_> = members
            .iter()
            .map(|m| match m {
                webidl2ts_meta::Member::Operation(op) => op.arguments[0].idl_type.clone(),
                webidl2ts_meta::Member::Attribute(a) => a.idl_type.clone(),
                other => panic!("unexpected member {other:?}"),
            })
            .collect();
        assert_eq!(
            types,
            vec![
                Type::named("BufferSource"),
                Type::named("symbol"),
                Type::named("Error"),
            ]
        );
    }

    #[test]
    fn test_nullable_is_dropped() {
        assert_eq!(parse_type("long?"), Type::named("long"));
        assert_eq!(parse_type("Node?"), Type::named("Node"));
        assert_eq!(parse_type("DOMString?"), Type::named("DOMString"));
    }

    #[test]
    fn test_generics() {
        assert_eq!(
            parse_type("sequence<sequence<double>>"),
            Type::generic(
                "sequence",
                vec![Type::generic("sequence", vec![Type::named("double")])]
            )
        );
        assert_eq!(
            parse_type("record<DOMString, Node>"),
            Type::generic("record", vec![Type::named("DOMString"), Type::named("Node")])
        );
        assert_eq!(
            parse_type("FrozenArray<float>"),
            Type::generic("FrozenArray", vec![Type::named("float")])
        );
        assert_eq!(
            parse_type("Promise<void>"),
            Type::generic("Promise", vec![Type::named("void")])
        );
    }

    #[test]
    fn test_union_order_is_kept() {
        assert_eq!(
            parse_type("(Node or DOMString or unsigned long)"),
            Type::union(vec![
                Type::named("Node"),
                Type::named("DOMString"),
                Type::named("unsigned long"),
            ])
        );
        assert_eq!(
            parse_type("(Node or (DOMString or long))?"),
            Type::union(vec![
                Type::named("Node"),
                Type::union(vec![Type::named("DOMString"), Type::named("long")]),
            ])
        );
    }
}
