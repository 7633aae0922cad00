/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

//! # Interface and interface mixin definitions.
//!
//! A declaration in the IDL like this:
//!
//! ```
//! # let defns = webidl2ts_bindgen::interface::parse_webidl(r##"
//! interface Gamepad : EventTarget {
//!     const unsigned short MAX_BUTTONS = 32;
//!     readonly attribute DOMString id;
//!     constructor(DOMString id);
//!     boolean vibrate(double duration);
//!     iterable<GamepadButton>;
//! };
//! # "##)?;
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! lowers to an [`Interface`] whose members keep their declaration order:
//!
//! ```
//! # use webidl2ts_meta::{Definition, Member};
//! # let defns = webidl2ts_bindgen::interface::parse_webidl(r##"
//! # interface Gamepad : EventTarget {
//! #     const unsigned short MAX_BUTTONS = 32;
//! #     readonly attribute DOMString id;
//! #     constructor(DOMString id);
//! #     boolean vibrate(double duration);
//! #     iterable<GamepadButton>;
//! # };
//! # "##)?;
//! let gamepad = match &defns[0] {
//!     Definition::Interface(i) => i,
//!     _ => unreachable!(),
//! };
//! assert_eq!(gamepad.inheritance.as_deref(), Some("EventTarget"));
//! assert!(matches!(gamepad.members[0], Member::Const(_)));
//! assert!(matches!(gamepad.members[1], Member::Attribute(_)));
//! assert!(matches!(gamepad.members[2], Member::Constructor(_)));
//! assert!(matches!(gamepad.members[3], Member::Operation(_)));
//! assert!(matches!(gamepad.members[4], Member::Iterable(_)));
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! Partial interfaces lower exactly like full ones; TypeScript merges the resulting
//! declarations for us.

use weedle::interface::{InterfaceMember, IterableInterfaceMember};
use weedle::mixin::MixinMember;
use webidl2ts_meta::{Attribute, Const, Interface, Iterable, Member};

use super::{function, unsupported, AstConverter};

impl AstConverter<Interface> for weedle::InterfaceDefinition<'_> {
    fn convert(&self) -> Interface {
        Interface {
            name: self.identifier.0.to_string(),
            inheritance: self
                .inheritance
                .as_ref()
                .map(|i| i.identifier.0.to_string()),
            members: self.members.body.convert(),
            ext_attrs: self.attributes.convert(),
        }
    }
}

impl AstConverter<Interface> for weedle::PartialInterfaceDefinition<'_> {
    fn convert(&self) -> Interface {
        Interface {
            name: self.identifier.0.to_string(),
            inheritance: None,
            members: self.members.body.convert(),
            ext_attrs: self.attributes.convert(),
        }
    }
}

impl AstConverter<Interface> for weedle::InterfaceMixinDefinition<'_> {
    fn convert(&self) -> Interface {
        Interface {
            name: self.identifier.0.to_string(),
            inheritance: None,
            members: self.members.body.convert(),
            ext_attrs: self.attributes.convert(),
        }
    }
}

impl AstConverter<Interface> for weedle::PartialInterfaceMixinDefinition<'_> {
    fn convert(&self) -> Interface {
        Interface {
            name: self.identifier.0.to_string(),
            inheritance: None,
            members: self.members.body.convert(),
            ext_attrs: self.attributes.convert(),
        }
    }
}

impl AstConverter<Member> for InterfaceMember<'_> {
    fn convert(&self) -> Member {
        match self {
            InterfaceMember::Const(c) => Member::Const(Const {
                name: c.identifier.0.to_string(),
                idl_type: c.const_type.convert(),
            }),
            InterfaceMember::Attribute(a) => Member::Attribute(Attribute {
                name: a.identifier.0.to_string(),
                idl_type: a.type_.convert(),
                readonly: a.readonly.is_some(),
            }),
            InterfaceMember::Constructor(c) => {
                Member::Constructor(function::constructor(&c.args.body))
            }
            InterfaceMember::Operation(op) => Member::Operation(function::operation(
                op.identifier.as_ref(),
                &op.args.body,
                &op.return_type,
            )),
            InterfaceMember::Iterable(it) => it.convert(),
            _ => Member::Unsupported(unsupported(self, None)),
        }
    }
}

impl AstConverter<Member> for IterableInterfaceMember<'_> {
    fn convert(&self) -> Member {
        match self {
            IterableInterfaceMember::Single(it) => Member::Iterable(Iterable {
                idl_types: vec![it.generics.body.convert()],
            }),
            IterableInterfaceMember::Double(it) => {
                let (key, _, value) = &it.generics.body;
                Member::Iterable(Iterable {
                    idl_types: vec![key.convert(), value.convert()],
                })
            }
            #[allow(unreachable_patterns)]
            _ => Member::Unsupported(unsupported(self, None)),
        }
    }
}

impl AstConverter<Member> for MixinMember<'_> {
    fn convert(&self) -> Member {
        match self {
            MixinMember::Const(c) => Member::Const(Const {
                name: c.identifier.0.to_string(),
                idl_type: c.const_type.convert(),
            }),
            MixinMember::Attribute(a) => Member::Attribute(Attribute {
                name: a.identifier.0.to_string(),
                idl_type: a.type_.convert(),
                readonly: a.readonly.is_some(),
            }),
            MixinMember::Operation(op) => Member::Operation(function::operation(
                op.identifier.as_ref(),
                &op.args.body,
                &op.return_type,
            )),
            _ => Member::Unsupported(unsupported(self, None)),
        }
    }
}

#[cfg(test)]
mod test {
    use webidl2ts_meta::{Definition, Type};

    use super::*;
    use crate::interface::parse_webidl;

    fn members(idl: &str) -> Vec<Member> {
        match parse_webidl(idl).unwrap().remove(0) {
            Definition::Interface(i) | Definition::InterfaceMixin(i) => i.members,
            other => panic!("expected an interface, got {other:?}"),
        }
    }

    #[test]
    fn test_attributes() {
        let members = members(
            r#"
            interface Element {
                readonly attribute DOMString tagName;
                attribute DOMString? id;
            };
        "#,
        );
        assert_eq!(
            members,
            vec![
                Member::Attribute(Attribute {
                    name: "tagName".to_owned(),
                    idl_type: Type::named("DOMString"),
                    readonly: true,
                }),
                Member::Attribute(Attribute {
                    name: "id".to_owned(),
                    idl_type: Type::named("DOMString"),
                    readonly: false,
                }),
            ]
        );
    }

    #[test]
    fn test_special_operation_without_name() {
        let members = members(
            r#"
            interface Storage {
                getter DOMString? getItem(DOMString key);
                getter DOMString (unsigned long index);
            };
        "#,
        );
        match (&members[0], &members[1]) {
            (Member::Operation(named), Member::Operation(unnamed)) => {
                assert_eq!(named.name.as_deref(), Some("getItem"));
                assert_eq!(unnamed.name, None);
                assert_eq!(unnamed.arguments[0].idl_type, Type::named("unsigned long"));
            }
            other => panic!("expected two operations, got {other:?}"),
        }
    }

    #[test]
    fn test_iterables() {
        let members = members(
            r#"
            interface Headers {
                iterable<ByteString, ByteString>;
            };
        "#,
        );
        assert_eq!(
            members,
            vec![Member::Iterable(Iterable {
                idl_types: vec![Type::named("ByteString"), Type::named("ByteString")],
            })]
        );
    }

    #[test]
    fn test_maplike_is_unsupported() {
        let members = members(
            r#"
            interface Registry {
                readonly maplike<DOMString, long>;
                stringifier;
            };
        "#,
        );
        let kinds: Vec<_> = members
            .iter()
            .map(|m| match m {
                Member::Unsupported(u) => u.kind.as_str(),
                other => panic!("expected unsupported members, got {other:?}"),
            })
            .collect();
        assert_eq!(kinds, vec!["maplike", "stringifier"]);
    }

    #[test]
    fn test_mixin_members() {
        let members = members(
            r#"
            interface mixin Body {
                const short KIND = 1;
                readonly attribute boolean bodyUsed;
                Promise<DOMString> text();
            };
        "#,
        );
        assert_eq!(
            members,
            vec![
                Member::Const(Const {
                    name: "KIND".to_owned(),
                    idl_type: Type::named("short"),
                }),
                Member::Attribute(Attribute {
                    name: "bodyUsed".to_owned(),
                    idl_type: Type::named("boolean"),
                    readonly: true,
                }),
                Member::Operation(webidl2ts_meta::Operation {
                    name: Some("text".to_owned()),
                    arguments: vec![],
                    return_type: Type::generic("Promise", vec![Type::named("DOMString")]),
                }),
            ]
        );
    }
}
