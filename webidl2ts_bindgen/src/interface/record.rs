/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

//! # Dictionary definitions.
//!
//! A dictionary lowers to an [`Interface`] whose members are all [`Member::Field`]s.
//! A field is optional unless it is marked `required`:
//!
//! ```
//! # use webidl2ts_meta::{Definition, Member};
//! let defns = webidl2ts_bindgen::interface::parse_webidl(r##"
//!     dictionary FetchInit {
//!         required DOMString method;
//!         sequence<ByteString> headers;
//!     };
//! "##)?;
//! let init = match &defns[0] {
//!     Definition::Dictionary(d) => d,
//!     _ => unreachable!(),
//! };
//! assert!(matches!(&init.members[0], Member::Field(f) if f.required));
//! assert!(matches!(&init.members[1], Member::Field(f) if !f.required));
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! Default values are dropped; TypeScript declarations have nowhere to put them.

use webidl2ts_meta::{Field, Interface, Member};

use super::AstConverter;

impl AstConverter<Interface> for weedle::DictionaryDefinition<'_> {
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

impl AstConverter<Interface> for weedle::PartialDictionaryDefinition<'_> {
    fn convert(&self) -> Interface {
        Interface {
            name: self.identifier.0.to_string(),
            inheritance: None,
            members: self.members.body.convert(),
            ext_attrs: self.attributes.convert(),
        }
    }
}

impl AstConverter<Member> for weedle::dictionary::DictionaryMember<'_> {
    fn convert(&self) -> Member {
        Member::Field(Field {
            name: self.identifier.0.to_string(),
            idl_type: self.type_.convert(),
            required: self.required.is_some(),
        })
    }
}

#[cfg(test)]
mod test {
    use webidl2ts_meta::{Definition, Type};

    use super::*;
    use crate::interface::parse_webidl;

    #[test]
    fn test_dictionary_with_parent() {
        let defns = parse_webidl(
            r#"
            dictionary MouseEventInit : EventInit {
                long screenX = 0;
                required boolean bubbles;
            };
        "#,
        )
        .unwrap();
        let mut expected = Interface::new("MouseEventInit");
        expected.inheritance = Some("EventInit".to_owned());
        expected.members = vec![
            Member::Field(Field {
                name: "screenX".to_owned(),
                idl_type: Type::named("long"),
                required: false,
            }),
            Member::Field(Field {
                name: "bubbles".to_owned(),
                idl_type: Type::named("boolean"),
                required: true,
            }),
        ];
        assert_eq!(defns, vec![Definition::Dictionary(expected)]);
    }

    #[test]
    fn test_partial_dictionary() {
        let defns = parse_webidl("partial dictionary EventInit { boolean composed; };").unwrap();
        match &defns[0] {
            Definition::Dictionary(d) => {
                assert_eq!(d.name, "EventInit");
                assert_eq!(d.members.len(), 1);
            }
            other => panic!("expected a dictionary, got {other:?}"),
        }
    }
}
