/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

//! # Enum definitions.
//!
//! WebIDL enums are sets of strings, and we keep the values exactly as written,
//! duplicates included.

use webidl2ts_meta::Enum;

use super::AstConverter;

impl AstConverter<Enum> for weedle::EnumDefinition<'_> {
    fn convert(&self) -> Enum {
        Enum {
            name: self.identifier.0.to_string(),
            values: self
                .values
                .body
                .list
                .iter()
                .map(|v| v.0.to_string())
                .collect(),
        }
    }
}

#[cfg(test)]
mod test {
    use webidl2ts_meta::Definition;

    use super::*;
    use crate::interface::parse_webidl;

    #[test]
    fn test_values_in_order() {
        let defns = parse_webidl(r#"enum ScrollBehavior { "auto", "instant", "smooth" };"#).unwrap();
        assert_eq!(
            defns[0],
            Definition::Enum(Enum {
                name: "ScrollBehavior".to_owned(),
                values: vec!["auto".to_owned(), "instant".to_owned(), "smooth".to_owned()],
            })
        );
    }

    #[test]
    fn test_empty_string_value() {
        let defns = parse_webidl(r#"enum Referrer { "", "origin" };"#).unwrap();
        match &defns[0] {
            Definition::Enum(e) => assert_eq!(e.values, vec!["", "origin"]),
            other => panic!("expected an enum, got {other:?}"),
        }
    }
}
