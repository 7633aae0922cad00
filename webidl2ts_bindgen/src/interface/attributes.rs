/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

//! # Extended attributes.
//!
//! Extended attributes are kept by name with their right-hand side, if any. Only
//! `[Exposed=...]` influences translation today, but keeping them all makes the
//! `ast` output a faithful picture of the input.
//!
//! Attributes taking an argument list (`[Constructor(long x)]`) keep just their name.

use weedle::attribute::{ExtendedAttribute, ExtendedAttributeList, IdentifierOrString};
use webidl2ts_meta::ExtendedAttributeValue;

use super::AstConverter;

impl AstConverter<Vec<webidl2ts_meta::ExtendedAttribute>> for Option<ExtendedAttributeList<'_>> {
    fn convert(&self) -> Vec<webidl2ts_meta::ExtendedAttribute> {
        match self {
            None => Vec::new(),
            Some(attrs) => attrs.body.list.iter().map(|attr| attr.convert()).collect(),
        }
    }
}

impl AstConverter<webidl2ts_meta::ExtendedAttribute> for ExtendedAttribute<'_> {
    fn convert(&self) -> webidl2ts_meta::ExtendedAttribute {
        let (name, rhs) = match self {
            ExtendedAttribute::NoArgs(attr) => ((attr.0).0, None),
            ExtendedAttribute::Ident(attr) => {
                let rhs = match &attr.rhs {
                    IdentifierOrString::Identifier(id) => {
                        ExtendedAttributeValue::Identifier(id.0.to_string())
                    }
                    IdentifierOrString::String(s) => {
                        ExtendedAttributeValue::String(s.0.to_string())
                    }
                };
                (attr.lhs_identifier.0, Some(rhs))
            }
            ExtendedAttribute::IdentList(attr) => {
                let ids = attr.list.body.list.iter().map(|id| id.0.to_string()).collect();
                (
                    attr.identifier.0,
                    Some(ExtendedAttributeValue::IdentifierList(ids)),
                )
            }
            ExtendedAttribute::NamedArgList(attr) => (
                attr.lhs_identifier.0,
                Some(ExtendedAttributeValue::Identifier(
                    attr.rhs_identifier.0.to_string(),
                )),
            ),
            ExtendedAttribute::ArgList(attr) => (attr.identifier.0, None),
            #[allow(unreachable_patterns)]
            _ => {
                return webidl2ts_meta::ExtendedAttribute {
                    name: super::unsupported(self, None).kind,
                    rhs: None,
                }
            }
        };
        webidl2ts_meta::ExtendedAttribute {
            name: name.to_string(),
            rhs,
        }
    }
}
