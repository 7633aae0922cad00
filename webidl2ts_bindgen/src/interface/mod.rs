/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

//! # Parse WebIDL into the IDL syntax tree.
//!
//! The heavy lifting of parsing is done by [`weedle`]. Its parse tree borrows from the
//! input and mirrors the grammar very closely, which makes it awkward to work with, so
//! we immediately lower it into the owned [`webidl2ts_meta`] types:
//!
//! ```
//! # use webidl2ts_bindgen::interface::parse_webidl;
//! use webidl2ts_meta::{Definition, Member, Type};
//!
//! let definitions = parse_webidl(r#"
//!     interface Pet {
//!         attribute DOMString name;
//!         Promise<boolean> feed(optional unsigned long amount);
//!     };
//! "#)?;
//! let pet = match &definitions[0] {
//!     Definition::Interface(pet) => pet,
//!     _ => unreachable!(),
//! };
//! match &pet.members[1] {
//!     Member::Operation(op) => {
//!         assert_eq!(op.name.as_deref(), Some("feed"));
//!         assert_eq!(op.return_type, Type::generic("Promise", vec![Type::named("boolean")]));
//!         assert_eq!(op.arguments[0].idl_type, Type::named("unsigned long"));
//!         assert!(op.arguments[0].optional);
//!     }
//!     _ => unreachable!(),
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! Each kind of weedle node knows how to lower itself through the [`AstConverter`]
//! trait. Anything we don't know how to translate is kept as an `Unsupported` node
//! rather than rejected, so that the translator can report it and carry on.

use std::fmt;

use anyhow::{anyhow, bail, Result};
use heck::ToTitleCase;
use weedle::Parse;
use webidl2ts_meta::{Definition, Includes, Typedef, Unsupported};

mod attributes;
mod callbacks;
mod enum_;
mod function;
mod object;
mod record;
mod types;

/// Parse a WebIDL document.
///
/// Fails only when the text is not syntactically valid WebIDL.
pub fn parse_webidl(idl: &str) -> Result<Vec<Definition>> {
    // `weedle::parse` asserts that the whole input was consumed, so go through
    // the `Parse` impl and report any leftover text ourselves. The errors borrow
    // from the input, so render them to text here.
    let (remaining, defns) =
        weedle::Definitions::parse(idl.trim()).map_err(|e| anyhow!("parse error: {:?}", e))?;
    if !remaining.is_empty() {
        bail!("parse error: unexpected input at `{}`", unparsed_excerpt(remaining));
    }
    Ok(defns.convert())
}

// The first line of whatever the parser stopped at, cut short if it runs on.
fn unparsed_excerpt(remaining: &str) -> String {
    const MAX_CHARS: usize = 60;
    let line = remaining.trim_start().lines().next().unwrap_or_default().trim_end();
    if line.chars().count() > MAX_CHARS {
        format!("{}...", line.chars().take(MAX_CHARS).collect::<String>())
    } else {
        line.to_owned()
    }
}

/// Lower a weedle parse node into our own syntax tree.
pub(crate) trait AstConverter<T> {
    fn convert(&self) -> T;
}

impl<U, T: AstConverter<U>> AstConverter<Vec<U>> for Vec<T> {
    fn convert(&self) -> Vec<U> {
        self.iter().map(|item| item.convert()).collect()
    }
}

impl AstConverter<Definition> for weedle::Definition<'_> {
    fn convert(&self) -> Definition {
        match self {
            weedle::Definition::Interface(d) => Definition::Interface(d.convert()),
            weedle::Definition::PartialInterface(d) => Definition::Interface(d.convert()),
            weedle::Definition::InterfaceMixin(d) => Definition::InterfaceMixin(d.convert()),
            weedle::Definition::PartialInterfaceMixin(d) => {
                Definition::InterfaceMixin(d.convert())
            }
            weedle::Definition::Dictionary(d) => Definition::Dictionary(d.convert()),
            weedle::Definition::PartialDictionary(d) => Definition::Dictionary(d.convert()),
            weedle::Definition::IncludesStatement(d) => Definition::Includes(Includes {
                target: d.lhs_identifier.0.to_string(),
                includes: d.rhs_identifier.0.to_string(),
            }),
            weedle::Definition::Enum(d) => Definition::Enum(d.convert()),
            weedle::Definition::Callback(d) => Definition::Callback(d.convert()),
            weedle::Definition::Typedef(d) => Definition::Typedef(Typedef {
                name: d.identifier.0.to_string(),
                idl_type: d.type_.convert(),
            }),
            weedle::Definition::Namespace(d) => {
                Definition::Unsupported(unsupported(self, Some(d.identifier.0)))
            }
            weedle::Definition::CallbackInterface(d) => {
                Definition::Unsupported(unsupported(self, Some(d.identifier.0)))
            }
            _ => Definition::Unsupported(unsupported(self, None)),
        }
    }
}

/// Describe a parse node we can't translate.
///
/// Every weedle node is an enum variant wrapping a struct, so the debug rendering
/// starts with the variant name, which is also the construct's name in the grammar.
pub(crate) fn unsupported<T: fmt::Debug>(node: &T, name: Option<&str>) -> Unsupported {
    let source = format!("{:?}", node);
    let kind = source
        .split(|c: char| !c.is_alphanumeric())
        .next()
        .unwrap_or_default()
        .to_title_case()
        .to_lowercase();
    Unsupported {
        kind,
        name: name.map(str::to_owned),
        source,
    }
}
