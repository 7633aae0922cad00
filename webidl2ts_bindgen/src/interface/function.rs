/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

//! # Operations, constructors and their arguments.
//!
//! Interfaces and mixins each have their own weedle node for operations, with the
//! same shape, so the lowering is shared here as plain functions over the pieces.

use weedle::argument::ArgumentList;
use weedle::common::Identifier;
use weedle::types::ReturnType;
use webidl2ts_meta::{Argument, Constructor, Operation};

use super::AstConverter;

pub(super) fn operation(
    identifier: Option<&Identifier<'_>>,
    args: &ArgumentList<'_>,
    return_type: &ReturnType<'_>,
) -> Operation {
    Operation {
        name: identifier.map(|id| id.0.to_string()),
        arguments: args.list.convert(),
        return_type: return_type.convert(),
    }
}

pub(super) fn constructor(args: &ArgumentList<'_>) -> Constructor {
    Constructor {
        arguments: args.list.convert(),
    }
}

// Variadic arguments come through as a single plain argument of the element type.
impl AstConverter<Argument> for weedle::argument::Argument<'_> {
    fn convert(&self) -> Argument {
        match self {
            weedle::argument::Argument::Single(t) => Argument {
                name: t.identifier.0.to_string(),
                idl_type: t.type_.convert(),
                optional: t.optional.is_some(),
            },
            weedle::argument::Argument::Variadic(t) => Argument {
                name: t.identifier.0.to_string(),
                idl_type: t.type_.convert(),
                optional: false,
            },
        }
    }
}
