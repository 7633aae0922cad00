/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

//! # Callback function definitions.
//!
//! `callback Name = ReturnType (arguments);` lowers to a [`Callback`]. Callback
//! *interfaces* are a different construct and are left unsupported.

use webidl2ts_meta::Callback;

use super::AstConverter;

impl AstConverter<Callback> for weedle::CallbackDefinition<'_> {
    fn convert(&self) -> Callback {
        Callback {
            name: self.identifier.0.to_string(),
            arguments: self.arguments.body.list.convert(),
            return_type: self.return_type.convert(),
        }
    }
}
