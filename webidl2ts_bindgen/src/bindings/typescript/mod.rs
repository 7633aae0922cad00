/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

//! # TypeScript declaration output.
//!
//! The translator builds the syntax tree in [`ast`]; [`printer`] turns it into text.
//! When targeting Emscripten, the declarations are additionally wrapped in the module
//! shape that Emscripten's generated JavaScript exposes, which is rendered from an
//! askama template.

use anyhow::{Context, Result};
use askama::Template;

pub mod ast;
pub mod printer;

pub use ast::*;
pub use printer::print_declarations;

/// The declaration file for an Emscripten module: a factory function named after the
/// module, plus a namespace of the same name holding the runtime helpers and every
/// generated declaration.
#[derive(Template)]
#[template(escape = "none", path = "EmscriptenModule.d.ts")]
pub struct EmscriptenModule<'a> {
    module_name: &'a str,
    default_export: bool,
    declarations: &'a [Declaration],
}

impl<'a> EmscriptenModule<'a> {
    pub fn new(
        module_name: &'a str,
        default_export: bool,
        declarations: &'a [Declaration],
    ) -> Self {
        Self {
            module_name,
            default_export,
            declarations,
        }
    }
}

/// Render declarations wrapped in an Emscripten module.
pub fn render_emscripten_module(
    module_name: &str,
    default_export: bool,
    declarations: &[Declaration],
) -> Result<String> {
    let mut out = EmscriptenModule::new(module_name, default_export, declarations)
        .render()
        .with_context(|| format!("Failed to render the `{module_name}` module wrapper"))?;
    if !out.ends_with('\n') {
        out.push('\n');
    }
    Ok(out)
}
