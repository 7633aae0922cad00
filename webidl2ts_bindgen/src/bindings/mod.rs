/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

//! Generate the declaration file text and write it out.

use anyhow::{Context, Result};
use camino::Utf8Path;
use fs_err as fs;

use crate::Options;

pub mod typescript;

use typescript::Declaration;

/// Render declarations as a complete `.d.ts` file for the given options.
pub fn render_bindings(declarations: &[Declaration], options: &Options) -> Result<String> {
    if options.emscripten {
        typescript::render_emscripten_module(
            &options.module_name,
            options.default_export,
            declarations,
        )
    } else {
        Ok(typescript::print_declarations(declarations))
    }
}

/// Render declarations and write them to `out_file`, creating parent directories as needed.
pub fn write_bindings(
    declarations: &[Declaration],
    options: &Options,
    out_file: &Utf8Path,
) -> Result<()> {
    let text = render_bindings(declarations, options)?;
    if let Some(parent) = out_file.parent().filter(|p| !p.as_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(out_file, text).context("Failed to write output file")?;
    Ok(())
}

#[cfg(test)]
mod test {
    use super::typescript::*;
    use super::*;

    #[test]
    fn test_plain_output_has_no_wrapper() {
        let decls = vec![Declaration::TypeAlias(TypeAliasDeclaration {
            name: "Handle".to_owned(),
            type_: TsType::Keyword(Keyword::Number),
        })];
        let options = Options::default();
        assert_eq!(render_bindings(&decls, &options).unwrap(), "type Handle = number;\n");

        let options = Options {
            emscripten: true,
            module_name: "Ammo".to_owned(),
            ..Options::default()
        };
        let out = render_bindings(&decls, &options).unwrap();
        assert!(out.contains("declare module Ammo {"));
        assert!(out.contains("    type Handle = number;\n"));
    }
}
