/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

//! # Text fix-ups for non-standard IDL dialects.
//!
//! Neither Emscripten's WebIDL binder nor Gecko's XPIDL accept exactly standard WebIDL,
//! and the parser rejects their extensions outright. Rather than teach the parser
//! about them, we rewrite the source text into something close enough before parsing.
//! These are regex rewrites, not a real parse, so they only handle the forms that
//! show up in practice.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::Options;

/// Declarations that XPIDL files take for granted.
const GECKO_PRELUDE: &str = include_str!("nsISupports.idl");

fn regex(pattern: &str) -> Regex {
    Regex::new(pattern).expect("fix-up patterns are valid regexes")
}

/// Apply every fix-up enabled by `options`, in order.
pub fn preprocess(idl: &str, options: &Options) -> String {
    let mut idl = idl.to_owned();
    if options.emscripten {
        idl = inheritance(&idl);
        idl = array(&idl);
    }
    if options.gecko {
        idl = preprocessor_statements(&idl);
        idl = bodyless_interface(&idl);
        idl = uuid_extended_attributes(&idl);
        idl = in_function_arg(&idl);
        idl = strip_square_brackets(&idl);
        idl = sequence_types(&idl);
        // XPIDL string types; see
        // https://firefox-source-docs.mozilla.org/xpcom/xpidl.html#types
        idl.push('\n');
        idl.push_str("typedef string AString;\n");
        idl.push_str("typedef string ACString;\n");
        idl.push_str("typedef string AUTF8String;\n");
        idl.push_str(GECKO_PRELUDE);
    }
    idl
}

/// Emscripten spells inheritance as a separate `Child implements Parent;` statement.
///
/// The statement is commented out and the parent moved onto the first matching
/// `interface Child {` line.
pub fn inheritance(idl: &str) -> String {
    static IMPLEMENTS: Lazy<Regex> =
        Lazy::new(|| regex(r"(?i)([a-zA-Z0-9]+) implements ([a-zA-Z0-9]+);"));

    let mut pairs = Vec::new();
    let mut idl = IMPLEMENTS
        .replace_all(idl, |caps: &Captures<'_>| {
            pairs.push((caps[1].to_owned(), caps[2].to_owned()));
            format!("// {}", &caps[0])
        })
        .into_owned();
    for (child, parent) in pairs {
        idl = idl.replacen(
            &format!("interface {child} {{"),
            &format!("interface {child}: {parent} {{"),
            1,
        );
    }
    idl
}

/// Emscripten accepts C-style array types such as `float[]`.
pub fn array(idl: &str) -> String {
    static ATTRIBUTE: Lazy<Regex> = Lazy::new(|| regex(r"(?i)attribute (\w+)\[\]"));
    static FLOAT: Lazy<Regex> = Lazy::new(|| regex(r"(?i)float\[\]"));
    static LONG: Lazy<Regex> = Lazy::new(|| regex(r"(?i)long\[\]"));

    let idl = ATTRIBUTE.replace_all(idl, "attribute FrozenArray<${1}>");
    let idl = FLOAT.replace_all(&idl, "FrozenArray<float>");
    LONG.replace_all(&idl, "FrozenArray<long>").into_owned()
}

/// Drop `#include`-style lines and `%{C++ ... %}` blocks.
pub fn preprocessor_statements(idl: &str) -> String {
    static DIRECTIVE: Lazy<Regex> = Lazy::new(|| regex(r"#.*\n"));
    static CPP_BLOCK: Lazy<Regex> = Lazy::new(|| regex(r"(?s)%\{C\+\+\n.*?%\}"));

    let idl = DIRECTIVE.replace_all(idl, "");
    CPP_BLOCK.replace_all(&idl, "").into_owned()
}

/// Forward declarations (`interface nsIFile;`) become opaque `any` aliases.
pub fn bodyless_interface(idl: &str) -> String {
    static BODYLESS: Lazy<Regex> = Lazy::new(|| regex(r"interface (\w*);"));
    BODYLESS.replace_all(idl, "typedef any ${1};").into_owned()
}

/// Drop function-style entries such as `uuid(...)` from extended attribute lists.
pub fn uuid_extended_attributes(idl: &str) -> String {
    static CALL: Lazy<Regex> = Lazy::new(|| regex(r"(,\s*)\w*\((\w|-)*\)"));
    CALL.replace_all(idl, "").into_owned()
}

/// Drop the `in`/`out` direction markers, and any attribute list in front of them,
/// from arguments.
pub fn in_function_arg(idl: &str) -> String {
    static DIRECTION: Lazy<Regex> = Lazy::new(|| {
        regex(r"(\(|(,\s*)|(,\n\s*))(\[((\w|\(|\))*(,\s*)?)*\] ?)?(in|out) ((\w* ?)*)")
    });
    DIRECTION.replace_all(idl, "${1}${4}${9}").into_owned()
}

/// Unwrap `[optional]` and drop the remaining bracketed attribute lists that
/// XPIDL puts on members and arguments.
pub fn strip_square_brackets(idl: &str) -> String {
    static OPTIONAL: Lazy<Regex> = Lazy::new(|| regex(r"\[(optional)\]"));
    static BEFORE_DECL: Lazy<Regex> = Lazy::new(|| regex(r"\[(\w|\(|\)|,|\s)*\] (\w* \w*)"));
    static BARE: Lazy<Regex> = Lazy::new(|| regex(r"\[(\w|\(|\))*\]"));

    let idl = OPTIONAL.replace_all(idl, "${1}");
    let idl = BEFORE_DECL.replace_all(&idl, "${2}");
    BARE.replace_all(&idl, "").into_owned()
}

/// XPIDL's `Array<T>` is WebIDL's `sequence<T>`.
pub fn sequence_types(idl: &str) -> String {
    static ARRAY: Lazy<Regex> = Lazy::new(|| regex(r"\bArray<(\w*)>"));
    ARRAY.replace_all(idl, "sequence<${1}>").into_owned()
}
