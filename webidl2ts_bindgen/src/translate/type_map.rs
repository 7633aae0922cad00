/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

//! # Mapping from IDL type names to TypeScript type names.
//!
//! IDL has a much richer set of primitive types than TypeScript; every numeric type
//! collapses to `number` and every string type to `string`. Container types keep their
//! arguments but change their outer name (`sequence<T>` becomes `Array<T>`).
//!
//! Names that aren't in the table are user-defined (an interface, a dictionary, a
//! typedef, ...) and pass through unchanged, so the lookup never fails.

use std::collections::HashMap;

use once_cell::sync::Lazy;

static BASE_TYPES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    let mut m = HashMap::new();
    for buffer in [
        "ArrayBuffer",
        "ArrayBufferView",
        "DataView",
        "Int8Array",
        "Uint8Array",
        "Int16Array",
        "Uint16Array",
        "Uint8ClampedArray",
        "Int32Array",
        "Uint32Array",
        "Float32Array",
        "Float64Array",
    ] {
        m.insert(buffer, buffer);
    }
    for numeric in [
        "byte",
        "octet",
        "short",
        "unsigned short",
        "long",
        "unsigned long",
        "long long",
        "unsigned long long",
        "float",
        "unrestricted float",
        "double",
        "unrestricted double",
    ] {
        m.insert(numeric, "number");
    }
    for string in ["ByteString", "DOMString", "USVString", "CSSOMString"] {
        m.insert(string, "string");
    }
    for same in ["any", "boolean", "Date", "Function", "Promise", "void", "EventHandler"] {
        m.insert(same, same);
    }
    m.insert("object", "any");
    m.insert("sequence", "Array");
    m.insert("record", "Record");
    m.insert("FrozenArray", "ReadonlyArray");
    m.insert("VoidPtr", "unknown");
    m
});

/// Look up the TypeScript name for a bare IDL type name.
///
/// Unmapped names are returned as-is.
pub fn resolve_base_type(name: &str) -> &str {
    BASE_TYPES.get(name).copied().unwrap_or(name)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_numeric_types_are_numbers() {
        for name in [
            "byte",
            "octet",
            "short",
            "unsigned short",
            "long",
            "unsigned long",
            "long long",
            "unsigned long long",
            "float",
            "unrestricted float",
            "double",
            "unrestricted double",
        ] {
            assert_eq!(resolve_base_type(name), "number", "{name}");
        }
    }

    #[test]
    fn test_string_types_are_strings() {
        for name in ["ByteString", "DOMString", "USVString", "CSSOMString"] {
            assert_eq!(resolve_base_type(name), "string");
        }
    }

    #[test]
    fn test_containers_and_specials() {
        assert_eq!(resolve_base_type("sequence"), "Array");
        assert_eq!(resolve_base_type("record"), "Record");
        assert_eq!(resolve_base_type("FrozenArray"), "ReadonlyArray");
        assert_eq!(resolve_base_type("object"), "any");
        assert_eq!(resolve_base_type("VoidPtr"), "unknown");
        assert_eq!(resolve_base_type("Promise"), "Promise");
        assert_eq!(resolve_base_type("Float64Array"), "Float64Array");
        assert_eq!(resolve_base_type("EventHandler"), "EventHandler");
    }

    #[test]
    fn test_every_entry_resolves_to_something() {
        for (name, target) in BASE_TYPES.iter() {
            assert!(!target.is_empty(), "{name} maps to nothing");
            assert_eq!(resolve_base_type(name), *target);
        }
    }

    #[test]
    fn test_unknown_names_pass_through() {
        assert_eq!(resolve_base_type("HTMLCanvasElement"), "HTMLCanvasElement");
        assert_eq!(resolve_base_type("nsISupports"), "nsISupports");
        assert_eq!(resolve_base_type(""), "");
    }
}
