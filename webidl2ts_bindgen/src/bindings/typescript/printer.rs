/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

//! # Render the TypeScript syntax tree as text.
//!
//! The layout follows what `tsc` itself prints for declaration files: four spaces
//! of indentation inside interface bodies and a semicolon after every member.

use std::fmt;

use super::ast::*;

const INDENT: &str = "    ";

/// Print a list of declarations, one per line.
pub fn print_declarations(declarations: &[Declaration]) -> String {
    let mut out = String::new();
    for declaration in declarations {
        out.push_str(&declaration.to_string());
        out.push('\n');
    }
    out
}

// Comma-separated list, since we need one in several places.
struct Joined<'a, T>(&'a [T], &'a str);

impl<T: fmt::Display> fmt::Display for Joined<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, item) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(self.1)?;
            }
            write!(f, "{item}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Declaration::Interface(d) => fmt::Display::fmt(d, f),
            Declaration::TypeAlias(d) => fmt::Display::fmt(d, f),
            Declaration::Variable(d) => fmt::Display::fmt(d, f),
        }
    }
}

impl fmt::Display for InterfaceDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "interface {}", self.name)?;
        if !self.heritage.is_empty() {
            write!(f, " extends {}", Joined(&self.heritage, ", "))?;
        }
        f.write_str(" {\n")?;
        for member in &self.members {
            writeln!(f, "{INDENT}{member}")?;
        }
        f.write_str("}")
    }
}

impl fmt::Display for TypeAliasDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "type {} = {};", self.name, self.type_)
    }
}

impl fmt::Display for VariableDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.declare {
            f.write_str("declare ")?;
        }
        write!(f, "var {}: {};", self.name, self.type_)
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Signature::Property(p) => {
                if p.readonly {
                    f.write_str("readonly ")?;
                }
                let optional = if p.optional { "?" } else { "" };
                write!(f, "{}{optional}: {};", p.name, p.type_)
            }
            Signature::Method(m) => write!(
                f,
                "{}({}): {};",
                m.name,
                Joined(&m.parameters, ", "),
                m.return_type
            ),
            Signature::Construct(c) => write!(f, "new ({});", Joined(&c.parameters, ", ")),
        }
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let optional = if self.optional { "?" } else { "" };
        write!(f, "{}{optional}: {}", self.name, self.type_)
    }
}

impl fmt::Display for TypeReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        if !self.arguments.is_empty() {
            write!(f, "<{}>", Joined(&self.arguments, ", "))?;
        }
        Ok(())
    }
}

impl fmt::Display for TsType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TsType::Keyword(k) => f.write_str(k.as_str()),
            TsType::Reference(r) => fmt::Display::fmt(r, f),
            TsType::Union(members) => {
                for (i, member) in members.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" | ")?;
                    }
                    // `() => A | B` would swallow the rest of the union.
                    if matches!(member, TsType::Function(_)) {
                        write!(f, "({member})")?;
                    } else {
                        write!(f, "{member}")?;
                    }
                }
                Ok(())
            }
            TsType::StringLiteral(s) => write_string_literal(f, s),
            TsType::Function(func) => write!(
                f,
                "({}) => {}",
                Joined(&func.parameters, ", "),
                func.return_type
            ),
        }
    }
}

fn write_string_literal(f: &mut fmt::Formatter<'_>, s: &str) -> fmt::Result {
    f.write_str("\"")?;
    for c in s.chars() {
        match c {
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\r' => f.write_str("\\r")?,
            '\t' => f.write_str("\\t")?,
            c => write!(f, "{c}")?,
        }
    }
    f.write_str("\"")
}

#[cfg(test)]
mod test {
    use super::*;

    fn number() -> TsType {
        TsType::Keyword(Keyword::Number)
    }

    fn param(name: &str, optional: bool, type_: TsType) -> Parameter {
        Parameter {
            name: name.to_owned(),
            optional,
            type_,
        }
    }

    #[test]
    fn test_interface_layout() {
        let decl = Declaration::Interface(InterfaceDeclaration {
            name: "Counter".to_owned(),
            heritage: vec![
                TypeReference::new("EventTarget"),
                TypeReference::with_arguments("Iterable", vec![number()]),
            ],
            members: vec![
                Signature::Property(PropertySignature {
                    name: "value".to_owned(),
                    readonly: true,
                    optional: false,
                    type_: number(),
                }),
                Signature::Method(MethodSignature {
                    name: "add".to_owned(),
                    parameters: vec![param("n", false, number()), param("times", true, number())],
                    return_type: TsType::Keyword(Keyword::Void),
                }),
                Signature::Construct(ConstructSignature {
                    parameters: vec![param("start", false, number())],
                }),
            ],
        });
        assert_eq!(
            decl.to_string(),
            "interface Counter extends EventTarget, Iterable<number> {\n    \
             readonly value: number;\n    \
             add(n: number, times?: number): void;\n    \
             new (start: number);\n\
             }"
        );
    }

    #[test]
    fn test_empty_interface() {
        let decl = InterfaceDeclaration::new("Empty");
        assert_eq!(decl.to_string(), "interface Empty {\n}");
    }

    #[test]
    fn test_type_alias_and_variable() {
        let alias = Declaration::TypeAlias(TypeAliasDeclaration {
            name: "Mode".to_owned(),
            type_: TsType::Union(vec![
                TsType::StringLiteral("a".to_owned()),
                TsType::StringLiteral("b".to_owned()),
            ]),
        });
        assert_eq!(alias.to_string(), r#"type Mode = "a" | "b";"#);

        let var = Declaration::Variable(VariableDeclaration {
            name: "Window".to_owned(),
            type_: TsType::reference("Window"),
            declare: true,
        });
        assert_eq!(var.to_string(), "declare var Window: Window;");
    }

    #[test]
    fn test_function_types() {
        let callback = TsType::Function(FunctionType {
            parameters: vec![param("reason", true, TsType::Keyword(Keyword::String))],
            return_type: Box::new(TsType::Keyword(Keyword::Void)),
        });
        assert_eq!(callback.to_string(), "(reason?: string) => void");

        let union = TsType::Union(vec![callback, TsType::reference("EventListener")]);
        assert_eq!(union.to_string(), "((reason?: string) => void) | EventListener");
    }

    #[test]
    fn test_string_literal_escaping() {
        let lit = TsType::StringLiteral("say \"hi\"\\".to_owned());
        assert_eq!(lit.to_string(), r#""say \"hi\"\\""#);
    }

    #[test]
    fn test_print_declarations() {
        let out = print_declarations(&[
            Declaration::Interface(InterfaceDeclaration::new("A")),
            Declaration::TypeAlias(TypeAliasDeclaration {
                name: "B".to_owned(),
                type_: TsType::reference("A"),
            }),
        ]);
        assert_eq!(out, "interface A {\n}\ntype B = A;\n");
        assert_eq!(print_declarations(&[]), "");
    }
}
