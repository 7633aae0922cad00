/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

//! # webidl2ts: TypeScript declarations from WebIDL
//!
//! This crate reads interface definitions written in WebIDL and produces a TypeScript
//! declaration (`.d.ts`) file describing the same API. Two non-standard dialects are
//! supported as well:
//!
//! * the IDL accepted by Emscripten's WebIDL binder, used to expose C++ libraries to
//!   JavaScript. In this mode attributes become `get_`/`set_` accessor methods, and the
//!   declarations are wrapped in the module object Emscripten generates.
//! * Gecko's XPIDL, which describes XPCOM components.
//!
//! The pipeline has four stages, each in its own module:
//!
//! 1. [`fixes`] rewrites dialect-specific syntax into plain WebIDL.
//! 2. [`interface`] parses the WebIDL and lowers it into the syntax tree from
//!    [`webidl2ts_meta`].
//! 3. [`translate`] turns that syntax tree into TypeScript declarations.
//! 4. [`bindings`] prints the declarations.
//!
//! ## Usage
//!
//! ```text
//! webidl2ts generate ./box2d.idl --emscripten --module Box2D
//! ```
//!
//! writes `./box2d.d.ts` next to the input. Options can also be put in a
//! `webidl2ts.toml` file next to the input:
//!
//! ```toml
//! emscripten = true
//! module = "Box2D"
//! default_export = true
//! ```
//!
//! Flags given on the command line take precedence over the file.

#![warn(rust_2018_idioms)]

use anyhow::{Context, Result};
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Args, Parser, Subcommand};
use fs_err as fs;
use serde::{Deserialize, Serialize};
use webidl2ts_meta::Definition;

pub mod bindings;
pub mod fixes;
pub mod interface;
pub mod translate;

pub use translate::{translate, Diagnostic, Translation};

const DEFAULT_MODULE_NAME: &str = "Module";
const CONFIG_FILE_NAME: &str = "webidl2ts.toml";

/// Resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Target Emscripten's WebIDL binder: accessor methods and the module wrapper.
    pub emscripten: bool,
    /// Accept Gecko's XPIDL dialect.
    pub gecko: bool,
    /// Name of the Emscripten module object.
    pub module_name: String,
    /// Add `export default <module>;` to the Emscripten wrapper.
    pub default_export: bool,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            emscripten: false,
            gecko: false,
            module_name: DEFAULT_MODULE_NAME.to_owned(),
            default_export: false,
        }
    }
}

/// Settings as they come from the config file or the command line; anything left
/// unset falls through to the next source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub emscripten: Option<bool>,
    #[serde(default)]
    pub gecko: Option<bool>,
    #[serde(default)]
    pub module: Option<String>,
    #[serde(default)]
    pub default_export: Option<bool>,
}

impl Config {
    pub fn into_options(self) -> Options {
        let defaults = Options::default();
        Options {
            emscripten: self.emscripten.unwrap_or(defaults.emscripten),
            gecko: self.gecko.unwrap_or(defaults.gecko),
            module_name: self.module.unwrap_or(defaults.module_name),
            default_export: self.default_export.unwrap_or(defaults.default_export),
        }
    }
}

pub trait MergeWith {
    fn merge_with(&self, other: &Self) -> Self;
}

impl MergeWith for Config {
    fn merge_with(&self, other: &Self) -> Self {
        Config {
            emscripten: self.emscripten.merge_with(&other.emscripten),
            gecko: self.gecko.merge_with(&other.gecko),
            module: self.module.merge_with(&other.module),
            default_export: self.default_export.merge_with(&other.default_export),
        }
    }
}

impl<T: Clone> MergeWith for Option<T> {
    fn merge_with(&self, other: &Self) -> Self {
        match (self, other) {
            (Some(_), _) => self.clone(),
            (None, Some(_)) => other.clone(),
            (None, None) => None,
        }
    }
}

// Load the config file, either the one given explicitly or `webidl2ts.toml`
// next to the input. A missing default file just means an empty config, but an
// explicitly named one has to exist.
fn load_config(input: &Utf8Path, config_file_override: Option<&Utf8Path>) -> Result<Config> {
    let config_path = match config_file_override {
        Some(cfg) => cfg.to_owned(),
        None => {
            let path = input
                .parent()
                .map(|dir| dir.join(CONFIG_FILE_NAME))
                .unwrap_or_else(|| Utf8PathBuf::from(CONFIG_FILE_NAME));
            if !path.exists() {
                return Ok(Config::default());
            }
            path
        }
    };

    let contents = fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file from {}", config_path))?;
    let config: Config = toml::de::from_str(&contents)
        .with_context(|| format!("Failed to parse config file {}", config_path))?;
    log::debug!("loaded config from {}", config_path);
    Ok(config)
}

/// Work out the effective options: `cli_config` beats the config file, which beats
/// the defaults.
pub fn get_options(
    input: &Utf8Path,
    config_file_override: Option<&Utf8Path>,
    cli_config: &Config,
) -> Result<Options> {
    let file_config = load_config(input, config_file_override)?;
    Ok(cli_config.merge_with(&file_config).into_options())
}

/// Apply the dialect fix-ups and parse IDL text.
pub fn parse_idl(idl: &str, options: &Options) -> Result<Vec<Definition>> {
    let idl = fixes::preprocess(idl, options);
    interface::parse_webidl(&idl)
}

/// Read a syntax tree previously written out as JSON.
pub fn parse_ast_json(json: &str) -> Result<Vec<Definition>> {
    serde_json::from_str(json).context("Input is not a valid IDL syntax tree")
}

/// Translate IDL text into the text of a declaration file, along with whatever
/// diagnostics were raised on the way.
pub fn idl_to_typescript(idl: &str, options: &Options) -> Result<(String, Vec<Diagnostic>)> {
    let definitions = parse_idl(idl, options)?;
    let translation = translate(&definitions, options);
    let text = bindings::render_bindings(&translation.declarations, options)?;
    Ok((text, translation.diagnostics))
}

fn read_definitions(
    input: &Utf8Path,
    options: &Options,
    from_ast: bool,
) -> Result<Vec<Definition>> {
    let contents = fs::read_to_string(input)?;
    if from_ast {
        parse_ast_json(&contents).with_context(|| format!("Failed to load {input}"))
    } else {
        parse_idl(&contents, options).with_context(|| format!("Failed to parse {input}"))
    }
}

/// Generate the declaration file for `input`, returning the path written to.
///
/// Without an explicit `out_file` the output goes next to the input, with the
/// extension replaced by `.d.ts`.
pub fn generate_bindings(
    input: &Utf8Path,
    out_file_override: Option<&Utf8Path>,
    config_file_override: Option<&Utf8Path>,
    cli_config: &Config,
    from_ast: bool,
) -> Result<Utf8PathBuf> {
    let options = get_options(input, config_file_override, cli_config)?;
    let definitions = read_definitions(input, &options, from_ast)?;
    let translation = translate(&definitions, &options);
    for diagnostic in &translation.diagnostics {
        log::warn!("{}", diagnostic);
    }

    let out_file = match out_file_override {
        Some(path) => path.to_owned(),
        None => input.with_extension("d.ts"),
    };
    bindings::write_bindings(&translation.declarations, &options, &out_file)?;
    log::info!(
        "wrote {} declarations to {} ({} diagnostics)",
        translation.declarations.len(),
        out_file,
        translation.diagnostics.len()
    );
    Ok(out_file)
}

/// Parse `input` and render its syntax tree as pretty-printed JSON.
pub fn print_ast(
    input: &Utf8Path,
    config_file_override: Option<&Utf8Path>,
    cli_config: &Config,
) -> Result<String> {
    let options = get_options(input, config_file_override, cli_config)?;
    let definitions = read_definitions(input, &options, false)?;
    Ok(serde_json::to_string_pretty(&definitions)?)
}

// structs to help our cmdline parsing.
#[derive(Parser)]
#[clap(name = "webidl2ts")]
#[clap(version = clap::crate_version!())]
#[clap(about = "Generate TypeScript declarations from WebIDL")]
#[clap(propagate_version = true)]
struct Cli {
    #[clap(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct DialectArgs {
    #[clap(long, short, help = "Target Emscripten's WebIDL binder.")]
    emscripten: bool,

    #[clap(long, short, help = "Accept Gecko's XPIDL dialect.")]
    gecko: bool,

    #[clap(
        long,
        short,
        help = "Path to the optional webidl2ts config file. If not provided, webidl2ts will look for webidl2ts.toml next to the input."
    )]
    config: Option<Utf8PathBuf>,
}

impl DialectArgs {
    // An unset flag means "not given", so the config file still gets a say.
    fn to_config(&self) -> Config {
        Config {
            emscripten: self.emscripten.then(|| true),
            gecko: self.gecko.then(|| true),
            ..Config::default()
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    #[clap(name = "generate", about = "Generate a TypeScript declaration file")]
    Generate {
        #[clap(flatten)]
        dialect: DialectArgs,

        #[clap(
            long,
            short,
            help = "File to write the declarations to. Default is the input path with a .d.ts extension."
        )]
        out_file: Option<Utf8PathBuf>,

        #[clap(long, short, help = "Name of the Emscripten module. Default is Module.")]
        module: Option<String>,

        #[clap(long, short, help = "Default-export the Emscripten module.")]
        default_export: bool,

        #[clap(long, help = "Read the input as a JSON syntax tree, as printed by `ast`.")]
        from_ast: bool,

        #[clap(help = "Path to the IDL file.")]
        input: Utf8PathBuf,
    },

    #[clap(name = "ast", about = "Print the parsed IDL syntax tree as JSON")]
    Ast {
        #[clap(flatten)]
        dialect: DialectArgs,

        #[clap(help = "Path to the IDL file.")]
        input: Utf8PathBuf,
    },
}

pub fn run_main() -> Result<()> {
    let cli = Cli::parse();
    match &cli.command {
        Commands::Generate {
            dialect,
            out_file,
            module,
            default_export,
            from_ast,
            input,
        } => {
            let cli_config = Config {
                module: module.clone(),
                default_export: default_export.then(|| true),
                ..dialect.to_config()
            };
            crate::generate_bindings(
                input,
                out_file.as_deref(),
                dialect.config.as_deref(),
                &cli_config,
                *from_ast,
            )?;
        }
        Commands::Ast { dialect, input } => {
            let json = crate::print_ast(input, dialect.config.as_deref(), &dialect.to_config())?;
            println!("{json}");
        }
    }
    Ok(())
}
