//! Build script for ashbal-i18n
//!
//! Validates the embedded Fluent locale files at compile time:
//! - every file parses
//! - every locale defines exactly the message keys of the English file
//! - every message uses the same variables in every locale

use std::collections::{BTreeMap, BTreeSet};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use fluent_syntax::ast::{Entry, Expression, InlineExpression, Pattern, PatternElement};
use fluent_syntax::parser::parse;

const REFERENCE_LOCALE: &str = "en";

type Messages = BTreeMap<String, BTreeSet<String>>;

fn collect_pattern(elements: &[PatternElement<&str>], vars: &mut BTreeSet<String>) {
    for element in elements {
        if let PatternElement::Placeable { expression } = element {
            collect_expression(expression, vars);
        }
    }
}

fn collect_expression(expression: &Expression<&str>, vars: &mut BTreeSet<String>) {
    match expression {
        Expression::Select { selector, variants } => {
            collect_inline(selector, vars);
            for variant in variants {
                collect_pattern(&variant.value.elements, vars);
            }
        }
        Expression::Inline(inline) => collect_inline(inline, vars),
    }
}

fn collect_inline(expression: &InlineExpression<&str>, vars: &mut BTreeSet<String>) {
    match expression {
        InlineExpression::VariableReference { id } => {
            vars.insert(id.name.to_string());
        }
        InlineExpression::FunctionReference { arguments, .. } => {
            for arg in &arguments.positional {
                collect_inline(arg, vars);
            }
            for arg in &arguments.named {
                collect_inline(&arg.value, vars);
            }
        }
        InlineExpression::Placeable { expression } => collect_expression(expression, vars),
        InlineExpression::MessageReference { .. }
        | InlineExpression::TermReference { .. }
        | InlineExpression::StringLiteral { .. }
        | InlineExpression::NumberLiteral { .. } => {}
    }
}

fn read_messages(path: &Path) -> Result<Messages, String> {
    let content = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
    let resource = parse(content.as_str())
        .map_err(|(_, errors)| format!("Failed to parse {}: {:?}", path.display(), errors))?;

    let mut messages = Messages::new();
    for entry in &resource.body {
        if let Entry::Message(message) = entry {
            let mut vars = BTreeSet::new();
            if let Some(Pattern { elements }) = &message.value {
                collect_pattern(elements, &mut vars);
            }
            for attribute in &message.attributes {
                collect_pattern(&attribute.value.elements, &mut vars);
            }
            messages.insert(message.id.name.to_string(), vars);
        }
    }
    Ok(messages)
}

fn find_locale_files(locales_dir: &Path) -> Result<BTreeMap<String, PathBuf>, String> {
    let entries = fs::read_dir(locales_dir)
        .map_err(|e| format!("Failed to read {}: {}", locales_dir.display(), e))?;

    let mut files = BTreeMap::new();
    for entry in entries {
        let path = entry
            .map_err(|e| format!("Failed to read directory entry: {}", e))?
            .path();
        let main_ftl = path.join("main.ftl");
        if let (true, Some(name)) = (main_ftl.exists(), path.file_name().and_then(|n| n.to_str())) {
            files.insert(name.to_string(), main_ftl);
        }
    }
    Ok(files)
}

fn validate_locales() -> Result<(), String> {
    let manifest_dir = env::var("CARGO_MANIFEST_DIR").map_err(|_| "CARGO_MANIFEST_DIR not set")?;
    let locales_dir = Path::new(&manifest_dir).join("locales");
    println!("cargo:rerun-if-changed={}", locales_dir.display());

    let files = find_locale_files(&locales_dir)?;
    let mut all = BTreeMap::new();
    let mut errors = Vec::new();
    for (locale, path) in &files {
        match read_messages(path) {
            Ok(messages) => {
                all.insert(locale.clone(), messages);
            }
            Err(e) => errors.push(e),
        }
    }

    let reference = all
        .get(REFERENCE_LOCALE)
        .ok_or_else(|| format!("Reference locale '{}' not found", REFERENCE_LOCALE))?;

    for (locale, messages) in &all {
        if locale == REFERENCE_LOCALE {
            continue;
        }
        for (key, ref_vars) in reference {
            match messages.get(key) {
                None => errors.push(format!("{}: missing message key '{}'", locale, key)),
                Some(vars) if vars != ref_vars => errors.push(format!(
                    "{}: variable mismatch for '{}', expected {:?}, found {:?}",
                    locale, key, ref_vars, vars
                )),
                Some(_) => {}
            }
        }
        for key in messages.keys().filter(|k| !reference.contains_key(*k)) {
            errors.push(format!("{}: extra message key '{}'", locale, key));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors.join("\n"))
    }
}

fn main() {
    if let Err(e) = validate_locales() {
        eprintln!("Locale validation failed:\n{}", e);
        process::exit(1);
    }
}
