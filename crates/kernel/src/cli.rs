//! CLI command implementations.
//!
//! These commands build the registry from the modules directory and print
//! to stdout without starting the server.

use anyhow::Result;

use crate::content::ContentTypeView;
use crate::state::AppState;

/// Print the available content types and their authoring steps.
pub fn cmd_content_types(state: &AppState, locale: Option<&str>) -> Result<()> {
    let locale = state.locale_or_default(locale);
    let available = state.content_types().available_content_types();

    if available.is_empty() {
        println!("No content types with an authoring kit found.");
        return Ok(());
    }

    println!("{:<48} {:<24} {:<16}", "CONTENT TYPE", "LABEL", "MODULE");
    println!("{}", "-".repeat(90));

    for info in available.iter() {
        let view = ContentTypeView::localize(info, state.bundles(), locale);
        println!(
            "{:<48} {:<24} {:<16}",
            view.content_item_class,
            view.label,
            view.module.as_deref().unwrap_or("-")
        );
        for step in &view.steps {
            println!("    {:>4}  {:<24} {}", step.order, step.label, step.component);
        }
    }

    Ok(())
}

/// Print installed modules in load order.
pub fn cmd_modules(state: &AppState) -> Result<()> {
    let modules = state.content_types().modules();

    if modules.is_empty() {
        println!("No modules found.");
        return Ok(());
    }

    println!(
        "{:<20} {:<12} {:<14} {}",
        "MODULE", "VERSION", "CONTENT TYPES", "REQUIRES"
    );
    println!("{}", "-".repeat(71));

    for module in modules {
        let declaration = &module.declaration;
        let requires = if declaration.requires.is_empty() {
            "-".to_string()
        } else {
            declaration.requires.join(", ")
        };
        println!(
            "{:<20} {:<12} {:<14} {}",
            declaration.name,
            declaration.version,
            declaration.content_types.len(),
            requires
        );
    }

    Ok(())
}
