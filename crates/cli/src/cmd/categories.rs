//! Print the category tree

use crate::fixtures;
use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use std::path::PathBuf;
use uneaten_core::Category;

pub async fn run(file: Option<PathBuf>) -> Result<()> {
    let categories = match file {
        Some(path) => {
            let raw = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            serde_json::from_str::<Vec<Category>>(&raw)
                .with_context(|| format!("Failed to parse {}", path.display()))?
        }
        None => fixtures::grouped_categories(),
    };

    println!("{}", "Categories".bold());
    for category in &categories {
        print_node(category, 0);
    }
    Ok(())
}

fn print_node(category: &Category, depth: usize) {
    let indent = "  ".repeat(depth + 1);
    if category.subcategories.is_empty() {
        println!("{indent}{} ({})", category.name, category.key.dimmed());
    } else {
        println!("{indent}{} ({})", category.name.bold(), category.key.dimmed());
        for sub in &category.subcategories {
            print_node(sub, depth + 1);
        }
    }
}
