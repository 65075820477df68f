//! Terminal rendering of states and staged changesets

use owo_colors::OwoColorize;
use uneaten_core::{CategoryGroup, CategoryState, UneatenState};
use uneaten_diff::{SectionedChangeset, StagedChangeset};

/// One-line save status, derived the way the view derives its buttons.
pub fn status_line(state: &UneatenState) -> String {
    if state.pending_validation {
        "saving…".yellow().to_string()
    } else if state.saved {
        "saved".green().to_string()
    } else {
        "unsaved changes".red().to_string()
    }
}

/// Print the projected groups as an indented tree.
pub fn print_groups(groups: &[CategoryGroup]) {
    for (index, group) in groups.iter().enumerate() {
        match group.title() {
            Some(title) => println!("  {index}: {}", title.bold()),
            None => println!("  {index}: {}", "(standalone)".dimmed()),
        }
        for element in group.elements() {
            println!("     {}", element_label(element));
        }
    }
}

fn element_label(element: &CategoryState) -> String {
    let marker = if element.is_selected { "[x]" } else { "[ ]" };
    format!("{marker} {}", element.name)
}

/// Print each batch of a staged changeset in application order.
pub fn print_staged(staged: &StagedChangeset<SectionedChangeset<CategoryGroup>>) {
    if staged.is_empty() {
        println!("  {}", "no visual changes".dimmed());
        return;
    }
    for (number, stage) in staged.iter().enumerate() {
        println!("  batch {} ({} edits)", number + 1, stage.edit_count());
        for &section in &stage.section_updated {
            println!("    {} section {section}", "~".yellow());
        }
        for &section in &stage.section_deleted {
            println!("    {} section {section}", "-".red());
        }
        for &section in &stage.section_inserted {
            println!("    {} section {section}", "+".green());
        }
        for moved in &stage.section_moved {
            println!("    {} section {} -> {}", ">".cyan(), moved.from, moved.to);
        }
        for path in &stage.element_updated {
            println!("    {} item {path}", "~".yellow());
        }
        for path in &stage.element_deleted {
            println!("    {} item {path}", "-".red());
        }
        for path in &stage.element_inserted {
            println!("    {} item {path}", "+".green());
        }
        for moved in &stage.element_moved {
            println!("    {} item {} -> {}", ">".cyan(), moved.from, moved.to);
        }
    }
}
