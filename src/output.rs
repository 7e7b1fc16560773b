//! Terminal rendering for model listings and chat replies.

use colored::Colorize;

use crate::models::grouping::Group;
use crate::models::{EnabledModels, ModelEntry};

/// Formats one listing line: display name, key, and markers.
///
/// The key is shown only when it differs from the display name, which is
/// what users pass to `uniapi enable on|off`.
pub fn format_model_line(model: &ModelEntry, enabled: &EnabledModels) -> String {
    let key = model.key();
    let check = if enabled.is_enabled(&key) {
        "[x]".green().to_string()
    } else {
        "[ ]".dimmed().to_string()
    };

    let mut line = format!("{check} {}", model.display_name);
    if model.display_name != key {
        line.push_str(&format!(" {}", format!("({key})").dimmed()));
    }
    if model.is_default {
        line.push_str(&format!(" {}", "(default)".yellow()));
    }
    line
}

/// Prints groups as headed, indented lists.
pub fn print_model_groups(groups: &[Group<'_, ModelEntry>], enabled: &EnabledModels) {
    if groups.is_empty() {
        println!("  {}", "(no models to show)".dimmed());
        return;
    }
    for (i, group) in groups.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("  {}", format!("{}:", group.name).bold());
        for model in &group.items {
            println!("    {}", format_model_line(model, enabled));
        }
    }
}

/// Prints the state line shown above listings and after `enable` edits.
pub fn print_selection_summary(enabled: &EnabledModels) {
    println!("{} {}", "Enabled models:".bold(), enabled.summary());
}

/// Prints an assistant reply, or a dimmed note when it is empty.
pub fn print_reply(content: &str) {
    if content.is_empty() {
        println!("{}", "(empty response)".dimmed());
    } else {
        println!("{content}");
    }
}

pub fn print_error(err: &str) {
    eprintln!("{} {}", "error:".red().bold(), err);
}
