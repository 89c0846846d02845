//! Taxonomy display formatting
//!
//! Formats the configured subcategories as a tree under each category.

use crate::config::Taxonomy;
use crate::models::Category;

/// Format the taxonomy as a tree, Income first
pub fn format_category_tree(taxonomy: &Taxonomy) -> String {
    let mut output = String::new();

    for (i, category) in Category::all().iter().enumerate() {
        output.push_str(&format!("{}\n", category));

        let subcategories = taxonomy.subcategories(*category);
        if subcategories.is_empty() {
            output.push_str("  (no subcategories)\n");
        } else {
            for (j, name) in subcategories.iter().enumerate() {
                let is_last = j == subcategories.len() - 1;
                let prefix = if is_last { "└── " } else { "├── " };
                output.push_str(&format!("  {}{}\n", prefix, name));
            }
        }

        if i < Category::all().len() - 1 {
            output.push('\n');
        }
    }

    output
}

/// Numbered list of one category's subcategories, for menu selection
pub fn format_numbered_list(items: &[String]) -> String {
    items
        .iter()
        .enumerate()
        .map(|(i, name)| format!("{}. {}\n", i + 1, name))
        .collect()
}
