//! Category display formatting

/// Format the category list for terminal output
pub fn format_category_list(categories: &[String]) -> String {
    if categories.is_empty() {
        return "No categories defined.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!("Categories ({}):\n", categories.len()));
    for name in categories {
        output.push_str(&format!("  - {}\n", name));
    }

    output
}
