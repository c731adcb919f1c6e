//! Skills command - list the skills catalogue

use crate::cli::style::Stylize;
use anstream::println;
use folio::error::Result;
use folio::skills::{categories, filter_skills, render_table, SkillFilter};

/// Run the skills command
pub fn run_skills(category: &str) -> Result<()> {
    let filter: SkillFilter = category.parse()?;

    let tabs: Vec<String> = categories()
        .iter()
        .map(|c| {
            if *c == filter {
                format!("[{c}]")
            } else {
                c.to_string()
            }
        })
        .collect();

    println!("{}", "My Skills".emphasis());
    println!("{}", tabs.join("  ").muted());
    println!();

    let skills = filter_skills(filter);
    if skills.is_empty() {
        println!("{}", "No skills in this category".muted());
        return Ok(());
    }

    for line in render_table(&skills).lines() {
        println!("  {}", line.accent());
    }

    Ok(())
}
