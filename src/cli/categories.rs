//! Category listing command.

use crate::cli::common::{to_json, CliResult};
use crate::models::{CategorySummary, CORE_CATEGORIES};
use clap::Args;
use serde::Serialize;

/// List the core board categories
#[derive(Debug, Clone, Args)]
pub struct CategoriesArgs {
    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct CategoriesResponse {
    categories: Vec<CategorySummary>,
    count: usize,
}

impl CategoriesArgs {
    /// Execute the categories command
    pub fn execute(&self) -> CliResult<()> {
        let categories: Vec<CategorySummary> =
            CORE_CATEGORIES.iter().map(CategorySummary::from).collect();
        let response = CategoriesResponse {
            count: categories.len(),
            categories,
        };

        if self.json {
            println!("{}", to_json(&response, false)?);
            return Ok(());
        }

        println!("Categories ({}):", response.count);
        println!();
        for cat in &response.categories {
            let required = if cat.required { "required" } else { "" };
            println!(
                "  {:<20} {:>4.0}%  {:<8} {:<20} {}",
                cat.name,
                cat.target_percentage * 100.0,
                cat.source,
                cat.color.to_css(),
                required
            );
            if !cat.words.is_empty() {
                println!("      {}", cat.words.join(", "));
            }
        }
        Ok(())
    }
}
