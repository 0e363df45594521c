//! Slot allocation command.

use crate::cli::common::{to_json, CliResult};
use crate::models::CORE_CATEGORIES;
use crate::services::{allocate, SlotAllocations};
use clap::Args;
use serde::Serialize;

/// Show how many slots each category gets for a button count
#[derive(Debug, Clone, Args)]
pub struct AllocateArgs {
    /// Requested number of buttons
    #[arg(short, long, value_name = "N")]
    pub buttons: usize,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct AllocateResponse<'a> {
    total_buttons: usize,
    allocated: usize,
    allocations: &'a SlotAllocations,
}

impl AllocateArgs {
    /// Execute the allocate command
    pub fn execute(&self) -> CliResult<()> {
        let allocations = allocate(self.buttons, &CORE_CATEGORIES)?;

        if self.json {
            let response = AllocateResponse {
                total_buttons: self.buttons,
                allocated: allocations.total(),
                allocations: &allocations,
            };
            println!("{}", to_json(&response, false)?);
            return Ok(());
        }

        println!("Slot allocation for {} buttons:", self.buttons);
        println!();
        for allocation in &allocations {
            println!(
                "  {:<20} {:>4}",
                allocation.category.name(),
                allocation.slots
            );
        }
        println!();
        println!("  {:<20} {:>4}", "Total", allocations.total());
        Ok(())
    }
}
