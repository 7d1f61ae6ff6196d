//! Category CLI commands

use clap::Subcommand;

use crate::display::category::format_category_list;
use crate::error::TrackerResult;
use crate::services::CategoryService;
use crate::storage::Storage;

/// Category subcommands
#[derive(Subcommand)]
pub enum CategoryCommands {
    /// List all categories
    List,

    /// Add a new category
    Add {
        /// Category name
        name: String,
    },

    /// Remove a category
    ///
    /// Transactions already labeled with the category keep their label.
    Remove {
        /// Category name
        name: String,
    },
}

/// Handle a category command
pub fn handle_category_command(storage: &mut Storage, cmd: CategoryCommands) -> TrackerResult<()> {
    let mut service = CategoryService::new(storage);

    match cmd {
        CategoryCommands::List => {
            print!("{}", format_category_list(service.list()));
        }

        CategoryCommands::Add { name } => {
            let added = service.add(&name)?;
            println!("Added category: {}", added);
        }

        CategoryCommands::Remove { name } => {
            service.remove(&name)?;
            println!("Removed category: {}", name.trim());
        }
    }

    Ok(())
}
