use colored::Colorize;
use dialoguer::Select;

use crate::cli::{lease_menu, property_menu, tenant_menu, theme};
use crate::db::DBClient;

pub async fn run(db: &DBClient) -> anyhow::Result<()> {
    println!("{}", "RentWise".green().bold());

    loop {
        let choice = Select::with_theme(&theme())
            .with_prompt("Main menu")
            .items(&["Properties", "Tenants", "Leases & Payments", "Exit"])
            .default(0)
            .interact()?;

        match choice {
            0 => property_menu::run(db).await?,
            1 => tenant_menu::run(db).await?,
            2 => lease_menu::run(db).await?,
            _ => {
                println!("Goodbye!");
                return Ok(());
            }
        }
    }
}
