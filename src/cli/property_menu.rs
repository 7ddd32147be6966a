use colored::Colorize;
use dialoguer::{Confirm, Input, Select};

use crate::cli::{prompt_optional, report_error, theme};
use crate::db::leasedb::LeaseExt;
use crate::db::propertydb::PropertyExt;
use crate::db::{AttrValue, DBClient};
use crate::dtos::propertydtos::CreatePropertyDto;

pub async fn run(db: &DBClient) -> anyhow::Result<()> {
    loop {
        let choice = Select::with_theme(&theme())
            .with_prompt("Properties")
            .items(&[
                "List all properties",
                "Create property",
                "View property leases",
                "Find property by attribute",
                "Delete property",
                "Back",
            ])
            .default(0)
            .interact()?;

        match choice {
            0 => list_properties(db).await?,
            1 => create_property(db).await?,
            2 => view_property_leases(db).await?,
            3 => find_property_by_attribute(db).await?,
            4 => delete_property(db).await?,
            _ => return Ok(()),
        }
    }
}

async fn list_properties(db: &DBClient) -> anyhow::Result<()> {
    let properties = db.get_all_properties().await?;
    if properties.is_empty() {
        println!("No properties found.");
    }
    for property in properties {
        println!("{}", property);
    }
    Ok(())
}

async fn create_property(db: &DBClient) -> anyhow::Result<()> {
    let address: String = Input::with_theme(&theme())
        .with_prompt("Address")
        .interact_text()?;
    let monthly_rent: i64 = Input::with_theme(&theme())
        .with_prompt("Monthly rent")
        .interact_text()?;
    let property_type = prompt_optional("Property type (default apartment)")?;

    let dto = CreatePropertyDto {
        address,
        monthly_rent,
        is_available: None,
        property_type,
    };
    match db.create_property(dto).await {
        Ok(property) => println!("Created {}", property),
        Err(e) => report_error(&e),
    }
    Ok(())
}

async fn view_property_leases(db: &DBClient) -> anyhow::Result<()> {
    let property_id: i64 = Input::with_theme(&theme())
        .with_prompt("Property ID")
        .interact_text()?;

    if db.get_property_by_id(property_id).await?.is_none() {
        println!("Property not found.");
        return Ok(());
    }
    let leases = db.get_leases_for_property(property_id).await?;
    if leases.is_empty() {
        println!("No leases for this property.");
    }
    for lease in leases {
        println!("{}", lease);
    }
    Ok(())
}

async fn find_property_by_attribute(db: &DBClient) -> anyhow::Result<()> {
    let fields = ["address", "property_type", "is_available", "monthly_rent"];
    let field = Select::with_theme(&theme())
        .with_prompt("Search by")
        .items(&fields)
        .default(0)
        .interact()?;

    let value = match fields[field] {
        "is_available" => AttrValue::Bool(
            Confirm::with_theme(&theme())
                .with_prompt("Available?")
                .interact()?,
        ),
        "monthly_rent" => AttrValue::Int(
            Input::<i64>::with_theme(&theme())
                .with_prompt("Value")
                .interact_text()?,
        ),
        _ => AttrValue::Text(
            Input::<String>::with_theme(&theme())
                .with_prompt("Value")
                .interact_text()?,
        ),
    };

    match db.find_properties_by_attribute(&[(fields[field], value)]).await {
        Ok(matches) if matches.is_empty() => println!("No matches."),
        Ok(matches) => {
            for property in matches {
                println!("{}", property);
            }
        }
        Err(e) => report_error(&e),
    }
    Ok(())
}

async fn delete_property(db: &DBClient) -> anyhow::Result<()> {
    let property_id: i64 = Input::with_theme(&theme())
        .with_prompt("Property ID to delete")
        .interact_text()?;

    if db.get_property_by_id(property_id).await?.is_none() {
        println!("Property not found.");
        return Ok(());
    }

    let leases = db.get_leases_for_property(property_id).await?;
    if !leases.is_empty() {
        let warning = format!(
            "Property has {} lease(s). Deleting removes them and their payments. Continue?",
            leases.len()
        );
        println!("{}", warning.yellow());
        if !Confirm::with_theme(&theme())
            .with_prompt("Confirm delete")
            .default(false)
            .interact()?
        {
            println!("Cancelled.");
            return Ok(());
        }
    }

    match db.delete_property(property_id).await {
        Ok(()) => println!("Deleted."),
        Err(e) => report_error(&e),
    }
    Ok(())
}
