use colored::Colorize;
use dialoguer::{Confirm, Input, Select};

use crate::cli::{report_error, theme};
use crate::db::leasedb::LeaseExt;
use crate::db::tenantdb::TenantExt;
use crate::db::{AttrValue, DBClient};
use crate::dtos::tenantdtos::CreateTenantDto;

pub async fn run(db: &DBClient) -> anyhow::Result<()> {
    loop {
        let choice = Select::with_theme(&theme())
            .with_prompt("Tenants")
            .items(&[
                "List all tenants",
                "Create tenant",
                "View tenant leases",
                "Find tenant by attribute",
                "Delete tenant",
                "Back",
            ])
            .default(0)
            .interact()?;

        match choice {
            0 => list_tenants(db).await?,
            1 => create_tenant(db).await?,
            2 => view_tenant_leases(db).await?,
            3 => find_tenant_by_attribute(db).await?,
            4 => delete_tenant(db).await?,
            _ => return Ok(()),
        }
    }
}

async fn list_tenants(db: &DBClient) -> anyhow::Result<()> {
    let tenants = db.get_all_tenants().await?;
    if tenants.is_empty() {
        println!("No tenants found.");
    }
    for tenant in tenants {
        println!("{}", tenant);
    }
    Ok(())
}

async fn create_tenant(db: &DBClient) -> anyhow::Result<()> {
    let name: String = Input::with_theme(&theme())
        .with_prompt("Name")
        .interact_text()?;
    let contact_info: String = Input::with_theme(&theme())
        .with_prompt("Contact info")
        .interact_text()?;

    match db.create_tenant(CreateTenantDto { name, contact_info }).await {
        Ok(tenant) => println!("Created {}", tenant),
        Err(e) => report_error(&e),
    }
    Ok(())
}

async fn view_tenant_leases(db: &DBClient) -> anyhow::Result<()> {
    let tenant_id: i64 = Input::with_theme(&theme())
        .with_prompt("Tenant ID")
        .interact_text()?;

    if db.get_tenant_by_id(tenant_id).await?.is_none() {
        println!("Tenant not found.");
        return Ok(());
    }
    let leases = db.get_leases_for_tenant(tenant_id).await?;
    if leases.is_empty() {
        println!("No leases for this tenant.");
    }
    for lease in leases {
        println!("{}", lease);
    }
    Ok(())
}

async fn find_tenant_by_attribute(db: &DBClient) -> anyhow::Result<()> {
    let fields = ["name", "contact_info"];
    let field = Select::with_theme(&theme())
        .with_prompt("Search by")
        .items(&fields)
        .default(0)
        .interact()?;
    let value: String = Input::with_theme(&theme())
        .with_prompt("Value")
        .interact_text()?;

    match db
        .find_tenants_by_attribute(&[(fields[field], AttrValue::Text(value))])
        .await
    {
        Ok(matches) if matches.is_empty() => println!("No matches."),
        Ok(matches) => {
            for tenant in matches {
                println!("{}", tenant);
            }
        }
        Err(e) => report_error(&e),
    }
    Ok(())
}

async fn delete_tenant(db: &DBClient) -> anyhow::Result<()> {
    let tenant_id: i64 = Input::with_theme(&theme())
        .with_prompt("Tenant ID to delete")
        .interact_text()?;

    if db.get_tenant_by_id(tenant_id).await?.is_none() {
        println!("Tenant not found.");
        return Ok(());
    }

    let leases = db.get_leases_for_tenant(tenant_id).await?;
    if !leases.is_empty() {
        let warning = format!(
            "Tenant has {} lease(s). Deleting removes them and their payments. Continue?",
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

    match db.delete_tenant(tenant_id).await {
        Ok(()) => println!("Deleted."),
        Err(e) => report_error(&e),
    }
    Ok(())
}
