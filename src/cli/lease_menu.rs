use std::str::FromStr;

use colored::Colorize;
use dialoguer::{Confirm, Input, Select};

use crate::cli::{prompt_date, prompt_optional, report_error, theme};
use crate::db::leasedb::LeaseExt;
use crate::db::paymentdb::PaymentExt;
use crate::db::propertydb::PropertyExt;
use crate::db::tenantdb::TenantExt;
use crate::db::{AttrValue, DBClient};
use crate::dtos::leasedtos::CreateLeaseDto;
use crate::dtos::paymentdtos::CreatePaymentDto;
use crate::models::leasemodel::LeaseStatus;
use crate::utils::decimal;

pub async fn run(db: &DBClient) -> anyhow::Result<()> {
    loop {
        let choice = Select::with_theme(&theme())
            .with_prompt("Leases & Payments")
            .items(&[
                "List all leases",
                "Create lease",
                "End lease",
                "Find lease by attribute",
                "Delete lease",
                "List payments for a lease",
                "Create payment",
                "Find payment by attribute",
                "Delete payment",
                "Back",
            ])
            .default(0)
            .interact()?;

        match choice {
            0 => list_leases(db).await?,
            1 => create_lease(db).await?,
            2 => end_lease(db).await?,
            3 => find_lease_by_attribute(db).await?,
            4 => delete_lease(db).await?,
            5 => list_payments_for_lease(db).await?,
            6 => create_payment(db).await?,
            7 => find_payment_by_attribute(db).await?,
            8 => delete_payment(db).await?,
            _ => return Ok(()),
        }
    }
}

async fn list_leases(db: &DBClient) -> anyhow::Result<()> {
    let leases = db.get_all_leases().await?;
    if leases.is_empty() {
        println!("No leases found.");
    }
    for lease in leases {
        println!("{}", lease);
    }
    Ok(())
}

async fn create_lease(db: &DBClient) -> anyhow::Result<()> {
    let property_id: i64 = Input::with_theme(&theme())
        .with_prompt("Property ID")
        .interact_text()?;
    let tenant_id: i64 = Input::with_theme(&theme())
        .with_prompt("Tenant ID")
        .interact_text()?;

    // checked up front for a friendlier message; the schema's foreign keys
    // would reject a dangling reference anyway
    if db.get_property_by_id(property_id).await?.is_none() {
        println!("Property not found.");
        return Ok(());
    }
    if db.get_tenant_by_id(tenant_id).await?.is_none() {
        println!("Tenant not found.");
        return Ok(());
    }

    let start_date = prompt_date("Start date")?;
    let status = match prompt_optional("Status [active/ended] (default active)")? {
        Some(raw) => match LeaseStatus::from_str(&raw) {
            Ok(status) => Some(status),
            Err(e) => {
                report_error(&e);
                return Ok(());
            }
        },
        None => None,
    };

    let dto = CreateLeaseDto {
        property_id,
        tenant_id,
        start_date,
        end_date: None,
        status,
    };
    match db.create_lease(dto).await {
        Ok(lease) => println!("Created {}", lease),
        Err(e) => report_error(&e),
    }
    Ok(())
}

async fn end_lease(db: &DBClient) -> anyhow::Result<()> {
    let lease_id: i64 = Input::with_theme(&theme())
        .with_prompt("Lease ID to end")
        .interact_text()?;

    let lease = match db.get_lease_by_id(lease_id).await? {
        Some(lease) => lease,
        None => {
            println!("Lease not found.");
            return Ok(());
        }
    };
    if lease.status() == LeaseStatus::Ended {
        println!("Lease already ended.");
        return Ok(());
    }

    let end_date = prompt_date("End date")?;
    match db.end_lease(lease_id, end_date).await {
        Ok(lease) => println!("Lease ended. {}", lease),
        Err(e) => report_error(&e),
    }
    Ok(())
}

async fn find_lease_by_attribute(db: &DBClient) -> anyhow::Result<()> {
    let fields = ["status", "property_id", "tenant_id"];
    let field = Select::with_theme(&theme())
        .with_prompt("Search by")
        .items(&fields)
        .default(0)
        .interact()?;

    let value = match fields[field] {
        "status" => AttrValue::Text(
            Input::<String>::with_theme(&theme())
                .with_prompt("Value [active/ended]")
                .interact_text()?,
        ),
        _ => AttrValue::Int(
            Input::<i64>::with_theme(&theme())
                .with_prompt("Value")
                .interact_text()?,
        ),
    };

    match db.find_leases_by_attribute(&[(fields[field], value)]).await {
        Ok(matches) if matches.is_empty() => println!("No matches."),
        Ok(matches) => {
            for lease in matches {
                println!("{}", lease);
            }
        }
        Err(e) => report_error(&e),
    }
    Ok(())
}

async fn delete_lease(db: &DBClient) -> anyhow::Result<()> {
    let lease_id: i64 = Input::with_theme(&theme())
        .with_prompt("Lease ID to delete")
        .interact_text()?;

    if db.get_lease_by_id(lease_id).await?.is_none() {
        println!("Lease not found.");
        return Ok(());
    }

    let payments = db.get_payments_for_lease(lease_id).await?;
    if !payments.is_empty() {
        let warning = format!(
            "Lease has {} payment(s). Deleting removes them too. Continue?",
            payments.len()
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

    match db.delete_lease(lease_id).await {
        Ok(()) => println!("Deleted."),
        Err(e) => report_error(&e),
    }
    Ok(())
}

async fn list_payments_for_lease(db: &DBClient) -> anyhow::Result<()> {
    let lease_id: i64 = Input::with_theme(&theme())
        .with_prompt("Lease ID")
        .interact_text()?;

    if db.get_lease_by_id(lease_id).await?.is_none() {
        println!("Lease not found.");
        return Ok(());
    }
    let payments = db.get_payments_for_lease(lease_id).await?;
    if payments.is_empty() {
        println!("No payments recorded for this lease.");
    }
    for payment in payments {
        println!("{}", payment);
    }
    Ok(())
}

async fn create_payment(db: &DBClient) -> anyhow::Result<()> {
    let lease_id: i64 = Input::with_theme(&theme())
        .with_prompt("Lease ID")
        .interact_text()?;

    if db.get_lease_by_id(lease_id).await?.is_none() {
        println!("Lease not found.");
        return Ok(());
    }

    let raw: String = Input::with_theme(&theme())
        .with_prompt("Amount (e.g. 15000 or 15000.00)")
        .interact_text()?;
    let amount = match decimal::parse_amount(&raw) {
        Ok(amount) => amount,
        Err(e) => {
            report_error(&e);
            return Ok(());
        }
    };

    let date_paid = prompt_date("Date paid")?;
    let method = prompt_optional("Method [cash/mpesa/bank] (default cash)")?
        .or_else(|| Some("cash".to_string()));

    let dto = CreatePaymentDto {
        lease_id,
        amount,
        date_paid,
        method,
    };
    match db.create_payment(dto).await {
        Ok(payment) => println!("Created {}", payment),
        Err(e) => report_error(&e),
    }
    Ok(())
}

async fn find_payment_by_attribute(db: &DBClient) -> anyhow::Result<()> {
    let fields = ["method", "lease_id"];
    let field = Select::with_theme(&theme())
        .with_prompt("Search by")
        .items(&fields)
        .default(0)
        .interact()?;

    let value = match fields[field] {
        "lease_id" => AttrValue::Int(
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

    match db.find_payments_by_attribute(&[(fields[field], value)]).await {
        Ok(matches) if matches.is_empty() => println!("No matches."),
        Ok(matches) => {
            for payment in matches {
                println!("{}", payment);
            }
        }
        Err(e) => report_error(&e),
    }
    Ok(())
}

async fn delete_payment(db: &DBClient) -> anyhow::Result<()> {
    let payment_id: i64 = Input::with_theme(&theme())
        .with_prompt("Payment ID to delete")
        .interact_text()?;

    if db.get_payment_by_id(payment_id).await?.is_none() {
        println!("Payment not found.");
        return Ok(());
    }

    match db.delete_payment(payment_id).await {
        Ok(()) => println!("Deleted."),
        Err(e) => report_error(&e),
    }
    Ok(())
}
