use clap::{Args, Subcommand};
use roster_app::{
    domain::tenants::{PgTenantsService, TenantsService, data::NewTenant, records::TenantRecord},
    pagination::ListParams,
};
use uuid::Uuid;

use crate::cli::{DatabaseArgs, ListArgs, or_none};

#[derive(Debug, Args)]
pub(crate) struct TenantCommand {
    #[command(subcommand)]
    command: TenantSubcommand,
}

#[derive(Debug, Subcommand)]
enum TenantSubcommand {
    /// Create a tenant, or recreate a deleted one
    Create(CreateTenantArgs),

    /// List live tenants
    List(ListTenantsArgs),

    /// Soft-delete a tenant
    Delete(DeleteTenantArgs),
}

#[derive(Debug, Args)]
pub(crate) struct CreateTenantArgs {
    #[command(flatten)]
    database: DatabaseArgs,

    /// Tenant id; a random UUID when omitted
    #[arg(long)]
    tenant_id: Option<String>,

    /// Tenant display name
    #[arg(long)]
    name: Option<String>,

    /// Linked authorization object id
    #[arg(long)]
    object_id: Option<String>,
}

#[derive(Debug, Args)]
pub(crate) struct ListTenantsArgs {
    #[command(flatten)]
    database: DatabaseArgs,

    #[command(flatten)]
    list: ListArgs,
}

#[derive(Debug, Args)]
pub(crate) struct DeleteTenantArgs {
    #[command(flatten)]
    database: DatabaseArgs,

    /// Tenant id to delete
    #[arg(long)]
    tenant_id: String,
}

pub(crate) async fn run(command: TenantCommand) -> Result<(), String> {
    match command.command {
        TenantSubcommand::Create(args) => create(args).await,
        TenantSubcommand::List(args) => list(args).await,
        TenantSubcommand::Delete(args) => delete(args).await,
    }
}

async fn create(args: CreateTenantArgs) -> Result<(), String> {
    let service = PgTenantsService::new(args.database.connect().await?);

    let tenant = service
        .create_tenant(NewTenant {
            tenant_id: args
                .tenant_id
                .unwrap_or_else(|| Uuid::new_v4().to_string()),
            object_id: args.object_id,
            name: args.name,
        })
        .await
        .map_err(|error| format!("failed to create tenant: {error}"))?;

    print_tenant(&tenant);

    Ok(())
}

async fn list(args: ListTenantsArgs) -> Result<(), String> {
    let params = ListParams::parse(args.list.into()).map_err(|error| error.to_string())?;
    let service = PgTenantsService::new(args.database.connect().await?);

    let tenants = service
        .list_tenants(params)
        .await
        .map_err(|error| format!("failed to list tenants: {error}"))?;

    if tenants.is_empty() {
        println!("no tenants found");
    }

    for tenant in &tenants {
        print_tenant(tenant);
        println!();
    }

    Ok(())
}

async fn delete(args: DeleteTenantArgs) -> Result<(), String> {
    let service = PgTenantsService::new(args.database.connect().await?);

    service
        .delete_tenant(&args.tenant_id)
        .await
        .map_err(|error| format!("failed to delete tenant {}: {error}", args.tenant_id))?;

    println!("deleted tenant {}", args.tenant_id);

    Ok(())
}

fn print_tenant(tenant: &TenantRecord) {
    println!("tenant_id: {}", tenant.tenant_id);
    println!("name: {}", or_none(tenant.name.as_deref()));
    println!("object_id: {}", or_none(tenant.object_id.as_deref()));
    println!("created_at: {}", tenant.created_at);
    println!("updated_at: {}", tenant.updated_at);
}
