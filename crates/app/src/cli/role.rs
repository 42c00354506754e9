use clap::{Args, Subcommand};
use roster_app::{
    domain::roles::{PgRolesService, RolesService, data::NewRole, records::RoleRecord},
    pagination::ListParams,
};
use uuid::Uuid;

use crate::cli::{DatabaseArgs, ListArgs, or_none};

#[derive(Debug, Args)]
pub(crate) struct RoleCommand {
    #[command(subcommand)]
    command: RoleSubcommand,
}

#[derive(Debug, Subcommand)]
enum RoleSubcommand {
    /// Create a role, or recreate a deleted one
    Create(CreateRoleArgs),

    /// List live roles
    List(ListRolesArgs),

    /// Soft-delete a role
    Delete(DeleteRoleArgs),
}

#[derive(Debug, Args)]
pub(crate) struct CreateRoleArgs {
    #[command(flatten)]
    database: DatabaseArgs,

    /// Role id; a random UUID when omitted
    #[arg(long)]
    role_id: Option<String>,

    #[arg(long)]
    name: Option<String>,

    #[arg(long)]
    description: Option<String>,

    /// Linked authorization object id
    #[arg(long)]
    object_id: Option<String>,
}

#[derive(Debug, Args)]
pub(crate) struct ListRolesArgs {
    #[command(flatten)]
    database: DatabaseArgs,

    #[command(flatten)]
    list: ListArgs,
}

#[derive(Debug, Args)]
pub(crate) struct DeleteRoleArgs {
    #[command(flatten)]
    database: DatabaseArgs,

    #[arg(long)]
    role_id: String,
}

pub(crate) async fn run(command: RoleCommand) -> Result<(), String> {
    match command.command {
        RoleSubcommand::Create(args) => create(args).await,
        RoleSubcommand::List(args) => list(args).await,
        RoleSubcommand::Delete(args) => delete(args).await,
    }
}

async fn create(args: CreateRoleArgs) -> Result<(), String> {
    let service = PgRolesService::new(args.database.connect().await?);

    let role = service
        .create_role(NewRole {
            role_id: args.role_id.unwrap_or_else(|| Uuid::new_v4().to_string()),
            object_id: args.object_id,
            name: args.name,
            description: args.description,
        })
        .await
        .map_err(|error| format!("failed to create role: {error}"))?;

    print_role(&role);

    Ok(())
}

async fn list(args: ListRolesArgs) -> Result<(), String> {
    let params = ListParams::parse(args.list.into()).map_err(|error| error.to_string())?;
    let service = PgRolesService::new(args.database.connect().await?);

    let roles = service
        .list_roles(params)
        .await
        .map_err(|error| format!("failed to list roles: {error}"))?;

    for role in &roles {
        print_role(role);
        println!();
    }

    Ok(())
}

async fn delete(args: DeleteRoleArgs) -> Result<(), String> {
    let service = PgRolesService::new(args.database.connect().await?);

    service
        .delete_role(&args.role_id)
        .await
        .map_err(|error| format!("failed to delete role {}: {error}", args.role_id))?;

    println!("deleted role {}", args.role_id);

    Ok(())
}

fn print_role(role: &RoleRecord) {
    println!("role_id: {}", role.role_id);
    println!("name: {}", or_none(role.name.as_deref()));
    println!("description: {}", or_none(role.description.as_deref()));
    println!("object_id: {}", or_none(role.object_id.as_deref()));
    println!("created_at: {}", role.created_at);
}
