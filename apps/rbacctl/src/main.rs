// apps/rbacctl/src/main.rs

use clap::{Arg, ArgAction, Command};
use std::process;

use rbac_lib::admin_service::AdminService;
use rbac_lib::backend::config::BackendConfig;
use rbac_lib::backend::models::UpdateRoleRequest;
use rbac_lib::backend::{AuthClient, RoleClient, UserClient};
use rbac_lib::entities::Role;
use rbac_lib::permissions::resolve_role_name;
use rbac_lib::session::SessionContext;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let matches = Command::new("rbacctl")
        .about("Admin backend CLI utility")
        .subcommand_required(true)
        .subcommand(Command::new("list-roles").about("List roles with their permissions"))
        .subcommand(Command::new("list-permissions").about("List the permission catalog"))
        .subcommand(Command::new("list-users").about("List users with resolved roles"))
        .subcommand(
            Command::new("create-role")
                .about("Create a role")
                .arg(Arg::new("name").required(true))
                .arg(Arg::new("description").long("description")),
        )
        .subcommand(
            Command::new("update-role")
                .about("Rename a role or change its description")
                .arg(Arg::new("id").required(true))
                .arg(Arg::new("name").long("name"))
                .arg(Arg::new("description").long("description")),
        )
        .subcommand(
            Command::new("delete-role")
                .about("Delete a role by id")
                .arg(Arg::new("id").required(true)),
        )
        .subcommand(
            Command::new("set-permissions")
                .about("Replace a role's permission set")
                .arg(Arg::new("id").required(true))
                .arg(
                    Arg::new("permission")
                        .long("permission")
                        .short('p')
                        .action(ArgAction::Append)
                        .help("Permission id, repeatable; none clears the set"),
                ),
        )
        .subcommand(Command::new("stats").about("Show headcount per role"))
        .get_matches();

    let config = BackendConfig::from_env();
    let service = AdminService::new(
        RoleClient::new(config.clone()),
        UserClient::new(config.clone()),
        AuthClient::new(config),
    );

    let session = match std::env::var("RBAC_TOKEN") {
        Ok(token) => SessionContext::with_token(token),
        Err(_) => SessionContext::anonymous(),
    };

    let result = match matches.subcommand() {
        Some(("list-roles", _)) => list_roles(&service, &session).await,
        Some(("list-permissions", _)) => list_permissions(&service, &session).await,
        Some(("list-users", _)) => list_users(&service, &session).await,
        Some(("create-role", sub)) => {
            let name = sub.get_one::<String>("name").expect("required");
            let description = sub.get_one::<String>("description").cloned();
            create_role(&service, &session, name, description).await
        }
        Some(("update-role", sub)) => {
            let id = sub.get_one::<String>("id").expect("required");
            let name = sub.get_one::<String>("name").cloned();
            let description = sub.get_one::<String>("description").cloned();
            update_role(&service, &session, id, name, description).await
        }
        Some(("delete-role", sub)) => {
            let id = sub.get_one::<String>("id").expect("required");
            delete_role(&service, &session, id).await
        }
        Some(("set-permissions", sub)) => {
            let id = sub.get_one::<String>("id").expect("required");
            let permission_ids: Vec<String> = sub
                .get_many::<String>("permission")
                .map(|values| values.cloned().collect())
                .unwrap_or_default();
            set_permissions(&service, &session, id, permission_ids).await
        }
        Some(("stats", _)) => stats(&service, &session).await,
        _ => unreachable!("subcommand required"),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

type Service = AdminService<RoleClient, UserClient, AuthClient>;

fn print_role(role: &Role) {
    let id = role.id.as_deref().unwrap_or("-");
    println!("{}  {}", id, role.name);
    for permission in &role.permissions {
        println!("    {}", permission.name);
    }
}

async fn list_roles(service: &Service, session: &SessionContext) -> Result<(), String> {
    let roles = service
        .list_roles(session)
        .await
        .map_err(|e| e.to_string())?;
    for role in &roles {
        print_role(role);
    }
    Ok(())
}

async fn list_permissions(service: &Service, session: &SessionContext) -> Result<(), String> {
    let permissions = service
        .list_permissions(session)
        .await
        .map_err(|e| e.to_string())?;
    for permission in &permissions {
        let id = permission.id.as_deref().unwrap_or("-");
        println!("{}  {}", id, permission.name);
    }
    Ok(())
}

async fn list_users(service: &Service, session: &SessionContext) -> Result<(), String> {
    let users = service
        .list_users(session)
        .await
        .map_err(|e| e.to_string())?;
    for user in &users {
        let role = resolve_role_name(Some(user));
        let role = if role.is_empty() { "-" } else { role.as_str() };
        println!("{}  {}  {}", user.id, user.email, role);
    }
    Ok(())
}

async fn create_role(
    service: &Service,
    session: &SessionContext,
    name: &str,
    description: Option<String>,
) -> Result<(), String> {
    let role = service
        .create_role(session, name, description.as_deref())
        .await
        .map_err(|e| e.to_string())?;
    println!("Created role:");
    print_role(&role);
    Ok(())
}

async fn update_role(
    service: &Service,
    session: &SessionContext,
    id: &str,
    name: Option<String>,
    description: Option<String>,
) -> Result<(), String> {
    let update = UpdateRoleRequest { name, description };
    let role = service
        .update_role(session, id, update)
        .await
        .map_err(|e| e.to_string())?;
    println!("Updated role:");
    print_role(&role);
    Ok(())
}

async fn delete_role(service: &Service, session: &SessionContext, id: &str) -> Result<(), String> {
    service
        .delete_role(session, id)
        .await
        .map_err(|e| e.to_string())?;
    println!("Deleted role {}", id);
    Ok(())
}

async fn set_permissions(
    service: &Service,
    session: &SessionContext,
    id: &str,
    permission_ids: Vec<String>,
) -> Result<(), String> {
    let role = service
        .set_role_permissions(session, id, permission_ids)
        .await
        .map_err(|e| e.to_string())?;
    println!("Updated role:");
    print_role(&role);
    Ok(())
}

async fn stats(service: &Service, session: &SessionContext) -> Result<(), String> {
    let stats = service
        .admin_stats(session)
        .await
        .map_err(|e| e.to_string())?;
    println!("managers:  {}", stats.manager_count);
    println!("employees: {}", stats.employee_count);
    Ok(())
}
