pub mod create_role;
pub mod create_user;
pub mod delete_employee;
pub mod delete_role;
pub mod delete_user;
pub mod entities;
pub mod get_admin_stats;
pub mod get_employee;
pub mod get_me;
pub mod get_permissions;
pub mod get_roles;
pub mod get_user_by_id;
pub mod get_users;
pub mod health_check;
pub mod login;
pub mod routes;
pub mod set_role_permissions;
pub mod set_user_active;
pub mod signup;
pub mod update_employee;
pub mod update_role;
pub mod update_user;
