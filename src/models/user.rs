use serde::{Deserialize, Serialize};

use crate::models::employee::Role;

/// Display-only principal. Employee-derived users share the employee's id;
/// HR and Manager accounts are synthetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserRole {
    #[serde(rename = "SDE")]
    Sde,
    #[serde(rename = "Product Manager")]
    ProductManager,
    #[serde(rename = "ML Engineer")]
    MlEngineer,
    #[serde(rename = "HR")]
    Hr,
    #[serde(rename = "Manager")]
    Manager,
}

impl From<Role> for UserRole {
    fn from(role: Role) -> Self {
        match role {
            Role::Sde => UserRole::Sde,
            Role::ProductManager => UserRole::ProductManager,
            Role::MlEngineer => UserRole::MlEngineer,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub avatar: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permissions: Option<Vec<String>>,
}
