use serde::{Deserialize, Serialize};

/// Closed set of job functions. The role decides which metric schema,
/// feedback templates and goal templates apply to an employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "SDE")]
    Sde,
    #[serde(rename = "Product Manager")]
    ProductManager,
    #[serde(rename = "ML Engineer")]
    MlEngineer,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Sde, Role::ProductManager, Role::MlEngineer];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Sde => "SDE",
            Role::ProductManager => "Product Manager",
            Role::MlEngineer => "ML Engineer",
        }
    }

    pub fn from_str(s: &str) -> Result<Self, String> {
        match s {
            "SDE" => Ok(Role::Sde),
            "Product Manager" => Ok(Role::ProductManager),
            "ML Engineer" => Ok(Role::MlEngineer),
            _ => Err(format!("Invalid role: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: String,
    pub name: String,
    pub role: Role,
    pub email: String,
    pub avatar: String,
    pub department: String,
    pub manager: String,
    /// YYYY-MM-DD
    pub join_date: String,
    pub experience_years: u32,
    pub skills: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub education: Option<String>,
}
