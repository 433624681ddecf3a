use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Creator,
    Participant,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Role::Creator => "creator",
            Role::Participant => "participant",
        };
        write!(f, "{}", s)
    }
}

/// Trip participant with derived balance fields. `total_paid`, `total_owed`
/// and `balance` are zero until the balance calculator populates them; they
/// are rebuilt on every reconciliation pass and never persisted.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct ParticipantInfo {
    pub id: String,
    pub trip_id: String,
    pub user_id: String,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub role: Role,
    #[serde(default)]
    pub total_paid: f64,
    #[serde(default)]
    pub total_owed: f64,
    #[serde(default)]
    pub balance: f64,
}

impl ParticipantInfo {
    pub fn is_creator(&self) -> bool {
        self.role == Role::Creator
    }

    pub fn display_name(&self) -> String {
        match (&self.first_name, &self.last_name) {
            (Some(first), Some(last)) => format!("{} {}", first, last),
            (Some(first), None) => first.clone(),
            (None, Some(last)) => last.clone(),
            (None, None) => self.email.clone(),
        }
    }
}
