use email_address::EmailAddress;
use serde::{Deserialize, Serialize};

use crate::errors::ServiceError;

/// Input shape shared by create and update. Update is a full replace, so
/// all three fields are required; a missing field is a deserialization
/// failure handled by the framework.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CompanyPayload {
    pub name: String,
    pub email: String,
    pub website: String,
}

impl CompanyPayload {
    /// Reports the first violation: blank name or malformed email.
    /// `website` carries no format constraint.
    pub fn validate(&self) -> Result<(), ServiceError> {
        if self.name.trim().is_empty() {
            return Err(ServiceError::Validation("name must not be empty".into()));
        }
        if !EmailAddress::is_valid(&self.email) {
            return Err(ServiceError::Validation(format!(
                "'{}' is not a valid email address",
                self.email
            )));
        }
        Ok(())
    }
}

impl From<CompanyPayload> for models::company::NewCompany {
    fn from(p: CompanyPayload) -> Self {
        Self {
            name: p.name,
            email: p.email,
            website: p.website,
        }
    }
}

/// Output shape: the persisted record including its assigned id.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CompanyOut {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub website: String,
}

impl From<models::company::Model> for CompanyOut {
    fn from(m: models::company::Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
            email: m.email,
            website: m.website,
        }
    }
}
