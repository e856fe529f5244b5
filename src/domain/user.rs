//! User domain entity and related types.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Contact details owned by a [`User`] record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ContactInfo {
    /// Email address
    #[schema(example = "jane.doe@example.com")]
    pub email: String,
    /// Mobile phone number
    #[schema(example = "555-1234")]
    pub mobile: String,
}

/// User domain entity.
///
/// Serializes in the wire shape:
/// `{name, jobTitle, communicateInformation: {email, mobile}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Full display name
    #[schema(example = "Jane Doe")]
    pub name: String,
    /// Job title
    #[schema(example = "Engineer")]
    pub job_title: String,
    /// Contact details, created and destroyed with the record
    pub communicate_information: ContactInfo,
}

/// User transport shape for create/update requests.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    /// Given name
    #[validate(length(min = 1, message = "firstName cannot be empty"))]
    #[schema(example = "Jane")]
    pub first_name: String,
    /// Family name
    #[validate(length(min = 1, message = "lastName cannot be empty"))]
    #[schema(example = "Doe")]
    pub last_name: String,
    /// Job title
    #[schema(example = "Engineer")]
    pub job_title: String,
    /// Mobile phone number
    #[schema(example = "555-1234")]
    pub mobile: String,
    /// Email address; stored empty when omitted
    #[serde(default)]
    #[validate(email(message = "Invalid email format"))]
    #[schema(example = "jane.doe@example.com")]
    pub email: Option<String>,
}

impl From<UserDto> for User {
    /// Map the transport shape into a domain record.
    ///
    /// `name` joins `firstName` and `lastName` with a single space; a lone
    /// non-empty part is used as-is.
    fn from(dto: UserDto) -> Self {
        let name = if dto.first_name.is_empty() {
            dto.last_name
        } else if dto.last_name.is_empty() {
            dto.first_name
        } else {
            format!("{} {}", dto.first_name, dto.last_name)
        };

        Self {
            name,
            job_title: dto.job_title,
            communicate_information: ContactInfo {
                email: dto.email.unwrap_or_default(),
                mobile: dto.mobile,
            },
        }
    }
}
