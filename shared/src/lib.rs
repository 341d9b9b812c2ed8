use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use chrono::NaiveDateTime;
use uuid::Uuid;

/// Built-in modal views the client knows how to mount by name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModalKind {
    /// Form for creating a brand new domain
    CreateDomain,
    /// Form for joining an existing domain
    JoinDomain,
}

impl ModalKind {
    /// Title shown in the modal header
    pub fn title(&self) -> &'static str {
        match self {
            ModalKind::CreateDomain => "Create a Domain",
            ModalKind::JoinDomain => "Join a Domain",
        }
    }
}

impl fmt::Display for ModalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModalKind::CreateDomain => write!(f, "CreateDomain"),
            ModalKind::JoinDomain => write!(f, "JoinDomain"),
        }
    }
}

/// A user account as returned by `GET /api/users/{id}`.
///
/// Unlike the domain types, users travel with snake_case field names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    pub display_name: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl User {
    /// Full name when both parts are known, otherwise the display name
    pub fn full_name(&self) -> String {
        match (&self.first_name, &self.last_name) {
            (Some(first), Some(last)) => format!("{} {}", first, last),
            _ => self.display_name.clone(),
        }
    }
}

/// A domain (community space) the user belongs to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Domain {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub banner_url: Option<String>,
    pub icon_url: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Request body for `POST /api/domains`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDomain {
    pub name: String,
    pub details: Option<DomainDetails>,
}

/// Optional presentation details of a domain
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainDetails {
    pub description: Option<String>,
    pub banner_url: Option<String>,
    pub icon_url: Option<String>,
}

impl DomainDetails {
    /// True when no detail field carries a value
    pub fn is_empty(&self) -> bool {
        self.description.is_none() && self.banner_url.is_none() && self.icon_url.is_none()
    }
}

/// Request body for `POST /api/domains/memberships`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDomainMembership {
    pub domain_id: Uuid,
    pub user_id: Uuid,
    pub role_name: String,
}

/// Top-level tabs of the main sidebar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TabType {
    Domains,
    Friends,
    Settings,
    Logout,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabTypeError(pub String);

impl fmt::Display for TabTypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown tab type: {}", self.0)
    }
}

impl std::error::Error for TabTypeError {}

impl FromStr for TabType {
    type Err = TabTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "domains" => Ok(TabType::Domains),
            "friends" => Ok(TabType::Friends),
            "settings" => Ok(TabType::Settings),
            "logout" => Ok(TabType::Logout),
            other => Err(TabTypeError(other.to_string())),
        }
    }
}

/// A sidebar tab with its icon
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TabInfo {
    pub name: TabType,
    pub icon: String,
}

impl TabInfo {
    /// The tabs shown in the main sidebar, top to bottom
    pub fn default_tabs() -> Vec<TabInfo> {
        vec![
            TabInfo { name: TabType::Domains, icon: "mdi:view-grid".to_string() },
            TabInfo { name: TabType::Friends, icon: "mdi:account-multiple".to_string() },
            TabInfo { name: TabType::Settings, icon: "mdi:cog".to_string() },
            TabInfo { name: TabType::Logout, icon: "mdi:logout".to_string() },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_uses_camel_case_wire_names() {
        let json = r#"{
            "id": "6f1c1f34-2a4b-4f0e-9a57-0d6a4c8f1b2e",
            "name": "Rustaceans",
            "description": null,
            "bannerUrl": "https://example.com/banner.png",
            "iconUrl": null,
            "createdAt": "2023-12-14T01:02:02",
            "updatedAt": "2023-12-14T01:02:02"
        }"#;

        let domain: Domain = serde_json::from_str(json).unwrap();
        assert_eq!(domain.name, "Rustaceans");
        assert_eq!(domain.banner_url.as_deref(), Some("https://example.com/banner.png"));
        assert!(domain.icon_url.is_none());
    }

    #[test]
    fn test_new_domain_serializes_details() {
        let request = NewDomain {
            name: "Book Club".to_string(),
            details: Some(DomainDetails {
                description: Some("Monthly reads".to_string()),
                ..DomainDetails::default()
            }),
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["name"], "Book Club");
        assert_eq!(value["details"]["description"], "Monthly reads");
        assert!(value["details"]["bannerUrl"].is_null());
    }

    #[test]
    fn test_domain_details_is_empty() {
        assert!(DomainDetails::default().is_empty());
        let details = DomainDetails {
            icon_url: Some("icon.png".to_string()),
            ..DomainDetails::default()
        };
        assert!(!details.is_empty());
    }

    #[test]
    fn test_tab_type_parsing() {
        assert_eq!("domains".parse::<TabType>().unwrap(), TabType::Domains);
        assert_eq!("logout".parse::<TabType>().unwrap(), TabType::Logout);
        assert!("inbox".parse::<TabType>().is_err());

        let json = serde_json::to_string(&TabType::Friends).unwrap();
        assert_eq!(json, "\"friends\"");
    }

    #[test]
    fn test_user_decodes_snake_case_wire_names() {
        let json = r#"{
            "id": "u-1",
            "username": "ferris",
            "display_name": "Ferris",
            "first_name": null,
            "last_name": null,
            "created_at": "2023-12-14T01:02:02",
            "updated_at": "2023-12-14T01:02:02"
        }"#;

        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.id, "u-1");
        assert_eq!(user.display_name, "Ferris");
        assert!(user.first_name.is_none());
        assert_eq!(user.full_name(), "Ferris");

        let value = serde_json::to_value(&user).unwrap();
        assert_eq!(value["display_name"], "Ferris");
        assert!(value.get("displayName").is_none());
    }

    #[test]
    fn test_user_full_name_falls_back_to_display_name() {
        let mut user = User {
            id: "user-1".to_string(),
            username: "ferris".to_string(),
            display_name: "Ferris".to_string(),
            first_name: Some("Ferris".to_string()),
            last_name: Some("Crab".to_string()),
            created_at: NaiveDateTime::default(),
            updated_at: NaiveDateTime::default(),
        };
        assert_eq!(user.full_name(), "Ferris Crab");

        user.last_name = None;
        assert_eq!(user.full_name(), "Ferris");
    }

    #[test]
    fn test_modal_kind_title() {
        assert_eq!(ModalKind::CreateDomain.title(), "Create a Domain");
        assert_eq!(ModalKind::JoinDomain.to_string(), "JoinDomain");
    }
}
