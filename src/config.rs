//! Application configuration.
//!
//! The owner identity and app settings are plain values constructed by the
//! caller and passed into [`Catalog::new`](crate::catalog::Catalog::new),
//! so tests and alternate deployments can substitute their own.

/// The fixed identity the application operates as.
#[derive(Debug, Clone, PartialEq)]
pub struct OwnerProfile {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub role: String,
    pub avatar_url: String,
    pub join_date: String,
    pub permissions: Vec<String>,
}

/// Application-wide settings.
#[derive(Debug, Clone, PartialEq)]
pub struct AppSettings {
    pub app_name: String,
    pub version: String,
    /// When set, all data lives in the local store and recipes are
    /// auto-approved per `auto_approve`.
    pub local_mode: bool,
    pub auto_approve: bool,
    pub max_recipes_per_user: u32,
    pub allow_guest_viewing: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub owner: OwnerProfile,
    pub settings: AppSettings,
}

impl Default for AppConfig {
    /// The shipped configuration: the single owner identity and local-mode
    /// settings.
    fn default() -> Self {
        Self {
            owner: OwnerProfile {
                name: "K Shruthi".to_string(),
                email: "shruthik1603@gmail.com".to_string(),
                phone: "6300833287".to_string(),
                role: "owner".to_string(),
                avatar_url:
                    "https://images.pexels.com/photos/1239291/pexels-photo-1239291.jpeg?auto=compress&cs=tinysrgb&w=150"
                        .to_string(),
                join_date: "2024-01-01".to_string(),
                permissions: vec!["all".to_string()],
            },
            settings: AppSettings {
                app_name: "RecipeShare Pro".to_string(),
                version: "1.0.0".to_string(),
                local_mode: true,
                auto_approve: true,
                max_recipes_per_user: 100,
                allow_guest_viewing: true,
            },
        }
    }
}

impl AppConfig {
    /// Whether the given email identifies the admin. The owner is the one
    /// and only admin identity.
    pub fn is_admin(&self, email: &str) -> bool {
        email == self.owner.email
    }
}
