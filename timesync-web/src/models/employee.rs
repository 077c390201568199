use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Employee {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default, deserialize_with = "crate::models::string_or_number")]
    pub employee_id: Option<String>,
    #[serde(default)]
    pub user_slug: Option<String>,
}

impl Employee {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}
