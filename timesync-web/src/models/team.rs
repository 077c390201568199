use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Team {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub holiday_approver_name: Option<String>,
    #[serde(default)]
    pub department_name: Option<String>,
    #[serde(default)]
    pub employee_count: Option<u64>,
}
