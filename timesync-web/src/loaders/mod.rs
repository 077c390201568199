pub mod list;
pub mod resources;

pub use list::{ListLoader, LoadOutcome};
pub use resources::{EmployeesResource, HistoryResource, Resource, TeamsResource};
