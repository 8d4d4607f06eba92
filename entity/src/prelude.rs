pub use super::driver::Entity as Driver;
pub use super::expense::Entity as Expense;
pub use super::fuel_log::Entity as FuelLog;
pub use super::maintenance_log::Entity as MaintenanceLog;
pub use super::trip::Entity as Trip;
pub use super::user::Entity as User;
pub use super::vehicle::Entity as Vehicle;
