/// History entity module
pub mod history;

pub use history::Entity as History;
