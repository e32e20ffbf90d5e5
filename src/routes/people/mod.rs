mod handler;
mod model;

pub use handler::{create_person, delete_person, get_person, list_people};
pub use model::Person;
