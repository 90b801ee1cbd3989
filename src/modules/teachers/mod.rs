pub mod schema;

pub use schema::TeacherSchema;
