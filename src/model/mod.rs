//! Domain records validated out of untyped request bodies.

mod student;

pub use student::Student;
