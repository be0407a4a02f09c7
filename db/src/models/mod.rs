pub mod attendance_record;
pub mod course;
pub mod user;
