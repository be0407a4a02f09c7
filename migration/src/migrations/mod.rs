pub mod m202508300001_create_users;
pub mod m202508300002_create_courses;
pub mod m202508300003_create_attendance_records;
