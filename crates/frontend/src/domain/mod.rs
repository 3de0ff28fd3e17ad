pub mod attendance;
pub mod banners;
pub mod classes;
pub mod exam_routines;
pub mod exam_types;
pub mod lessons;
pub mod notices;
pub mod routines;
pub mod sections;
pub mod students;
pub mod teachers;
