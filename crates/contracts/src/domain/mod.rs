pub mod attendance;
pub mod banner;
pub mod exam_routine;
pub mod exam_type;
pub mod lesson;
pub mod notice;
pub mod routine;
pub mod school_class;
pub mod section;
pub mod student;
pub mod teacher;
