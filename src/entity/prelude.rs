//! 预导入模块，方便使用

pub use super::announcements::{
    ActiveModel as AnnouncementActiveModel, Entity as Announcements, Model as AnnouncementModel,
};
pub use super::classes::{ActiveModel as ClassActiveModel, Entity as Classes, Model as ClassModel};
pub use super::sessions::{
    ActiveModel as SessionActiveModel, Entity as Sessions, Model as SessionModel,
};
pub use super::students::{
    ActiveModel as StudentActiveModel, Entity as Students, Model as StudentModel,
};
pub use super::timetable_entries::{
    ActiveModel as TimetableEntryActiveModel, Entity as TimetableEntries,
    Model as TimetableEntryModel,
};
