pub mod event;
pub mod report;
pub mod report_type;
pub mod tag;
pub mod template;
