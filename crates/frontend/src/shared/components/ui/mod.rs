pub mod select;
pub mod textarea;

pub use select::Select;
pub use textarea::Textarea;
