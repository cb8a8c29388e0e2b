//! CSV Chat UI Module (MVVM Standard)
//!
//! Structure:
//! - model.rs: API functions for the backend
//! - view_model.rs: CsvChatVm, runs reducer transitions and backend commands
//! - view.rs: Main component CsvChat (history pane + input footer)
//! - turn_view.rs: One question/answer pair
//! - code_block.rs: Highlighted code with copy button

mod code_block;
mod model;
mod turn_view;
mod view;
mod view_model;

pub use code_block::CodeBlock;
pub use turn_view::TurnView;
pub use view::CsvChat;
pub use view_model::CsvChatVm;
