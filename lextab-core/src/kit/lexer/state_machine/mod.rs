pub mod builder;
pub mod machine;
pub mod table;

pub use builder::Builder;
pub use machine::LexStateMachine;
pub use table::TransitionTable;
