pub mod guid;
pub mod player;
pub mod quest;
pub mod template;
pub mod text;
