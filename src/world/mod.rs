pub mod clock;
pub mod content;
pub mod locale;
pub mod map;
pub mod names;
