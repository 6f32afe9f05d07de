pub mod all_different;
pub mod alternative;
pub mod exclude;
pub mod mandatory;
pub mod optional;
pub mod or;
pub mod required;
