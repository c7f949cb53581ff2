pub mod enumerate;
pub mod fold;
