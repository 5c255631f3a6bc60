pub mod assignments;
pub mod imports;
