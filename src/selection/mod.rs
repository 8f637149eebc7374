mod set;

pub use set::SelectionSet;
