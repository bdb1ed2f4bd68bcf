//! Identity column headers of the source layout.

pub(crate) const SCENARIO: &str = "scenario";
pub(crate) const CATEGORY: &str = "category";
pub(crate) const PARAMETER: &str = "parameter";
pub(crate) const CONST: &str = "const";
