use std::fmt;

use serde::{Deserialize, Serialize};

/// The closed set of document categories the service can assign.
///
/// `ALL` is in lexical order; argmax scans keep the first maximum, so ties
/// resolve to the lexically smallest category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Finance,
    HR,
    Legal,
    Medical,
    Technical,
}

impl Category {
    pub const COUNT: usize = 5;

    pub const ALL: [Category; Category::COUNT] = [
        Category::Finance,
        Category::HR,
        Category::Legal,
        Category::Medical,
        Category::Technical,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Finance => "Finance",
            Category::HR => "HR",
            Category::Legal => "Legal",
            Category::Medical => "Medical",
            Category::Technical => "Technical",
        }
    }

    pub fn index(&self) -> usize {
        Category::ALL
            .iter()
            .position(|c| c == self)
            .unwrap_or_default()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
