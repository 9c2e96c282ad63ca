use serde::{Deserialize, Serialize};

/// The two groups of fields on the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Assets,
    Investments,
}

impl Category {
    pub const ALL: [Category; 2] = [Category::Assets, Category::Investments];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Assets => "assets",
            Self::Investments => "investments",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Assets => "Assets",
            Self::Investments => "Investments",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "assets" => Some(Self::Assets),
            "investments" => Some(Self::Investments),
            _ => None,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
