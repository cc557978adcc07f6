use serde::{Deserialize, Serialize};

/// Broad asset class used to group allocations and holdings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssetClass {
    Stocks,
    Bonds,
    #[serde(rename = "Real Estate")]
    RealEstate,
    Cash,
}

impl AssetClass {
    /// Display label, matching the serialized form.
    pub fn label(&self) -> &'static str {
        match self {
            AssetClass::Stocks => "Stocks",
            AssetClass::Bonds => "Bonds",
            AssetClass::RealEstate => "Real Estate",
            AssetClass::Cash => "Cash",
        }
    }
}

impl std::fmt::Display for AssetClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
