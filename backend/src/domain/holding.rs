//! Holdings: one recorded asset entry belonging to a user.
//!
//! Holdings are created and deleted, never edited. Aggregation code only ever
//! sees a snapshot (`&[Holding]`) in storage order.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::user::Username;

/// Fixed set of asset classes offered by the add-asset form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
pub enum AssetClass {
    Stock,
    Crypto,
    #[serde(rename = "Mutual Fund")]
    MutualFund,
    #[serde(rename = "Real Estate")]
    RealEstate,
    Gold,
    Others,
}

impl AssetClass {
    /// Every class in form order.
    pub const ALL: [Self; 6] = [
        Self::Stock,
        Self::Crypto,
        Self::MutualFund,
        Self::RealEstate,
        Self::Gold,
        Self::Others,
    ];

    /// Display label, also the value persisted in `portfolio.asset_type`.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Stock => "Stock",
            Self::Crypto => "Crypto",
            Self::MutualFund => "Mutual Fund",
            Self::RealEstate => "Real Estate",
            Self::Gold => "Gold",
            Self::Others => "Others",
        }
    }
}

impl fmt::Display for AssetClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for AssetClass {
    type Err = HoldingValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|class| class.label() == s)
            .ok_or_else(|| HoldingValidationError::UnknownAssetClass(s.to_owned()))
    }
}

/// Validation failures for the add-asset form.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HoldingValidationError {
    #[error("asset name must not be empty")]
    EmptyAssetName,
    #[error("value must be greater than zero")]
    NonPositiveValue,
    #[error("unknown asset class: {0}")]
    UnknownAssetClass(String),
}

/// Store-assigned holding identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct HoldingId(i64);

impl HoldingId {
    #[must_use]
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for HoldingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A validated holding that has not been stored yet.
///
/// # Examples
/// ```
/// use finsight::domain::{AssetClass, NewHolding};
///
/// let holding = NewHolding::try_new(" Apple ", AssetClass::Stock, 1500.0).expect("valid");
/// assert_eq!(holding.asset_name(), "Apple");
/// assert!(NewHolding::try_new("Apple", AssetClass::Stock, 0.0).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct NewHolding {
    asset_name: String,
    asset_class: AssetClass,
    value: f64,
}

impl NewHolding {
    pub fn try_new(
        asset_name: &str,
        asset_class: AssetClass,
        value: f64,
    ) -> Result<Self, HoldingValidationError> {
        let name = asset_name.trim();
        if name.is_empty() {
            return Err(HoldingValidationError::EmptyAssetName);
        }
        if !value.is_finite() || value <= 0.0 {
            return Err(HoldingValidationError::NonPositiveValue);
        }
        Ok(Self {
            asset_name: name.to_owned(),
            asset_class,
            value,
        })
    }

    pub fn asset_name(&self) -> &str {
        self.asset_name.as_str()
    }

    pub fn asset_class(&self) -> AssetClass {
        self.asset_class
    }

    pub fn value(&self) -> f64 {
        self.value
    }
}

/// A stored holding.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Holding {
    #[schema(value_type = i64, example = 1)]
    id: HoldingId,
    #[serde(skip)]
    owner: Username,
    #[schema(example = "Apple Stock")]
    asset_name: String,
    asset_class: AssetClass,
    #[schema(example = 150000.0)]
    value: f64,
    #[schema(value_type = String, example = "2026-10-18T09:30:00")]
    added_at: NaiveDateTime,
}

impl Holding {
    /// Rebuild a holding from stored parts; no validation is applied so
    /// historical rows load as they were written.
    pub fn from_parts(
        id: HoldingId,
        owner: Username,
        asset_name: String,
        asset_class: AssetClass,
        value: f64,
        added_at: NaiveDateTime,
    ) -> Self {
        Self {
            id,
            owner,
            asset_name,
            asset_class,
            value,
            added_at,
        }
    }

    pub fn id(&self) -> HoldingId {
        self.id
    }

    pub fn owner(&self) -> &Username {
        &self.owner
    }

    pub fn asset_name(&self) -> &str {
        self.asset_name.as_str()
    }

    pub fn asset_class(&self) -> AssetClass {
        self.asset_class
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn added_at(&self) -> NaiveDateTime {
        self.added_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Stock", AssetClass::Stock)]
    #[case("Crypto", AssetClass::Crypto)]
    #[case("Mutual Fund", AssetClass::MutualFund)]
    #[case("Real Estate", AssetClass::RealEstate)]
    #[case("Gold", AssetClass::Gold)]
    #[case("Others", AssetClass::Others)]
    fn labels_parse_and_serialise(#[case] label: &str, #[case] class: AssetClass) {
        assert_eq!(label.parse::<AssetClass>(), Ok(class));
        let json = serde_json::to_value(class).expect("serialise");
        assert_eq!(json.as_str(), Some(label));
    }

    #[rstest]
    #[case("stock")]
    #[case("Bonds")]
    #[case("")]
    fn unknown_labels_are_rejected(#[case] label: &str) {
        assert_eq!(
            label.parse::<AssetClass>(),
            Err(HoldingValidationError::UnknownAssetClass(label.to_owned()))
        );
    }

    #[rstest]
    #[case("", 10.0, HoldingValidationError::EmptyAssetName)]
    #[case("   ", 10.0, HoldingValidationError::EmptyAssetName)]
    #[case("Bitcoin", 0.0, HoldingValidationError::NonPositiveValue)]
    #[case("Bitcoin", -5.0, HoldingValidationError::NonPositiveValue)]
    #[case("Bitcoin", f64::NAN, HoldingValidationError::NonPositiveValue)]
    #[case("Bitcoin", f64::INFINITY, HoldingValidationError::NonPositiveValue)]
    fn invalid_new_holdings(
        #[case] name: &str,
        #[case] value: f64,
        #[case] expected: HoldingValidationError,
    ) {
        let err = NewHolding::try_new(name, AssetClass::Crypto, value)
            .expect_err("invalid holding must fail");
        assert_eq!(err, expected);
    }

    #[rstest]
    fn holding_json_hides_owner() {
        let holding = Holding::from_parts(
            HoldingId::new(7),
            Username::new("ada").expect("username"),
            "Gold ETF".to_owned(),
            AssetClass::Gold,
            2500.0,
            NaiveDateTime::default(),
        );
        let json = serde_json::to_value(&holding).expect("serialise");
        assert_eq!(json.get("id").and_then(serde_json::Value::as_i64), Some(7));
        assert_eq!(
            json.get("assetClass").and_then(serde_json::Value::as_str),
            Some("Gold")
        );
        assert!(json.get("owner").is_none());
    }
}
