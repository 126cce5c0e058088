use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Asset {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(rename = "type")]
    pub asset_type: String,
    pub ticker: String,
    pub price: Decimal,
    pub percentage: Decimal,
    pub score: i64,
    pub quantity: u64,
}

impl Asset {
    /// Market value of the position: price × quantity, or `None` when it
    /// does not fit in a `Decimal`.
    pub fn value(&self) -> Option<Decimal> {
        self.price.checked_mul(Decimal::from(self.quantity))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Contribution {
    #[serde(rename = "userID")]
    pub user_id: i64,
    pub amount: Decimal,
    pub date: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: i64,
    #[serde(rename = "userID")]
    pub user_id: i64,
    pub asset_type: String,
    pub percentage: Decimal,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: i64,
    pub criterion: String,
    pub question: String,
    pub asset_type: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct AssetQuestionAnswer {
    #[serde(rename = "assetID")]
    pub asset_id: i64,
    #[serde(rename = "questionID")]
    pub question_id: i64,
    pub answer: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentSuggestion {
    #[serde(rename = "assetID", default, skip_serializing_if = "Option::is_none")]
    pub asset_id: Option<i64>,
    pub suggested_amount: Decimal,
    pub suggested_quantity: i64,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Portfolio {
    pub total_value: Decimal,
    /// Asset type -> share of total value, in percent.
    pub distribution: BTreeMap<String, Decimal>,
    pub assets_quantity: usize,
}

#[derive(Debug, Default, Deserialize)]
pub struct AssetFilter {
    #[serde(rename = "type")]
    pub asset_type: Option<String>,
}

impl AssetFilter {
    /// An absent or empty `type` matches every asset.
    pub fn matches(&self, asset: &Asset) -> bool {
        match self.asset_type.as_deref() {
            None | Some("") => true,
            Some(asset_type) => asset.asset_type == asset_type,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SuggestionQuery {
    pub amount: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn asset_uses_wire_field_names() {
        let asset: Asset = serde_json::from_str(
            r#"{"type":"Ações Nacionais","ticker":"ITUB4","price":31.64,"percentage":1.83,"score":13,"quantity":200}"#,
        )
        .unwrap();

        assert_eq!(asset.id, None);
        assert_eq!(asset.asset_type, "Ações Nacionais");
        assert_eq!(asset.price, dec!(31.64));
        assert_eq!(asset.value(), Some(dec!(6328)));

        let json = serde_json::to_value(&asset).unwrap();
        assert!(json.get("id").is_none());
        assert_eq!(json["type"], "Ações Nacionais");
    }

    #[test]
    fn contribution_and_answer_use_upper_case_ids() {
        let contribution: Contribution =
            serde_json::from_str(r#"{"userID":7,"amount":250.5,"date":"2024-01-05"}"#).unwrap();
        assert_eq!(contribution.user_id, 7);
        assert_eq!(contribution.amount, dec!(250.5));

        let answer: AssetQuestionAnswer =
            serde_json::from_str(r#"{"assetID":1,"questionID":2,"answer":"sim"}"#).unwrap();
        let json = serde_json::to_value(&answer).unwrap();
        assert_eq!(json["assetID"], 1);
        assert_eq!(json["questionID"], 2);
    }

    #[test]
    fn omitted_fields_decode_to_zero_values() {
        let goal: Goal =
            serde_json::from_str(r#"{"userID":1,"assetType":"A","percentage":30}"#).unwrap();
        assert_eq!(goal.id, 0);
        assert_eq!(goal.user_id, 1);

        let asset: Asset = serde_json::from_str(r#"{"ticker":"BBB1"}"#).unwrap();
        assert_eq!(asset.id, None);
        assert_eq!(asset.asset_type, "");
        assert_eq!(asset.price, Decimal::ZERO);
        assert_eq!(asset.score, 0);
        assert_eq!(asset.quantity, 0);

        let answer: AssetQuestionAnswer = serde_json::from_str("{}").unwrap();
        assert_eq!(answer, AssetQuestionAnswer::default());
    }

    #[test]
    fn oversized_position_has_no_value() {
        let asset = Asset {
            price: Decimal::MAX,
            quantity: 2,
            ..Asset::default()
        };
        assert_eq!(asset.value(), None);
    }

    #[test]
    fn empty_type_filter_matches_everything() {
        let asset = Asset {
            id: Some(1),
            asset_type: "A".to_string(),
            ticker: "AAA1".to_string(),
            price: dec!(1),
            percentage: dec!(1),
            score: 0,
            quantity: 1,
        };

        assert!(AssetFilter { asset_type: None }.matches(&asset));
        assert!(AssetFilter { asset_type: Some(String::new()) }.matches(&asset));
        assert!(AssetFilter { asset_type: Some("A".to_string()) }.matches(&asset));
        assert!(!AssetFilter { asset_type: Some("B".to_string()) }.matches(&asset));
    }
}
