use super::CalculationError;
use crate::models::{Asset, InvestmentSuggestion};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Splits `amount` across the assets by their target percentage.
///
/// The amount is not validated: zero or negative values flow through the
/// arithmetic. An asset priced at zero or below gets a quantity of 0.
/// Results that do not fit a `Decimal`, or quantities outside `i64`, fail
/// the whole request.
pub fn suggest(
    amount: Decimal,
    assets: &[Asset],
) -> Result<Vec<InvestmentSuggestion>, CalculationError> {
    assets
        .iter()
        .map(|asset| {
            let suggested_amount = asset
                .percentage
                .checked_div(dec!(100))
                .and_then(|share| amount.checked_mul(share))
                .ok_or_else(|| {
                    CalculationError::Overflow(format!(
                        "suggested amount for {} overflows",
                        asset.ticker
                    ))
                })?;

            Ok(InvestmentSuggestion {
                asset_id: asset.id,
                suggested_amount,
                suggested_quantity: units_for(suggested_amount, asset)?,
            })
        })
        .collect()
}

fn units_for(amount: Decimal, asset: &Asset) -> Result<i64, CalculationError> {
    if asset.price <= dec!(0) {
        return Ok(0);
    }

    amount
        .checked_div(asset.price)
        .and_then(|units| units.floor().to_i64())
        .ok_or_else(|| {
            CalculationError::Overflow(format!(
                "suggested quantity for {} is out of range",
                asset.ticker
            ))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::demo_assets;

    fn target(id: i64, percentage: Decimal, price: Decimal) -> Asset {
        Asset {
            id: Some(id),
            asset_type: "A".to_string(),
            ticker: "AAA3".to_string(),
            price,
            percentage,
            score: 0,
            quantity: 0,
        }
    }

    #[test]
    fn allocates_by_target_percentage() {
        let suggestions = suggest(dec!(1000), &[target(1, dec!(20), dec!(50))]).unwrap();

        assert_eq!(
            suggestions,
            vec![InvestmentSuggestion {
                asset_id: Some(1),
                suggested_amount: dec!(200),
                suggested_quantity: 4,
            }]
        );
    }

    #[test]
    fn quantity_is_floored() {
        let suggestions = suggest(dec!(10000), &demo_assets()).unwrap();
        let amounts: Vec<_> = suggestions.iter().map(|s| s.suggested_amount).collect();
        let quantities: Vec<_> = suggestions.iter().map(|s| s.suggested_quantity).collect();

        assert_eq!(amounts, vec![dec!(397), dec!(267), dec!(183)]);
        // 397 / 100.95, 267 / 54.50, 183 / 31.64
        assert_eq!(quantities, vec![3, 4, 5]);
    }

    #[test]
    fn negative_amount_flows_through() {
        let suggestions = suggest(dec!(-1000), &[target(1, dec!(20), dec!(30))]).unwrap();

        assert_eq!(suggestions[0].suggested_amount, dec!(-200));
        assert_eq!(suggestions[0].suggested_quantity, -7);
    }

    #[test]
    fn zero_price_yields_zero_quantity() {
        let suggestions = suggest(dec!(500), &[target(1, dec!(50), dec!(0))]).unwrap();

        assert_eq!(suggestions[0].suggested_amount, dec!(250));
        assert_eq!(suggestions[0].suggested_quantity, 0);
    }

    #[test]
    fn no_assets_no_suggestions() {
        assert!(suggest(dec!(1000), &[]).unwrap().is_empty());
    }

    #[test]
    fn tiny_price_overflow_is_an_error() {
        let dust = target(1, dec!(20), dec!(0.00000000000000000001));
        let result = suggest(dec!(10000000000), &[dust]);

        assert_eq!(
            result,
            Err(CalculationError::Overflow(
                "suggested quantity for AAA3 is out of range".to_string()
            ))
        );
    }

    #[test]
    fn huge_amount_overflow_is_an_error() {
        let result = suggest(Decimal::MAX, &[target(1, dec!(200), dec!(10))]);

        assert_eq!(
            result,
            Err(CalculationError::Overflow(
                "suggested amount for AAA3 overflows".to_string()
            ))
        );
    }

    #[test]
    fn quantity_beyond_i64_is_an_error_not_zero() {
        // floor(1e12 / 1e-10) = 1e22, which no i64 holds.
        let result = suggest(dec!(1000000000000), &[target(1, dec!(100), dec!(0.0000000001))]);

        assert!(matches!(result, Err(CalculationError::Overflow(_))));
    }
}
