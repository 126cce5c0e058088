use super::CalculationError;
use crate::models::{Asset, Portfolio};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::collections::BTreeMap;

/// Totals the holdings and splits the value by asset type.
///
/// When the total is zero every type present reports 0%. Values too large
/// for a `Decimal` are reported as an overflow.
pub fn summarize(assets: &[Asset]) -> Result<Portfolio, CalculationError> {
    let mut total_value = dec!(0);
    let mut subtotals: BTreeMap<String, Decimal> = BTreeMap::new();

    for asset in assets {
        let value = asset
            .value()
            .ok_or_else(|| overflow(format!("value of asset {} overflows", asset.ticker)))?;
        total_value = total_value
            .checked_add(value)
            .ok_or_else(|| overflow("portfolio total value overflows".to_string()))?;

        let subtotal = subtotals.entry(asset.asset_type.clone()).or_insert(dec!(0));
        *subtotal = subtotal
            .checked_add(value)
            .ok_or_else(|| overflow(format!("subtotal of {} overflows", asset.asset_type)))?;
    }

    let distribution: BTreeMap<String, Decimal> = subtotals
        .into_iter()
        .map(|(asset_type, subtotal)| {
            let share = if total_value > dec!(0) {
                subtotal
                    .checked_div(total_value)
                    .and_then(|ratio| ratio.checked_mul(dec!(100)))
                    .ok_or_else(|| overflow(format!("share of {} overflows", asset_type)))?
            } else {
                dec!(0)
            };
            Ok((asset_type, share))
        })
        .collect::<Result<_, CalculationError>>()?;

    Ok(Portfolio {
        total_value,
        distribution,
        assets_quantity: assets.len(),
    })
}

fn overflow(message: String) -> CalculationError {
    CalculationError::Overflow(message)
}
