use crate::{
    errors::CustomError,
    models::{conversion::Conversion, price::PriceTable},
};

pub const DEFAULT_FROM_CURRENCY: &str = "USD";
pub const DEFAULT_TO_CURRENCY: &str = "ETH";

/// Converts `amount` of `from` into `to`. Prices are USD per unit, so the
/// value is carried through USD.
pub fn convert(
    amount: f64,
    from: &str,
    to: &str,
    prices: &PriceTable,
) -> Result<Conversion, CustomError> {
    if !amount.is_finite() || amount <= 0.0 {
        return Err(CustomError::InvalidAmountError(format!(
            "Please enter a valid amount, got {}",
            amount
        )));
    }

    let from_rate = usable_rate(prices, from)?;
    let to_rate = usable_rate(prices, to)?;

    let converted_amount = amount * from_rate / to_rate;

    Ok(Conversion {
        amount,
        from_currency: from.to_string(),
        to_currency: to.to_string(),
        converted_amount,
        formatted_amount: format!("{:.6}", converted_amount),
    })
}

fn usable_rate(prices: &PriceTable, currency: &str) -> Result<f64, CustomError> {
    match prices.get(currency) {
        Some(rate) if rate.is_finite() && rate > 0.0 => Ok(rate),
        _ => Err(CustomError::RateUnavailableError(currency.to_string())),
    }
}
