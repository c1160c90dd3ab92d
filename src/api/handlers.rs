use actix_web::{get, post, web, HttpResponse};

use crate::{
    errors::CustomError,
    models::{
        api_response::success_response,
        balance::FormatBalancesRequest,
        conversion::ConversionRequest,
        price::{CurrencyList, PriceList},
        summation::{SumMethod, SumQuery},
    },
    services::{
        balance_formatter,
        converter::{self, DEFAULT_FROM_CURRENCY, DEFAULT_TO_CURRENCY},
        summation,
    },
};

use super::AppState;

fn checked_n(state: &AppState, n: i64) -> Result<i64, CustomError> {
    if n > state.config.sum_max_n {
        return Err(CustomError::ValidationError(format!(
            "n must be at most {}, got {}",
            state.config.sum_max_n, n
        )));
    }
    Ok(n)
}

#[get("/sum/{n}")]
async fn sum_to_n(
    state: web::Data<AppState>,
    n: web::Path<i64>,
    query: web::Query<SumQuery>,
) -> Result<HttpResponse, CustomError> {
    let n = checked_n(&state, n.into_inner())?;
    let method = match query.method.as_deref() {
        Some(raw) => raw.parse().map_err(CustomError::ValidationError)?,
        None => SumMethod::default(),
    };

    Ok(success_response(summation::sum_to_n(method, n)?))
}

#[get("/sum/{n}/compare")]
async fn compare_sums(
    state: web::Data<AppState>,
    n: web::Path<i64>,
) -> Result<HttpResponse, CustomError> {
    let n = checked_n(&state, n.into_inner())?;
    let results = SumMethod::ALL
        .into_iter()
        .map(|method| summation::sum_to_n(method, n))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(success_response(results))
}

#[get("/prices")]
async fn list_prices(state: web::Data<AppState>) -> HttpResponse {
    success_response(PriceList {
        fetched_at: state.prices.fetched_at(),
        prices: state.prices.snapshot().quotes(),
    })
}

#[get("/currencies")]
async fn list_currencies(state: web::Data<AppState>) -> HttpResponse {
    success_response(CurrencyList {
        currencies: state.prices.snapshot().currencies(),
        default_from: DEFAULT_FROM_CURRENCY.to_string(),
        default_to: DEFAULT_TO_CURRENCY.to_string(),
    })
}

#[post("/prices/refresh")]
async fn refresh_prices(state: web::Data<AppState>) -> Result<HttpResponse, CustomError> {
    let summary = state.price_service.refresh(&state.prices).await?;
    Ok(success_response(summary))
}

#[post("/convert")]
async fn convert_currency(
    state: web::Data<AppState>,
    req: web::Json<ConversionRequest>,
) -> Result<HttpResponse, CustomError> {
    let prices = state.prices.snapshot();
    let conversion = converter::convert(req.amount, &req.from_currency, &req.to_currency, &prices)?;
    Ok(success_response(conversion))
}

#[post("/balances/format")]
async fn format_balances(
    state: web::Data<AppState>,
    req: web::Json<FormatBalancesRequest>,
) -> HttpResponse {
    let FormatBalancesRequest { balances, prices } = req.into_inner();
    let prices = prices.unwrap_or_else(|| state.prices.snapshot());

    success_response(balance_formatter::format(&balances, &prices))
}
