use napi::Result as NapiResult;
use napi_derive::napi;

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

// ---------------------------------------------------------------------------
// Word counter
// ---------------------------------------------------------------------------

#[napi]
pub fn count_text(input_json: String) -> NapiResult<String> {
    let input: pagetools_core::text_metrics::TextInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = pagetools_core::text_metrics::analyze_text(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Password generator
// ---------------------------------------------------------------------------

#[napi]
pub fn generate_password(input_json: String) -> NapiResult<String> {
    let spec: pagetools_core::password::PasswordSpec =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = pagetools_core::password::generate_password(&spec, &mut rand::thread_rng())
        .map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Mortgage calculator
// ---------------------------------------------------------------------------

/// Accepts typed loan parameters.
#[napi]
pub fn calculate_mortgage(input_json: String) -> NapiResult<String> {
    let input: pagetools_core::mortgage::LoanParameters =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = pagetools_core::mortgage::analyze_mortgage(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

/// Accepts the raw form values; unparsable fields read as zero. Returns the
/// summary markup and both chart configs ready for the charting library.
#[napi]
pub fn build_charts(form_json: String) -> NapiResult<String> {
    let form: pagetools_core::mortgage::LoanForm =
        serde_json::from_str(&form_json).map_err(to_napi_error)?;
    let result = pagetools_core::mortgage::calculate(&form.coerce());
    let summary = pagetools_core::mortgage::MortgageSummary::from_result(&result);
    let charts = pagetools_core::charts::mortgage_charts(&result);
    let output = serde_json::json!({
        "summary_html": summary.to_html(),
        "summary": summary,
        "pie": charts.pie,
        "amortization": charts.amortization,
    });
    serde_json::to_string(&output).map_err(to_napi_error)
}
