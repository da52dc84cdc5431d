//! Shared pieces for showing request outcomes

use leptos::prelude::*;

use crate::api::ApiError;

#[component]
pub fn Spinner(#[prop(into)] label: String) -> impl IntoView {
    view! { <span class="spinner"></span> " " {label} }
}

#[component]
pub fn ErrorResult(error: ApiError) -> impl IntoView {
    let label = match &error {
        ApiError::Status { status, .. } => format!("Error {}", status),
        ApiError::Request(_) => "Network Error".to_string(),
        ApiError::Encode(_) | ApiError::Decode(_) => "Error".to_string(),
    };

    view! {
        <div class="result error">
            <div class="result-label">{label}</div>
            <div class="result-value">{error.to_string()}</div>
        </div>
    }
}
