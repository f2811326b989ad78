//! URL-encoded driver form decoding.
//!
//! Browsers submit nested keys such as `driver[name]`. Only the permitted
//! keys have a slot here. Other `driver[...]` keys are kept by name so the
//! parameter bag still counts as supplied; keys outside `driver` are dropped.

use std::collections::HashMap;

use axum::extract::Form;
use axum::extract::rejection::FormRejection;
use serde::Deserialize;

use drivehub_domain::driver::DriverParams;

/// Raw driver form body.
#[derive(Debug, Default, Deserialize)]
pub struct DriverForm {
    #[serde(rename = "driver[id]")]
    pub id: Option<String>,
    #[serde(rename = "driver[name]")]
    pub name: Option<String>,
    #[serde(rename = "driver[vin]")]
    pub vin: Option<String>,
    #[serde(rename = "driver[available]")]
    pub available: Option<String>,
    /// Verb override for forms that cannot send PATCH, PUT or DELETE.
    #[serde(rename = "_method")]
    pub method: Option<String>,
    #[serde(flatten)]
    pub rest: HashMap<String, String>,
}

impl DriverForm {
    /// Accept a decoded form, treating an undecodable body as an empty one.
    pub fn or_empty(form: Result<Form<Self>, FormRejection>) -> Self {
        match form {
            Ok(Form(form)) => form,
            Err(rejection) => {
                tracing::debug!(%rejection, "driver form rejected, treating as empty");
                Self::default()
            }
        }
    }

    /// Project the form onto the permitted parameter set.
    #[must_use]
    pub fn into_params(self) -> DriverParams {
        let mut params = DriverParams::default();
        if self.id.is_some() {
            params = params.with_id();
        }
        if let Some(name) = self.name {
            params = params.name(name);
        }
        if let Some(vin) = self.vin {
            params = params.vin(vin);
        }
        if let Some(available) = self.available.as_deref().and_then(cast_bool) {
            params = params.available(available);
        }
        for key in self.rest.keys().filter_map(|key| nested_key(key)) {
            params = params.unpermitted(key);
        }
        params
    }
}

/// `driver[admin]` → `admin`; anything not nested under `driver` → `None`.
fn nested_key(key: &str) -> Option<&str> {
    key.strip_prefix("driver[")?.strip_suffix(']')
}

/// Form boolean casting: blank is "not supplied", the usual false spellings
/// are `false`, anything else is `true`.
fn cast_bool(raw: &str) -> Option<bool> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    Some(!matches!(
        raw.to_ascii_lowercase().as_str(),
        "0" | "f" | "false" | "off"
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(body: &str) -> DriverForm {
        let uri = format!("/?{body}").parse().unwrap();
        axum::extract::Query::<DriverForm>::try_from_uri(&uri)
            .unwrap()
            .0
    }

    #[test]
    fn should_decode_nested_driver_keys() {
        let form = decode("driver%5Bname%5D=Solomon+Mehru&driver%5Bvin%5D=WBWSS52P9NEYLVDE9");
        let params = form.into_params();
        assert_eq!(params.name.as_deref(), Some("Solomon Mehru"));
        assert_eq!(params.vin.as_deref(), Some("WBWSS52P9NEYLVDE9"));
        assert!(params.available.is_none());
    }

    #[test]
    fn should_drop_keys_outside_allow_list() {
        let form = decode("driver%5Bname%5D=Ada&driver%5Badmin%5D=true&rating=5");
        let params = form.into_params();
        assert_eq!(
            params,
            DriverParams::default().name("Ada").unpermitted("admin")
        );
    }

    #[test]
    fn should_count_unpermitted_driver_keys_as_supplied() {
        let params = decode("driver%5Badmin%5D=1").into_params();
        assert!(params.name.is_none());
        assert!(!params.is_empty());
    }

    #[test]
    fn should_extract_nested_key_names() {
        assert_eq!(nested_key("driver[admin]"), Some("admin"));
        assert_eq!(nested_key("rating"), None);
        assert_eq!(nested_key("driver[open"), None);
    }

    #[test]
    fn should_keep_empty_value_as_blank_field() {
        let params = decode("driver%5Bvin%5D=").into_params();
        assert_eq!(params.vin.as_deref(), Some(""));
    }

    #[test]
    fn should_mark_id_as_supplied_without_reading_it() {
        let params = decode("driver%5Bid%5D=99").into_params();
        assert!(params.id.is_some());
    }

    #[test]
    fn should_report_empty_params_when_no_driver_keys() {
        let params = decode("utf8=%E2%9C%93").into_params();
        assert!(params.is_empty());
    }

    #[test]
    fn should_cast_form_booleans() {
        assert_eq!(cast_bool("0"), Some(false));
        assert_eq!(cast_bool("FALSE"), Some(false));
        assert_eq!(cast_bool("off"), Some(false));
        assert_eq!(cast_bool("1"), Some(true));
        assert_eq!(cast_bool("true"), Some(true));
        assert_eq!(cast_bool("yes"), Some(true));
        assert_eq!(cast_bool(" "), None);
    }
}
