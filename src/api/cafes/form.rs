//! Form input normalization for POST /add
//!
//! Every field arrives as a raw string. Boolean flags use the loose
//! convention of the original clients: "1" or any casing of "true" means
//! true, anything else means false. An absent field is a hard error, not
//! a silent false.

use serde::Deserialize;

use crate::db::models::CafeCreate;
use crate::utils::{AppError, AppResult};

/// True iff `raw` is exactly "1" or case-insensitively "true".
pub fn parse_flag(raw: &str) -> bool {
    raw == "1" || raw.eq_ignore_ascii_case("true")
}

/// Raw add-cafe form, before validation. All fields optional at the
/// deserialization boundary so absence can be reported per field.
#[derive(Debug, Deserialize)]
pub struct AddCafeForm {
    pub name: Option<String>,
    pub map_url: Option<String>,
    pub img_url: Option<String>,
    pub location: Option<String>,
    pub seats: Option<String>,
    pub has_toilet: Option<String>,
    pub has_wifi: Option<String>,
    pub has_sockets: Option<String>,
    pub can_take_calls: Option<String>,
    pub coffee_price: Option<String>,
}

impl AddCafeForm {
    /// Validate the form into a typed create payload.
    ///
    /// The first absent field produces `AppError::MissingField` naming it.
    /// `coffee_price` must be present in the form even though the column
    /// is nullable.
    pub fn into_create(self) -> AppResult<CafeCreate> {
        Ok(CafeCreate {
            name: require(self.name, "name")?,
            map_url: require(self.map_url, "map_url")?,
            img_url: require(self.img_url, "img_url")?,
            location: require(self.location, "location")?,
            seats: require(self.seats, "seats")?,
            has_toilet: parse_flag(&require(self.has_toilet, "has_toilet")?),
            has_wifi: parse_flag(&require(self.has_wifi, "has_wifi")?),
            has_sockets: parse_flag(&require(self.has_sockets, "has_sockets")?),
            can_take_calls: parse_flag(&require(self.can_take_calls, "can_take_calls")?),
            coffee_price: Some(require(self.coffee_price, "coffee_price")?),
        })
    }
}

fn require(value: Option<String>, field: &str) -> AppResult<String> {
    value.ok_or_else(|| AppError::MissingField(field.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_form() -> AddCafeForm {
        AddCafeForm {
            name: Some("Bean There".into()),
            map_url: Some("https://maps.example.com/1".into()),
            img_url: Some("https://img.example.com/1.jpg".into()),
            location: Some("Peckham".into()),
            seats: Some("20-30".into()),
            has_toilet: Some("1".into()),
            has_wifi: Some("TRUE".into()),
            has_sockets: Some("0".into()),
            can_take_calls: Some("maybe".into()),
            coffee_price: Some("£2.50".into()),
        }
    }

    #[test]
    fn parse_flag_accepts_one_and_any_casing_of_true() {
        assert!(parse_flag("1"));
        assert!(parse_flag("true"));
        assert!(parse_flag("True"));
        assert!(parse_flag("TRUE"));
    }

    #[test]
    fn parse_flag_rejects_everything_else() {
        assert!(!parse_flag("0"));
        assert!(!parse_flag("false"));
        assert!(!parse_flag(""));
        assert!(!parse_flag("yes"));
        assert!(!parse_flag("2"));
        assert!(!parse_flag(" true"));
    }

    #[test]
    fn into_create_normalizes_flags() {
        let cafe = full_form().into_create().unwrap();
        assert!(cafe.has_toilet);
        assert!(cafe.has_wifi);
        assert!(!cafe.has_sockets);
        assert!(!cafe.can_take_calls);
        assert_eq!(cafe.coffee_price.as_deref(), Some("£2.50"));
    }

    #[test]
    fn missing_field_is_reported_by_name() {
        let mut form = full_form();
        form.seats = None;
        match form.into_create() {
            Err(AppError::MissingField(field)) => assert_eq!(field, "seats"),
            other => panic!("expected MissingField, got {other:?}"),
        }

        let mut form = full_form();
        form.coffee_price = None;
        match form.into_create() {
            Err(AppError::MissingField(field)) => assert_eq!(field, "coffee_price"),
            other => panic!("expected MissingField, got {other:?}"),
        }
    }

    #[test]
    fn empty_string_is_a_value_not_an_absence() {
        let mut form = full_form();
        form.has_wifi = Some("".into());
        let cafe = form.into_create().unwrap();
        assert!(!cafe.has_wifi);
    }
}
