//! Shipping addresses and the editable form behind them.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::AddressId;

/// Country assumed when none is given.
pub const DEFAULT_COUNTRY: &str = "Brasil";

/// Number of digits in a CEP (Brazilian postal code).
const ZIP_DIGITS: usize = 8;

/// A saved shipping address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    /// Address identifier.
    pub id: AddressId,
    /// Shopper-chosen name, e.g. "Casa" or "Trabalho".
    pub label: String,
    /// Street name.
    #[serde(alias = "address")]
    pub street: String,
    /// House or building number.
    pub residence_number: String,
    /// Apartment, block, etc.
    #[serde(default)]
    pub complement: Option<String>,
    /// Neighborhood.
    pub neighborhood: String,
    /// City name.
    pub city: String,
    /// Two-letter state code (UF).
    pub state: String,
    /// Postal code, formatted `00000-000`.
    pub zip_code: String,
    /// Country name.
    #[serde(default)]
    pub country: Option<String>,
}

impl Address {
    /// Build an address from submitted form values.
    #[must_use]
    pub fn from_form(id: AddressId, form: AddressForm) -> Self {
        Self {
            id,
            label: form.label,
            street: form.street,
            residence_number: form.residence_number,
            complement: Some(form.complement).filter(|c| !c.trim().is_empty()),
            neighborhood: form.neighborhood,
            city: form.city,
            state: form.state,
            zip_code: form.zip_code,
            country: Some(form.country).filter(|c| !c.trim().is_empty()),
        }
    }

    /// Overlay submitted form values onto this address, keeping its ID.
    #[must_use]
    pub fn merged_with(&self, form: AddressForm) -> Self {
        Self::from_form(self.id.clone(), form)
    }

    /// One-line summary: `"Rua das Flores, 123 - João Monlevade/MG"`.
    ///
    /// The city part is omitted when the city is blank.
    #[must_use]
    pub fn summary(&self) -> String {
        let mut line = format!("{}, {}", self.street, self.residence_number);
        if !self.city.is_empty() {
            line.push_str(&format!(" - {}/{}", self.city, self.state));
        }
        line
    }
}

/// Field of an [`AddressForm`], used to report validation failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AddressField {
    Label,
    Street,
    ResidenceNumber,
    Neighborhood,
    City,
    State,
    ZipCode,
}

impl AddressField {
    /// Fields that must not be blank.
    pub const REQUIRED: [Self; 7] = [
        Self::Label,
        Self::Street,
        Self::ResidenceNumber,
        Self::Neighborhood,
        Self::City,
        Self::State,
        Self::ZipCode,
    ];

    /// Form label shown next to the input.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Label => "Identificação",
            Self::Street => "Logradouro",
            Self::ResidenceNumber => "Número",
            Self::Neighborhood => "Bairro",
            Self::City => "Cidade",
            Self::State => "Estado",
            Self::ZipCode => "CEP",
        }
    }
}

impl fmt::Display for AddressField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Errors reported by [`AddressForm::validate`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum AddressFieldError {
    /// A required field is empty or whitespace.
    #[error("{0} is required")]
    Required(AddressField),
    /// The postal code does not have eight digits.
    #[error("CEP must have 8 digits")]
    InvalidZipCode,
}

/// Editable address values, i.e. an [`Address`] without its ID.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AddressForm {
    pub label: String,
    #[serde(alias = "address")]
    pub street: String,
    pub residence_number: String,
    pub complement: String,
    pub neighborhood: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
}

impl Default for AddressForm {
    fn default() -> Self {
        Self {
            label: String::new(),
            street: String::new(),
            residence_number: String::new(),
            complement: String::new(),
            neighborhood: String::new(),
            city: String::new(),
            state: String::new(),
            zip_code: String::new(),
            country: DEFAULT_COUNTRY.to_owned(),
        }
    }
}

impl From<&Address> for AddressForm {
    fn from(address: &Address) -> Self {
        Self {
            label: address.label.clone(),
            street: address.street.clone(),
            residence_number: address.residence_number.clone(),
            complement: address.complement.clone().unwrap_or_default(),
            neighborhood: address.neighborhood.clone(),
            city: address.city.clone(),
            state: address.state.clone(),
            zip_code: address.zip_code.clone(),
            country: address
                .country
                .clone()
                .unwrap_or_else(|| DEFAULT_COUNTRY.to_owned()),
        }
    }
}

impl AddressForm {
    /// Current value of a field.
    #[must_use]
    pub fn field(&self, field: AddressField) -> &str {
        match field {
            AddressField::Label => &self.label,
            AddressField::Street => &self.street,
            AddressField::ResidenceNumber => &self.residence_number,
            AddressField::Neighborhood => &self.neighborhood,
            AddressField::City => &self.city,
            AddressField::State => &self.state,
            AddressField::ZipCode => &self.zip_code,
        }
    }

    /// Set a field, applying the `00000-000` mask to the postal code.
    pub fn set_field(&mut self, field: AddressField, value: &str) {
        let value = if field == AddressField::ZipCode {
            mask_zip_code(value)
        } else {
            value.to_owned()
        };
        match field {
            AddressField::Label => self.label = value,
            AddressField::Street => self.street = value,
            AddressField::ResidenceNumber => self.residence_number = value,
            AddressField::Neighborhood => self.neighborhood = value,
            AddressField::City => self.city = value,
            AddressField::State => self.state = value,
            AddressField::ZipCode => self.zip_code = value,
        }
    }

    /// Check that every required field is filled in and the CEP is complete.
    ///
    /// # Errors
    ///
    /// Returns every problem found, in form order.
    pub fn validate(&self) -> Result<(), Vec<AddressFieldError>> {
        let mut errors: Vec<AddressFieldError> = AddressField::REQUIRED
            .iter()
            .filter(|field| self.field(**field).trim().is_empty())
            .map(|field| AddressFieldError::Required(*field))
            .collect();

        let zip = self.zip_code.trim();
        if !zip.is_empty() && zip.chars().filter(char::is_ascii_digit).count() != ZIP_DIGITS {
            errors.push(AddressFieldError::InvalidZipCode);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Whether [`validate`](Self::validate) would pass.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}

/// Keep at most eight digits and format them as `00000-000`.
///
/// Partial input is formatted as far as it goes, the way a masked input
/// renders while the shopper is typing.
#[must_use]
pub fn mask_zip_code(raw: &str) -> String {
    let digits: String = raw
        .chars()
        .filter(char::is_ascii_digit)
        .take(ZIP_DIGITS)
        .collect();
    if digits.len() > 5 {
        let (head, tail) = digits.split_at(5);
        format!("{head}-{tail}")
    } else {
        digits
    }
}
