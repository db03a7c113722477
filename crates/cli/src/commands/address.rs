//! Address form commands.

use clap::Args;
use thiserror::Error;
use tracing::{error, info};
use vitrine_core::{AddressField, AddressForm, DEFAULT_COUNTRY};
use vitrine_storefront::surfaces::regions::{city_options, find_state, state_options};

use super::print_json;

/// Errors that can occur in address commands.
#[derive(Debug, Error)]
pub enum AddressCommandError {
    /// The form did not validate.
    #[error("{0} validation errors found")]
    Invalid(usize),

    /// The state code is not a Brazilian UF.
    #[error("Unknown state: {0}")]
    UnknownState(String),
}

/// Address fields, one flag each. Missing flags are left blank.
#[derive(Debug, Args)]
pub struct AddressArgs {
    /// Identification, e.g. "Casa"
    #[arg(long, default_value = "")]
    label: String,

    #[arg(long, default_value = "")]
    street: String,

    /// House or building number
    #[arg(long, default_value = "")]
    number: String,

    #[arg(long, default_value = "")]
    complement: String,

    #[arg(long, default_value = "")]
    neighborhood: String,

    #[arg(long, default_value = "")]
    city: String,

    /// Two-letter state code
    #[arg(long, default_value = "")]
    state: String,

    /// CEP, with or without the dash
    #[arg(long, default_value = "")]
    zip: String,

    #[arg(long, default_value = DEFAULT_COUNTRY)]
    country: String,
}

impl AddressArgs {
    fn into_form(self) -> AddressForm {
        let mut form = AddressForm {
            complement: self.complement,
            country: self.country,
            ..AddressForm::default()
        };
        for (field, value) in [
            (AddressField::Label, self.label),
            (AddressField::Street, self.street),
            (AddressField::ResidenceNumber, self.number),
            (AddressField::Neighborhood, self.neighborhood),
            (AddressField::City, self.city),
            (AddressField::State, self.state),
            (AddressField::ZipCode, self.zip),
        ] {
            form.set_field(field, &value);
        }
        form
    }
}

/// Validate an address and print the normalized form.
///
/// # Errors
///
/// Returns [`AddressCommandError::Invalid`] after logging each problem.
pub fn validate(args: AddressArgs) -> Result<(), Box<dyn std::error::Error>> {
    let form = args.into_form();

    if let Err(errors) = form.validate() {
        error!("Address validation failed:");
        for err in &errors {
            error!("  - {err}");
        }
        return Err(AddressCommandError::Invalid(errors.len()).into());
    }

    info!("Address is valid");
    print_json(&form)
}

/// Print state options, or the city options of `state`.
///
/// # Errors
///
/// Returns [`AddressCommandError::UnknownState`] for an unknown UF.
pub fn options(state: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    match state {
        None => print_json(&state_options()),
        Some(uf) if find_state(uf).is_some() => print_json(&city_options(uf, "")),
        Some(uf) => Err(AddressCommandError::UnknownState(uf.to_string()).into()),
    }
}
