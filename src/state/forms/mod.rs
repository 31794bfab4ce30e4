//! Form domain layer
//!
//! Type-safe form handling: each form is a [`FormState`] over a closed enum
//! of its fields.

mod field;
mod form_state;

pub use field::FormField;
pub use form_state::{
    AddressField, AddressForm, FormFieldKey, FormState, PersonField, PersonalInfoForm,
};
