//! Form state container and the typed field sets of each form

use super::field::{FieldDescriptor, FormField};
use std::collections::BTreeMap;
use std::marker::PhantomData;

/// A closed set of fields belonging to one form.
///
/// The key set of a [`FormState`] is the `ALL` list of its key type, so
/// updating a field that the form does not have fails to compile.
pub trait FormFieldKey: Copy + Eq + std::fmt::Debug + 'static {
    /// Every field of the form, in display order
    const ALL: &'static [Self];

    fn descriptor(self) -> FieldDescriptor;

    /// Position of this field in `ALL`
    fn index(self) -> usize;
}

/// Fields of the "Find an address" form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressField {
    ZipCode,
    HouseNumber,
}

impl FormFieldKey for AddressField {
    const ALL: &'static [Self] = &[Self::ZipCode, Self::HouseNumber];

    fn descriptor(self) -> FieldDescriptor {
        match self {
            Self::ZipCode => FieldDescriptor {
                name: "zipCode",
                label: "Zip Code",
            },
            Self::HouseNumber => FieldDescriptor {
                name: "houseNumber",
                label: "House Number",
            },
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Fields of the "Add personal info to address" form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersonField {
    FirstName,
    LastName,
}

impl FormFieldKey for PersonField {
    const ALL: &'static [Self] = &[Self::FirstName, Self::LastName];

    fn descriptor(self) -> FieldDescriptor {
        match self {
            Self::FirstName => FieldDescriptor {
                name: "firstName",
                label: "First Name",
            },
            Self::LastName => FieldDescriptor {
                name: "lastName",
                label: "Last Name",
            },
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

pub type AddressForm = FormState<AddressField>;
pub type PersonalInfoForm = FormState<PersonField>;

/// Holds the current value of every field of one form.
///
/// The container is the only mutator of its values. `reset` restores the
/// values captured at creation, which later updates never touch.
#[derive(Debug, Clone)]
pub struct FormState<K: FormFieldKey> {
    fields: Vec<FormField>,
    initial: Vec<String>,
    active_field_index: usize,
    _key: PhantomData<K>,
}

impl<K: FormFieldKey> FormState<K> {
    /// Create a form with every field empty
    pub fn new() -> Self {
        Self::with_initial(&[])
    }

    /// Create a form with the given initial values; unlisted fields start empty
    pub fn with_initial(initial: &[(K, &str)]) -> Self {
        let mut fields: Vec<FormField> = K::ALL
            .iter()
            .map(|key| FormField::new(key.descriptor()))
            .collect();
        for (key, value) in initial {
            fields[key.index()].set_text((*value).to_string());
        }
        let initial = fields.iter().map(|f| f.as_text().to_string()).collect();

        Self {
            fields,
            initial,
            active_field_index: 0,
            _key: PhantomData,
        }
    }

    /// Set the value of one field
    pub fn update(&mut self, key: K, value: impl Into<String>) {
        self.fields[key.index()].set_text(value.into());
    }

    /// Restore every field to its creation-time value
    pub fn reset(&mut self) {
        for (field, initial) in self.fields.iter_mut().zip(&self.initial) {
            field.set_text(initial.clone());
        }
    }

    pub fn value(&self, key: K) -> &str {
        self.fields[key.index()].as_text()
    }

    /// Snapshot of the current values keyed by field name
    pub fn values(&self) -> BTreeMap<String, String> {
        self.fields
            .iter()
            .map(|f| (f.name.to_string(), f.as_text().to_string()))
            .collect()
    }

    /// Fields in display order
    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    pub fn active_field(&self) -> K {
        K::ALL[self.active_field_index]
    }

    pub fn is_first_field_active(&self) -> bool {
        self.active_field_index == 0
    }

    pub fn is_last_field_active(&self) -> bool {
        self.active_field_index + 1 == self.fields.len()
    }

    pub fn focus_first(&mut self) {
        self.active_field_index = 0;
    }

    pub fn focus_last(&mut self) {
        self.active_field_index = self.fields.len() - 1;
    }

    /// Move to the next field (wraps around)
    pub fn next_field(&mut self) {
        self.active_field_index = (self.active_field_index + 1) % self.fields.len();
    }

    /// Move to the previous field (wraps around)
    pub fn prev_field(&mut self) {
        if self.active_field_index == 0 {
            self.active_field_index = self.fields.len() - 1;
        } else {
            self.active_field_index -= 1;
        }
    }

    /// Type a character into the active field
    pub fn push_char(&mut self, c: char) {
        self.fields[self.active_field_index].push_char(c);
    }

    /// Delete the last character of the active field
    pub fn pop_char(&mut self) {
        self.fields[self.active_field_index].pop_char();
    }
}

impl<K: FormFieldKey> Default for FormState<K> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod form_state {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_new_has_all_fields_empty() {
            let form = AddressForm::new();
            assert_eq!(form.fields().len(), 2);
            assert_eq!(form.value(AddressField::ZipCode), "");
            assert_eq!(form.value(AddressField::HouseNumber), "");
        }

        #[test]
        fn test_values_keyed_by_name() {
            let form = PersonalInfoForm::with_initial(&[(PersonField::FirstName, "Ada")]);
            let values = form.values();
            assert_eq!(values.get("firstName").map(String::as_str), Some("Ada"));
            assert_eq!(values.get("lastName").map(String::as_str), Some(""));
            assert_eq!(values.len(), 2);
        }

        #[test]
        fn test_update_changes_only_that_field() {
            let mut form = AddressForm::with_initial(&[(AddressField::HouseNumber, "1")]);
            form.update(AddressField::ZipCode, "1211EP");
            assert_eq!(form.value(AddressField::ZipCode), "1211EP");
            assert_eq!(form.value(AddressField::HouseNumber), "1");
        }

        #[test]
        fn test_reset_restores_initial_after_many_updates() {
            let mut form = PersonalInfoForm::with_initial(&[
                (PersonField::FirstName, "Ada"),
                (PersonField::LastName, "Lovelace"),
            ]);
            let initial = form.values();

            form.update(PersonField::FirstName, "Grace");
            form.update(PersonField::LastName, "Hopper");
            form.update(PersonField::FirstName, "Alan");
            form.push_char('!');
            form.reset();

            assert_eq!(form.values(), initial);
        }

        #[test]
        fn test_reset_is_not_affected_by_live_edits() {
            let mut form = AddressForm::new();
            form.push_char('9');
            form.reset();
            form.push_char('1');
            form.reset();
            assert_eq!(form.value(AddressField::ZipCode), "");
        }

        #[test]
        fn test_typing_goes_to_active_field() {
            let mut form = AddressForm::new();
            form.push_char('1');
            form.next_field();
            form.push_char('6');
            form.push_char('0');
            form.pop_char();
            assert_eq!(form.value(AddressField::ZipCode), "1");
            assert_eq!(form.value(AddressField::HouseNumber), "6");
        }
    }

    mod navigation {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_next_field_wraps() {
            let mut form = AddressForm::new();
            assert_eq!(form.active_field(), AddressField::ZipCode);
            form.next_field();
            assert_eq!(form.active_field(), AddressField::HouseNumber);
            assert!(form.is_last_field_active());
            form.next_field();
            assert_eq!(form.active_field(), AddressField::ZipCode);
        }

        #[test]
        fn test_prev_field_wraps() {
            let mut form = PersonalInfoForm::new();
            form.prev_field();
            assert_eq!(form.active_field(), PersonField::LastName);
        }

        #[test]
        fn test_focus_first_and_last() {
            let mut form = PersonalInfoForm::new();
            form.focus_last();
            assert!(form.is_last_field_active());
            form.focus_first();
            assert!(form.is_first_field_active());
        }
    }

    mod descriptors {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_index_matches_position_in_all() {
            for (i, key) in AddressField::ALL.iter().enumerate() {
                assert_eq!(key.index(), i);
            }
            for (i, key) in PersonField::ALL.iter().enumerate() {
                assert_eq!(key.index(), i);
            }
        }

        #[test]
        fn test_field_labels() {
            let form = AddressForm::new();
            let labels: Vec<_> = form.fields().iter().map(|f| f.label).collect();
            assert_eq!(labels, vec!["Zip Code", "House Number"]);
        }
    }
}
