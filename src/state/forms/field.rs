//! Form field value objects

/// Describes one field of a form: its key in the value mapping and the
/// placeholder shown while it is empty
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub name: &'static str,
    pub label: &'static str,
}

/// Represents a single form field with its configuration and value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub name: &'static str,
    pub label: &'static str,
    value: String,
}

impl FormField {
    /// Create a new text field
    pub fn new(descriptor: FieldDescriptor) -> Self {
        Self::with_value(descriptor, String::new())
    }

    /// Create a new text field with initial value
    pub fn with_value(descriptor: FieldDescriptor, value: String) -> Self {
        Self {
            name: descriptor.name,
            label: descriptor.label,
            value,
        }
    }

    pub fn as_text(&self) -> &str {
        &self.value
    }

    pub fn set_text(&mut self, value: String) {
        self.value = value;
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        self.value.push(c);
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        self.value.pop();
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ZIP: FieldDescriptor = FieldDescriptor {
        name: "zipCode",
        label: "Zip Code",
    };

    #[test]
    fn test_new_is_empty() {
        let field = FormField::new(ZIP);
        assert!(field.is_empty());
        assert_eq!(field.name, "zipCode");
        assert_eq!(field.label, "Zip Code");
    }

    #[test]
    fn test_push_and_pop() {
        let mut field = FormField::new(ZIP);
        field.push_char('1');
        field.push_char('2');
        assert_eq!(field.as_text(), "12");
        field.pop_char();
        assert_eq!(field.as_text(), "1");
    }

    #[test]
    fn test_pop_on_empty_is_noop() {
        let mut field = FormField::new(ZIP);
        field.pop_char();
        assert_eq!(field.as_text(), "");
    }

    #[test]
    fn test_set_text_replaces_value() {
        let mut field = FormField::with_value(ZIP, "1000AA".to_string());
        field.set_text("1211EP".to_string());
        assert_eq!(field.as_text(), "1211EP");
    }
}
