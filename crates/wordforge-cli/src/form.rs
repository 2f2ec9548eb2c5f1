//! Raw field values as typed by the user, and the form-level rules they must
//! satisfy before reaching the engine.

/// The text fields of the input form, in prompt order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    FirstName,
    LastName,
    Birthday,
    RelatedWords,
    MinLength,
    MaxLength,
}

impl Field {
    pub const ALL: [Self; 6] = [
        Self::FirstName,
        Self::LastName,
        Self::Birthday,
        Self::RelatedWords,
        Self::MinLength,
        Self::MaxLength,
    ];

    pub const fn prompt(self) -> &'static str {
        match self {
            Self::FirstName => "First name(s)",
            Self::LastName => "Last name(s)",
            Self::Birthday => "Birthday (e.g. DD/MM/YYYY)",
            Self::RelatedWords => "Related words (comma separated)",
            Self::MinLength => "Minimum length (default 6)",
            Self::MaxLength => "Maximum length (default 12)",
        }
    }

    pub const fn index(self) -> usize {
        self as usize
    }
}

/// A form rule that the raw input violates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("first name cannot be empty")]
    EmptyFirstName,
    #[error("last name cannot be empty")]
    EmptyLastName,
    #[error("birthday components must be separated with '/'")]
    BirthdaySeparator,
    #[error("birthday can only contain digits and '/'")]
    BirthdayCharacters,
    #[error("related words must be separated with ','")]
    RelatedWordsSeparator,
    #[error("minimum length must be a positive number")]
    MinLength,
    #[error("maximum length must be a positive number")]
    MaxLength,
    #[error("minimum length cannot be greater than maximum length")]
    MinExceedsMax,
}

impl FormError {
    /// The field the user should correct.
    pub const fn field(self) -> Field {
        match self {
            Self::EmptyFirstName => Field::FirstName,
            Self::EmptyLastName => Field::LastName,
            Self::BirthdaySeparator | Self::BirthdayCharacters => Field::Birthday,
            Self::RelatedWordsSeparator => Field::RelatedWords,
            Self::MinLength | Self::MinExceedsMax => Field::MinLength,
            Self::MaxLength => Field::MaxLength,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawForm {
    pub first_name: String,
    pub last_name: String,
    pub birthday: String,
    pub related_words: String,
    pub min_length: String,
    pub max_length: String,
}

impl RawForm {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::Birthday => &self.birthday,
            Field::RelatedWords => &self.related_words,
            Field::MinLength => &self.min_length,
            Field::MaxLength => &self.max_length,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::FirstName => &mut self.first_name,
            Field::LastName => &mut self.last_name,
            Field::Birthday => &mut self.birthday,
            Field::RelatedWords => &mut self.related_words,
            Field::MinLength => &mut self.min_length,
            Field::MaxLength => &mut self.max_length,
        };
        *slot = value;
    }

    /// Checks that both names are present. This is all flag mode requires.
    pub fn validate_names(&self) -> Result<(), FormError> {
        if self.first_name.trim().is_empty() {
            return Err(FormError::EmptyFirstName);
        }
        if self.last_name.trim().is_empty() {
            return Err(FormError::EmptyLastName);
        }
        Ok(())
    }

    /// Applies every form rule in field order and reports the first failure.
    pub fn validate(&self) -> Result<(), FormError> {
        self.validate_names()?;

        let birthday = self.birthday.trim();
        if !birthday.is_empty() {
            if !birthday.contains('/') {
                return Err(FormError::BirthdaySeparator);
            }
            if !birthday.chars().all(|c| c == '/' || c.is_ascii_digit()) {
                return Err(FormError::BirthdayCharacters);
            }
        }

        let related = self.related_words.trim();
        if related.split_whitespace().nth(1).is_some() && !related.contains(',') {
            return Err(FormError::RelatedWordsSeparator);
        }

        let min = positive(&self.min_length).map_err(|()| FormError::MinLength)?;
        let max = positive(&self.max_length).map_err(|()| FormError::MaxLength)?;
        if let (Some(min), Some(max)) = (min, max) {
            if min > max {
                return Err(FormError::MinExceedsMax);
            }
        }
        Ok(())
    }

    pub fn first_names(&self) -> Vec<String> {
        split_whitespace(&self.first_name)
    }

    pub fn last_names(&self) -> Vec<String> {
        split_whitespace(&self.last_name)
    }

    /// Birthday components split on `/`, empty components dropped.
    pub fn birthday_components(&self) -> Vec<String> {
        self.birthday
            .trim()
            .split('/')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(str::to_owned)
            .collect()
    }

    /// Related words split on `,`, trimmed, empty entries dropped.
    pub fn related(&self) -> Vec<String> {
        self.related_words
            .split(',')
            .map(str::trim)
            .filter(|word| !word.is_empty())
            .map(str::to_owned)
            .collect()
    }

    /// A length field as the engine expects it: `None` when left blank.
    pub fn length(&self, field: Field) -> Option<String> {
        let raw = self.get(field).trim();
        (!raw.is_empty()).then(|| raw.to_owned())
    }
}

fn split_whitespace(raw: &str) -> Vec<String> {
    raw.split_whitespace().map(str::to_owned).collect()
}

/// Parses an optional positive integer; blank input is `Ok(None)`.
fn positive(raw: &str) -> Result<Option<usize>, ()> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    match raw.parse::<usize>() {
        Ok(value) if value > 0 => Ok(Some(value)),
        _ => Err(()),
    }
}
