use std::fmt;
use std::str::FromStr;

use parser::{Dialect, LabelPosition, Separator, DEFAULT_COMMENT};

use crate::batch_sizes::DEFAULT_BATCH_SIZE;
use crate::error::ConfigError;

const MAX_BATCH_SIZE: usize = 1 << 20;
const MAX_OUTPUTS: usize = 1 << 16;

#[derive(Debug, Clone)]
pub struct ImportOption {
    pub name: &'static str,
    pub option_type: OptionType,
    pub help: &'static str,
}

#[derive(Debug, Clone)]
pub enum OptionType {
    Size { min: usize, max: usize },
    Char,
    Separator,
    Choice(&'static [&'static str]),
}

impl OptionType {
    pub fn validate(&self, value: &str) -> Result<(), String> {
        match self {
            OptionType::Size { min, max } => {
                let parsed = value
                    .parse::<usize>()
                    .map_err(|e| format!("Invalid integer: {}", e))?;
                if parsed < *min || parsed > *max {
                    return Err(format!("Value {} out of range [{}, {}]", parsed, min, max));
                }
                Ok(())
            }
            OptionType::Char => {
                let mut chars = value.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) if !c.is_whitespace() => Ok(()),
                    _ => Err("Expected a single non-blank character".to_string()),
                }
            }
            // Separator parsing does its own validation
            OptionType::Separator => Ok(()),
            OptionType::Choice(choices) => {
                if choices.contains(&value.to_lowercase().as_str()) {
                    Ok(())
                } else {
                    Err(format!("Expected one of {}", choices.join(", ")))
                }
            }
        }
    }

    pub fn describe(&self) -> String {
        match self {
            OptionType::Size { min, max } => format!("integer in [{}, {}]", min, max),
            OptionType::Char => "character".to_string(),
            OptionType::Separator => "character or 'whitespace'".to_string(),
            OptionType::Choice(choices) => choices.join("|"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigParam<T> {
    pub value: T,
    pub option: ImportOption,
}

impl<T> ConfigParam<T>
where
    T: FromStr + ToString + Clone,
    T::Err: fmt::Display,
{
    pub fn update(&mut self, value: &str) -> Result<(), String> {
        self.option.option_type.validate(value)?;

        let new_value = value
            .parse::<T>()
            .map_err(|e| format!("Parse error: {}", e))?;

        self.value = new_value;
        Ok(())
    }

    pub fn describe(&self) -> String {
        format!(
            "{:<12} {:<12} {} ({})",
            self.option.name,
            self.value.to_string(),
            self.option.help,
            self.option.option_type.describe()
        )
    }
}

macro_rules! define_config {
    ($(($field:ident: $type:ty, $name:literal, $option_type:expr, $default:expr, $help:literal)),* $(,)?) => {
        /// Dialect and layout options for one import.
        #[derive(Debug, Clone)]
        pub struct ImportConfig {
            $(pub $field: ConfigParam<$type>,)*
        }

        impl Default for ImportConfig {
            fn default() -> Self {
                Self {
                    $($field: ConfigParam {
                        value: $default,
                        option: ImportOption {
                            name: $name,
                            option_type: $option_type,
                            help: $help,
                        },
                    },)*
                }
            }
        }

        impl ImportConfig {
            /// Updates one option from its textual form.
            pub fn set_option(&mut self, name: &str, value: &str) -> Result<(), ConfigError> {
                let result = match name {
                    $($name => self.$field.update(value),)*
                    _ => return Err(ConfigError::UnknownOption(name.to_string())),
                };

                result.map_err(|reason| ConfigError::InvalidValue {
                    name: name.to_string(),
                    value: value.to_string(),
                    reason,
                })
            }

            /// One line per option: name, current value, help.
            pub fn describe(&self) -> Vec<String> {
                vec![$(self.$field.describe(),)*]
            }
        }
    };
}

define_config!(
    (separator: Separator, "separator", OptionType::Separator, Separator::Char(','), "Column delimiter"),
    (comment: char, "comment", OptionType::Char, DEFAULT_COMMENT, "Starts a comment running to the end of the line"),
    (labels: LabelColumn, "labels", OptionType::Choice(&["none", "first", "last"]), LabelColumn::None, "Column holding class labels or targets"),
    (outputs: usize, "outputs", OptionType::Size { min: 0, max: MAX_OUTPUTS }, 0, "Target columns, 0 reads integer class labels"),
    (batch_size: usize, "batch-size", OptionType::Size { min: 1, max: MAX_BATCH_SIZE }, DEFAULT_BATCH_SIZE, "Maximum rows per batch"),
);

/// Where labels sit in a row, if the input has any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelColumn {
    None,
    First,
    Last,
}

impl LabelColumn {
    pub fn position(&self) -> Option<LabelPosition> {
        match self {
            LabelColumn::None => None,
            LabelColumn::First => Some(LabelPosition::First),
            LabelColumn::Last => Some(LabelPosition::Last),
        }
    }
}

impl FromStr for LabelColumn {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "none" => Ok(LabelColumn::None),
            "first" => Ok(LabelColumn::First),
            "last" => Ok(LabelColumn::Last),
            _ => Err(format!("Unknown label column '{}'", s)),
        }
    }
}

impl fmt::Display for LabelColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LabelColumn::None => write!(f, "none"),
            LabelColumn::First => write!(f, "first"),
            LabelColumn::Last => write!(f, "last"),
        }
    }
}

/// What kind of dataset an import produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Unlabeled,
    Class(LabelPosition),
    Vector {
        position: LabelPosition,
        outputs: usize,
    },
}

impl ImportConfig {
    pub fn with_separator(mut self, separator: Separator) -> Self {
        self.separator.value = separator;
        self
    }

    pub fn with_comment(mut self, comment: char) -> Self {
        self.comment.value = comment;
        self
    }

    pub fn with_labels(mut self, labels: LabelColumn) -> Self {
        self.labels.value = labels;
        self
    }

    pub fn with_outputs(mut self, outputs: usize) -> Self {
        self.outputs.value = outputs;
        self
    }

    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size.value = batch_size;
        self
    }

    pub fn dialect(&self) -> Dialect {
        Dialect::new(self.separator.value, self.comment.value)
    }

    pub fn max_batch_size(&self) -> usize {
        self.batch_size.value
    }

    pub fn target(&self) -> Result<Target, ConfigError> {
        let outputs = self.outputs.value;
        match (self.labels.value.position(), outputs) {
            (None, 0) => Ok(Target::Unlabeled),
            (None, _) => Err(ConfigError::OutputsWithoutLabels { outputs }),
            (Some(position), 0) => Ok(Target::Class(position)),
            (Some(position), _) => Ok(Target::Vector { position, outputs }),
        }
    }

    /// Checks option combinations that single options cannot catch.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.batch_size.value == 0 {
            return Err(ConfigError::ZeroBatchSize);
        }

        validate_dialect(&self.dialect())?;
        self.target().map(|_| ())
    }
}

/// Characters that can appear inside a value token.
fn is_value_char(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '.' | '+' | '-' | '?')
}

/// Rejects a comment character that would cut values out of a row.
pub fn validate_comment(comment: char) -> Result<(), ConfigError> {
    if comment.is_whitespace() {
        return Err(ConfigError::BlankComment);
    }
    if is_value_char(comment) {
        return Err(ConfigError::ReservedCharacter(comment));
    }
    Ok(())
}

/// Rejects dialects that would silently drop or split row content.
pub fn validate_dialect(dialect: &Dialect) -> Result<(), ConfigError> {
    validate_comment(dialect.comment)?;

    if let Separator::Char(c) = dialect.separator {
        if c == dialect.comment {
            return Err(ConfigError::SeparatorIsComment(c));
        }
        if is_value_char(c) {
            return Err(ConfigError::ReservedCharacter(c));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ImportConfig::default();
        assert_eq!(config.dialect(), Dialect::default());
        assert_eq!(config.max_batch_size(), DEFAULT_BATCH_SIZE);
        assert_eq!(config.target(), Ok(Target::Unlabeled));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_set_option() {
        let mut config = ImportConfig::default();
        config.set_option("separator", "whitespace").unwrap();
        config.set_option("comment", "%").unwrap();
        config.set_option("labels", "last").unwrap();
        config.set_option("batch-size", "64").unwrap();

        assert_eq!(config.dialect(), Dialect::new(Separator::Whitespace, '%'));
        assert_eq!(config.max_batch_size(), 64);
        assert_eq!(config.target(), Ok(Target::Class(LabelPosition::Last)));
    }

    #[test]
    fn test_vector_target() {
        let config = ImportConfig::default()
            .with_labels(LabelColumn::First)
            .with_outputs(2);
        assert_eq!(
            config.target(),
            Ok(Target::Vector {
                position: LabelPosition::First,
                outputs: 2
            })
        );
    }

    #[test]
    fn test_unknown_option() {
        let mut config = ImportConfig::default();
        assert_eq!(
            config.set_option("quote", "\""),
            Err(ConfigError::UnknownOption("quote".to_string()))
        );
    }

    #[test]
    fn test_invalid_values_keep_previous() {
        let mut config = ImportConfig::default();

        assert!(matches!(
            config.set_option("batch-size", "0"),
            Err(ConfigError::InvalidValue { .. })
        ));
        assert!(config.set_option("batch-size", "many").is_err());
        assert!(config.set_option("comment", "##").is_err());
        assert!(config.set_option("comment", " ").is_err());
        assert!(config.set_option("labels", "middle").is_err());
        assert!(config.set_option("separator", "ab").is_err());

        assert_eq!(config.max_batch_size(), DEFAULT_BATCH_SIZE);
        assert_eq!(config.comment.value, DEFAULT_COMMENT);
    }

    #[test]
    fn test_outputs_need_label_position() {
        let config = ImportConfig::default().with_outputs(1);
        assert_eq!(
            config.validate(),
            Err(ConfigError::OutputsWithoutLabels { outputs: 1 })
        );
    }

    #[test]
    fn test_separator_equal_to_comment() {
        let config = ImportConfig::default().with_separator(Separator::Char('#'));
        assert_eq!(config.validate(), Err(ConfigError::SeparatorIsComment('#')));
    }

    #[test]
    fn test_blank_comment_set_directly() {
        let config = ImportConfig::default()
            .with_separator(Separator::Whitespace)
            .with_comment(' ');
        assert_eq!(config.validate(), Err(ConfigError::BlankComment));

        let config = ImportConfig::default().with_comment('\t');
        assert_eq!(config.validate(), Err(ConfigError::BlankComment));
    }

    #[test]
    fn test_dialect_characters_inside_values() {
        assert_eq!(
            validate_dialect(&Dialect::new(Separator::Char('.'), '#')),
            Err(ConfigError::ReservedCharacter('.'))
        );
        assert_eq!(
            validate_dialect(&Dialect::new(Separator::Char(','), '-')),
            Err(ConfigError::ReservedCharacter('-'))
        );
        assert_eq!(
            validate_dialect(&Dialect::new(Separator::Char(','), ',')),
            Err(ConfigError::SeparatorIsComment(','))
        );
        assert_eq!(validate_comment('7'), Err(ConfigError::ReservedCharacter('7')));
    }

    #[test]
    fn test_usable_dialects() {
        assert!(validate_dialect(&Dialect::default()).is_ok());
        assert!(validate_dialect(&Dialect::whitespace()).is_ok());
        assert!(validate_dialect(&Dialect::new(Separator::Char('|'), '%')).is_ok());
        assert!(validate_dialect(&Dialect::new(Separator::Char(';'), '!')).is_ok());
    }

    #[test]
    fn test_zero_batch_size_set_directly() {
        let config = ImportConfig::default().with_batch_size(0);
        assert_eq!(config.validate(), Err(ConfigError::ZeroBatchSize));
    }

    #[test]
    fn test_describe_lists_every_option() {
        let lines = ImportConfig::default().describe();
        assert_eq!(lines.len(), 5);
        assert!(lines[0].starts_with("separator"));
        assert!(lines[4].contains("256"));
    }
}
