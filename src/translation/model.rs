use crate::utils::TranslateError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A single Czech word as read from the input file.
pub type SourceWord = String;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WordType {
    Noun,
    Verb,
    Adjective,
    Adverb,
    Other,
}

impl WordType {
    pub fn as_str(&self) -> &'static str {
        match self {
            WordType::Noun => "noun",
            WordType::Verb => "verb",
            WordType::Adjective => "adjective",
            WordType::Adverb => "adverb",
            WordType::Other => "other",
        }
    }
}

impl fmt::Display for WordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WordType {
    type Err = TranslateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "noun" => Ok(WordType::Noun),
            "verb" => Ok(WordType::Verb),
            "adjective" => Ok(WordType::Adjective),
            "adverb" => Ok(WordType::Adverb),
            "other" => Ok(WordType::Other),
            other => Err(TranslateError::Malformed(format!(
                "unknown word_type {:?}",
                other
            ))),
        }
    }
}

/// Czech grammatical gender. Masculine nouns split into animate and inanimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    MasculineAnimate,
    MasculineInanimate,
    Masculine,
    Feminine,
    Neuter,
}

impl Gender {
    pub fn code(&self) -> &'static str {
        match self {
            Gender::MasculineAnimate => "ma",
            Gender::MasculineInanimate => "mi",
            Gender::Masculine => "m",
            Gender::Feminine => "f",
            Gender::Neuter => "n",
        }
    }
}

impl FromStr for Gender {
    type Err = TranslateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ma" | "masculine animate" | "masculine animated" => Ok(Gender::MasculineAnimate),
            "mi" | "masculine inanimate" => Ok(Gender::MasculineInanimate),
            "m" | "masculine" => Ok(Gender::Masculine),
            "f" | "feminine" => Ok(Gender::Feminine),
            "n" | "neuter" => Ok(Gender::Neuter),
            other => Err(TranslateError::Malformed(format!(
                "unknown gender {:?}",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationResult {
    /// The word exactly as it appeared in the input file.
    pub source: SourceWord,
    /// Dictionary form returned by the model; this goes on the card.
    pub word: String,
    pub translation: String,
    pub word_type: WordType,
    pub gender: Option<Gender>,
    pub example: String,
}

/// The JSON object the model is asked to return. Unknown keys are an error.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawEntry {
    word: String,
    word_type: String,
    #[serde(default)]
    gender: Option<String>,
    translation: String,
    example: String,
}

impl TranslationResult {
    /// Strictly validates the model's JSON reply for `source`.
    pub fn from_model_json(source: &str, content: &str) -> Result<Self, TranslateError> {
        let raw: RawEntry = serde_json::from_str(content.trim())
            .map_err(|e| TranslateError::Malformed(e.to_string()))?;

        let word = non_empty("word", raw.word)?;
        let translation = non_empty("translation", raw.translation)?;
        let example = non_empty("example", raw.example)?;
        let word_type: WordType = raw.word_type.parse()?;

        let gender = match raw.gender.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(g) => Some(g.parse::<Gender>()?),
        };

        if gender.is_some() && word_type != WordType::Noun {
            return Err(TranslateError::Malformed(format!(
                "gender given for a {}",
                word_type
            )));
        }

        Ok(Self {
            source: source.to_string(),
            word,
            translation,
            word_type,
            gender,
            example,
        })
    }

    /// `noun (f)` for nouns with a gender, otherwise just the word type.
    pub fn annotation(&self) -> String {
        match (self.word_type, self.gender) {
            (WordType::Noun, Some(gender)) => format!("{} ({})", self.word_type, gender.code()),
            (word_type, _) => word_type.to_string(),
        }
    }
}

fn non_empty(field: &str, value: String) -> Result<String, TranslateError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(TranslateError::Malformed(format!("empty {}", field)))
    } else {
        Ok(trimmed.to_string())
    }
}

/// Two-sided study record derived from a [`TranslationResult`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlashCard {
    pub word: String,
    pub annotation: String,
    pub example: String,
    pub translation: String,
}

impl FlashCard {
    pub const HEADERS: [&'static str; 4] = ["word", "word_type", "example", "translation"];

    pub fn front(&self) -> [&str; 3] {
        [self.word.as_str(), self.annotation.as_str(), self.example.as_str()]
    }

    pub fn back(&self) -> &str {
        &self.translation
    }

    pub fn to_row(&self) -> [&str; 4] {
        [
            self.word.as_str(),
            self.annotation.as_str(),
            self.example.as_str(),
            self.translation.as_str(),
        ]
    }
}

impl From<&TranslationResult> for FlashCard {
    fn from(result: &TranslationResult) -> Self {
        Self {
            word: result.word.clone(),
            annotation: result.annotation(),
            example: result.example.clone(),
            translation: result.translation.clone(),
        }
    }
}
