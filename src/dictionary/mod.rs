mod builtin;

use derive_more::{Display, Error};
use serde::Deserialize;
use std::collections::{BTreeMap, HashSet};
use std::fmt;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Difficulty
{
    Easy,
    Medium,
    Hard,
}

impl Difficulty
{
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];
}

impl fmt::Display for Difficulty
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        match self {
            Difficulty::Easy => write!(f, "Easy"),
            Difficulty::Medium => write!(f, "Medium"),
            Difficulty::Hard => write!(f, "Hard"),
        }
    }
}

/// Accepted spelling(s) for a country's capital.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Capital
{
    One(String),
    Many(Vec<String>),
}

impl Capital
{
    pub fn answers(&self) -> &[String]
    {
        match self {
            Capital::One(name) => std::slice::from_ref(name),
            Capital::Many(names) => names,
        }
    }
}

impl fmt::Display for Capital
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        write!(f, "{}", self.answers().join(" or "))
    }
}

#[derive(Debug, Display, Error)]
pub enum DictionaryError
{
    #[display("failed to read dictionary {}: {source}", path.display())]
    Read
    {
        path: PathBuf,
        source: std::io::Error,
    },
    #[display("invalid dictionary file: {_0}")]
    Parse(toml::de::Error),
    #[display("dictionary has no countries")]
    Empty,
    #[display("'{country}' has no accepted capital")]
    MissingCapital
    {
        country: String,
    },
    #[display("'{country}' lists a blank capital spelling")]
    BlankCapital
    {
        country: String,
    },
    #[display("{tier} tier has no countries")]
    EmptyTier
    {
        tier: Difficulty,
    },
    #[display("{tier} tier references unknown country '{country}'")]
    UnknownCountry
    {
        tier: Difficulty,
        country: String,
    },
    #[display("{tier} tier lists '{country}' more than once")]
    DuplicateCountry
    {
        tier: Difficulty,
        country: String,
    },
}

#[derive(Deserialize)]
struct DictionaryFile
{
    capitals: BTreeMap<String, Capital>,
    tiers: Option<TierFile>,
}

#[derive(Deserialize)]
struct TierFile
{
    easy: Vec<String>,
    medium: Vec<String>,
    hard: Vec<String>,
}

/// Read-only country to capital table, partitioned into difficulty tiers.
#[derive(Debug, Clone)]
pub struct Dictionary
{
    capitals: BTreeMap<String, Capital>,
    easy: Vec<String>,
    medium: Vec<String>,
    hard: Vec<String>,
}

impl Dictionary
{
    pub fn builtin() -> Self
    {
        let capitals = builtin::CAPITALS
            .iter()
            .map(|(country, answers)| {
                let capital = match answers {
                    [single] => Capital::One(single.to_string()),
                    many => Capital::Many(many.iter().map(|name| name.to_string()).collect()),
                };
                (country.to_string(), capital)
            })
            .collect();
        let owned = |names: &[&str]| -> Vec<String> {
            names.iter().map(|name| name.to_string()).collect()
        };
        Self {
            capitals,
            easy: owned(builtin::EASY),
            medium: owned(builtin::MEDIUM),
            hard: owned(builtin::HARD),
        }
    }

    /// Builds a dictionary from explicit data, checking every invariant the
    /// session relies on.
    pub fn new(
        capitals: BTreeMap<String, Capital>,
        easy: Vec<String>,
        medium: Vec<String>,
        hard: Vec<String>,
    ) -> Result<Self, DictionaryError>
    {
        let dictionary = Self {
            capitals,
            easy,
            medium,
            hard,
        };
        dictionary.validate()?;
        Ok(dictionary)
    }

    pub fn from_toml_str(source: &str) -> Result<Self, DictionaryError>
    {
        let file: DictionaryFile = toml::from_str(source).map_err(DictionaryError::Parse)?;
        let (easy, medium, hard) = match file.tiers {
            Some(tiers) => (tiers.easy, tiers.medium, tiers.hard),
            None => {
                let all: Vec<String> = file.capitals.keys().cloned().collect();
                (all.clone(), all.clone(), all)
            }
        };
        Self::new(file.capitals, easy, medium, hard)
    }

    pub fn load(path: &Path) -> Result<Self, DictionaryError>
    {
        let source = std::fs::read_to_string(path).map_err(|source| DictionaryError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let dictionary = Self::from_toml_str(&source)?;
        tracing::info!(
            path = %path.display(),
            countries = dictionary.country_count(),
            "loaded dictionary"
        );
        Ok(dictionary)
    }

    fn validate(&self) -> Result<(), DictionaryError>
    {
        if self.capitals.is_empty() {
            return Err(DictionaryError::Empty);
        }
        for (country, capital) in &self.capitals {
            let answers = capital.answers();
            if answers.is_empty() {
                return Err(DictionaryError::MissingCapital {
                    country: country.clone(),
                });
            }
            if answers.iter().any(|answer| answer.trim().is_empty()) {
                return Err(DictionaryError::BlankCapital {
                    country: country.clone(),
                });
            }
        }
        for tier in Difficulty::ALL {
            let countries = self.countries_for(tier);
            if countries.is_empty() {
                return Err(DictionaryError::EmptyTier { tier });
            }
            if let Some(country) = countries.iter().find(|name| !self.capitals.contains_key(*name)) {
                return Err(DictionaryError::UnknownCountry {
                    tier,
                    country: country.clone(),
                });
            }
            let mut seen = HashSet::new();
            if let Some(country) = countries.iter().find(|name| !seen.insert(name.as_str())) {
                return Err(DictionaryError::DuplicateCountry {
                    tier,
                    country: country.clone(),
                });
            }
        }
        Ok(())
    }

    /// Unknown countries yield `None`, which the answer check treats as wrong.
    pub fn capitals_of(&self, country: &str) -> Option<&Capital>
    {
        self.capitals.get(country)
    }

    pub fn countries_for(&self, tier: Difficulty) -> &[String]
    {
        match tier {
            Difficulty::Easy => &self.easy,
            Difficulty::Medium => &self.medium,
            Difficulty::Hard => &self.hard,
        }
    }

    pub fn countries(&self) -> Vec<String>
    {
        self.capitals.keys().cloned().collect()
    }

    /// Selection pool for a session: a tier, or every country when `None`.
    pub fn pool(&self, difficulty: Option<Difficulty>) -> Vec<String>
    {
        match difficulty {
            Some(tier) => self.countries_for(tier).to_vec(),
            None => self.countries(),
        }
    }

    pub fn country_count(&self) -> usize
    {
        self.capitals.len()
    }
}

#[cfg(test)]
mod tests
{
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = r#"
[capitals]
France = "Paris"
"United States" = ["Washington DC", "Washington"]

[tiers]
easy = ["France"]
medium = ["United States"]
hard = ["France", "United States"]
"#;

    #[test]
    fn builtin_dictionary_is_valid()
    {
        let dictionary = Dictionary::builtin();
        dictionary.validate().expect("builtin data should validate");
        for country in dictionary.countries() {
            let capital = dictionary.capitals_of(&country).expect("country has a capital");
            assert!(!capital.answers().is_empty(), "{country} has no answers");
        }
    }

    #[test]
    fn builtin_tiers_partition_the_countries()
    {
        let dictionary = Dictionary::builtin();
        let mut seen = HashSet::new();
        for tier in Difficulty::ALL {
            for country in dictionary.countries_for(tier) {
                assert!(seen.insert(country.clone()), "{country} appears in two tiers");
            }
        }
        assert_eq!(seen.len(), dictionary.country_count());
    }

    #[test]
    fn parses_single_and_multiple_capitals()
    {
        let dictionary = Dictionary::from_toml_str(SAMPLE).unwrap();
        assert_eq!(
            dictionary.capitals_of("France"),
            Some(&Capital::One("Paris".to_string()))
        );
        let us = dictionary.capitals_of("United States").unwrap();
        assert_eq!(us.answers(), ["Washington DC", "Washington"]);
        assert_eq!(us.to_string(), "Washington DC or Washington");
        assert_eq!(dictionary.countries_for(Difficulty::Hard).len(), 2);
    }

    #[test]
    fn unknown_country_has_no_capital()
    {
        let dictionary = Dictionary::from_toml_str(SAMPLE).unwrap();
        assert!(dictionary.capitals_of("Atlantis").is_none());
    }

    #[test]
    fn missing_tiers_default_to_every_country()
    {
        let dictionary = Dictionary::from_toml_str(
            "[capitals]\nFrance = \"Paris\"\nPeru = \"Lima\"\n",
        )
        .unwrap();
        for tier in Difficulty::ALL {
            assert_eq!(dictionary.countries_for(tier), ["France", "Peru"]);
        }
        assert_eq!(dictionary.pool(None), ["France", "Peru"]);
    }

    #[test]
    fn rejects_tier_with_unknown_country()
    {
        let err = Dictionary::from_toml_str(
            "[capitals]\nFrance = \"Paris\"\n[tiers]\neasy = [\"France\"]\nmedium = [\"Narnia\"]\nhard = [\"France\"]\n",
        )
        .unwrap_err();
        assert!(matches!(
            err,
            DictionaryError::UnknownCountry { tier: Difficulty::Medium, ref country } if country == "Narnia"
        ));
    }

    #[test]
    fn rejects_duplicate_tier_entry()
    {
        let err = Dictionary::from_toml_str(
            "[capitals]\nFrance = \"Paris\"\nPeru = \"Lima\"\n[tiers]\neasy = [\"France\", \"France\", \"France\", \"Peru\"]\nmedium = [\"Peru\"]\nhard = [\"France\"]\n",
        )
        .unwrap_err();
        assert!(matches!(
            err,
            DictionaryError::DuplicateCountry { tier: Difficulty::Easy, ref country } if country == "France"
        ));
        assert_eq!(err.to_string(), "Easy tier lists 'France' more than once");
    }

    #[test]
    fn overlapping_tiers_are_allowed()
    {
        let dictionary = Dictionary::from_toml_str(
            "[capitals]\nFrance = \"Paris\"\nPeru = \"Lima\"\n[tiers]\neasy = [\"France\", \"Peru\"]\nmedium = [\"Peru\"]\nhard = [\"France\", \"Peru\"]\n",
        )
        .unwrap();
        assert_eq!(dictionary.countries_for(Difficulty::Hard), ["France", "Peru"]);
    }

    #[test]
    fn rejects_empty_capital_list()
    {
        let err = Dictionary::from_toml_str("[capitals]\nFrance = []\n").unwrap_err();
        assert!(matches!(err, DictionaryError::MissingCapital { .. }));

        let err = Dictionary::from_toml_str("[capitals]\nFrance = \"  \"\n").unwrap_err();
        assert!(matches!(err, DictionaryError::BlankCapital { .. }));
    }

    #[test]
    fn rejects_empty_tier_and_empty_dictionary()
    {
        let err = Dictionary::from_toml_str(
            "[capitals]\nFrance = \"Paris\"\n[tiers]\neasy = []\nmedium = [\"France\"]\nhard = [\"France\"]\n",
        )
        .unwrap_err();
        assert!(matches!(err, DictionaryError::EmptyTier { tier: Difficulty::Easy }));

        let err = Dictionary::from_toml_str("[capitals]\n").unwrap_err();
        assert!(matches!(err, DictionaryError::Empty));
    }

    #[test]
    fn reports_malformed_toml()
    {
        let err = Dictionary::from_toml_str("capitals = 3").unwrap_err();
        assert!(matches!(err, DictionaryError::Parse(_)));
    }

    #[test]
    fn loads_from_file()
    {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();
        let dictionary = Dictionary::load(file.path()).unwrap();
        assert_eq!(dictionary.country_count(), 2);

        let missing = file.path().with_extension("missing");
        let err = Dictionary::load(&missing).unwrap_err();
        assert!(matches!(err, DictionaryError::Read { .. }));
        assert!(err.to_string().contains("failed to read dictionary"));
    }
}
