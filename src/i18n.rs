//! Language preference and the localized labels the engine consumes.
//!
//! The full UI string table is a presentation concern; the engine itself only
//! needs the currency label and the per-language category label sets offered
//! in the product form. Category labels are
//! advisory: they populate selection options but are never enforced on stored
//! products, so imported data with labels from another language (or none of
//! the sets) stays valid.

use serde::{Deserialize, Serialize};

/// Active language, persisted as `"ar"` / `"fr"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Ar,
    Fr,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Ar => "ar",
            Language::Fr => "fr",
        }
    }

    /// Parse a stored language code; unknown codes fall back to the default.
    pub fn from_code(code: &str) -> Self {
        match code {
            "fr" => Language::Fr,
            _ => Language::Ar,
        }
    }

    /// Category labels offered in the product form for this language.
    pub fn categories(&self) -> &'static [&'static str] {
        match self {
            Language::Ar => &["إلكترونيات", "ملابس", "منزل", "جمال", "أخرى"],
            Language::Fr => &["Électronique", "Vêtements", "Maison", "Beauté", "Autre"],
        }
    }

    pub fn strings(&self) -> &'static Strings {
        match self {
            Language::Ar => &AR_STRINGS,
            Language::Fr => &FR_STRINGS,
        }
    }
}

/// Localized strings consumed by the engine (read-only).
#[derive(Debug, Clone)]
pub struct Strings {
    pub currency: &'static str,
    pub wrong_password: &'static str,
}

static AR_STRINGS: Strings = Strings {
    currency: "درهم",
    wrong_password: "كلمة المرور غير صحيحة",
};

static FR_STRINGS: Strings = Strings {
    currency: "MAD",
    wrong_password: "Mot de passe incorrect",
};
