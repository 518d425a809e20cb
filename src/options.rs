//! Analysis options posted alongside the uploaded file.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Audience {
    #[default]
    General,
    Ceo,
    Lawyer,
    Researcher,
    Student,
}

impl Audience {
    pub const ALL: [Audience; 5] = [
        Audience::General,
        Audience::Ceo,
        Audience::Lawyer,
        Audience::Researcher,
        Audience::Student,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Audience::General => "general",
            Audience::Ceo => "ceo",
            Audience::Lawyer => "lawyer",
            Audience::Researcher => "researcher",
            Audience::Student => "student",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Audience::General => "General",
            Audience::Ceo => "Executive",
            Audience::Lawyer => "Legal",
            Audience::Researcher => "Researcher",
            Audience::Student => "Student",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.as_str() == value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SummaryLength {
    Short,
    #[default]
    Medium,
    Detailed,
}

impl SummaryLength {
    pub const ALL: [SummaryLength; 3] = [
        SummaryLength::Short,
        SummaryLength::Medium,
        SummaryLength::Detailed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SummaryLength::Short => "short",
            SummaryLength::Medium => "medium",
            SummaryLength::Detailed => "detailed",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SummaryLength::Short => "Short",
            SummaryLength::Medium => "Medium",
            SummaryLength::Detailed => "Detailed",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|l| l.as_str() == value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    English,
    Spanish,
    Chinese,
    Hindi,
    French,
    German,
    Japanese,
    Korean,
    Arabic,
    Urdu,
    Portuguese,
}

impl Language {
    pub const ALL: [Language; 11] = [
        Language::English,
        Language::Spanish,
        Language::Chinese,
        Language::Hindi,
        Language::French,
        Language::German,
        Language::Japanese,
        Language::Korean,
        Language::Arabic,
        Language::Urdu,
        Language::Portuguese,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::English => "english",
            Language::Spanish => "spanish",
            Language::Chinese => "chinese",
            Language::Hindi => "hindi",
            Language::French => "french",
            Language::German => "german",
            Language::Japanese => "japanese",
            Language::Korean => "korean",
            Language::Arabic => "arabic",
            Language::Urdu => "urdu",
            Language::Portuguese => "portuguese",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Spanish => "Spanish",
            Language::Chinese => "Chinese (Simplified)",
            Language::Hindi => "Hindi",
            Language::French => "French",
            Language::German => "German",
            Language::Japanese => "Japanese",
            Language::Korean => "Korean",
            Language::Arabic => "Arabic",
            Language::Urdu => "Urdu",
            Language::Portuguese => "Portuguese",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|l| l.as_str() == value)
    }
}

/// Form state read at submit time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadOptions {
    pub include_key_points: bool,
    pub include_mindmap: bool,
    pub use_ocr: bool,
    pub audience: Audience,
    pub length: SummaryLength,
    pub language: Language,
}

impl Default for UploadOptions {
    fn default() -> Self {
        Self {
            include_key_points: true,
            include_mindmap: false,
            use_ocr: false,
            audience: Audience::default(),
            length: SummaryLength::default(),
            language: Language::default(),
        }
    }
}

/// The backend compares form flags against the literal string `"true"`.
pub fn form_flag(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_upload_form() {
        let options = UploadOptions::default();
        assert!(options.include_key_points);
        assert!(!options.include_mindmap);
        assert!(!options.use_ocr);
        assert_eq!(options.audience.as_str(), "general");
        assert_eq!(options.length.as_str(), "medium");
        assert_eq!(options.language.as_str(), "english");
    }

    #[test]
    fn parse_accepts_wire_names_only() {
        assert_eq!(Audience::parse("ceo"), Some(Audience::Ceo));
        assert_eq!(Audience::parse("Executive"), None);
        assert_eq!(SummaryLength::parse("detailed"), Some(SummaryLength::Detailed));
        assert_eq!(Language::parse("portuguese"), Some(Language::Portuguese));
        assert_eq!(Language::parse("klingon"), None);
    }

    #[test]
    fn form_flags_are_lowercase_literals() {
        assert_eq!(form_flag(true), "true");
        assert_eq!(form_flag(false), "false");
    }
}
