//! Prompt overrides from TOML (`[prompts.en]`, `[prompts.id]`)

use devtype_domain::{Locale, PromptCatalog, PromptPurpose, PromptTemplate};
use serde::{Deserialize, Serialize};

/// Overrides for one locale; unset purposes keep the built-in prompt
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLocalePrompts {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub questions: Option<PromptTemplate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analysis: Option<PromptTemplate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog: Option<PromptTemplate>,
}

impl FileLocalePrompts {
    fn overrides(&self) -> impl Iterator<Item = (PromptPurpose, &PromptTemplate)> {
        [
            (PromptPurpose::Questions, &self.questions),
            (PromptPurpose::Analysis, &self.analysis),
            (PromptPurpose::Catalog, &self.catalog),
        ]
        .into_iter()
        .filter_map(|(purpose, template)| template.as_ref().map(|t| (purpose, t)))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilePromptsConfig {
    pub en: FileLocalePrompts,
    pub id: FileLocalePrompts,
}

impl FilePromptsConfig {
    pub fn for_locale(&self, locale: Locale) -> &FileLocalePrompts {
        match locale {
            Locale::En => &self.en,
            Locale::Id => &self.id,
        }
    }

    /// Built-in catalog with every configured override applied
    pub fn to_catalog(&self) -> PromptCatalog {
        let mut catalog = PromptCatalog::default();
        for locale in Locale::ALL {
            for (purpose, template) in self.for_locale(locale).overrides() {
                catalog = catalog.with_override(locale, purpose, template.clone());
            }
        }
        catalog
    }
}
