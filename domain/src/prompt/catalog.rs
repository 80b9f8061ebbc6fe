//! Built-in prompts for every locale and purpose

use super::template::{PromptPurpose, PromptTemplate};
use crate::core::locale::Locale;
use serde::{Deserialize, Serialize};

/// The three prompts used for one locale
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocalePrompts {
    pub questions: PromptTemplate,
    pub analysis: PromptTemplate,
    pub catalog: PromptTemplate,
}

impl LocalePrompts {
    pub fn get(&self, purpose: PromptPurpose) -> &PromptTemplate {
        match purpose {
            PromptPurpose::Questions => &self.questions,
            PromptPurpose::Analysis => &self.analysis,
            PromptPurpose::Catalog => &self.catalog,
        }
    }

    fn get_mut(&mut self, purpose: PromptPurpose) -> &mut PromptTemplate {
        match purpose {
            PromptPurpose::Questions => &mut self.questions,
            PromptPurpose::Analysis => &mut self.analysis,
            PromptPurpose::Catalog => &mut self.catalog,
        }
    }

    pub fn english() -> Self {
        Self {
            questions: PromptTemplate::new(EN_QUESTIONS, 0.8, 2000).with_system(
                "You are an expert in developer psychology and personality assessment. Generate engaging, relatable questions for a developer personality test.",
            ),
            analysis: PromptTemplate::new(EN_ANALYSIS, 0.9, 2000).with_system(
                "You are an expert in developer psychology and personality assessment. Analyze developer behavior patterns and create engaging personality profiles.",
            ),
            catalog: PromptTemplate::new(EN_CATALOG, 1.0, 1500).with_system(
                "You are an expert in developer psychology and personality assessment. Generate engaging, relatable developer personality types.",
            ),
        }
    }

    pub fn indonesian() -> Self {
        Self {
            questions: PromptTemplate::new(ID_QUESTIONS, 0.8, 2000).with_system(
                "Anda adalah ahli dalam psikologi developer dan penilaian kepribadian. Buat pertanyaan yang menarik dan relatable untuk tes kepribadian developer dalam bahasa Indonesia.",
            ),
            analysis: PromptTemplate::new(ID_ANALYSIS, 0.9, 2000).with_system(
                "Anda adalah ahli dalam psikologi developer dan penilaian kepribadian. Analisis pola perilaku developer dan buat profil kepribadian yang menarik dalam bahasa Indonesia.",
            ),
            catalog: PromptTemplate::new(ID_CATALOG, 1.0, 1500).with_system(
                "Anda adalah ahli dalam psikologi developer dan penilaian kepribadian. Buat tipe kepribadian developer yang menarik dan relatable dalam bahasa Indonesia.",
            ),
        }
    }
}

/// Prompts for all supported locales
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromptCatalog {
    pub en: LocalePrompts,
    pub id: LocalePrompts,
}

impl Default for PromptCatalog {
    fn default() -> Self {
        Self {
            en: LocalePrompts::english(),
            id: LocalePrompts::indonesian(),
        }
    }
}

impl PromptCatalog {
    pub fn for_locale(&self, locale: Locale) -> &LocalePrompts {
        match locale {
            Locale::En => &self.en,
            Locale::Id => &self.id,
        }
    }

    pub fn template(&self, locale: Locale, purpose: PromptPurpose) -> &PromptTemplate {
        self.for_locale(locale).get(purpose)
    }

    /// Replace a single template
    pub fn with_override(mut self, locale: Locale, purpose: PromptPurpose, template: PromptTemplate) -> Self {
        let prompts = match locale {
            Locale::En => &mut self.en,
            Locale::Id => &mut self.id,
        };
        *prompts.get_mut(purpose) = template;
        self
    }
}

const EN_QUESTIONS: &str = r#"Generate 8 multiple-choice questions for a developer personality test. Each question should explore a different aspect of a developer's mindset, work style, and preferences.

Topics to cover (you may add your own):
- Debugging approaches
- Handling deadlines and pressure
- Learning new technologies
- Code review attitudes
- Problem-solving methods
- Team collaboration
- Architecture decisions
- Production issues

Each question must have exactly 4 options. Keep them relatable with a touch of humor and a casual tone, as if chatting with fellow devs. Do NOT include option letters (A, B, C, D) in the option text.

The example below only shows the format. Do not copy it; make every set original.

Return ONLY a valid JSON array in this exact format:
[
  {
    "question": "🐛 What's your debugging approach?",
    "options": ["Console.log everything", "Step through with debugger", "Google the error", "Ask ChatGPT"]
  }
]

WITHOUT ANY ADDITIONAL COMMENT OR RESPONSE"#;

const EN_ANALYSIS: &str = r#"Analyze the following developer personality test. For each question, here is the user's answer:

{answers}

Identify patterns, tendencies, and preferences in these answers. Based on that analysis, create a developer personality profile with:
1. A creative, memorable personality type name (e.g. "The Architecture Astronaut" or "The Debug Detective")
2. A CONCISE description (max 5 sentences) of their coding style and work approach that truly reflects their answers
3. 3-4 job roles that fit this personality best, based on the answers
4. A witty, relatable quote that captures their essence

Do not produce generic or random types or roles. Use developer culture references and humor.

Return ONLY a valid JSON object in this exact format:
{
  "type": "The Framework Fanatic",
  "description": "You love exploring new technologies...",
  "suitableRoles": ["Frontend Engineer", "Tech Lead", "Developer Advocate", "Innovation Engineer"],
  "quote": "If it's not in beta, it's already legacy code."
}"#;

const EN_CATALOG: &str = r#"Generate 4 creative, memorable developer personality types. For each type, provide:
1. Type name
2. Short description of coding style and work approach
3. 3-4 suitable job roles
4. A witty, relatable quote

Use a friendly, casual tone, as if chatting with fellow devs. The example below only shows the format.

Return ONLY a valid JSON array in this exact format:
[
  {
    "type": "The Framework Fanatic",
    "description": "You love exploring new technologies...",
    "suitableRoles": ["Frontend Engineer", "Tech Lead", "Developer Advocate", "Innovation Engineer"],
    "quote": "If it's not in beta, it's already legacy code."
  }
]"#;

const ID_QUESTIONS: &str = r#"Buat 8 pertanyaan pilihan ganda untuk tes kepribadian developer. Setiap pertanyaan harus mengeksplorasi aspek berbeda dari pola pikir, gaya kerja, dan preferensi developer.

Topik yang harus dicakup:
- Pendekatan debugging
- Menangani deadline dan tekanan
- Mempelajari teknologi baru
- Sikap terhadap code review
- Metode pemecahan masalah
- Kolaborasi tim
- Keputusan arsitektur
- Masalah produksi

Setiap pertanyaan harus memiliki tepat 4 pilihan. Buat pertanyaan yang relatable dengan sentuhan humor dan bahasa santai, seolah ngobrol dengan sesama developer. JANGAN sertakan huruf opsi (A, B, C, D) di dalam teks pilihan.

Contoh di bawah hanya untuk format. Jangan disalin; buat pertanyaan yang kreatif dan bervariasi.

Kembalikan HANYA array JSON yang valid dalam format ini:
[
  {
    "question": "🐛 Apa pendekatan debugging kamu?",
    "options": ["Console.log semua", "Step through dengan debugger", "Google errornya", "Tanya ChatGPT"]
  }
]

WITHOUT ANY ADDITIONAL COMMENT OR RESPONSE"#;

const ID_ANALYSIS: &str = r#"Analisis hasil tes kepribadian developer berikut. Untuk setiap pertanyaan, berikut jawaban user:

{answers}

Identifikasi pola, kecenderungan, dan preferensi dari jawaban-jawaban ini. Berdasarkan analisis tersebut, buat profil kepribadian developer yang mencakup:
1. Nama tipe kepribadian yang kreatif dan mudah diingat (misal "Arsitek Astronot" atau "Detektif Debug")
2. Deskripsi SINGKAT (maksimal 5 kalimat) tentang gaya coding dan pendekatan kerja mereka yang mencerminkan jawaban mereka
3. 3-4 peran pekerjaan yang paling cocok dengan tipe ini
4. Quote yang jenaka dan relatable yang menangkap esensi mereka

Jangan buat tipe atau role yang generik atau acak. Gunakan referensi budaya developer dan humor.

Kembalikan HANYA objek JSON yang valid dalam format ini:
{
  "type": "Si Fanatik Framework",
  "description": "Anda suka mengeksplorasi teknologi baru...",
  "suitableRoles": ["Frontend Engineer", "Tech Lead", "Developer Advocate", "Innovation Engineer"],
  "quote": "Kalau bukan beta, berarti sudah legacy code."
}"#;

const ID_CATALOG: &str = r#"Buat 4 tipe kepribadian developer yang kreatif dan mudah diingat. Untuk setiap tipe, berikan:
1. Nama tipe kepribadian
2. Deskripsi singkat tentang gaya coding dan pendekatan kerja
3. 3-4 peran pekerjaan yang cocok
4. Quote yang jenaka dan relatable

Gunakan bahasa santai, seolah ngobrol dengan sesama developer. Contoh di bawah hanya untuk format.

Kembalikan HANYA array JSON yang valid dalam format ini:
[
  {
    "type": "Si Fanatik Framework",
    "description": "Kamu suka banget eksplor teknologi baru...",
    "suitableRoles": ["Frontend Engineer", "Tech Lead", "Developer Advocate", "Innovation Engineer"],
    "quote": "Kalau bukan beta, berarti udah legacy code."
  }
]"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::template::ANSWERS_PLACEHOLDER;

    #[test]
    fn test_default_sampling_parameters() {
        let catalog = PromptCatalog::default();
        for locale in Locale::ALL {
            let prompts = catalog.for_locale(locale);
            assert_eq!((prompts.questions.temperature, prompts.questions.max_tokens), (0.8, 2000));
            assert_eq!((prompts.analysis.temperature, prompts.analysis.max_tokens), (0.9, 2000));
            assert_eq!((prompts.catalog.temperature, prompts.catalog.max_tokens), (1.0, 1500));
        }
    }

    #[test]
    fn test_only_analysis_takes_answers() {
        let catalog = PromptCatalog::default();
        for locale in Locale::ALL {
            assert!(catalog.template(locale, PromptPurpose::Analysis).user.contains(ANSWERS_PLACEHOLDER));
            assert!(!catalog.template(locale, PromptPurpose::Questions).user.contains(ANSWERS_PLACEHOLDER));
        }
    }

    #[test]
    fn test_override_replaces_one_template() {
        let custom = PromptTemplate::new("Just 8 questions please", 0.5, 800);
        let catalog = PromptCatalog::default().with_override(Locale::Id, PromptPurpose::Questions, custom.clone());

        assert_eq!(catalog.template(Locale::Id, PromptPurpose::Questions), &custom);
        assert_eq!(catalog.en, LocalePrompts::english());
        assert_eq!(catalog.id.analysis, LocalePrompts::indonesian().analysis);
    }
}
