/// 一筆職缺的薪資區間，已由各來源的回應格式轉換而來
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Vacancy {
    pub salary_from: Option<f64>,
    pub salary_to: Option<f64>,
    pub currency: Option<String>,
}

/// One page of listings as reported by a job board.
#[derive(Debug, Clone, PartialEq)]
pub struct VacancyPage {
    pub vacancies: Vec<Vacancy>,
    /// Page count reported with this page; re-read on every iteration.
    pub pages: u32,
    /// Raw match count, independent of any currency filtering.
    pub found: u64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FetchOutcome {
    pub salaries: Vec<f64>,
    pub vacancies_found: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageStats {
    pub vacancies_found: u64,
    pub vacancies_processed: usize,
    pub average_salary: Option<i64>,
}

/// Per-language statistics for one source, in survey order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Statistics {
    entries: Vec<(String, LanguageStats)>,
}

impl Statistics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the entry if the language is already present, keeping its position.
    pub fn insert(&mut self, language: impl Into<String>, stats: LanguageStats) {
        let language = language.into();
        match self.entries.iter_mut().find(|(name, _)| *name == language) {
            Some((_, existing)) => *existing = stats,
            None => self.entries.push((language, stats)),
        }
    }

    pub fn get(&self, language: &str) -> Option<&LanguageStats> {
        self.entries
            .iter()
            .find(|(name, _)| name == language)
            .map(|(_, stats)| stats)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &LanguageStats)> {
        self.entries.iter().map(|(name, stats)| (name.as_str(), stats))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
