use crate::analysis::AnalysisResult;

pub const TIPS_UNAVAILABLE: &str = "Unable to load recommendations. Please refresh the page.";
pub const NO_TIPS: &str = "Based on your analysis, we recommend consulting with a beauty professional for personalized advice.";

/// Something that turns an analysis into human-readable care tips.
///
/// Returns `None` when the generator cannot be reached at call time.
pub trait TipSource {
    fn tips(&self, result: &AnalysisResult, language: &str) -> Option<Vec<String>>;
}

#[derive(Debug, Clone, PartialEq)]
pub enum Recommendation {
    Unavailable,
    NoTips,
    Tips(Vec<String>),
}

impl Recommendation {
    pub fn resolve(
        source: Option<&dyn TipSource>,
        result: &AnalysisResult,
        language: &str,
    ) -> Self {
        match source.and_then(|source| source.tips(result, language)) {
            None => Recommendation::Unavailable,
            Some(tips) if tips.is_empty() => Recommendation::NoTips,
            Some(tips) => Recommendation::Tips(tips),
        }
    }

    pub fn text(&self) -> String {
        match self {
            Recommendation::Unavailable => TIPS_UNAVAILABLE.to_string(),
            Recommendation::NoTips => NO_TIPS.to_string(),
            Recommendation::Tips(tips) => tips
                .iter()
                .map(|tip| format!("• {}", tip))
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct Fixed {
        tips: Option<Vec<String>>,
        seen_language: RefCell<Option<String>>,
    }

    impl TipSource for Fixed {
        fn tips(&self, _result: &AnalysisResult, language: &str) -> Option<Vec<String>> {
            *self.seen_language.borrow_mut() = Some(language.to_string());
            self.tips.clone()
        }
    }

    fn fixed(tips: Option<Vec<&str>>) -> Fixed {
        Fixed {
            tips: tips.map(|t| t.into_iter().map(String::from).collect()),
            seen_language: RefCell::new(None),
        }
    }

    #[test]
    fn missing_source_is_unavailable() {
        let rec = Recommendation::resolve(None, &AnalysisResult::default(), "en");
        assert_eq!(rec.text(), TIPS_UNAVAILABLE);
    }

    #[test]
    fn source_that_disappeared_is_unavailable() {
        let source = fixed(None);
        let rec = Recommendation::resolve(Some(&source), &AnalysisResult::default(), "en");
        assert_eq!(rec, Recommendation::Unavailable);
    }

    #[test]
    fn empty_tips_fall_back() {
        let source = fixed(Some(vec![]));
        let rec = Recommendation::resolve(Some(&source), &AnalysisResult::default(), "en");
        assert_eq!(rec.text(), NO_TIPS);
    }

    #[test]
    fn tips_become_bullets_and_language_is_forwarded() {
        let source = fixed(Some(vec!["Drink water", "Use SPF 30"]));
        let rec = Recommendation::resolve(Some(&source), &AnalysisResult::default(), "fr");
        assert_eq!(rec.text(), "• Drink water\n• Use SPF 30");
        assert_eq!(source.seen_language.borrow().as_deref(), Some("fr"));
    }
}
