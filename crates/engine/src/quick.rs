use crate::page::PageContext;
use crate::rules::page_rules;

/// Predefined shortcut questions the host offers for a page. Each one is a
/// normal utterance; the host feeds it through [`crate::resolve`] like any
/// typed input.
#[must_use]
pub fn quick_questions(page: PageContext) -> &'static [&'static str] {
    page_rules(page).quick_questions
}
