// Section filtering and ordering for the question bank.
// Narrows rows to the selected sections and orders them for review.

use crate::data::QuestionRecord;

/// Distinct section keys in first-appearance order.
pub fn distinct_sections(rows: &[QuestionRecord]) -> Vec<String> {
    let mut sections: Vec<String> = Vec::new();
    for row in rows {
        let key = row.section_key();
        if !sections.iter().any(|s| s == key) {
            sections.push(key.to_string());
        }
    }
    sections
}

/// Keep rows from the selected sections, ordered by each section's position
/// in `selected`, then by question number. An empty selection yields nothing.
pub fn filter_and_order<'a>(
    rows: &'a [QuestionRecord],
    selected: &[String],
) -> Vec<&'a QuestionRecord> {
    if selected.is_empty() {
        return Vec::new();
    }

    let mut keyed: Vec<(usize, &QuestionRecord)> = rows
        .iter()
        .filter_map(|row| {
            selected
                .iter()
                .position(|s| s == row.section_key())
                .map(|rank| (rank, row))
        })
        .collect();

    // Stable: rows with equal keys keep load order.
    keyed.sort_by(|(rank_a, a), (rank_b, b)| {
        rank_a
            .cmp(rank_b)
            .then_with(|| a.question_number.cmp(&b.question_number))
    });

    keyed.into_iter().map(|(_, row)| row).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{IMPLICIT_SECTION, QuestionNumber};

    fn row(section: Option<&str>, number: i64, question: &str) -> QuestionRecord {
        QuestionRecord {
            section: section.map(str::to_string),
            question_number: QuestionNumber::parse(&number.to_string()),
            question_text: question.to_string(),
            answer_text: format!("answer to {}", question),
        }
    }

    fn sections(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn sample() -> Vec<QuestionRecord> {
        vec![
            row(Some("SectionA"), 1, "Q1"),
            row(Some("SectionA"), 2, "Q2"),
            row(Some("SectionB"), 1, "Q3"),
        ]
    }

    #[test]
    fn test_selection_order_drives_output_order() {
        let rows = sample();
        let result = filter_and_order(&rows, &sections(&["SectionB", "SectionA"]));
        let questions: Vec<&str> = result.iter().map(|r| r.question_text.as_str()).collect();
        assert_eq!(questions, vec!["Q3", "Q1", "Q2"]);
    }

    #[test]
    fn test_empty_selection_shows_nothing() {
        let rows = sample();
        assert!(filter_and_order(&rows, &[]).is_empty());
        assert!(filter_and_order(&[], &[]).is_empty());
    }

    #[test]
    fn test_only_selected_sections_are_kept() {
        let rows = sample();
        let result = filter_and_order(&rows, &sections(&["SectionA"]));
        assert_eq!(result.len(), 2);
        assert!(result.iter().all(|r| r.section_key() == "SectionA"));
    }

    #[test]
    fn test_unknown_section_is_ignored() {
        let rows = sample();
        let result = filter_and_order(&rows, &sections(&["Missing", "SectionB"]));
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].question_text, "Q3");
    }

    #[test]
    fn test_question_numbers_sort_within_section() {
        let rows = vec![
            row(Some("A"), 10, "ten"),
            row(Some("A"), 2, "two"),
            row(Some("B"), 5, "five"),
            row(Some("A"), 2, "two again"),
        ];
        let result = filter_and_order(&rows, &sections(&["A", "B"]));
        let questions: Vec<&str> = result.iter().map(|r| r.question_text.as_str()).collect();
        assert_eq!(questions, vec!["two", "two again", "ten", "five"]);
    }

    #[test]
    fn test_decimal_question_numbers_sort_numerically() {
        let numbered = |cell: &str, question: &str| QuestionRecord {
            section: Some("A".to_string()),
            question_number: QuestionNumber::parse(cell),
            question_text: question.to_string(),
            answer_text: String::new(),
        };
        let rows = vec![
            numbered("10.1", "ten"),
            numbered("2.1", "two"),
            numbered("1.5", "onefive"),
            numbered("1", "one"),
            numbered("1a", "text"),
        ];
        let result = filter_and_order(&rows, &sections(&["A"]));
        let questions: Vec<&str> = result.iter().map(|r| r.question_text.as_str()).collect();
        assert_eq!(questions, vec!["one", "onefive", "two", "ten", "text"]);
    }

    #[test]
    fn test_rows_without_section_form_one_implicit_section() {
        let rows = vec![row(None, 2, "second"), row(None, 1, "first")];
        assert_eq!(distinct_sections(&rows), vec![IMPLICIT_SECTION]);

        let result = filter_and_order(&rows, &sections(&[IMPLICIT_SECTION]));
        let questions: Vec<&str> = result.iter().map(|r| r.question_text.as_str()).collect();
        assert_eq!(questions, vec!["first", "second"]);
    }

    #[test]
    fn test_distinct_sections_first_appearance() {
        let rows = vec![
            row(Some("B"), 1, "x"),
            row(Some("A"), 1, "y"),
            row(Some("B"), 2, "z"),
        ];
        assert_eq!(distinct_sections(&rows), vec!["B", "A"]);
    }
}
