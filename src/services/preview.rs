//! 问卷文本预览 - 业务能力层
//!
//! 把题目列表和暂存答案渲染成纯文本，供命令行和日志使用。

use crate::models::{Question, QuestionSet, QuestionType};
use crate::services::response_store::ResponseScratchStore;
use std::fmt::Write;

/// 渲染整份问卷预览
pub fn render_preview(
    title: &str,
    questions: &QuestionSet,
    responses: &ResponseScratchStore,
) -> String {
    let mut out = String::new();

    if !title.trim().is_empty() {
        let _ = writeln!(out, "{}", title.trim());
    }

    if questions.is_empty() {
        out.push_str("No questions yet\n");
        return out;
    }

    let _ = writeln!(out, "{}", question_count_badge(questions.len()));
    for (index, question) in questions.iter().enumerate() {
        out.push('\n');
        render_question(&mut out, index, question, responses);
    }

    out
}

/// 题目数量标记，例如 "1 question"、"3 questions"
pub fn question_count_badge(count: usize) -> String {
    if count == 1 {
        "1 question".to_string()
    } else {
        format!("{} questions", count)
    }
}

fn render_question(
    out: &mut String,
    index: usize,
    question: &Question,
    responses: &ResponseScratchStore,
) {
    let _ = writeln!(
        out,
        "{}. [{}] {}",
        index + 1,
        question.kind().label(),
        question.text()
    );

    let id = question.id();
    match question.kind() {
        QuestionType::MultipleChoice | QuestionType::CheckboxList => {
            let (on, off) = if question.kind() == QuestionType::MultipleChoice {
                ("(•)", "( )")
            } else {
                ("[x]", "[ ]")
            };
            for option in question.options().unwrap_or_default() {
                let mark = if responses.is_selected(&id, option) { on } else { off };
                let _ = writeln!(out, "   {} {}", mark, option);
            }
        }
        QuestionType::ShortText | QuestionType::LongText => {
            let placeholder = if question.kind() == QuestionType::ShortText {
                "Short answer text"
            } else {
                "Long answer text"
            };
            match responses.single(&id).filter(|s| !s.is_empty()) {
                Some(answer) => {
                    for line in answer.lines() {
                        let _ = writeln!(out, "   > {}", line);
                    }
                }
                None => {
                    let _ = writeln!(out, "   _{}_", placeholder);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NO_OPTIONS;

    #[test]
    fn test_empty_survey() {
        let text = render_preview("", &QuestionSet::new(), &ResponseScratchStore::new());
        assert_eq!(text, "No questions yet\n");
    }

    #[test]
    fn test_badge() {
        assert_eq!(question_count_badge(1), "1 question");
        assert_eq!(question_count_badge(0), "0 questions");
        assert_eq!(question_count_badge(4), "4 questions");
    }

    #[test]
    fn test_render_with_responses() {
        let pick =
            Question::create(QuestionType::MultipleChoice, "Pick one", ["X", "Y"]).unwrap();
        let sides =
            Question::create(QuestionType::CheckboxList, "Sides", ["Chips", "Fruit"]).unwrap();
        let name = Question::create(QuestionType::ShortText, "Name", NO_OPTIONS).unwrap();
        let more = Question::create(QuestionType::LongText, "More", NO_OPTIONS).unwrap();

        let mut responses = ResponseScratchStore::new();
        responses.set_single(pick.id(), "Y");
        responses.toggle_multi(sides.id(), "Fruit", true);
        responses.set_single(name.id(), "Ada");

        let set: QuestionSet = [pick, sides, name, more].into_iter().collect();
        let text = render_preview("Lunch", &set, &responses);

        let expected = "\
Lunch
4 questions

1. [Multiple Choice] Pick one
   ( ) X
   (•) Y

2. [Checkbox List] Sides
   [ ] Chips
   [x] Fruit

3. [Short Text] Name
   > Ada

4. [Long Text] More
   _Long answer text_
";
        assert_eq!(text, expected);
    }
}
