//! Prompt construction.
//!
//! The instruction template below is the entire behavioral contract handed
//! to the model. The scheduling rules live here as advisory text; nothing in
//! this service enforces them on the reply.

use super::{PlanRequest, TaskSpec};

/// Render the instruction prompt for a normalized request.
///
/// Pure and deterministic: equal requests produce equal prompts.
pub fn build_prompt(request: &PlanRequest) -> String {
    let task_text = if request.tasks.is_empty() {
        "(no tasks provided)".to_string()
    } else {
        request
            .tasks
            .iter()
            .enumerate()
            .map(|(i, task)| render_task_line(i + 1, task))
            .collect::<Vec<_>>()
            .join("\n")
    };

    format!(
        r#"You are creating a fully planned day schedule for {date_label}.

INPUT:
- The list below contains ONLY tasks that are due TODAY, and each task includes a deadline time.

HARD RULES:
- Output MUST be valid JSON only (no markdown, no extra text).
- Build a schedule from 09:00 to 21:00.
- Every entry MUST have an exact start and end time in 24h format: "HH:mm - HH:mm".
- Use ALL provided tasks exactly once (do not repeat tasks).
- Do NOT invent new tasks.
- Do NOT schedule any task after its deadline time (it must finish before or at the deadline).
- You MAY add non-task blocks to fill the day, such as: "Break", "Lunch", "Dinner", "Free time", "Buffer".
- Keep the day realistic (include short breaks between blocks).
- If there are no tasks, still return a full-day schedule with breaks/free time.

OUTPUT JSON FORMAT (exact keys):
{{
  "summary": "Your plan for today",
  "plan": [
    {{ "time": "09:00 - 09:30", "title": "Break", "details": "Coffee / prep" }},
    {{ "time": "09:30 - 10:15", "title": "Task title", "details": "Short detail" }}
  ],
  "tips": [
    "If the walk is missed: Fit it in during a break."
  ]
}}

Tasks (today only, each includes a deadline time):
{task_text}"#,
        date_label = request.date_label,
        task_text = task_text,
    )
    .trim()
    .to_string()
}

/// One 1-indexed listing line. Optional segments appear only when the
/// source field survived trimming.
fn render_task_line(index: usize, task: &TaskSpec) -> String {
    let mut line = format!("{}. {}", index, task.title);
    if !task.description.is_empty() {
        line.push_str(&format!(" — {}", task.description));
    }
    if !task.status.is_empty() {
        line.push_str(&format!(" [{}]", task.status));
    }
    if !task.deadline.is_empty() {
        line.push_str(&format!(" (deadline: {})", task.deadline));
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(title: &str, description: &str, status: &str, deadline: &str) -> TaskSpec {
        TaskSpec {
            title: title.to_string(),
            description: description.to_string(),
            status: status.to_string(),
            deadline: deadline.to_string(),
        }
    }

    fn request_with(tasks: Vec<TaskSpec>) -> PlanRequest {
        PlanRequest {
            tasks,
            date_label: "today".to_string(),
        }
    }

    #[test]
    fn test_full_task_line() {
        let line = render_task_line(1, &task("Gym", "Leg day", "pending", "18:00"));
        assert_eq!(line, "1. Gym — Leg day [pending] (deadline: 18:00)");
    }

    #[test]
    fn test_empty_segments_are_omitted() {
        assert_eq!(render_task_line(2, &task("Gym", "", "", "")), "2. Gym");
        assert_eq!(
            render_task_line(3, &task("Gym", "", "", "18:00")),
            "3. Gym (deadline: 18:00)"
        );
        assert_eq!(
            render_task_line(4, &task("", "", "done", "")),
            "4.  [done]"
        );
    }

    #[test]
    fn test_lines_are_one_indexed_in_input_order() {
        let prompt = build_prompt(&request_with(vec![
            task("First", "", "", ""),
            task("Second", "", "", ""),
            task("Third", "", "", ""),
        ]));
        let first = prompt.find("1. First").unwrap();
        let second = prompt.find("2. Second").unwrap();
        let third = prompt.find("3. Third").unwrap();
        assert!(first < second && second < third);
    }

    #[test]
    fn test_empty_list_renders_placeholder() {
        let prompt = build_prompt(&request_with(vec![]));
        assert!(prompt.ends_with("(no tasks provided)"));
    }

    #[test]
    fn test_template_carries_date_label_and_schema() {
        let prompt = build_prompt(&PlanRequest {
            tasks: vec![],
            date_label: "Monday".to_string(),
        });
        assert!(prompt.starts_with("You are creating a fully planned day schedule for Monday."));
        assert!(prompt.contains("Output MUST be valid JSON only"));
        assert!(prompt.contains("from 09:00 to 21:00"));
        assert!(prompt.contains(r#""HH:mm - HH:mm""#));
        assert!(prompt.contains(r#""summary""#));
        assert!(prompt.contains(r#""tips""#));
    }

    #[test]
    fn test_prompt_is_trimmed_and_deterministic() {
        let request = request_with(vec![task("Gym", "", "", "18:00")]);
        let prompt = build_prompt(&request);
        assert_eq!(prompt, prompt.trim());
        assert_eq!(prompt, build_prompt(&request));
    }
}
