//! Drill session queue and statistics.

use crate::error::GradeError;
use crate::grading::GradeScale;
use crate::item::Item;
use serde::Serialize;
use std::collections::VecDeque;

/// FIFO queue of pending items plus running counters.
///
/// An item leaves the queue only when answered correctly. A wrong answer
/// moves it to the back. The session is done once the queue is empty.
#[derive(Debug, Clone)]
pub struct Scheduler {
    items: VecDeque<Item>,
    attempted: u32,
    correct: u32,
    grade_scale: GradeScale,
}

/// Snapshot of the session counters, for status displays.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionStats {
    pub todo: usize,
    pub attempted: u32,
    pub correct: u32,
    pub incorrect: u32,
    pub percentage_correct: Option<u32>,
    pub grade: Option<f64>,
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new(Vec::<Item>::new())
    }
}

impl Scheduler {
    /// Create a scheduler with the default grade scale.
    pub fn new(items: impl IntoIterator<Item = Item>) -> Self {
        Self::with_grade_scale(items, GradeScale::default())
    }

    pub fn with_grade_scale(items: impl IntoIterator<Item = Item>, grade_scale: GradeScale) -> Self {
        Self {
            items: items.into_iter().collect(),
            attempted: 0,
            correct: 0,
            grade_scale,
        }
    }

    /// The item at the head of the queue.
    pub fn current_item(&self) -> Option<&Item> {
        self.items.front()
    }

    /// Record one attempt on the head item.
    ///
    /// A correct item is retired, an incorrect one goes to the tail. Returns
    /// the new head, or `None` without touching the counters when the queue
    /// was already empty.
    pub fn submit(&mut self, correct: bool) -> Option<&Item> {
        let item = self.items.pop_front()?;

        self.attempted += 1;
        if correct {
            self.correct += 1;
            tracing::trace!(question = item.question(), "Retired item");
        } else {
            tracing::trace!(question = item.question(), "Recycled item");
            self.items.push_back(item);
        }

        tracing::debug!(
            todo = self.items.len(),
            attempted = self.attempted,
            correct = self.correct,
            "Submission recorded"
        );

        self.items.front()
    }

    /// Judge `answer` against the head item and record the outcome.
    ///
    /// Returns whether it matched, or `None` when there is nothing to answer.
    pub fn submit_answer(&mut self, answer: &str) -> Option<bool> {
        let correct = self.current_item()?.matches(answer);
        self.submit(correct);
        Some(correct)
    }

    /// Move past the head item after a judgement of `correct`.
    pub fn next_item(&mut self, correct: bool) -> Option<&Item> {
        self.submit(correct)
    }

    /// Send the head item to the back after a judgement of `correct`.
    ///
    /// Only an incorrect judgement recycles; a correct one retires the item
    /// like [`Scheduler::next_item`].
    pub fn cycle_item(&mut self, correct: bool) -> Option<&Item> {
        self.submit(correct)
    }

    /// Add an item to the tail without touching the counters.
    pub fn append(&mut self, item: Item) {
        self.items.push_back(item);
    }

    /// Add several items to the tail, in order.
    pub fn extend(&mut self, items: impl IntoIterator<Item = Item>) {
        self.items.extend(items);
    }

    /// Items not yet answered correctly.
    pub fn todo(&self) -> usize {
        self.items.len()
    }

    pub fn is_done(&self) -> bool {
        self.items.is_empty()
    }

    pub fn attempted(&self) -> u32 {
        self.attempted
    }

    pub fn correct(&self) -> u32 {
        self.correct
    }

    pub fn incorrect(&self) -> u32 {
        self.attempted - self.correct
    }

    /// Floor of the percentage correct; `None` before the first attempt.
    pub fn percentage_correct(&self) -> Option<u32> {
        if self.attempted == 0 {
            return None;
        }
        Some((100 * u64::from(self.correct) / u64::from(self.attempted)) as u32)
    }

    /// Grade for the current percentage; `Ok(None)` before the first attempt.
    pub fn grade(&self) -> Result<Option<f64>, GradeError> {
        self.percentage_correct()
            .map(|percentage| self.grade_scale.lookup(percentage))
            .transpose()
    }

    pub fn grade_scale(&self) -> &GradeScale {
        &self.grade_scale
    }

    pub fn stats(&self) -> Result<SessionStats, GradeError> {
        Ok(SessionStats {
            todo: self.todo(),
            attempted: self.attempted,
            correct: self.correct,
            incorrect: self.incorrect(),
            percentage_correct: self.percentage_correct(),
            grade: self.grade()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grading::GradeBand;
    use crate::types::ItemType;
    use pretty_assertions::assert_eq;

    fn item(question: &str, answer: &str) -> Item {
        Item::new(question, vec![answer.to_string()], None, None, ItemType::Text)
    }

    fn scheduler(n: usize) -> Scheduler {
        Scheduler::new((1..=n).map(|i| item(&format!("Q{}", i), &format!("A{}", i))))
    }

    fn head(scheduler: &Scheduler) -> &str {
        scheduler.current_item().map(Item::question).unwrap_or("")
    }

    #[test]
    fn test_initial_state() {
        let s = scheduler(3);
        assert_eq!(s.todo(), 3);
        assert_eq!(s.attempted(), 0);
        assert_eq!(s.correct(), 0);
        assert_eq!(s.incorrect(), 0);
        assert_eq!(s.percentage_correct(), None);
        assert_eq!(s.grade(), Ok(None));
        assert_eq!(head(&s), "Q1");
        assert!(!s.is_done());
    }

    #[test]
    fn test_correct_retires_item() {
        let mut s = scheduler(3);
        let next = s.submit(true).map(|i| i.question().to_string());
        assert_eq!(next.as_deref(), Some("Q2"));
        assert_eq!(s.todo(), 2);
        assert_eq!(s.attempted(), 1);
        assert_eq!(s.correct(), 1);
    }

    #[test]
    fn test_incorrect_recycles_to_tail() {
        let mut s = scheduler(3);
        s.submit(false);
        assert_eq!(s.todo(), 3);
        assert_eq!(head(&s), "Q2");
        s.submit(true);
        s.submit(true);
        assert_eq!(head(&s), "Q1");
        assert_eq!(s.incorrect(), 1);
    }

    #[test]
    fn test_single_item_recycles_to_itself() {
        let mut s = scheduler(1);
        s.submit(false);
        assert_eq!(head(&s), "Q1");
        assert_eq!(s.todo(), 1);
    }

    #[test]
    fn test_submit_on_empty_queue_is_noop() {
        let mut s = Scheduler::default();
        assert!(s.submit(true).is_none());
        assert!(s.submit_answer("anything").is_none());
        assert_eq!(s.attempted(), 0);
        assert!(s.is_done());
    }

    #[test]
    fn test_all_correct_drains_in_initial_todo_steps() {
        let mut s = scheduler(5);
        let mut steps = 0;
        while !s.is_done() {
            let answer = s.current_item().unwrap().answers()[0].clone();
            assert_eq!(s.submit_answer(&answer), Some(true));
            steps += 1;
        }
        assert_eq!(steps, 5);
        assert_eq!(s.percentage_correct(), Some(100));
        assert_eq!(s.grade(), Ok(Some(5.0)));
    }

    #[test]
    fn test_submit_answer_judges_head_item() {
        let mut s = scheduler(2);
        assert_eq!(s.submit_answer("wrong"), Some(false));
        assert_eq!(head(&s), "Q2");
        assert_eq!(s.submit_answer("a2!"), Some(true));
        assert_eq!(head(&s), "Q1");
        assert_eq!(s.todo(), 1);
    }

    #[test]
    fn test_counters_stay_consistent() {
        let mut s = scheduler(4);
        let initial = s.todo();
        let mut retired = 0;
        for correct in [false, true, false, false, true, true, false, true, true] {
            let had_item = !s.is_done();
            s.submit(correct);
            if had_item && correct {
                retired += 1;
            }
            assert_eq!(s.attempted(), s.correct() + s.incorrect());
            assert_eq!(s.todo() + retired, initial);
        }
        assert!(s.is_done());
    }

    #[test]
    fn test_named_wrappers_follow_judgement() {
        let mut s = scheduler(2);
        s.cycle_item(false);
        assert_eq!(s.todo(), 2);
        s.next_item(true);
        assert_eq!(s.todo(), 1);
        s.cycle_item(true);
        assert_eq!(s.todo(), 0);
        assert_eq!(s.correct(), 2);
        assert_eq!(s.attempted(), 3);
    }

    #[test]
    fn test_append_does_not_touch_counters() {
        let mut s = scheduler(1);
        s.submit(false);
        s.append(item("Q2", "A2"));
        s.extend(vec![item("Q3", "A3"), item("Q4", "A4")]);
        assert_eq!(s.todo(), 4);
        assert_eq!(s.attempted(), 1);
        assert_eq!(head(&s), "Q1");
    }

    #[test]
    fn test_percentage_is_floored() {
        let mut s = scheduler(3);
        s.submit(true);
        s.submit(true);
        s.submit(false);
        assert_eq!(s.percentage_correct(), Some(66));
        assert_eq!(s.grade(), Ok(Some(3.5)));
    }

    #[test]
    fn test_grade_85_percent() {
        let mut s = Scheduler::new((0..20).map(|i| item(&i.to_string(), "x")));
        for i in 0..20 {
            s.submit(i >= 3);
        }
        assert_eq!(s.percentage_correct(), Some(85));
        assert_eq!(s.grade(), Ok(Some(4.5)));
    }

    #[test]
    fn test_grade_outside_custom_scale() {
        let scale = GradeScale::new(vec![GradeBand::new(50, 101, 5.0)]);
        let mut s = Scheduler::with_grade_scale(vec![item("Q", "A")], scale);
        assert_eq!(s.grade(), Ok(None));
        s.submit(false);
        assert!(matches!(
            s.grade(),
            Err(GradeError::OutOfScale { percentage: 0, .. })
        ));
        assert!(s.stats().is_err());
    }

    #[test]
    fn test_stats_snapshot() {
        let mut s = scheduler(2);
        s.submit(true);
        s.submit(false);
        assert_eq!(
            s.stats().unwrap(),
            SessionStats {
                todo: 1,
                attempted: 2,
                correct: 1,
                incorrect: 1,
                percentage_correct: Some(50),
                grade: Some(3.0),
            }
        );
    }
}
