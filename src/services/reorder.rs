//! 拖拽排序判定
//!
//! 指针在目标题目上移动时，只有越过中线加死区才提交一次移动，
//! 避免指针停在中线附近时两个位置来回跳动。

use crate::error::IndexError;
use crate::models::{QuestionId, QuestionSet};
use tracing::debug;

/// 默认死区，占目标高度的比例
pub const DEFAULT_DEAD_ZONE: f64 = 0.15;

/// 拖拽方向
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragDirection {
    Up,
    Down,
}

impl DragDirection {
    /// 根据拖拽位置和悬停位置得到方向，相同位置返回 `None`
    pub fn between(drag_index: usize, hover_index: usize) -> Option<Self> {
        match drag_index.cmp(&hover_index) {
            std::cmp::Ordering::Less => Some(DragDirection::Down),
            std::cmp::Ordering::Greater => Some(DragDirection::Up),
            std::cmp::Ordering::Equal => None,
        }
    }
}

/// 悬停判定阈值
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoverThreshold {
    dead_zone: f64,
}

impl HoverThreshold {
    /// 死区限制在 [0, 0.5]
    pub fn new(dead_zone: f64) -> Self {
        let dead_zone = if dead_zone.is_finite() {
            dead_zone.clamp(0.0, 0.5)
        } else {
            DEFAULT_DEAD_ZONE
        };
        Self { dead_zone }
    }

    pub fn dead_zone(&self) -> f64 {
        self.dead_zone
    }
}

impl Default for HoverThreshold {
    fn default() -> Self {
        Self::new(DEFAULT_DEAD_ZONE)
    }
}

/// 判断当前指针位置是否应提交移动
///
/// # 参数
/// - `drag_index`: 被拖拽题目当前所在位置
/// - `hover_index`: 指针下方题目的位置
/// - `pointer_fraction`: 指针在目标题目内的纵向比例，0 为顶部，1 为底部
/// - `threshold`: 死区设置
pub fn should_commit_move(
    drag_index: usize,
    hover_index: usize,
    pointer_fraction: f64,
    threshold: HoverThreshold,
) -> bool {
    match DragDirection::between(drag_index, hover_index) {
        Some(DragDirection::Down) => pointer_fraction >= 0.5 + threshold.dead_zone,
        Some(DragDirection::Up) => pointer_fraction <= 0.5 - threshold.dead_zone,
        None => false,
    }
}

/// 一次拖拽过程
///
/// 按 id 跟踪被拖拽的题目，拖拽期间列表发生增删时仍然移动同一道题。
#[derive(Debug, Clone)]
pub struct DragSession {
    dragged: QuestionId,
    origin: usize,
    current: usize,
    threshold: HoverThreshold,
}

impl DragSession {
    pub fn begin(
        questions: &QuestionSet,
        index: usize,
        threshold: HoverThreshold,
    ) -> Result<Self, IndexError> {
        let Some(question) = questions.get(index) else {
            return Err(IndexError::OutOfRange {
                index,
                len: questions.len(),
            });
        };
        Ok(Self {
            dragged: question.id(),
            origin: index,
            current: index,
            threshold,
        })
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn dragged_id(&self) -> QuestionId {
        self.dragged
    }

    /// 指针悬停在 `hover_index` 上
    ///
    /// # 返回
    /// 提交了移动时返回 `Some((from, to))`；被拖拽的题目已被删除时不移动
    pub fn hover(
        &mut self,
        questions: &mut QuestionSet,
        hover_index: usize,
        pointer_fraction: f64,
    ) -> Result<Option<(usize, usize)>, IndexError> {
        let Some(from) = questions.position(&self.dragged) else {
            debug!("拖拽的题目 {} 已不存在，忽略悬停", self.dragged);
            return Ok(None);
        };
        self.current = from;

        if !should_commit_move(from, hover_index, pointer_fraction, self.threshold) {
            return Ok(None);
        }

        questions.move_to(from, hover_index)?;
        self.current = hover_index;
        debug!("拖拽提交: {} -> {}", from, hover_index);
        Ok(Some((from, hover_index)))
    }

    /// 结束拖拽，返回 (起始位置, 最终位置)
    pub fn finish(self) -> (usize, usize) {
        (self.origin, self.current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Question, QuestionType, NO_OPTIONS};

    fn set_of(n: usize) -> QuestionSet {
        (0..n)
            .map(|i| {
                Question::create(QuestionType::ShortText, &format!("Q{}", i), NO_OPTIONS).unwrap()
            })
            .collect()
    }

    #[test]
    fn test_same_index_never_commits() {
        let t = HoverThreshold::default();
        for fraction in [0.0, 0.5, 1.0] {
            assert!(!should_commit_move(2, 2, fraction, t));
        }
    }

    #[test]
    fn test_downward_needs_past_midpoint_plus_dead_zone() {
        let t = HoverThreshold::new(0.15);
        assert!(!should_commit_move(0, 1, 0.3, t));
        assert!(!should_commit_move(0, 1, 0.6, t));
        assert!(should_commit_move(0, 1, 0.66, t));
        assert!(should_commit_move(0, 1, 0.9, t));
    }

    #[test]
    fn test_upward_needs_above_midpoint_minus_dead_zone() {
        let t = HoverThreshold::new(0.15);
        assert!(!should_commit_move(3, 1, 0.7, t));
        assert!(!should_commit_move(3, 1, 0.4, t));
        assert!(should_commit_move(3, 1, 0.34, t));
        assert!(should_commit_move(3, 1, 0.1, t));
    }

    #[test]
    fn test_threshold_clamped() {
        assert_eq!(HoverThreshold::new(0.9).dead_zone(), 0.5);
        assert_eq!(HoverThreshold::new(-1.0).dead_zone(), 0.0);
        assert_eq!(HoverThreshold::new(f64::NAN).dead_zone(), DEFAULT_DEAD_ZONE);

        // 无死区时以中线为界
        let t = HoverThreshold::new(0.0);
        assert!(should_commit_move(0, 1, 0.5, t));
        assert!(should_commit_move(1, 0, 0.5, t));
    }

    #[test]
    fn test_drag_down_step_by_step() {
        let mut set = set_of(4);
        let ids = set.ids();
        let mut drag = DragSession::begin(&set, 0, HoverThreshold::default()).unwrap();

        // 刚进入下一题的上半部分，不移动
        assert_eq!(drag.hover(&mut set, 1, 0.2).unwrap(), None);
        assert_eq!(drag.hover(&mut set, 1, 0.8).unwrap(), Some((0, 1)));
        // 指针停留在原处：被拖拽项已在位置 1，不会来回跳动
        assert_eq!(drag.hover(&mut set, 1, 0.8).unwrap(), None);
        assert_eq!(drag.hover(&mut set, 2, 0.9).unwrap(), Some((1, 2)));

        assert_eq!(drag.finish(), (0, 2));
        assert_eq!(set.ids(), vec![ids[1], ids[2], ids[0], ids[3]]);
    }

    #[test]
    fn test_stationary_pointer_does_not_oscillate() {
        let mut set = set_of(3);
        let mut drag = DragSession::begin(&set, 2, HoverThreshold::default()).unwrap();

        assert_eq!(drag.hover(&mut set, 1, 0.3).unwrap(), Some((2, 1)));
        // 被拖拽项移动后，原来位于 1 的题目落到位置 2，指针在其上半部分
        for _ in 0..5 {
            assert_eq!(drag.hover(&mut set, 2, 0.3).unwrap(), None);
            assert_eq!(drag.hover(&mut set, 1, 0.5).unwrap(), None);
        }
        assert_eq!(drag.current_index(), 1);
    }

    #[test]
    fn test_drag_follows_item_after_earlier_removal() {
        let mut set = set_of(4);
        let ids = set.ids();
        let mut drag = DragSession::begin(&set, 2, HoverThreshold::default()).unwrap();

        // 拖拽期间删除前面的题目，被拖拽项从 2 落到 1
        set.remove_by_id(&ids[0]);
        assert_eq!(drag.hover(&mut set, 2, 0.9).unwrap(), Some((1, 2)));
        assert_eq!(drag.dragged_id(), ids[2]);
        assert_eq!(set.ids(), vec![ids[1], ids[3], ids[2]]);
        assert_eq!(drag.current_index(), 2);
    }

    #[test]
    fn test_removed_dragged_item_is_ignored() {
        let mut set = set_of(3);
        let ids = set.ids();
        let mut drag = DragSession::begin(&set, 0, HoverThreshold::default()).unwrap();

        set.remove_by_id(&ids[0]);
        assert_eq!(drag.hover(&mut set, 1, 0.9).unwrap(), None);
        assert_eq!(set.ids(), vec![ids[1], ids[2]]);
    }

    #[test]
    fn test_begin_out_of_range() {
        let set = set_of(2);
        assert!(DragSession::begin(&set, 2, HoverThreshold::default()).is_err());
    }
}
