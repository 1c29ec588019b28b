use crate::core::store::{BoardStore, TaskAnchor};

/// Which flavor of entity a drag gesture references.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragKind {
    Column,
    Task,
}

/// The entity currently under the pointer while a drag is in progress.
#[derive(Debug, Clone, PartialEq)]
pub enum DragTarget {
    Column(String),
    Task(String),
}

/// Drag lifecycle state. At most one entity is active at a time, and its id
/// is the only drag data held outside the store.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    DraggingColumn(String),
    DraggingTask(String),
}

/// Turns drag lifecycle events from the presentation layer into store
/// mutations.
///
/// `drag_over` is re-evaluated whenever the hovered drop target changes and
/// reports whether it mutated the store, so callers only publish a new
/// board value when something actually moved. Hovering the active item
/// itself, the container it is already in, or an id the store no longer
/// knows (deleted mid-drag) all fall through without touching the lists.
#[derive(Debug, Default)]
pub struct DragCoordinator {
    state: DragState,
}

impl DragCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &DragState {
        &self.state
    }

    pub fn is_dragging(&self) -> bool {
        self.state != DragState::Idle
    }

    /// Id of the item being dragged, if any.
    pub fn active_id(&self) -> Option<&str> {
        match &self.state {
            DragState::Idle => None,
            DragState::DraggingColumn(id) | DragState::DraggingTask(id) => Some(id),
        }
    }

    pub fn start(&mut self, kind: DragKind, id: String) {
        self.state = match kind {
            DragKind::Column => DragState::DraggingColumn(id),
            DragKind::Task => DragState::DraggingTask(id),
        };
    }

    pub fn drag_over(&self, target: &DragTarget, board: &mut BoardStore) -> bool {
        match (&self.state, target) {
            // Task over task: adopt the hovered task's column, then take
            // over its list position
            (DragState::DraggingTask(active), DragTarget::Task(hovered)) => {
                if active == hovered {
                    return false;
                }
                let Some(column_id) = board.task(hovered).map(|t| t.column_id.clone()) else {
                    return false;
                };
                board.reparent_task(active, &column_id, TaskAnchor::AtTask(hovered.clone()))
            }
            // Task over a column: ownership moves, list position stays.
            // Hovering the column the task already lives in is a no-op so
            // the list does not churn while the pointer wanders inside it
            (DragState::DraggingTask(active), DragTarget::Column(hovered)) => {
                let Some(current) = board.task(active).map(|t| t.column_id.clone()) else {
                    return false;
                };
                if current == *hovered || board.column(hovered).is_none() {
                    return false;
                }
                board.reparent_task(active, hovered, TaskAnchor::KeepPosition)
            }
            (DragState::DraggingColumn(active), DragTarget::Column(hovered)) => {
                board.reorder_columns(active, hovered)
            }
            // A column over a task is a kind mismatch; idle hovers carry no
            // active item. Both are ignored
            _ => false,
        }
    }

    /// Drag-end and drag-cancel are the same thing here: the active
    /// reference is cleared whether or not any reorder happened.
    pub fn finish(&mut self) {
        self.state = DragState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(columns: usize, tasks_per_column: usize) -> BoardStore {
        let mut board = BoardStore::new();
        for _ in 0..columns {
            board.add_column();
        }
        let ids: Vec<String> = board.columns().iter().map(|c| c.id.clone()).collect();
        for id in &ids {
            for _ in 0..tasks_per_column {
                board.add_task(id);
            }
        }
        board
    }

    fn task_ids(board: &BoardStore) -> Vec<String> {
        board.tasks().iter().map(|t| t.id.clone()).collect()
    }

    #[test]
    fn start_enters_the_state_matching_the_kind() {
        let mut coordinator = DragCoordinator::new();
        coordinator.start(DragKind::Column, "c1".to_string());
        assert_eq!(*coordinator.state(), DragState::DraggingColumn("c1".to_string()));

        coordinator.start(DragKind::Task, "t1".to_string());
        assert_eq!(*coordinator.state(), DragState::DraggingTask("t1".to_string()));
        assert_eq!(coordinator.active_id(), Some("t1"));
    }

    #[test]
    fn finish_clears_the_active_reference() {
        let mut coordinator = DragCoordinator::new();
        coordinator.start(DragKind::Task, "t1".to_string());
        assert!(coordinator.is_dragging());

        coordinator.finish();
        assert_eq!(*coordinator.state(), DragState::Idle);
        assert_eq!(coordinator.active_id(), None);
    }

    #[test]
    fn task_over_task_adopts_column_and_position() {
        let mut board = board_with(2, 2);
        let target_column = board.columns()[1].id.clone();
        let ids = task_ids(&board);
        let active = ids[0].clone();
        let hovered = ids[3].clone();

        let mut coordinator = DragCoordinator::new();
        coordinator.start(DragKind::Task, active.clone());

        assert!(coordinator.drag_over(&DragTarget::Task(hovered.clone()), &mut board));
        assert_eq!(board.task(&active).unwrap().column_id, target_column);
        // Active took the hovered index; everyone else kept relative order
        assert_eq!(
            task_ids(&board),
            vec![ids[1].clone(), ids[2].clone(), ids[3].clone(), ids[0].clone()]
        );
    }

    #[test]
    fn task_over_itself_is_ignored() {
        let mut board = board_with(1, 2);
        let active = board.tasks()[0].id.clone();
        let before = board.clone();

        let mut coordinator = DragCoordinator::new();
        coordinator.start(DragKind::Task, active.clone());

        assert!(!coordinator.drag_over(&DragTarget::Task(active), &mut board));
        assert_eq!(board, before);
    }

    #[test]
    fn task_over_column_changes_ownership_and_nothing_else() {
        let mut board = board_with(2, 3);
        let target_column = board.columns()[1].id.clone();
        let before = task_ids(&board);
        let active = before[1].clone();

        let mut coordinator = DragCoordinator::new();
        coordinator.start(DragKind::Task, active.clone());

        assert!(coordinator.drag_over(&DragTarget::Column(target_column.clone()), &mut board));
        assert_eq!(board.task(&active).unwrap().column_id, target_column);
        // Relative order of every task is untouched
        assert_eq!(task_ids(&board), before);
    }

    #[test]
    fn task_over_its_own_column_is_ignored() {
        let mut board = board_with(2, 2);
        let home = board.columns()[0].id.clone();
        let active = board.tasks()[0].id.clone();
        let before = board.clone();

        let mut coordinator = DragCoordinator::new();
        coordinator.start(DragKind::Task, active);

        assert!(!coordinator.drag_over(&DragTarget::Column(home), &mut board));
        assert_eq!(board, before);
    }

    #[test]
    fn column_over_column_moves_to_the_hovered_position() {
        let mut board = board_with(3, 0);
        let ids: Vec<String> = board.columns().iter().map(|c| c.id.clone()).collect();

        let mut coordinator = DragCoordinator::new();
        coordinator.start(DragKind::Column, ids[0].clone());

        assert!(coordinator.drag_over(&DragTarget::Column(ids[2].clone()), &mut board));
        let after: Vec<String> = board.columns().iter().map(|c| c.id.clone()).collect();
        assert_eq!(after, vec![ids[1].clone(), ids[2].clone(), ids[0].clone()]);
    }

    #[test]
    fn column_over_task_is_a_kind_mismatch() {
        let mut board = board_with(2, 1);
        let active = board.columns()[0].id.clone();
        let task = board.tasks()[1].id.clone();
        let before = board.clone();

        let mut coordinator = DragCoordinator::new();
        coordinator.start(DragKind::Column, active);

        assert!(!coordinator.drag_over(&DragTarget::Task(task), &mut board));
        assert_eq!(board, before);
    }

    #[test]
    fn hovering_entities_deleted_mid_drag_is_ignored() {
        let mut board = board_with(2, 1);
        let active = board.tasks()[0].id.clone();

        let mut coordinator = DragCoordinator::new();
        coordinator.start(DragKind::Task, active.clone());

        // The hovered task vanished between the hit-test and this call
        assert!(!coordinator.drag_over(&DragTarget::Task("missing".to_string()), &mut board));
        // So did the hovered column
        assert!(!coordinator.drag_over(&DragTarget::Column("missing".to_string()), &mut board));

        // The active task itself was deleted mid-drag
        board.remove_task(&active);
        let before = board.clone();
        let other_column = board.columns()[1].id.clone();
        assert!(!coordinator.drag_over(&DragTarget::Column(other_column), &mut board));
        assert_eq!(board, before);
    }

    #[test]
    fn drag_over_while_idle_does_nothing() {
        let mut board = board_with(2, 1);
        let before = board.clone();
        let column = board.columns()[0].id.clone();

        let coordinator = DragCoordinator::new();
        assert!(!coordinator.drag_over(&DragTarget::Column(column), &mut board));
        assert_eq!(board, before);
    }
}
