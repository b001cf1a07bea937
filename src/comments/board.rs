use super::model::{CommentDraft, CommentRecord};
use crate::config::WidgetConfig;
use crate::diagnostics::DiagnosticSink;
use crate::storage::{read_json, write_json, KeyValueStore, StoreError};
use chrono::{DateTime, Utc};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Loading,
    Ready,
    Submitting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinOutcome {
    Pinned,
    Unpinned,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommentError {
    #[error("Please fill in both your name and a comment.")]
    MissingField,
    #[error("No comment with id `{0}`")]
    NotFound(String),
}

/// Comment list plus the single pinned slot, mirrored to storage after every
/// change.
///
/// A record lives either in `comments` or in `pinned`, never both. Storage
/// failures are reported to the sink and otherwise ignored: memory stays the
/// source of truth for the rest of the session.
pub struct CommentBoard<S, D> {
    store: S,
    sink: D,
    config: WidgetConfig,
    comments: Vec<CommentRecord>,
    pinned: Option<CommentRecord>,
    phase: Phase,
    load_failed: bool,
}

impl<S: KeyValueStore, D: DiagnosticSink> CommentBoard<S, D> {
    pub fn new(store: S, sink: D, config: WidgetConfig) -> Self {
        Self {
            store,
            sink,
            config,
            comments: Vec::new(),
            pinned: None,
            phase: Phase::Loading,
            load_failed: false,
        }
    }

    /// Adopt whatever is in storage. A failed load leaves the board empty
    /// with `load_failed` set; it is never fatal.
    pub fn load(&mut self) {
        match self.read_stored() {
            Ok((mut comments, mut pinned)) => {
                // Stored data may disagree with itself; the pinned slot wins
                if let Some(p) = pinned.as_mut() {
                    p.is_pinned = true;
                    comments.retain(|c| c.id != p.id);
                }
                for c in &mut comments {
                    c.is_pinned = false;
                }
                self.comments = comments;
                self.pinned = pinned;
                self.load_failed = false;
            }
            Err(e) => {
                self.sink.error(&format!("Failed to load comments: {}", e));
                self.comments.clear();
                self.pinned = None;
                self.load_failed = true;
            }
        }
        self.phase = Phase::Ready;
    }

    fn read_stored(&self) -> Result<(Vec<CommentRecord>, Option<CommentRecord>), StoreError> {
        let comments = read_json(&self.store, &self.config.comments_key)?.unwrap_or_default();
        let pinned = read_json(&self.store, &self.config.pinned_key)?;
        Ok((comments, pinned))
    }

    /// Post a new comment at the head of the regular list.
    ///
    /// Name and content are trimmed; if either ends up empty nothing changes.
    pub fn submit(
        &mut self,
        draft: CommentDraft,
        now: DateTime<Utc>,
    ) -> Result<CommentRecord, CommentError> {
        let user_name = draft.user_name.trim();
        let content = draft.content.trim();
        if user_name.is_empty() || content.is_empty() {
            return Err(CommentError::MissingField);
        }

        self.phase = Phase::Submitting;
        let record = CommentRecord {
            id: self.next_id(now),
            user_name: user_name.to_string(),
            content: content.to_string(),
            profile_image: draft.profile_image,
            is_pinned: false,
            created_at: now,
        };
        self.comments.insert(0, record.clone());
        self.persist();
        self.phase = Phase::Ready;
        Ok(record)
    }

    /// Ids are creation milliseconds; two posts in the same millisecond get
    /// consecutive values.
    fn next_id(&self, now: DateTime<Utc>) -> String {
        let mut millis = now.timestamp_millis();
        while self.contains(&millis.to_string()) {
            millis += 1;
        }
        millis.to_string()
    }

    fn contains(&self, id: &str) -> bool {
        self.pinned.as_ref().is_some_and(|p| p.id == id) || self.comments.iter().any(|c| c.id == id)
    }

    /// Pin `id`, or unpin it if it is the pinned comment.
    ///
    /// Whatever leaves the pinned slot goes back to the head of the regular
    /// list, not to its chronological position.
    pub fn toggle_pin(&mut self, id: &str) -> Result<PinOutcome, CommentError> {
        if self.pinned.as_ref().is_some_and(|p| p.id == id) {
            if let Some(mut unpinned) = self.pinned.take() {
                unpinned.is_pinned = false;
                self.comments.insert(0, unpinned);
            }
            self.persist();
            return Ok(PinOutcome::Unpinned);
        }

        let index = self
            .comments
            .iter()
            .position(|c| c.id == id)
            .ok_or_else(|| CommentError::NotFound(id.to_string()))?;
        let mut target = self.comments.remove(index);

        if let Some(mut demoted) = self.pinned.take() {
            demoted.is_pinned = false;
            self.comments.insert(0, demoted);
        }

        target.is_pinned = true;
        self.pinned = Some(target);
        self.persist();
        Ok(PinOutcome::Pinned)
    }

    /// Write both containers. The pinned key is removed when nothing is pinned.
    pub fn persist(&self) {
        if let Err(e) = write_json(&self.store, &self.config.comments_key, &self.comments) {
            self.sink.error(&format!("Failed to save comments: {}", e));
        }
        let pinned_result = match &self.pinned {
            Some(pinned) => write_json(&self.store, &self.config.pinned_key, pinned),
            None => self.store.remove(&self.config.pinned_key),
        };
        if let Err(e) = pinned_result {
            self.sink.error(&format!("Failed to save pinned comment: {}", e));
        }
    }

    pub fn comments(&self) -> &[CommentRecord] {
        &self.comments
    }

    pub fn pinned(&self) -> Option<&CommentRecord> {
        self.pinned.as_ref()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn load_failed(&self) -> bool {
        self.load_failed
    }

    /// Total comments, pinned one included.
    pub fn len(&self) -> usize {
        self.comments.len() + usize::from(self.pinned.is_some())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::RecordingSink;
    use crate::storage::MemoryStore;
    use chrono::{Duration, TimeZone};

    type TestBoard = CommentBoard<MemoryStore, RecordingSink>;

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 14, 9, 0, 0).unwrap()
    }

    fn board_with(store: &MemoryStore) -> (TestBoard, RecordingSink) {
        let sink = RecordingSink::default();
        let mut board = CommentBoard::new(store.clone(), sink.clone(), WidgetConfig::default());
        board.load();
        (board, sink)
    }

    fn post(board: &mut TestBoard, name: &str, content: &str, minutes: i64) -> String {
        board
            .submit(CommentDraft::new(name, content), t0() + Duration::minutes(minutes))
            .unwrap()
            .id
    }

    fn ids(board: &TestBoard) -> Vec<String> {
        board.comments().iter().map(|c| c.id.clone()).collect()
    }

    fn assert_single_pinned(board: &TestBoard) {
        let flagged = board.comments().iter().filter(|c| c.is_pinned).count();
        assert_eq!(flagged, 0, "regular list holds a pinned record");
        if let Some(p) = board.pinned() {
            assert!(p.is_pinned);
            assert!(board.comments().iter().all(|c| c.id != p.id));
        }
    }

    #[test]
    fn test_new_board_is_loading_then_ready() {
        let store = MemoryStore::default();
        let mut board = CommentBoard::new(store, RecordingSink::default(), WidgetConfig::default());
        assert_eq!(board.phase(), Phase::Loading);
        board.load();
        assert_eq!(board.phase(), Phase::Ready);
        assert!(board.is_empty());
        assert!(!board.load_failed());
    }

    #[test]
    fn test_empty_fields_never_mutate() {
        let store = MemoryStore::default();
        let (mut board, _) = board_with(&store);
        post(&mut board, "Ana", "First", 0);

        for (name, content) in [("", "Hello"), ("Ana", ""), ("   ", "Hello"), ("Ana", " \n\t ")] {
            let result = board.submit(CommentDraft::new(name, content), t0());
            assert_eq!(result, Err(CommentError::MissingField));
        }
        assert_eq!(board.len(), 1);
        assert_eq!(board.phase(), Phase::Ready);
    }

    #[test]
    fn test_submit_prepends_and_trims() {
        let store = MemoryStore::default();
        let (mut board, _) = board_with(&store);
        post(&mut board, "Ana", "Great site!", 0);
        let record = board
            .submit(CommentDraft::new("  Ben ", "  Nice work  "), t0() + Duration::minutes(1))
            .unwrap();

        assert_eq!(board.comments()[0], record);
        assert_eq!(record.user_name, "Ben");
        assert_eq!(record.content, "Nice work");
        assert_eq!(board.comments()[1].user_name, "Ana");
    }

    #[test]
    fn test_id_is_creation_millis() {
        let store = MemoryStore::default();
        let (mut board, _) = board_with(&store);
        let id = post(&mut board, "Ana", "Hi", 0);
        assert_eq!(id, t0().timestamp_millis().to_string());
    }

    #[test]
    fn test_same_millisecond_ids_do_not_collide() {
        let store = MemoryStore::default();
        let (mut board, _) = board_with(&store);
        let a = post(&mut board, "Ana", "one", 0);
        let b = post(&mut board, "Ana", "two", 0);
        assert_ne!(a, b);
    }

    #[test]
    fn test_submission_survives_reload() {
        let store = MemoryStore::default();
        let (mut board, _) = board_with(&store);
        post(&mut board, "Ana", "Great site!", 0);
        let mut with_image = CommentDraft::new("Ben", "Love the projects");
        with_image.profile_image = Some("data:image/png;base64,iVBORw0KGgo=".to_string());
        board.submit(with_image, t0() + Duration::minutes(5)).unwrap();

        let (reloaded, sink) = board_with(&store);
        assert_eq!(reloaded.comments(), board.comments());
        assert!(reloaded.pinned().is_none());
        assert!(sink.entries().is_empty());
    }

    #[test]
    fn test_example_scenario_pin_single_comment() {
        let store = MemoryStore::default();
        let (mut board, _) = board_with(&store);
        let id = post(&mut board, "Ana", "Great site!", 0);

        assert_eq!(board.comments().len(), 1);
        assert!(!board.comments()[0].is_pinned);

        assert_eq!(board.toggle_pin(&id), Ok(PinOutcome::Pinned));
        let pinned = board.pinned().unwrap();
        assert_eq!(pinned.id, id);
        assert_eq!(pinned.user_name, "Ana");
        assert_eq!(pinned.content, "Great site!");
        assert!(pinned.is_pinned);
        assert!(board.comments().is_empty());
        assert_single_pinned(&board);
    }

    #[test]
    fn test_unpin_reprepends() {
        let store = MemoryStore::default();
        let (mut board, _) = board_with(&store);
        let oldest = post(&mut board, "Ana", "one", 0);
        let middle = post(&mut board, "Ben", "two", 1);
        let newest = post(&mut board, "Cy", "three", 2);

        board.toggle_pin(&oldest).unwrap();
        assert_eq!(ids(&board), vec![newest.clone(), middle.clone()]);

        assert_eq!(board.toggle_pin(&oldest), Ok(PinOutcome::Unpinned));
        assert!(board.pinned().is_none());
        // Back at the head, not at its chronological slot
        assert_eq!(ids(&board), vec![oldest, newest, middle]);
        assert!(board.comments().iter().all(|c| !c.is_pinned));
    }

    #[test]
    fn test_pinning_second_demotes_first() {
        let store = MemoryStore::default();
        let (mut board, _) = board_with(&store);
        let a = post(&mut board, "Ana", "one", 0);
        let b = post(&mut board, "Ben", "two", 1);
        let c = post(&mut board, "Cy", "three", 2);

        board.toggle_pin(&a).unwrap();
        assert_single_pinned(&board);
        board.toggle_pin(&b).unwrap();
        assert_single_pinned(&board);

        assert_eq!(board.pinned().map(|p| p.id.clone()), Some(b));
        assert_eq!(ids(&board), vec![a, c]);
        assert_eq!(board.len(), 3);
    }

    #[test]
    fn test_pin_unknown_id_is_rejected() {
        let store = MemoryStore::default();
        let (mut board, _) = board_with(&store);
        let a = post(&mut board, "Ana", "one", 0);
        board.toggle_pin(&a).unwrap();

        let result = board.toggle_pin("missing");
        assert_eq!(result, Err(CommentError::NotFound("missing".to_string())));
        assert_eq!(board.pinned().map(|p| p.id.clone()), Some(a));
    }

    #[test]
    fn test_pinned_slot_persists_and_clears() {
        let store = MemoryStore::default();
        let config = WidgetConfig::default();
        let (mut board, _) = board_with(&store);
        let a = post(&mut board, "Ana", "one", 0);
        post(&mut board, "Ben", "two", 1);

        board.toggle_pin(&a).unwrap();
        assert!(store.raw(&config.pinned_key).is_some());
        let (reloaded, _) = board_with(&store);
        assert_eq!(reloaded.pinned(), board.pinned());
        assert_eq!(reloaded.comments(), board.comments());

        board.toggle_pin(&a).unwrap();
        assert!(store.raw(&config.pinned_key).is_none());
    }

    #[test]
    fn test_load_drops_duplicate_of_pinned() {
        let store = MemoryStore::default();
        let config = WidgetConfig::default();
        let (mut board, _) = board_with(&store);
        let a = post(&mut board, "Ana", "one", 0);
        let b = post(&mut board, "Ben", "two", 1);
        board.toggle_pin(&a).unwrap();

        // Same record stored in both places, with a stale flag on the copy
        let mut stray = board.pinned().cloned().unwrap();
        stray.is_pinned = true;
        let mut regular = board.comments().to_vec();
        regular.push(stray);
        store.put_raw(&config.comments_key, &serde_json::to_string(&regular).unwrap());

        let (reloaded, _) = board_with(&store);
        assert_eq!(reloaded.pinned().map(|p| p.id.clone()), Some(a));
        assert_eq!(ids(&reloaded), vec![b]);
        assert_single_pinned(&reloaded);
    }

    #[test]
    fn test_corrupted_storage_loads_empty_with_flag() {
        let store = MemoryStore::default();
        store.put_raw(&WidgetConfig::default().comments_key, "[{\"id\":");
        let (board, sink) = board_with(&store);

        assert_eq!(board.phase(), Phase::Ready);
        assert!(board.load_failed());
        assert!(board.is_empty());
        assert_eq!(sink.entries().len(), 1);
        assert!(sink.entries()[0].starts_with("error: Failed to load comments"));
    }

    #[test]
    fn test_unreadable_storage_loads_empty_with_flag() {
        let store = MemoryStore::default();
        store.fail_reads(true);
        let (board, sink) = board_with(&store);
        assert!(board.load_failed());
        assert!(board.is_empty());
        assert!(!sink.entries().is_empty());
    }

    #[test]
    fn test_write_failure_keeps_memory_state() {
        let store = MemoryStore::default();
        let (mut board, sink) = board_with(&store);
        store.fail_writes(true);

        let record = board.submit(CommentDraft::new("Ana", "Hi"), t0()).unwrap();
        assert_eq!(board.comments(), &[record]);
        assert_eq!(board.phase(), Phase::Ready);
        assert!(sink.entries().iter().any(|e| e.contains("Failed to save comments")));
        assert!(store.raw(&WidgetConfig::default().comments_key).is_none());
    }
}
