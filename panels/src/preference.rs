//! Drag-ordered preference lists (download services, file formats).

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::drag::{DragReorder, Reorder};
use crate::geometry::Rect;

/// Where a download link points to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DownloadSource {
    Mega,
    MediaFire,
    WeTransfer,
    Pixeldrain,
    GetComics,
    #[serde(rename = "GetComics (torrent)")]
    GetComicsTorrent,
    #[serde(rename = "Libgen+")]
    LibgenPlus,
}

impl DownloadSource {
    pub const ALL: [DownloadSource; 7] = [
        DownloadSource::Mega,
        DownloadSource::MediaFire,
        DownloadSource::WeTransfer,
        DownloadSource::Pixeldrain,
        DownloadSource::GetComics,
        DownloadSource::GetComicsTorrent,
        DownloadSource::LibgenPlus,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DownloadSource::Mega => "Mega",
            DownloadSource::MediaFire => "MediaFire",
            DownloadSource::WeTransfer => "WeTransfer",
            DownloadSource::Pixeldrain => "Pixeldrain",
            DownloadSource::GetComics => "GetComics",
            DownloadSource::GetComicsTorrent => "GetComics (torrent)",
            DownloadSource::LibgenPlus => "Libgen+",
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == name)
    }

    /// Factory service preference: every source offered on a GetComics page,
    /// in page order.
    pub fn default_preference() -> Vec<DownloadSource> {
        Self::ALL
            .into_iter()
            .filter(|s| *s != DownloadSource::LibgenPlus)
            .collect()
    }
}

impl fmt::Display for DownloadSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An ordered list the user rearranges by dragging.
///
/// Only a committed drop produces a new order; hovering never touches the
/// values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PreferenceList<T> {
    values: Vec<T>,
    drag: DragReorder,
}

impl<T: Clone> PreferenceList<T> {
    pub fn new(values: Vec<T>) -> Self {
        Self {
            values,
            drag: DragReorder::new(),
        }
    }

    pub fn values(&self) -> &[T] {
        &self.values
    }

    pub fn drag(&self) -> &DragReorder {
        &self.drag
    }

    pub fn begin_drag(&mut self, index: usize) -> bool {
        if index >= self.values.len() {
            return false;
        }
        self.drag.begin(index);
        true
    }

    pub fn hover(&mut self, index: usize, rect: Rect, pointer_y: f32) -> bool {
        if index >= self.values.len() {
            return false;
        }
        self.drag.hover(index, rect, pointer_y)
    }

    /// Finish the drag. Returns the new order if anything moved.
    pub fn end_drag(&mut self, did_drop: bool) -> Option<Vec<T>> {
        let reorder = self.drag.end(did_drop)?;
        self.commit(reorder)
    }

    /// Move one value without a pointer gesture.
    pub fn move_value(&mut self, from: usize, to: usize) -> Option<Vec<T>> {
        self.drag.cancel();
        self.commit(Reorder::new(from, to))
    }

    fn commit(&mut self, reorder: Reorder) -> Option<Vec<T>> {
        if reorder.apply(&mut self.values) {
            Some(self.values.clone())
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_preference_excludes_libgen() {
        let order = DownloadSource::default_preference();
        assert_eq!(order.len(), 6);
        assert_eq!(order[0], DownloadSource::Mega);
        assert!(!order.contains(&DownloadSource::LibgenPlus));
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&DownloadSource::GetComicsTorrent).unwrap();
        assert_eq!(json, "\"GetComics (torrent)\"");
        assert_eq!(DownloadSource::parse("Libgen+"), Some(DownloadSource::LibgenPlus));
    }

    #[test]
    fn test_drag_from_first_entry() {
        let mut list = PreferenceList::new(vec!["cbz", "cbr", "pdf"]);
        assert!(list.begin_drag(0));
        // Lower half of the last row, dragging down.
        assert!(list.hover(2, Rect::new(0.0, 40.0, 100.0, 20.0), 55.0));
        assert_eq!(list.end_drag(true), Some(vec!["cbr", "pdf", "cbz"]));
        assert!(!list.drag().is_dragging());
    }

    #[test]
    fn test_cancelled_drag_keeps_order() {
        let mut list = PreferenceList::new(vec![1, 2, 3]);
        list.begin_drag(2);
        list.hover(0, Rect::new(0.0, 0.0, 100.0, 20.0), 5.0);
        assert_eq!(list.end_drag(false), None);
        assert_eq!(list.values(), &[1, 2, 3]);
    }
}
