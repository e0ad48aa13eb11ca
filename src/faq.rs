//! FAQ entries and the single-open accordion

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQS: &[FaqEntry] = &[
    FaqEntry {
        question: "Can I use YouTube thumbnail downloader to download thumbnails for any video?",
        answer: "YouTube thumbnail downloaders are intended for personal and non-commercial use. \
                 It's essential to respect the copyright and intellectual property rights of \
                 others. \
                 Ensure that you have the necessary permissions or consider fair use policies when \
                 using downloaded thumbnails.",
    },
    FaqEntry {
        question: "Do I need permission to use thumbnails downloaded from YouTube?",
        answer: "The ownership and rights to the videos and their thumbnails reside with the \
                 original creators. Using downloaded thumbnails without permission may infringe \
                 upon copyright laws. It's advisable to seek permission from the video creators \
                 or check if they provide explicit permission or guidelines for using their \
                 thumbnails.",
    },
    FaqEntry {
        question: "Can I use downloaded thumbnails for commercial purposes?",
        answer: "Generally, using downloaded thumbnails for commercial purposes without permission \
                 may violate copyright laws and could lead to legal consequences. It's important \
                 to obtain proper authorization or explore alternative options like creating your \
                 own custom thumbnails or seeking licensed images.",
    },
    FaqEntry {
        question: "Are there any restrictions on modifying downloaded YouTube thumbnails?",
        answer: "Modifying downloaded thumbnails may be subject to copyright laws. Altering or \
                 manipulating thumbnails without permission may infringe upon the original \
                 creator's rights. If you need to modify a thumbnail, it's advisable to obtain \
                 proper authorization or consider creating your own custom graphics.",
    },
    FaqEntry {
        question: "What are the consequences of copyright infringement when using \
                   downloaded thumbnails?",
        answer: "Copyright infringement can have legal ramifications, including potential legal \
                 actions, penalties, and financial liabilities. It's crucial to respect copyright \
                 laws and obtain appropriate permissions or licenses before using thumbnails \
                 downloaded from YouTube or any other platform. Familiarize yourself with the \
                 copyright policies and laws of your jurisdiction to ensure compliance.",
    },
];

/// Which FAQ entry is expanded (at most one) plus the keyboard cursor
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Accordion {
    open: Option<usize>,
    pub selected: usize,
    len: usize,
}

impl Accordion {
    pub fn new(len: usize) -> Self {
        Self {
            open: None,
            selected: 0,
            len,
        }
    }

    #[cfg(test)]
    pub fn open_index(&self) -> Option<usize> {
        self.open
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    /// Collapse `index` if it is open, otherwise open it (closing any other)
    pub fn toggle(&mut self, index: usize) {
        if index >= self.len {
            return;
        }
        self.open = if self.open == Some(index) {
            None
        } else {
            Some(index)
        };
    }

    pub fn toggle_selected(&mut self) {
        self.toggle(self.selected);
    }

    pub fn move_down(&mut self) {
        if self.len > 0 && self.selected + 1 < self.len {
            self.selected += 1;
        }
    }

    pub fn move_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_collapsed() {
        let acc = Accordion::new(FAQS.len());
        assert_eq!(acc.open_index(), None);
        assert_eq!(FAQS.len(), 5);
    }

    #[test]
    fn test_toggle_same_entry_collapses() {
        let mut acc = Accordion::new(3);
        acc.toggle(1);
        assert!(acc.is_open(1));
        acc.toggle(1);
        assert_eq!(acc.open_index(), None);
    }

    #[test]
    fn test_toggle_other_entry_switches() {
        let mut acc = Accordion::new(3);
        acc.toggle(0);
        acc.toggle(2);
        assert!(!acc.is_open(0));
        assert!(acc.is_open(2));
        assert_eq!((0..3).filter(|&i| acc.is_open(i)).count(), 1);
    }

    #[test]
    fn test_out_of_range_is_ignored() {
        let mut acc = Accordion::new(2);
        acc.toggle(0);
        acc.toggle(7);
        assert!(acc.is_open(0));
    }

    #[test]
    fn test_cursor_is_clamped() {
        let mut acc = Accordion::new(2);
        acc.move_up();
        assert_eq!(acc.selected, 0);
        acc.move_down();
        acc.move_down();
        assert_eq!(acc.selected, 1);
        acc.toggle_selected();
        assert!(acc.is_open(1));
    }
}
