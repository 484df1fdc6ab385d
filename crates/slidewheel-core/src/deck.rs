//! Slide model: an ordered, immutable list of labeled slides.
//!
//! Labels are pre-split into contiguous character runs of roughly a quarter
//! of the label each, so the renderer can place the "first letter + chunked
//! remainder" decomposition without re-deriving it every frame.

/// A single slide with its precomputed label segmentation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slide {
    /// 1-based position in the deck
    pub ordinal: usize,
    /// Raw label text
    pub label: String,
    /// Label split into runs of ~len/4 characters
    pub segments: Vec<String>,
}

impl Slide {
    fn new(ordinal: usize, label: String) -> Self {
        let segments = segment_label(&label);
        Self {
            ordinal,
            label,
            segments,
        }
    }

    /// First character of the label, used for the oversized glyph layer
    pub fn initial(&self) -> Option<char> {
        self.label.chars().next()
    }
}

/// Ordered slide collection, immutable once constructed
#[derive(Debug, Clone, Default)]
pub struct SlideDeck {
    slides: Vec<Slide>,
}

impl SlideDeck {
    pub fn new<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let slides = labels
            .into_iter()
            .enumerate()
            .map(|(i, label)| Slide::new(i + 1, label.into()))
            .collect();
        Self { slides }
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Look up a slide by its 1-based ordinal
    pub fn get(&self, ordinal: usize) -> Option<&Slide> {
        if ordinal == 0 {
            return None;
        }
        self.slides.get(ordinal - 1)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Slide> {
        self.slides.iter()
    }
}

/// Split a label into contiguous runs of ceil(len/4) characters.
/// Character-wise, so multi-byte labels never split inside a code point.
fn segment_label(label: &str) -> Vec<String> {
    let chars: Vec<char> = label.chars().collect();
    if chars.is_empty() {
        return Vec::new();
    }
    let run = chars.len().div_ceil(4);
    chars.chunks(run).map(|c| c.iter().collect()).collect()
}
