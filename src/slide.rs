use std::path::PathBuf;
use std::sync::Arc;

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

/// Category name that selects every slide.
pub const ALL_CATEGORIES: &str = "all";

/// One visual unit of a slider. The engine never looks inside it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Slide {
    pub title: String,
    pub description: String,
    pub media: Option<PathBuf>,
    pub tags: Vec<String>,
    pub category: Option<String>,
}

impl Slide {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn with_media(mut self, media: impl Into<PathBuf>) -> Self {
        self.media = Some(media.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

}

/// Ordered, immutable sequence of slides. Cloning shares the storage.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SlideSet {
    slides: Arc<[Slide]>,
}

impl SlideSet {
    pub fn new(slides: Vec<Slide>) -> Self {
        Self { slides: slides.into() }
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Slide> {
        self.slides.iter()
    }

    /// Slides of one category, or every slide for `None` / `"all"`.
    pub fn filter_by_category(&self, category: Option<&str>) -> SlideSet {
        match category {
            None | Some(ALL_CATEGORIES) => self.clone(),
            Some(wanted) => self
                .iter()
                .filter(|slide| slide.category.as_deref() == Some(wanted))
                .cloned()
                .collect(),
        }
    }

    /// Distinct categories in first-seen order.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for category in self.iter().filter_map(|slide| slide.category.as_deref()) {
            if !seen.contains(&category) {
                seen.push(category);
            }
        }
        seen
    }

    pub fn count_in(&self, category: &str) -> usize {
        self.iter()
            .filter(|slide| slide.category.as_deref() == Some(category))
            .count()
    }

    pub fn shuffled<R: Rng + ?Sized>(&self, rng: &mut R) -> SlideSet {
        let mut slides = self.slides.to_vec();
        slides.shuffle(rng);
        SlideSet::new(slides)
    }
}

impl FromIterator<Slide> for SlideSet {
    fn from_iter<I: IntoIterator<Item = Slide>>(iter: I) -> Self {
        SlideSet::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a SlideSet {
    type Item = &'a Slide;
    type IntoIter = std::slice::Iter<'a, Slide>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
